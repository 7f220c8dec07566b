//! Suggestion pipeline metrics.
//!
//! Available with the `metrics` feature; without it every recorder is a no-op.

#[cfg(feature = "metrics")]
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};

/// Counters for provider calls and fallbacks.
#[derive(Clone)]
pub struct SuggestionMetrics {
    #[cfg(feature = "metrics")]
    requests: Counter<u64>,
    #[cfg(feature = "metrics")]
    fallbacks: Counter<u64>,
    #[cfg(feature = "metrics")]
    duration: Histogram<f64>,
}

impl SuggestionMetrics {
    /// Create the instruments on the global meter.
    #[cfg(feature = "metrics")]
    pub fn new() -> Self {
        let meter = global::meter("postcraft_suggestions");
        Self {
            requests: meter
                .u64_counter("suggestions.requests")
                .with_description("Suggestion requests by provider and operation")
                .build(),
            fallbacks: meter
                .u64_counter("suggestions.fallbacks")
                .with_description("Requests answered from the static fallback")
                .build(),
            duration: meter
                .f64_histogram("suggestions.provider.duration")
                .with_unit("seconds")
                .with_description("Provider round-trip duration")
                .build(),
        }
    }

    /// Create a no-op recorder.
    #[cfg(not(feature = "metrics"))]
    pub fn new() -> Self {
        Self {}
    }

    /// Record one incoming request.
    pub fn record_request(&self, provider: &str, operation: &'static str) {
        #[cfg(feature = "metrics")]
        self.requests.add(1, &labels(provider, operation));
        #[cfg(not(feature = "metrics"))]
        let _ = (provider, operation);
    }

    /// Record a request that was answered from the fallback tables.
    pub fn record_fallback(&self, provider: &str, operation: &'static str) {
        #[cfg(feature = "metrics")]
        self.fallbacks.add(1, &labels(provider, operation));
        #[cfg(not(feature = "metrics"))]
        let _ = (provider, operation);
    }

    /// Record how long the provider call took.
    pub fn record_duration(&self, provider: &str, operation: &'static str, secs: f64) {
        #[cfg(feature = "metrics")]
        self.duration.record(secs, &labels(provider, operation));
        #[cfg(not(feature = "metrics"))]
        let _ = (provider, operation, secs);
    }
}

impl std::fmt::Debug for SuggestionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SuggestionMetrics")
    }
}

impl Default for SuggestionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "metrics")]
fn labels(provider: &str, operation: &'static str) -> [KeyValue; 2] {
    [
        KeyValue::new("provider", provider.to_string()),
        KeyValue::new("operation", operation),
    ]
}

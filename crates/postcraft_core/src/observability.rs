//! OpenTelemetry metrics initialization.

#[cfg(feature = "metrics")]
use opentelemetry::{KeyValue, global};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
#[cfg(feature = "metrics")]
use std::{sync::OnceLock, time::Duration};
use tracing::{debug, instrument};
#[cfg(feature = "metrics")]
use tracing::{info, warn};

#[cfg(feature = "metrics")]
static METER_PROVIDER: OnceLock<SdkMeterProvider> = OnceLock::new();

/// Initialize OpenTelemetry metrics with OTLP or stdout export.
///
/// Checks the `OTEL_EXPORTER` environment variable:
/// - "otlp" -> OTLP exporter to `OTEL_EXPORTER_OTLP_ENDPOINT` (default: http://localhost:4318)
/// - "stdout" or unset -> stdout exporter
///
/// When the `metrics` feature is disabled, this function returns `Ok(())` immediately.
#[instrument(skip_all, fields(service_name))]
pub fn init_observability(
    service_name: &'static str,
    export_interval_secs: u64,
) -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        let _ = export_interval_secs;
        debug!(
            service_name = service_name,
            "Metrics feature disabled - skipping metrics initialization"
        );
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        info!(
            service_name = service_name,
            export_interval_secs = export_interval_secs,
            "Initializing OpenTelemetry metrics"
        );

        let resource = Resource::builder_empty()
            .with_attributes([KeyValue::new("service.name", service_name)])
            .build();

        let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());
        info!(exporter_type = %exporter_type, "Selecting metrics exporter");

        let interval = Duration::from_secs(export_interval_secs);
        let meter_provider = match exporter_type.as_str() {
            "otlp" => {
                let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:4318".to_string());
                info!(endpoint = %endpoint, "Using OTLP metrics exporter");

                let exporter = OtlpExporter::builder()
                    .with_http()
                    .with_endpoint(&endpoint)
                    .with_timeout(Duration::from_secs(10))
                    .build()
                    .map_err(|e| format!("Failed to create OTLP exporter: {}", e))?;

                let reader = PeriodicReader::builder(exporter)
                    .with_interval(interval)
                    .build();
                SdkMeterProvider::builder()
                    .with_resource(resource)
                    .with_reader(reader)
                    .build()
            }
            _ => {
                let reader = PeriodicReader::builder(StdoutExporter::default())
                    .with_interval(interval)
                    .build();
                SdkMeterProvider::builder()
                    .with_resource(resource)
                    .with_reader(reader)
                    .build()
            }
        };

        global::set_meter_provider(meter_provider.clone());
        if METER_PROVIDER.set(meter_provider).is_err() {
            debug!("Meter provider already initialized, keeping the first one");
        }
        debug!("Meter provider registered globally");
        Ok(())
    }
}

/// Flush pending metrics and stop the exporter.
#[instrument]
pub fn shutdown_observability() {
    #[cfg(feature = "metrics")]
    if let Some(provider) = METER_PROVIDER.get() {
        info!("Shutting down OpenTelemetry metrics provider");
        if let Err(e) = provider.shutdown() {
            warn!(error = %e, "Metrics shutdown failed");
        }
    }
    debug!("Metrics shutdown complete");
}

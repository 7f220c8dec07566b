//! Normalization of parsed model output.
//!
//! Only top-level structure is enforced. Individual entries are decoded
//! leniently and kept verbatim when they don't match their expected shape.

use postcraft_core::{Lenient, SuggestionResult, TrendingHashtag};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Top-level fields as they arrive, before presence substitution.
#[derive(Debug, Default, Deserialize)]
struct PartialSuggestions {
    #[serde(default)]
    emojis: Option<Value>,
    #[serde(default)]
    hashtags: Option<Value>,
    #[serde(default)]
    platform_specific: Option<Value>,
}

fn entries<T: DeserializeOwned>(field: Option<Value>) -> Vec<Lenient<T>> {
    match field {
        Some(Value::Array(items)) => items.into_iter().map(Lenient::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Coerce `raw` into a [`SuggestionResult`].
///
/// `emojis`, `hashtags` and `platform_specific` become empty when absent,
/// null or not an array. Input that is not an object yields an empty result.
/// Never fails.
///
/// # Examples
///
/// ```
/// use postcraft_suggestions::validate;
/// use serde_json::json;
///
/// let result = validate(json!({ "hashtags": null }));
/// assert!(result.hashtags().is_empty());
/// assert!(result.platform_specific().is_empty());
/// ```
pub fn validate(raw: Value) -> SuggestionResult {
    let partial = match raw {
        Value::Object(_) => PartialSuggestions::deserialize(raw).unwrap_or_default(),
        _ => PartialSuggestions::default(),
    };

    SuggestionResult::new(
        entries(partial.emojis),
        entries(partial.hashtags),
        entries(partial.platform_specific),
    )
}

/// Extract trending hashtags from a bare array or a `{"trending_hashtags": [...]}` wrapper.
///
/// Entries that fail to decode are skipped. Returns `None` when neither shape
/// is present, or when the list is non-empty but no entry decodes. An empty
/// list is returned as-is.
pub fn parse_trending(raw: Value) -> Option<Vec<TrendingHashtag>> {
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("trending_hashtags") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let total = items.len();
    let hashtags: Vec<TrendingHashtag> = items
        .into_iter()
        .filter_map(|item| TrendingHashtag::deserialize(item).ok())
        .collect();

    if hashtags.len() < total {
        debug!(
            dropped = total - hashtags.len(),
            kept = hashtags.len(),
            "Skipped undecodable trending entries"
        );
    }
    if total > 0 && hashtags.is_empty() {
        return None;
    }
    Some(hashtags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed() -> Value {
        json!({
            "emojis": [
                { "emoji": "🚀", "description": "Launch", "relevance_score": 92 },
                { "emoji": "🎉", "description": "Celebration", "relevance_score": 81 }
            ],
            "hashtags": [
                { "hashtag": "#launch", "category": "business", "popularity": "trending", "reach_potential": 88 }
            ],
            "platform_specific": [
                { "platform": "twitter", "recommended_emoji_count": 2, "recommended_hashtag_count": 3, "optimal_placement": "within text" }
            ]
        })
    }

    #[test]
    fn well_formed_input_is_fully_typed() {
        let result = validate(well_formed());
        assert_eq!(result.emojis().len(), 2);
        assert!(result.emojis().iter().all(Lenient::is_valid));
        assert!(result.hashtags()[0].is_valid());
        assert!(result.platform_specific()[0].is_valid());
    }

    #[test]
    fn validation_is_idempotent() {
        let once = validate(well_formed());
        let twice = validate(serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
        assert_eq!(serde_json::to_value(&twice).unwrap(), well_formed());
    }

    #[test]
    fn partial_input_is_repaired() {
        let emojis = json!([{ "emoji": "🔥", "description": "Hot", "relevance_score": 70 }]);
        let result = validate(json!({ "emojis": emojis.clone(), "hashtags": null }));

        assert!(result.hashtags().is_empty());
        assert!(result.platform_specific().is_empty());
        assert_eq!(serde_json::to_value(result.emojis()).unwrap(), emojis);
    }

    #[test]
    fn entries_with_extra_keys_round_trip() {
        let emojis = json!([
            { "emoji": "🔥", "description": "Hot", "relevance_score": 70, "placement": "start" }
        ]);
        let hashtags = json!([
            { "hashtag": "#x", "category": "misc", "popularity": "high", "reach_potential": 40, "note": "new" }
        ]);
        let result = validate(json!({
            "emojis": emojis.clone(),
            "hashtags": hashtags.clone()
        }));

        assert!(!result.emojis()[0].is_valid());
        assert_eq!(serde_json::to_value(result.emojis()).unwrap(), emojis);
        assert_eq!(serde_json::to_value(result.hashtags()).unwrap(), hashtags);
    }

    #[test]
    fn non_array_fields_become_empty() {
        let result = validate(json!({
            "emojis": "🔥",
            "hashtags": { "hashtag": "#x" },
            "platform_specific": 3
        }));
        assert!(result.emojis().is_empty());
        assert!(result.hashtags().is_empty());
        assert!(result.platform_specific().is_empty());
    }

    #[test]
    fn non_object_input_yields_empty_result() {
        for raw in [json!(null), json!([1, 2]), json!("text"), json!(42)] {
            assert_eq!(validate(raw), SuggestionResult::default());
        }
    }

    // Entries are not checked individually: out-of-range or mistyped values
    // pass through untouched instead of being dropped or rejected.
    #[test]
    fn malformed_entries_pass_through_unchanged() {
        let odd = json!({ "emoji": "🔥", "relevance_score": "very" });
        let out_of_range = json!({ "emoji": "💯", "description": "x", "relevance_score": 250 });
        let result = validate(json!({ "emojis": [odd.clone(), out_of_range.clone(), 7] }));

        assert_eq!(result.emojis().len(), 3);
        assert!(!result.emojis()[0].is_valid());
        assert_eq!(serde_json::to_value(&result.emojis()[0]).unwrap(), odd);
        // 250 still fits the integer type, so it decodes without a range check.
        assert_eq!(
            result.emojis()[1].valid().map(|e| *e.relevance_score()),
            Some(250)
        );
        assert_eq!(serde_json::to_value(&result.emojis()[2]).unwrap(), json!(7));
    }

    #[test]
    fn trending_accepts_bare_array() {
        let parsed = parse_trending(json!([
            { "hashtag": "#ai", "trend_score": 97, "category": "tech" }
        ]))
        .unwrap();
        assert_eq!(parsed, vec![TrendingHashtag::new("#ai", 97, "tech")]);
    }

    #[test]
    fn trending_accepts_wrapper_object() {
        let parsed = parse_trending(json!({
            "trending_hashtags": [
                { "hashtag": "#ai", "trend_score": 97, "category": "tech" },
                { "hashtag": "#ml", "trend_score": 80, "category": "tech" }
            ]
        }))
        .unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn trending_rejects_other_shapes() {
        assert!(parse_trending(json!({ "hashtags": [] })).is_none());
        assert!(parse_trending(json!({ "trending_hashtags": "none" })).is_none());
        assert!(parse_trending(json!("#ai")).is_none());
        assert!(parse_trending(json!([{ "hashtag": "#ai" }])).is_none());
    }

    #[test]
    fn trending_skips_undecodable_entries() {
        let parsed = parse_trending(json!([
            { "hashtag": "#ai", "trend_score": 97, "category": "tech" },
            { "hashtag": "#ml", "trend_score": 101.5, "category": "tech" }
        ]))
        .unwrap();
        assert_eq!(parsed, vec![TrendingHashtag::new("#ai", 97, "tech")]);
    }

    #[test]
    fn trending_keeps_empty_list() {
        assert_eq!(parse_trending(json!([])), Some(Vec::new()));
        assert_eq!(parse_trending(json!({ "trending_hashtags": [] })), Some(Vec::new()));
    }
}

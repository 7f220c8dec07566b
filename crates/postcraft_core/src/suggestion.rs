//! Suggestion result types.
//!
//! Field names follow the JSON contract callers depend on, so the serde
//! representation of [`SuggestionResult`] is the wire format.

use crate::{Lenient, Platform};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A suggested emoji and why it fits.
///
/// Unknown keys are rejected so that an entry carrying extra fields stays
/// [`Lenient::Unchecked`] and round-trips intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(deny_unknown_fields)]
pub struct EmojiSuggestion {
    /// Single emoji glyph
    emoji: String,
    /// Short explanation of the emoji's role
    description: String,
    /// Relevance from 0 to 100
    relevance_score: u8,
}

impl EmojiSuggestion {
    /// Create a new emoji suggestion.
    pub fn new(emoji: impl Into<String>, description: impl Into<String>, relevance_score: u8) -> Self {
        Self {
            emoji: emoji.into(),
            description: description.into(),
            relevance_score,
        }
    }
}

/// How widely a hashtag is used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Popularity {
    Trending,
    High,
    Medium,
    Niche,
}

/// A suggested hashtag with reach estimates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(deny_unknown_fields)]
pub struct HashtagSuggestion {
    /// Hashtag including the leading `#`
    hashtag: String,
    /// Topic category
    category: String,
    /// Usage level
    popularity: Popularity,
    /// Reach potential from 0 to 100
    reach_potential: u8,
}

impl HashtagSuggestion {
    /// Create a new hashtag suggestion.
    pub fn new(
        hashtag: impl Into<String>,
        category: impl Into<String>,
        popularity: Popularity,
        reach_potential: u8,
    ) -> Self {
        Self {
            hashtag: hashtag.into(),
            category: category.into(),
            popularity,
            reach_potential,
        }
    }
}

/// Placement advice for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(deny_unknown_fields)]
pub struct PlatformGuidance {
    /// Platform the advice applies to
    platform: Platform,
    /// How many emojis to use
    recommended_emoji_count: u32,
    /// How many hashtags to use
    recommended_hashtag_count: u32,
    /// Where in the post they belong
    optimal_placement: String,
}

impl PlatformGuidance {
    /// Create new platform guidance.
    pub fn new(
        platform: Platform,
        recommended_emoji_count: u32,
        recommended_hashtag_count: u32,
        optimal_placement: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            recommended_emoji_count,
            recommended_hashtag_count,
            optimal_placement: optimal_placement.into(),
        }
    }
}

/// The unified emoji, hashtag and guidance response.
///
/// All three collections are always present. A missing collection in the
/// serialized form decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct SuggestionResult {
    /// Suggested emojis, most relevant first
    #[serde(default)]
    emojis: Vec<Lenient<EmojiSuggestion>>,
    /// Suggested hashtags
    #[serde(default)]
    hashtags: Vec<Lenient<HashtagSuggestion>>,
    /// Per-platform placement advice
    #[serde(default)]
    platform_specific: Vec<Lenient<PlatformGuidance>>,
}

impl SuggestionResult {
    /// Assemble a result from its three collections.
    pub fn new(
        emojis: Vec<Lenient<EmojiSuggestion>>,
        hashtags: Vec<Lenient<HashtagSuggestion>>,
        platform_specific: Vec<Lenient<PlatformGuidance>>,
    ) -> Self {
        Self {
            emojis,
            hashtags,
            platform_specific,
        }
    }

    /// Guidance for `platform`, if the result carries a well-formed entry for it.
    pub fn guidance_for(&self, platform: Platform) -> Option<&PlatformGuidance> {
        self.platform_specific
            .iter()
            .filter_map(Lenient::valid)
            .find(|g| g.platform == platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_serializes_to_wire_schema() {
        let result = SuggestionResult::new(
            vec![EmojiSuggestion::new("✨", "Sparkles", 90).into()],
            vec![HashtagSuggestion::new("#launch", "business", Popularity::High, 70).into()],
            vec![PlatformGuidance::new(Platform::Twitter, 2, 3, "within text").into()],
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "emojis": [{ "emoji": "✨", "description": "Sparkles", "relevance_score": 90 }],
                "hashtags": [{
                    "hashtag": "#launch",
                    "category": "business",
                    "popularity": "high",
                    "reach_potential": 70
                }],
                "platform_specific": [{
                    "platform": "twitter",
                    "recommended_emoji_count": 2,
                    "recommended_hashtag_count": 3,
                    "optimal_placement": "within text"
                }]
            })
        );
    }

    #[test]
    fn missing_collections_decode_as_empty() {
        let result: SuggestionResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.emojis().is_empty());
        assert!(result.hashtags().is_empty());
        assert!(result.platform_specific().is_empty());
    }

    #[test]
    fn guidance_lookup_skips_unchecked_entries() {
        let result = SuggestionResult::new(
            vec![],
            vec![],
            vec![
                Lenient::Unchecked(json!({ "platform": "instagram" })),
                PlatformGuidance::new(Platform::Instagram, 3, 10, "end of post").into(),
            ],
        );
        let guidance = result.guidance_for(Platform::Instagram).unwrap();
        assert_eq!(*guidance.recommended_hashtag_count(), 10);
        assert!(result.guidance_for(Platform::Facebook).is_none());
    }
}

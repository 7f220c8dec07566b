//! Static suggestions used when the provider path fails.
//!
//! Output depends only on the platform. The canned lists are ordered by
//! usefulness, so truncating to a platform's recommended count keeps the
//! strongest entries.

use postcraft_core::{
    EmojiSuggestion, HashtagSuggestion, Platform, PlatformGuidance, Popularity, SuggestionResult,
    TrendingHashtag,
};

const CANNED_EMOJIS: [(&str, &str, u8); 5] = [
    ("✨", "Sparkles - adds a sense of excitement and polish", 90),
    ("🚀", "Rocket - signals launches, growth and momentum", 85),
    ("💡", "Light bulb - highlights ideas and tips", 80),
    ("🔥", "Fire - marks popular or exciting content", 75),
    ("👉", "Pointing hand - draws attention to a call to action", 70),
];

const CANNED_HASHTAGS: [(&str, &str, Popularity, u8); 5] = [
    ("#trending", "general", Popularity::Trending, 90),
    ("#socialmedia", "marketing", Popularity::High, 80),
    ("#contentcreator", "creator", Popularity::High, 75),
    ("#digitalmarketing", "marketing", Popularity::Medium, 65),
    ("#smallbusiness", "business", Popularity::Niche, 55),
];

const CANNED_TRENDING: [(&str, u8, &str); 3] = [
    ("#trending", 95, "general"),
    ("#viral", 90, "general"),
    ("#explore", 85, "general"),
];

/// Recommended `(emoji_count, hashtag_count, placement)` for `platform`.
pub fn platform_guidance(platform: Platform) -> PlatformGuidance {
    let (emojis, hashtags, placement) = match platform {
        Platform::Instagram => (3, 10, "end of post"),
        Platform::Twitter => (2, 3, "within text"),
        Platform::Facebook => (2, 5, "end of post"),
        Platform::Linkedin => (1, 5, "end of post"),
    };
    PlatformGuidance::new(platform, emojis, hashtags, placement)
}

/// Deterministic suggestions for `platform`.
///
/// `content` is accepted for signature parity with the provider path and does
/// not influence the output.
///
/// # Examples
///
/// ```
/// use postcraft_core::Platform;
/// use postcraft_suggestions::fallback;
///
/// let result = fallback("anything", Platform::Twitter);
/// assert_eq!(result.emojis().len(), 2);
/// assert_eq!(result.hashtags().len(), 3);
/// ```
pub fn fallback(_content: &str, platform: Platform) -> SuggestionResult {
    let guidance = platform_guidance(platform);

    let emojis = CANNED_EMOJIS
        .iter()
        .take(*guidance.recommended_emoji_count() as usize)
        .map(|(emoji, description, score)| EmojiSuggestion::new(*emoji, *description, *score).into())
        .collect();

    let hashtags = CANNED_HASHTAGS
        .iter()
        .take(*guidance.recommended_hashtag_count() as usize)
        .map(|(tag, category, popularity, reach)| {
            HashtagSuggestion::new(*tag, *category, *popularity, *reach).into()
        })
        .collect();

    SuggestionResult::new(emojis, hashtags, vec![guidance.into()])
}

/// The fixed trending list, independent of platform and category.
pub fn fallback_trending() -> Vec<TrendingHashtag> {
    CANNED_TRENDING
        .iter()
        .map(|(tag, score, category)| TrendingHashtag::new(*tag, *score, *category))
        .collect()
}

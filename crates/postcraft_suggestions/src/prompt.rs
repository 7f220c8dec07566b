//! Prompt assembly.

use postcraft_core::Platform;

const SUGGESTION_SCHEMA: &str = r##"{
  "emojis": [
    { "emoji": "✨", "description": "why it fits", "relevance_score": 90 }
  ],
  "hashtags": [
    { "hashtag": "#example", "category": "topic", "popularity": "trending", "reach_potential": 80 }
  ],
  "platform_specific": [
    { "platform": "instagram", "recommended_emoji_count": 3, "recommended_hashtag_count": 10, "optimal_placement": "end of post" }
  ]
}"##;

const TRENDING_SCHEMA: &str = r##"{
  "trending_hashtags": [
    { "hashtag": "#example", "trend_score": 85, "category": "topic" }
  ]
}"##;

/// System instruction and user text for one completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    /// Instruction text
    pub system: String,
    /// User text
    pub user: String,
}

/// Build the suggestion prompt for `content` on `platform`.
///
/// Optional hints are appended to the instruction as `Industry:` and
/// `Target audience:` lines; absent hints leave no trace.
///
/// # Examples
///
/// ```
/// use postcraft_core::Platform;
/// use postcraft_suggestions::build_prompt;
///
/// let prompt = build_prompt("Launch day!", Platform::Twitter, Some("fintech"), None);
/// assert!(prompt.system.contains("Industry: fintech"));
/// assert!(!prompt.system.contains("Target audience"));
/// assert!(prompt.user.contains("\"Launch day!\""));
/// ```
pub fn build_prompt(
    content: &str,
    platform: Platform,
    industry: Option<&str>,
    target_audience: Option<&str>,
) -> PromptParts {
    let mut system = format!(
        "You are a social media marketing expert. Suggest emojis and hashtags that fit a {platform} post.\n\
         Respond only with a JSON object in exactly this shape:\n\
         {SUGGESTION_SCHEMA}\n\
         relevance_score and reach_potential are integers from 0 to 100. \
         popularity is one of \"trending\", \"high\", \"medium\", \"niche\". \
         Every hashtag starts with \"#\". \
         platform_specific contains a single entry for {platform}."
    );
    if let Some(industry) = industry {
        system.push_str(&format!("\nIndustry: {industry}"));
    }
    if let Some(audience) = target_audience {
        system.push_str(&format!("\nTarget audience: {audience}"));
    }

    let user = format!("Content: \"{content}\"\nPlatform: {platform}");

    PromptParts { system, user }
}

/// Build the trend-focused prompt for `platform`, optionally narrowed to `category`.
pub fn build_trending_prompt(platform: Platform, category: Option<&str>) -> PromptParts {
    let system = format!(
        "You are a social media trend analyst. List hashtags currently trending on {platform}.\n\
         Respond only with a JSON object in exactly this shape:\n\
         {TRENDING_SCHEMA}\n\
         trend_score is an integer from 0 to 100."
    );

    let user = match category {
        Some(category) => format!("Platform: {platform}\nCategory: {category}"),
        None => format!("Platform: {platform}"),
    };

    PromptParts { system, user }
}

//! Trending hashtag type.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A hashtag currently gaining traction on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct TrendingHashtag {
    /// Hashtag including the leading `#`
    hashtag: String,
    /// Trend strength from 0 to 100
    trend_score: u8,
    /// Topic category
    category: String,
}

impl TrendingHashtag {
    /// Create a new trending hashtag entry.
    pub fn new(hashtag: impl Into<String>, trend_score: u8, category: impl Into<String>) -> Self {
        Self {
            hashtag: hashtag.into(),
            trend_score,
            category: category.into(),
        }
    }
}

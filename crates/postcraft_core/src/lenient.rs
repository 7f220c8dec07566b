//! Entries that are typed when they can be and kept verbatim when they can't.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A collection entry decoded from model output.
///
/// Model output is not checked element by element: an entry that matches the
/// expected shape is held as `Valid`, anything else is held as `Unchecked`
/// and serialized back exactly as it arrived.
///
/// # Examples
///
/// ```
/// use postcraft_core::{EmojiSuggestion, Lenient};
/// use serde_json::json;
///
/// let good: Lenient<EmojiSuggestion> = Lenient::from_value(json!({
///     "emoji": "🔥", "description": "Fire", "relevance_score": 80
/// }));
/// assert!(good.is_valid());
///
/// let odd: Lenient<EmojiSuggestion> = Lenient::from_value(json!({ "emoji": "🔥" }));
/// assert!(!odd.is_valid());
/// assert_eq!(serde_json::to_value(&odd).unwrap(), json!({ "emoji": "🔥" }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    /// Entry matching the expected shape
    Valid(T),
    /// Entry passed through without checking
    Unchecked(serde_json::Value),
}

impl<T: DeserializeOwned> Lenient<T> {
    /// Decode `value` as `T`, keeping it verbatim on mismatch.
    pub fn from_value(value: serde_json::Value) -> Self {
        match T::deserialize(&value) {
            Ok(typed) => Lenient::Valid(typed),
            Err(_) => Lenient::Unchecked(value),
        }
    }
}

impl<T> Lenient<T> {
    /// Returns the typed entry, if the entry matched.
    pub fn valid(&self) -> Option<&T> {
        match self {
            Lenient::Valid(typed) => Some(typed),
            Lenient::Unchecked(_) => None,
        }
    }

    /// True when the entry matched the expected shape.
    pub fn is_valid(&self) -> bool {
        matches!(self, Lenient::Valid(_))
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(typed: T) -> Self {
        Lenient::Valid(typed)
    }
}

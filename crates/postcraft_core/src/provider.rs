//! Hosted LLM backends.

use serde::{Deserialize, Serialize};

/// Which hosted model backend services a request.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    /// Chat-completions style API returning a JSON-typed message.
    #[default]
    OpenAi,
    /// Messages style API returning a list of content blocks.
    Anthropic,
}

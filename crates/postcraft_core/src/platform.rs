//! Target social networks.

use serde::{Deserialize, Serialize};

/// Social network a piece of content is written for.
///
/// # Examples
///
/// ```
/// use postcraft_core::Platform;
///
/// let platform: Platform = "LinkedIn".parse().unwrap();
/// assert_eq!(platform, Platform::Linkedin);
/// assert_eq!(platform.to_string(), "linkedin");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
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
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    Linkedin,
}

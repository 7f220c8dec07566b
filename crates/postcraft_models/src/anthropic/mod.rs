//! Anthropic messages API client.

mod client;
mod types;

pub use client::{AnthropicClient, DEFAULT_ANTHROPIC_BASE_URL};
pub use types::{
    AnthropicContent, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicUsage,
};

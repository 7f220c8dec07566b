//! Hosted LLM provider adapters for Postcraft.
//!
//! Two backends are supported, each implementing
//! [`postcraft_interface::CompletionDriver`]:
//!
//! - [`OpenAiClient`]: chat completions with a JSON response format
//! - [`AnthropicClient`]: messages API returning content blocks

mod anthropic;
mod openai;

pub use anthropic::{
    AnthropicClient, AnthropicContent, AnthropicContentBlock, AnthropicMessage,
    AnthropicMessageBuilder, AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse,
    AnthropicUsage, DEFAULT_ANTHROPIC_BASE_URL,
};
pub use openai::{
    ChatMessage, ChatRequest, ChatResponse, DEFAULT_OPENAI_BASE_URL, OpenAiClient, ResponseFormat,
};

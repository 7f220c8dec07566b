//! OpenAI chat completions client.

mod client;
mod conversions;
mod dto;

pub use client::{DEFAULT_OPENAI_BASE_URL, OpenAiClient};
pub use dto::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

//! Type conversions between Postcraft and the chat completions format.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
use postcraft_core::CompletionRequest;
use postcraft_error::{ProviderError, ProviderErrorKind};

/// Converts a completion request to chat format: optional system message, then the user prompt.
pub fn to_chat_request(req: &CompletionRequest, model: &str) -> Result<ChatRequest, ProviderError> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = req.system() {
        messages.push(ChatMessage::system(system.clone()));
    }
    messages.push(ChatMessage::user(req.prompt().clone()));

    ChatRequest::builder()
        .model(model.to_string())
        .messages(messages)
        .response_format(Some(ResponseFormat::json_object()))
        .max_tokens(Some(*req.max_tokens()))
        .temperature(*req.temperature())
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::MalformedBody(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extracts the first choice's message content.
pub fn from_chat_response(response: &ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_system_user_and_json_format() {
        let req = CompletionRequest::builder()
            .prompt("Suggest emojis")
            .system(Some("You are a social media expert".to_string()))
            .max_tokens(800u32)
            .temperature(Some(0.7))
            .build()
            .unwrap();

        let chat = to_chat_request(&req, "gpt-4o-mini").unwrap();
        let body = serde_json::to_value(&chat).unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Suggest emojis");
        assert_eq!(body["response_format"], json!({ "type": "json_object" }));
        assert_eq!(body["max_tokens"], 800);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn request_without_system_has_single_message() {
        let req = CompletionRequest::builder().prompt("hi").build().unwrap();
        let chat = to_chat_request(&req, "m").unwrap();
        assert_eq!(chat.messages().len(), 1);
        assert!(chat.temperature().is_none());
    }

    #[test]
    fn first_choice_content_is_returned() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "{\"emojis\":[]}" }, "finish_reason": "stop" },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();
        assert_eq!(from_chat_response(&response).unwrap(), "{\"emojis\":[]}");
    }

    #[test]
    fn missing_choices_is_empty_response() {
        let response: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        let err = from_chat_response(&response).unwrap_err();
        assert_eq!(*err.kind(), ProviderErrorKind::EmptyResponse);
    }

    #[test]
    fn null_content_is_empty_response() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        }))
        .unwrap();
        assert!(from_chat_response(&response).is_err());
    }
}

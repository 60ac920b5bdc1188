//! Response parsing for OpenAI

use crate::constants::OPENAI_PROVIDER_NAME;
use crate::error;
use crate::traits::ResponseParser;
use parley_core::{Error, FinishReason, Response, ResponseMetadata, ToolCall, Usage};
use serde::Deserialize;
use serde_json::Value;

/// Parses OpenAI responses
#[derive(Debug, Clone, Copy)]
pub struct OpenAIParser;

impl ResponseParser for OpenAIParser {
    fn parse_response(&self, value: Value) -> Result<Response, Error> {
        let response: OpenAIResponse =
            serde_json::from_value(value).map_err(error::serialization_error)?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(error::to_core_error(
                OPENAI_PROVIDER_NAME,
                "No choices in response",
                None,
            ));
        };

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| ToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: tc.function.arguments,
            })
            .collect();

        let metadata = ResponseMetadata {
            model: response.model,
            id: response.id,
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(parse_finish_reason),
        };

        Ok(Response {
            content: choice.message.content.unwrap_or_default(),
            tool_calls,
            metadata,
        })
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "length" => FinishReason::Length,
        "tool_calls" | "function_call" => FinishReason::ToolCalls,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

#[derive(Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCallResponse>>,
}

#[derive(Deserialize)]
struct ToolCallResponse {
    id: String,
    function: FunctionCall,
}

#[derive(Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_text_completion() {
        let response = OpenAIParser
            .parse_response(json!({
                "id": "chatcmpl-1",
                "model": "gpt-4-0613",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "4" },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 9, "completion_tokens": 1, "total_tokens": 10 }
            }))
            .unwrap();

        assert_eq!(response.content, "4");
        assert!(!response.has_tool_calls());
        assert_eq!(response.metadata.model.as_deref(), Some("gpt-4-0613"));
        assert_eq!(response.metadata.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.metadata.usage.map(|u| u.total_tokens), Some(10));
    }

    #[test]
    fn test_parse_tool_calls() {
        let response = OpenAIParser
            .parse_response(json!({
                "id": "chatcmpl-2",
                "model": "gpt-4",
                "choices": [{
                    "message": {
                        "role": "assistant",
                        "content": null,
                        "tool_calls": [{
                            "id": "call_1",
                            "type": "function",
                            "function": { "name": "calculator", "arguments": "{\"expression\":\"2+2\"}" }
                        }]
                    },
                    "finish_reason": "tool_calls"
                }]
            }))
            .unwrap();

        assert_eq!(response.content, "");
        assert_eq!(response.tool_calls.len(), 1);
        assert_eq!(response.tool_calls[0].name, "calculator");
        assert_eq!(response.tool_calls[0].arguments, r#"{"expression":"2+2"}"#);
        assert_eq!(response.metadata.finish_reason, Some(FinishReason::ToolCalls));
    }

    #[test]
    fn test_no_choices_is_provider_error() {
        let error = OpenAIParser
            .parse_response(json!({ "id": "x", "model": "gpt-4", "choices": [] }))
            .unwrap_err();
        assert_eq!(error.to_string(), "Provider error (openai): No choices in response");
    }

    #[test]
    fn test_malformed_body_is_serialization_error() {
        let error = OpenAIParser.parse_response(json!({ "error": "nope" })).unwrap_err();
        assert!(matches!(error, Error::Serialization { .. }));
    }
}

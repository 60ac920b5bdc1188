//! Request conversion for OpenAI

use crate::traits::RequestConverter;
use parley_core::{Error, Message, Request, Tool, ToolCall};
use serde_json::{json, Value};

/// Converts generic requests to OpenAI format
#[derive(Debug, Clone, Copy)]
pub struct OpenAIConverter;

impl RequestConverter for OpenAIConverter {
    fn convert_request(&self, request: &Request) -> Result<Value, Error> {
        if request.model.as_str().trim().is_empty() {
            return Err(Error::Configuration("model identifier is empty".to_string()));
        }

        let mut body = json!({
            "model": request.model.as_str(),
            "messages": request.messages.iter().map(convert_message).collect::<Vec<_>>(),
            "stream": false,
        });

        let params = &request.parameters;
        if let Some(max_tokens) = params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = params.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(top_p) = params.top_p {
            body["top_p"] = json!(top_p);
        }
        if let Some(stop) = &params.stop {
            body["stop"] = json!(stop);
        }

        if !request.tools.is_empty() {
            body["tools"] = Value::Array(request.tools.iter().map(convert_tool).collect());
        }

        Ok(body)
    }
}

fn convert_message(message: &Message) -> Value {
    let mut msg = json!({ "role": message.role.as_str() });

    if message.has_tool_calls() {
        // The API wants `null` rather than "" next to tool calls.
        msg["content"] = if message.content.is_empty() {
            Value::Null
        } else {
            json!(message.content)
        };
        msg["tool_calls"] =
            Value::Array(message.metadata.tool_calls.iter().map(convert_tool_call).collect());
    } else {
        msg["content"] = json!(message.content);
    }

    if let Some(name) = &message.metadata.name {
        msg["name"] = json!(name);
    }
    if let Some(tool_call_id) = &message.metadata.tool_call_id {
        msg["tool_call_id"] = json!(tool_call_id);
    }

    msg
}

fn convert_tool_call(call: &ToolCall) -> Value {
    json!({
        "id": call.id,
        "type": "function",
        "function": {
            "name": call.name,
            "arguments": call.arguments,
        },
    })
}

fn convert_tool(tool: &Tool) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.function.parameters,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::{Message, Parameters};
    use pretty_assertions::assert_eq;

    fn calculator() -> Tool {
        Tool::new(
            "calculator",
            "Evaluate arithmetic",
            json!({
                "type": "object",
                "properties": { "expression": { "type": "string" } },
                "required": ["expression"]
            }),
        )
    }

    #[test]
    fn test_single_turn_body() {
        let request = Request::builder().message(Message::user("2+2")).build();
        let body = OpenAIConverter.convert_request(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "messages": [{ "role": "user", "content": "2+2" }],
                "stream": false,
            })
        );
    }

    #[test]
    fn test_parameters_and_tools() {
        let request = Request::builder()
            .message(Message::user("hi"))
            .parameters(Parameters::builder().max_tokens(64).stop(["Observation:"]).build())
            .tool(calculator())
            .build();
        let body = OpenAIConverter.convert_request(&request).unwrap();

        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["stop"][0], "Observation:");
        assert!(body.get("temperature").is_none());
        assert_eq!(body["tools"][0]["type"], "function");
        assert_eq!(body["tools"][0]["function"]["name"], "calculator");
        assert_eq!(
            body["tools"][0]["function"]["parameters"]["required"][0],
            "expression"
        );
    }

    #[test]
    fn test_tool_round_trip_messages() {
        let call = ToolCall {
            id: "call_abc".into(),
            name: "calculator".into(),
            arguments: r#"{"expression":"2+2"}"#.into(),
        };
        let request = Request::builder()
            .message(Message::user("2+2"))
            .message(Message::assistant_tool_calls("", vec![call]))
            .message(Message::tool("4", "call_abc"))
            .build();
        let body = OpenAIConverter.convert_request(&request).unwrap();
        let messages = body["messages"].as_array().unwrap();

        assert_eq!(
            messages[1],
            json!({
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_abc",
                    "type": "function",
                    "function": { "name": "calculator", "arguments": "{\"expression\":\"2+2\"}" }
                }]
            })
        );
        assert_eq!(
            messages[2],
            json!({ "role": "tool", "content": "4", "tool_call_id": "call_abc" })
        );
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let request = Request::builder()
            .message(Message::user("hi"))
            .model("")
            .build();
        let error = OpenAIConverter.convert_request(&request).unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
    }
}

use serde::{Deserialize, Serialize};

/// A single conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Request body for `/v1/assistant/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Response from `/v1/assistant/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_camel_case() {
        let req = ChatRequest {
            messages: vec![ChatMessage::user("Tell me about the brakes.")],
            system_prompt: "You are the showcase assistant.".into(),
            model: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("systemPrompt"));
        assert!(!json.contains("model"));

        let with_model = ChatRequest {
            model: Some("flash".into()),
            ..req
        };
        let json = serde_json::to_string(&with_model).unwrap();
        assert!(json.contains("\"model\":\"flash\""));
    }

    #[test]
    fn test_chat_response_deserializes() {
        let reply: ChatResponse = serde_json::from_str(r#"{"content":"1360 hp."}"#).unwrap();
        assert_eq!(reply.content, "1360 hp.");
    }
}

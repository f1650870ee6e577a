use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Server is offline or unreachable")]
    Offline,

    #[error("Request timed out")]
    Timeout,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AssistantError::Timeout
        } else if err.is_connect() {
            AssistantError::Offline
        } else {
            AssistantError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        AssistantError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(AssistantError::MissingCredential
            .to_string()
            .contains("credential"));
        assert!(AssistantError::Offline.to_string().contains("offline"));
        assert!(AssistantError::Timeout.to_string().contains("timed out"));

        let server = AssistantError::ServerError {
            status: 503,
            message: "maintenance".into(),
        };
        assert!(server.to_string().contains("503"));
    }
}

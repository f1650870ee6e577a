use reqwest::Client;

use crate::error::AssistantError;
use crate::types::{ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://showroom-server.onrender.com";

/// Environment variable holding the out-of-band API credential
pub const API_KEY_VAR: &str = "SHOWROOM_API_KEY";
/// Environment variable overriding the service endpoint
pub const API_URL_VAR: &str = "SHOWROOM_API_URL";

/// API client for the assistant chat endpoint
pub struct AssistantApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AssistantApi {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build from the environment; `None` when no credential is configured
    pub fn from_env(client: Client) -> Option<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty())?;
        let mut api = Self::new(client, api_key);
        if let Some(url) = std::env::var(API_URL_VAR).ok().filter(|u| !u.is_empty()) {
            api = api.with_base_url(url);
        }
        Some(api)
    }

    /// Send a chat request and get the assistant's reply
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AssistantError> {
        let url = format!("{}/v1/assistant/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AssistantError::ServerError {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(response.json().await?)
    }
}

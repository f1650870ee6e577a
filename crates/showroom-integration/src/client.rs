use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::warn;

use crate::api::AssistantApi;
use crate::error::AssistantError;
use crate::types::{ChatRequest, ChatResponse};

/// A non-blocking handle to an in-flight async request.
/// Call `try_recv()` each frame to check for results without blocking the
/// render loop, or `wait()` from a context that may block.
pub struct PendingRequest<T> {
    receiver: mpsc::Receiver<Result<T, AssistantError>>,
}

impl<T> PendingRequest<T> {
    /// A request that already holds its result; used by fake transports
    pub fn ready(result: Result<T, AssistantError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Non-blocking check for the result. Returns `None` if still pending.
    pub fn try_recv(&self) -> Option<Result<T, AssistantError>> {
        self.receiver.try_recv().ok()
    }

    /// Blocking wait for the result. Never call from the render path.
    pub fn wait(self) -> Result<T, AssistantError> {
        self.receiver
            .recv()
            .map_err(|_| AssistantError::Network("Channel closed".into()))?
    }
}

/// Dispatches chat requests. This is the seam the session talks through, so
/// tests can substitute a fake instead of performing network calls.
pub trait ChatTransport {
    /// Whether a credential is configured and requests can be attempted
    fn is_configured(&self) -> bool;

    /// Dispatch a request without blocking the caller
    fn dispatch(&self, request: ChatRequest) -> PendingRequest<ChatResponse>;
}

/// HTTP transport for the assistant service.
/// Owns a background tokio runtime and dispatches async work via channels;
/// the render loop never touches the network.
pub struct AssistantClient {
    runtime: tokio::runtime::Runtime,
    api: Option<Arc<AssistantApi>>,
}

impl AssistantClient {
    /// Create a client with the credential sourced from the environment.
    /// A missing credential is not an error: the client comes up
    /// unconfigured and every send degrades to the offline notice.
    pub fn new() -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AssistantError::Network(format!("Failed to create HTTP client: {e}")))?;

        Self::with_api(AssistantApi::from_env(client))
    }

    /// Create a client around an explicit API handle (or none)
    pub fn with_api(api: Option<AssistantApi>) -> Result<Self, AssistantError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| AssistantError::Network(format!("Failed to create runtime: {e}")))?;

        if api.is_none() {
            warn!("no assistant credential configured, replies will degrade to the offline notice");
        }

        Ok(Self {
            runtime,
            api: api.map(Arc::new),
        })
    }
}

impl ChatTransport for AssistantClient {
    fn is_configured(&self) -> bool {
        self.api.is_some()
    }

    fn dispatch(&self, request: ChatRequest) -> PendingRequest<ChatResponse> {
        let (tx, rx) = mpsc::channel();
        match &self.api {
            Some(api) => {
                let api = Arc::clone(api);
                self.runtime.spawn(async move {
                    let result = api.chat(&request).await;
                    let _ = tx.send(result);
                });
            }
            None => {
                let _ = tx.send(Err(AssistantError::MissingCredential));
            }
        }
        PendingRequest { receiver: rx }
    }
}

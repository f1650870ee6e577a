//! Showroom Integration - Assistant service client
//!
//! Provides the persona-locked conversational assistant: wire types, the
//! HTTP client with its background runtime, and the session that turns every
//! failure into a fixed user-facing notice instead of an error.

pub mod api;
pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use api::AssistantApi;
pub use client::{AssistantClient, ChatTransport, PendingRequest};
pub use error::AssistantError;
pub use session::{AssistantSession, INTERRUPTED_NOTICE, OFFLINE_NOTICE};
pub use types::{ChatMessage, ChatRequest, ChatResponse};

//! The assistant conversation, pinned to one persona

use tracing::warn;

use crate::client::ChatTransport;
use crate::types::{ChatMessage, ChatRequest};

/// Shown when no credential is configured
pub const OFFLINE_NOTICE: &str = "Assistant link offline. Check your access key configuration.";

/// Shown when the service fails or returns nothing usable
pub const INTERRUPTED_NOTICE: &str = "Connection interrupted. Realigning satellites...";

/// A single ongoing conversation scoped to the process lifetime.
///
/// The history is created lazily on the first send that actually reaches the
/// transport; it is never reset and never shared between conversations.
/// Sends are strictly sequential.
pub struct AssistantSession {
    persona: String,
    model: Option<String>,
    history: Option<Vec<ChatMessage>>,
}

impl AssistantSession {
    /// Create a session seeded with the fixed persona string
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            model: None,
            history: None,
        }
    }

    /// Pin the service-side model choice
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Whether the first exchange has created the conversation
    pub fn has_started(&self) -> bool {
        self.history.is_some()
    }

    /// Turns the model has seen, in order
    pub fn history(&self) -> &[ChatMessage] {
        self.history.as_deref().unwrap_or(&[])
    }

    /// Forward one user message and wait for the reply.
    ///
    /// Never fails toward the caller: a missing credential yields
    /// [`OFFLINE_NOTICE`] without creating the conversation, and any
    /// transport failure or empty reply yields [`INTERRUPTED_NOTICE`]. A
    /// failed turn is rolled back so the history only contains turns the
    /// model actually saw.
    pub fn send(&mut self, user_text: &str, transport: &dyn ChatTransport) -> String {
        if !transport.is_configured() {
            return OFFLINE_NOTICE.to_string();
        }

        let history = self.history.get_or_insert_with(Vec::new);
        history.push(ChatMessage::user(user_text));

        let request = ChatRequest {
            messages: history.clone(),
            system_prompt: self.persona.clone(),
            model: self.model.clone(),
        };

        match transport.dispatch(request).wait() {
            Ok(reply) if !reply.content.trim().is_empty() => {
                history.push(ChatMessage::assistant(reply.content.clone()));
                reply.content
            }
            Ok(_) => {
                warn!("assistant returned an empty reply");
                history.pop();
                INTERRUPTED_NOTICE.to_string()
            }
            Err(err) => {
                warn!("assistant request failed: {err}");
                history.pop();
                INTERRUPTED_NOTICE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PendingRequest;
    use crate::error::AssistantError;
    use crate::types::ChatResponse;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport double: queued canned replies, records every request
    struct FakeTransport {
        configured: bool,
        replies: RefCell<VecDeque<Result<ChatResponse, AssistantError>>>,
        requests: RefCell<Vec<ChatRequest>>,
    }

    impl FakeTransport {
        fn new(configured: bool) -> Self {
            Self {
                configured,
                replies: RefCell::new(VecDeque::new()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn queue_reply(&self, content: &str) {
            self.replies.borrow_mut().push_back(Ok(ChatResponse {
                content: content.into(),
            }));
        }

        fn queue_error(&self, err: AssistantError) {
            self.replies.borrow_mut().push_back(Err(err));
        }
    }

    impl ChatTransport for FakeTransport {
        fn is_configured(&self) -> bool {
            self.configured
        }

        fn dispatch(&self, request: ChatRequest) -> PendingRequest<ChatResponse> {
            self.requests.borrow_mut().push(request);
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(AssistantError::Offline));
            PendingRequest::ready(reply)
        }
    }

    #[test]
    fn test_missing_credential_degrades_without_a_session() {
        let transport = FakeTransport::new(false);
        let mut session = AssistantSession::new("You are the showcase assistant.");

        assert_eq!(session.send("Hello?", &transport), OFFLINE_NOTICE);
        assert_eq!(session.send("Still there?", &transport), OFFLINE_NOTICE);
        assert!(!session.has_started());
        assert!(transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_successful_exchange_grows_the_history() {
        let transport = FakeTransport::new(true);
        transport.queue_reply("Carbon ceramic, 410 mm.");
        let mut session = AssistantSession::new("You are the showcase assistant.");

        let reply = session.send("Tell me about the brakes.", &transport);
        assert_eq!(reply, "Carbon ceramic, 410 mm.");
        assert!(session.has_started());
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, "user");
        assert_eq!(session.history()[1].role, "assistant");

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system_prompt, "You are the showcase assistant.");
        assert_eq!(requests[0].messages.len(), 1);
    }

    #[test]
    fn test_history_accumulates_across_turns() {
        let transport = FakeTransport::new(true);
        transport.queue_reply("First answer.");
        transport.queue_reply("Second answer.");
        let mut session = AssistantSession::new("persona");

        session.send("one", &transport);
        session.send("two", &transport);

        let requests = transport.requests.borrow();
        // Second request carries the whole conversation so far
        assert_eq!(requests[1].messages.len(), 3);
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_transport_failure_yields_interrupted_and_rolls_back() {
        let transport = FakeTransport::new(true);
        transport.queue_reply("Fine so far.");
        transport.queue_error(AssistantError::Timeout);
        let mut session = AssistantSession::new("persona");

        session.send("one", &transport);
        assert_eq!(session.send("two", &transport), INTERRUPTED_NOTICE);
        // The failed turn is not retained
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_empty_reply_counts_as_interrupted() {
        let transport = FakeTransport::new(true);
        transport.queue_reply("   \n");
        let mut session = AssistantSession::new("persona");

        assert_eq!(session.send("anyone home?", &transport), INTERRUPTED_NOTICE);
        assert_eq!(session.history().len(), 0);
        assert!(session.has_started());
    }

    #[test]
    fn test_model_choice_rides_along() {
        let transport = FakeTransport::new(true);
        transport.queue_reply("ok");
        let mut session = AssistantSession::new("persona").with_model("flash");

        session.send("hi", &transport);
        assert_eq!(transport.requests.borrow()[0].model.as_deref(), Some("flash"));
    }
}

pub mod assistant;
pub mod completion;
pub mod config;

use completion::{ChatTurn, CompletionClient, TurnRole};
use harbor_core::chat::{ChatMessage, MessageSender};
use harbor_core::{HarborError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

pub use assistant::{AssistantDirectory, OpenAiAssistantDirectory, UNNAMED_ASSISTANT};
pub use completion::OpenAiCompletionClient;
pub use config::{CompletionConfig, DEFAULT_COMPLETION_MODEL};

/// The persona instruction sent ahead of every completion request.
pub const HARBOR_PERSONA: &str = "Explain things like you're a staff at Port Authority Singapore. \
     You are answering the questions of interns and workers who have queries about PSA's rules and protocols.";

/// Greeting appended to a freshly assembled session.
pub const GREETING: &str =
    "Hello, I'm HarborBot, your friendly assistant! What would you like to know!";

/// Reply appended in place of an assistant message when a request fails.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

/// Manages one live conversational interaction scope.
///
/// A `ChatSession` owns its ordered message history, a pending flag marking
/// an outstanding completion request, and the optional resolved display
/// name of the assistant persona. History is append-only for the lifetime
/// of the session and dropped with it; dropping the session also drops any
/// in-flight request future, so a stale completion can never reach a dead
/// session.
pub struct ChatSession {
    /// Session ID for this instance
    id: String,
    /// Persona instruction sent as the leading system turn
    persona: String,
    /// Model identifier for completion requests
    model: String,
    /// Ordered message history (append-only)
    messages: RwLock<Vec<ChatMessage>>,
    /// Whether a completion request is outstanding
    pending: RwLock<bool>,
    /// Resolved assistant display name, if the lookup succeeded
    assistant_name: RwLock<Option<String>>,
    /// Client for the external completion endpoint
    client: Arc<dyn CompletionClient>,
}

impl ChatSession {
    /// Creates a new session with empty history.
    ///
    /// # Arguments
    ///
    /// * `client` - Client for the external completion endpoint
    /// * `persona` - Fixed system instruction sent ahead of the history
    /// * `model` - Model identifier for completion requests
    pub fn new(
        client: Arc<dyn CompletionClient>,
        persona: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            persona: persona.into(),
            model: model.into(),
            messages: RwLock::new(Vec::new()),
            pending: RwLock::new(false),
            assistant_name: RwLock::new(None),
            client,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends an assistant message outside the send protocol.
    ///
    /// Used to seed the opening greeting when a session is assembled.
    pub async fn push_assistant_message(&self, text: &str) {
        self.messages
            .write()
            .await
            .push(ChatMessage::now(MessageSender::Assistant, text));
    }

    /// Sends a user message and awaits the assistant reply.
    ///
    /// The message is appended to history and the entire transcript, led by
    /// the persona instruction, is dispatched to the completion endpoint.
    /// On success the first candidate reply is appended; on any failure
    /// (transport error, malformed response, zero candidates) the fixed
    /// fallback reply is appended instead. Either way exactly one assistant
    /// message follows the user message and the session is idle afterwards.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` for empty or whitespace-only text (state untouched)
    /// - `RequestInFlight` if a request is already outstanding (state
    ///   untouched; the invariant is at most one outstanding request per
    ///   session)
    pub async fn send_message(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(HarborError::EmptyMessage);
        }

        // Claim the single outstanding-request slot before touching history.
        {
            let mut pending = self.pending.write().await;
            if *pending {
                return Err(HarborError::RequestInFlight);
            }
            *pending = true;
        }

        // Append and snapshot under one guard: the payload for this request
        // reflects the history exactly as of the moment it was issued,
        // including the just-appended user message.
        let turns = {
            let mut messages = self.messages.write().await;
            messages.push(ChatMessage::now(MessageSender::User, text));
            self.build_turns(&messages)
        };

        let reply = match self.client.complete(&self.model, &turns).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("[ChatSession] Completion request failed: {}", err);
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages
            .write()
            .await
            .push(ChatMessage::now(MessageSender::Assistant, reply));
        *self.pending.write().await = false;

        Ok(())
    }

    /// Maps the transcript to the ordered request payload.
    fn build_turns(&self, messages: &[ChatMessage]) -> Vec<ChatTurn> {
        let mut turns = Vec::with_capacity(messages.len() + 1);
        turns.push(ChatTurn::new(TurnRole::System, self.persona.clone()));
        for message in messages {
            let role = match message.sender {
                MessageSender::User => TurnRole::User,
                MessageSender::Assistant => TurnRole::Assistant,
            };
            turns.push(ChatTurn::new(role, message.text.clone()));
        }
        turns
    }

    /// Returns a snapshot of the message history in transcript order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.read().await.clone()
    }

    /// Whether a completion request is outstanding (typing indicator).
    pub async fn is_typing(&self) -> bool {
        *self.pending.read().await
    }

    /// Returns the resolved assistant display name, if any.
    pub async fn assistant_name(&self) -> Option<String> {
        self.assistant_name.read().await.clone()
    }

    /// Records the resolved assistant display name.
    pub async fn set_assistant_name(&self, name: String) {
        *self.assistant_name.write().await = Some(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::sync::Notify;

    // Mock client replaying scripted replies and recording payloads
    struct MockCompletionClient {
        replies: Mutex<VecDeque<Result<String>>>,
        payloads: Mutex<Vec<Vec<ChatTurn>>>,
    }

    impl MockCompletionClient {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                payloads: Mutex::new(Vec::new()),
            }
        }

        fn payloads(&self) -> Vec<Vec<ChatTurn>> {
            self.payloads.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for MockCompletionClient {
        async fn complete(&self, _model: &str, turns: &[ChatTurn]) -> Result<String> {
            self.payloads.lock().unwrap().push(turns.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(HarborError::completion("no scripted reply")))
        }
    }

    // Mock client that blocks until released, for in-flight tests
    struct GatedCompletionClient {
        release: Notify,
    }

    #[async_trait::async_trait]
    impl CompletionClient for GatedCompletionClient {
        async fn complete(&self, _model: &str, _turns: &[ChatTurn]) -> Result<String> {
            self.release.notified().await;
            Ok("released".to_string())
        }
    }

    fn session_with(client: Arc<dyn CompletionClient>) -> ChatSession {
        ChatSession::new(client, HARBOR_PERSONA, DEFAULT_COMPLETION_MODEL)
    }

    fn senders(messages: &[ChatMessage]) -> Vec<MessageSender> {
        messages.iter().map(|m| m.sender).collect()
    }

    #[tokio::test]
    async fn test_successful_send_appends_reply() {
        let client = Arc::new(MockCompletionClient::new(vec![Ok(
            "Check berth 7 first.".to_string()
        )]));
        let session = session_with(client.clone());

        session.send_message("Where do I report?").await.unwrap();

        let messages = session.messages().await;
        assert_eq!(
            senders(&messages),
            vec![MessageSender::User, MessageSender::Assistant]
        );
        assert_eq!(messages[0].text, "Where do I report?");
        assert_eq!(messages[1].text, "Check berth 7 first.");
        assert!(!session.is_typing().await);
    }

    #[tokio::test]
    async fn test_failed_send_appends_fallback() {
        let client = Arc::new(MockCompletionClient::new(vec![Err(
            HarborError::completion("boom"),
        )]));
        let session = session_with(client);

        session.send_message("hello").await.unwrap();

        let messages = session.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, MessageSender::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].sender, MessageSender::Assistant);
        assert_eq!(messages[1].text, FALLBACK_REPLY);
        assert!(!session.is_typing().await);
    }

    #[tokio::test]
    async fn test_empty_text_rejected_without_state_change() {
        let client = Arc::new(MockCompletionClient::new(Vec::new()));
        let session = session_with(client.clone());

        assert!(matches!(
            session.send_message("").await,
            Err(HarborError::EmptyMessage)
        ));
        assert!(matches!(
            session.send_message("   \n\t").await,
            Err(HarborError::EmptyMessage)
        ));

        assert!(session.messages().await.is_empty());
        assert!(!session.is_typing().await);
        assert!(client.payloads().is_empty());
    }

    #[tokio::test]
    async fn test_payload_is_persona_then_full_history() {
        let client = Arc::new(MockCompletionClient::new(vec![
            Ok("Wear your safety vest.".to_string()),
            Ok("Gate 3 opens at six.".to_string()),
        ]));
        let session = session_with(client.clone());

        session.send_message("What do I wear?").await.unwrap();
        session.send_message("When does the gate open?").await.unwrap();

        let payloads = client.payloads();
        assert_eq!(payloads.len(), 2);

        // First request: system + the one user message
        assert_eq!(payloads[0].len(), 2);
        assert_eq!(payloads[0][0].role, TurnRole::System);
        assert_eq!(payloads[0][0].content, HARBOR_PERSONA);
        assert_eq!(payloads[0][1].role, TurnRole::User);
        assert_eq!(payloads[0][1].content, "What do I wear?");

        // Second request: system + full history including the new message
        let roles: Vec<TurnRole> = payloads[1].iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                TurnRole::System,
                TurnRole::User,
                TurnRole::Assistant,
                TurnRole::User
            ]
        );
        assert_eq!(payloads[1][3].content, "When does the gate open?");
    }

    #[tokio::test]
    async fn test_history_grows_two_per_send_across_outcomes() {
        let client = Arc::new(MockCompletionClient::new(vec![
            Ok("ok".to_string()),
            Err(HarborError::completion("down")),
            Ok("back up".to_string()),
        ]));
        let session = session_with(client);

        session.send_message("one").await.unwrap();
        session.send_message("two").await.unwrap();
        session.send_message("three").await.unwrap();

        let messages = session.messages().await;
        assert_eq!(messages.len(), 6);
        assert_eq!(
            senders(&messages),
            vec![
                MessageSender::User,
                MessageSender::Assistant,
                MessageSender::User,
                MessageSender::Assistant,
                MessageSender::User,
                MessageSender::Assistant,
            ]
        );
        // Failure appended the fallback without disturbing earlier history
        assert_eq!(messages[1].text, "ok");
        assert_eq!(messages[3].text, FALLBACK_REPLY);
        assert_eq!(messages[5].text, "back up");
        assert!(!session.is_typing().await);
    }

    #[tokio::test]
    async fn test_send_while_pending_is_rejected() {
        let client = Arc::new(GatedCompletionClient {
            release: Notify::new(),
        });
        let session = Arc::new(ChatSession::new(
            client.clone(),
            HARBOR_PERSONA,
            DEFAULT_COMPLETION_MODEL,
        ));

        let sender = session.clone();
        let first = tokio::spawn(async move { sender.send_message("first").await });

        // Wait for the first request to claim the pending slot
        while !session.is_typing().await {
            tokio::task::yield_now().await;
        }

        let err = session.send_message("second").await.unwrap_err();
        assert!(matches!(err, HarborError::RequestInFlight));
        // The rejected send appended no duplicate user message
        assert_eq!(session.messages().await.len(), 1);

        client.release.notify_one();
        first.await.unwrap().unwrap();

        let messages = session.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, "released");
        assert!(!session.is_typing().await);
    }

    #[tokio::test]
    async fn test_greeting_precedes_first_exchange() {
        let client = Arc::new(MockCompletionClient::new(vec![Ok("Welcome!".to_string())]));
        let session = session_with(client.clone());
        session.push_assistant_message(GREETING).await;

        session.send_message("hi").await.unwrap();

        let messages = session.messages().await;
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(messages[0].sender, MessageSender::Assistant);

        // The greeting is part of the request payload, after the persona
        let payloads = client.payloads();
        assert_eq!(payloads[0][1].role, TurnRole::Assistant);
        assert_eq!(payloads[0][1].content, GREETING);
    }

    #[tokio::test]
    async fn test_assistant_name_lifecycle() {
        let session = session_with(Arc::new(MockCompletionClient::new(Vec::new())));
        assert_eq!(session.assistant_name().await, None);

        session.set_assistant_name("HarborBot".to_string()).await;
        assert_eq!(session.assistant_name().await.as_deref(), Some("HarborBot"));
    }
}

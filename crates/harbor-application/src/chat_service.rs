//! Chat session assembly.
//!
//! Builds greeting-seeded chat sessions and resolves the assistant's
//! display name once per session. The name lookup is best-effort: when it
//! fails the session simply stays unnamed and the chat remains usable.

use harbor_interaction::completion::CompletionClient;
use harbor_interaction::{AssistantDirectory, ChatSession, GREETING};
use std::sync::Arc;

/// Factory assembling chat sessions for the portal's assistant persona.
pub struct ChatSessionFactory {
    client: Arc<dyn CompletionClient>,
    directory: Arc<dyn AssistantDirectory>,
    assistant_id: String,
    persona: String,
    model: String,
}

impl ChatSessionFactory {
    /// Creates a factory with the portal's default persona and model.
    ///
    /// # Arguments
    ///
    /// * `client` - Client for the external completion endpoint
    /// * `directory` - Resolver for the assistant's display name
    /// * `assistant_id` - Identifier of the assistant persona to resolve
    pub fn new(
        client: Arc<dyn CompletionClient>,
        directory: Arc<dyn AssistantDirectory>,
        assistant_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            directory,
            assistant_id: assistant_id.into(),
            persona: harbor_interaction::HARBOR_PERSONA.to_string(),
            model: harbor_interaction::DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }

    /// Overrides the persona instruction after construction.
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    /// Overrides the completion model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Assembles a new session: greeting pre-seeded, assistant name
    /// resolved once, lookup failure tolerated.
    pub async fn create_session(&self) -> ChatSession {
        let session =
            ChatSession::new(self.client.clone(), self.persona.clone(), self.model.clone());
        session.push_assistant_message(GREETING).await;

        match self.directory.resolve_name(&self.assistant_id).await {
            Ok(name) => session.set_assistant_name(name).await,
            Err(err) => {
                tracing::warn!(
                    "[ChatSessionFactory] Assistant lookup failed, session stays unnamed: {}",
                    err
                );
            }
        }

        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_core::chat::MessageSender;
    use harbor_core::{HarborError, Result};
    use harbor_interaction::completion::ChatTurn;

    struct EchoClient;

    #[async_trait::async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, _model: &str, turns: &[ChatTurn]) -> Result<String> {
            Ok(format!("echo: {}", turns.last().unwrap().content))
        }
    }

    struct MockDirectory {
        name: Option<String>,
    }

    #[async_trait::async_trait]
    impl AssistantDirectory for MockDirectory {
        async fn resolve_name(&self, _assistant_id: &str) -> Result<String> {
            self.name
                .clone()
                .ok_or_else(|| HarborError::completion("directory down"))
        }
    }

    #[tokio::test]
    async fn test_session_is_seeded_and_named() {
        let factory = ChatSessionFactory::new(
            Arc::new(EchoClient),
            Arc::new(MockDirectory {
                name: Some("HarborBot".to_string()),
            }),
            "asst_test",
        );

        let session = factory.create_session().await;

        assert_eq!(session.assistant_name().await.as_deref(), Some("HarborBot"));
        let messages = session.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, MessageSender::Assistant);
        assert_eq!(messages[0].text, GREETING);
    }

    #[tokio::test]
    async fn test_name_lookup_failure_leaves_chat_usable() {
        let factory =
            ChatSessionFactory::new(Arc::new(EchoClient), Arc::new(MockDirectory { name: None }), "asst_test");

        let session = factory.create_session().await;

        assert_eq!(session.assistant_name().await, None);

        // The chat still works end to end
        session.send_message("where is gate 3?").await.unwrap();
        let messages = session.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].text, "echo: where is gate 3?");
    }
}

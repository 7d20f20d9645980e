//! Echo backend for local development.

use async_trait::async_trait;

use crate::llm::types::{ChatReply, ChatResult, Message};
use crate::llm::ChatCompletion;

/// Model name reported by [`EchoClient`].
pub const ECHO_MODEL: &str = "echo";

/// Answers every message by quoting it back, the way the editor
/// extension's offline mode does.
#[derive(Debug, Clone, Default)]
pub struct EchoClient;

impl EchoClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatCompletion for EchoClient {
    async fn complete(&self, message: &Message) -> ChatResult<ChatReply> {
        Ok(ChatReply {
            reply: format!("AI 回复: 你说了 \"{}\"", message.text.trim()),
            model: ECHO_MODEL.to_string(),
        })
    }

    fn name(&self) -> &str {
        "echo"
    }
}

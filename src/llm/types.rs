//! Chat payloads and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http::response::Data;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One earlier turn of the conversation, supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Inbound chat request body for `POST /chat/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The user's new message.
    pub text: String,

    /// Prior turns, oldest first. The server keeps no history of its own.
    #[serde(default)]
    pub history: Vec<Turn>,

    /// Per-request system instruction, appended after the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            history: Vec::new(),
            system: None,
        }
    }
}

/// Answer produced by a chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub model: String,
}

impl ChatReply {
    /// Envelope payload: `{"reply": ..., "model": ...}`.
    pub fn into_data(self) -> Data {
        let mut data = Data::new();
        data.insert("reply".to_string(), self.reply.into());
        data.insert("model".to_string(), self.model.into());
        data
    }
}

/// Errors that can occur while answering a chat message.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message text was empty or whitespace.
    #[error("message text must not be empty")]
    EmptyMessage,

    /// Transport failure or non-success status from the backend.
    #[error("chat backend error: {0}")]
    Upstream(String),

    /// The backend answered with something we could not use.
    #[error("invalid chat backend response: {0}")]
    InvalidResponse(String),

    /// The backend did not answer in time.
    #[error("chat backend timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

//! Chat-completion collaborators.
//!
//! # Data Flow
//! ```text
//! POST /chat/ handler
//!     → Arc<dyn ChatCompletion>
//!         → echo.rs   (local development, no network)
//!         → openai.rs (OpenAI-compatible /chat/completions over HTTP)
//!     → ChatReply | ChatError
//! ```
//!
//! # Design Decisions
//! - Handlers only see the trait; the backend is picked once at startup
//! - Every network call is bounded by `llm.timeout_secs`
//! - No retries: a failed call surfaces as an error envelope

pub mod echo;
pub mod openai;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{LlmConfig, LlmProvider};

pub use echo::EchoClient;
pub use openai::OpenAiClient;
pub use types::{ChatError, ChatReply, ChatResult, Message, Role, Turn};

/// A backend able to answer one chat message.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Produce the assistant's reply to `message`.
    async fn complete(&self, message: &Message) -> ChatResult<ChatReply>;

    /// Short provider name for logs and metrics.
    fn name(&self) -> &str;
}

/// Build the configured chat backend.
pub fn build_client(config: &LlmConfig) -> ChatResult<Arc<dyn ChatCompletion>> {
    let client: Arc<dyn ChatCompletion> = match config.provider {
        LlmProvider::Echo => Arc::new(EchoClient::new()),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::new(config.clone())?),
    };

    tracing::info!(
        provider = client.name(),
        model = %config.model,
        "Chat backend initialized"
    );

    Ok(client)
}

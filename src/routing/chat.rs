//! Chat endpoints.

use axum::{
    extract::State,
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::llm::{ChatError, Message};
use crate::observability::metrics;

/// Path prefix of the chat route group.
pub const CHAT_PREFIX: &str = "/chat";

/// Canonical chat path (`POST` and `GET`).
pub const CHAT_PATH: &str = "/chat/";

/// Chat routes. `/chat` and `/chat/` share the same handlers.
pub fn routes() -> Router<AppState> {
    let handlers: MethodRouter<AppState> = get(get_chat_history).post(chat);

    Router::new()
        .route(CHAT_PATH, handlers.clone())
        .route(CHAT_PREFIX, handlers)
}

/// `POST /chat/`: answer one message through the configured backend.
///
/// Blank text is rejected here, so backends never see it.
pub async fn chat(
    State(state): State<AppState>,
    Json(message): Json<Message>,
) -> Result<Envelope, ChatError> {
    if message.text.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    tracing::info!(
        provider = state.chat.name(),
        text_len = message.text.chars().count(),
        history_len = message.history.len(),
        "Chat message received"
    );

    let result = state.chat.complete(&message).await;
    metrics::record_completion(
        state.chat.name(),
        if result.is_ok() { "ok" } else { "error" },
    );
    let reply = result?;

    Ok(Envelope::success(reply.into_data()))
}

/// `GET /chat/`: chat history. No history is stored, so it is always empty.
pub async fn get_chat_history() -> Envelope {
    Envelope::ok()
}

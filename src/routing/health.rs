//! Liveness endpoint.

use axum::{extract::State, routing::get, Router};

use crate::http::response::{Data, Envelope};
use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(get_health))
}

/// `GET /health`
pub async fn get_health(State(state): State<AppState>) -> Envelope {
    let mut data = Data::new();
    data.insert("status".to_string(), "ok".into());
    data.insert("version".to_string(), env!("CARGO_PKG_VERSION").into());
    data.insert("provider".to_string(), state.chat.name().into());
    Envelope::success(data)
}

//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request
//!     → chat.rs   (POST/GET under the /chat prefix)
//!     → health.rs (GET /health)
//!     → anything else: 404 from the framework
//! ```
//!
//! # Design Decisions
//! - Routes are registered once at startup, immutable at runtime
//! - Every handler answers with an Envelope

pub mod chat;
pub mod health;

use axum::Router;

use crate::http::server::AppState;

/// All application routes, before state and middleware are attached.
pub fn routes() -> Router<AppState> {
    Router::new().merge(chat::routes()).merge(health::routes())
}

//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, request span)
//!     → cors.rs (preflight, allow headers)
//!     → [routing: /chat/, /health]
//!     → response.rs (Envelope) / error.rs (ChatError → Envelope)
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{Data, Envelope};
pub use server::{AppState, HttpServer};

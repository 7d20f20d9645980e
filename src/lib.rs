//! Chat backend library.
//!
//! A small HTTP service exposing `/chat/`: messages are forwarded to a
//! chat-completion backend and every answer is wrapped in the uniform
//! `{code, msg, data}` envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod llm;
pub mod observability;
pub mod routing;

pub use config::schema::ServiceConfig;
pub use http::{AppState, Envelope, HttpServer};
pub use lifecycle::Shutdown;
pub use llm::{ChatCompletion, Message};

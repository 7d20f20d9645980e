//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, metrics)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown
//!
//! Composition is explicit: state, router and middleware are built by
//! [`HttpServer::new`] (or [`HttpServer::build_router`] in tests); nothing
//! lives in a process-wide singleton.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::cors::cors_layer;
use crate::http::request::{make_request_span, MakeRequestUuidV4};
use crate::llm::ChatCompletion;
use crate::observability::metrics::metrics_middleware;
use crate::routing;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backend answering chat messages.
    pub chat: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }
}

/// HTTP server for the chat backend.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and chat backend.
    pub fn new(config: ServiceConfig, chat: Arc<dyn ChatCompletion>) -> Self {
        let state = AppState::new(chat);
        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let layers = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_layer())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        // Metrics sit outside the timeout so timed-out requests are counted.
        routing::routes()
            .with_state(state)
            .layer(layers)
            .layer(middleware::from_fn(metrics_middleware))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for(|stopped| *stopped).await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

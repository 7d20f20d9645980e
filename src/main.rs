//! Chat backend service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ metrics ─▶ request id ─▶ trace ─▶ CORS ─▶ timeout ─▶ /chat/ handler ──▶ ChatCompletion
//!                                                                     │                  (echo | openai)
//!   Client ◀─────────────────────────── Envelope {code, msg, data} ◀──┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use chat_backend::config::{load_config, Overrides};
use chat_backend::http::HttpServer;
use chat_backend::lifecycle::{signals, Shutdown};
use chat_backend::llm;
use chat_backend::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "chat-backend")]
#[command(about = "HTTP chat endpoint in front of a language-model backend", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = Overrides {
        bind_address: args.bind,
    };
    let config = load_config(args.config.as_deref(), &overrides)?;

    logging::init_logging(&config.observability);

    tracing::info!("chat-backend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        provider = config.llm.provider.as_str(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let chat = llm::build_client(&config.llm)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, chat);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => {
            result??;
            return Ok(());
        }
        _ = signals::wait_for_signal() => {}
    }

    shutdown.trigger();
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}

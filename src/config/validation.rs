//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the selected chat backend has what it needs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::{LlmProvider, ServiceConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0}: must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("llm.base_url: {0}")]
    InvalidBaseUrl(String),

    #[error("llm.model: must not be empty")]
    EmptyModel,

    #[error("llm.temperature: {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(String),
}

/// Validate a parsed configuration, collecting every problem.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        "listener.bind_address",
        &config.listener.bind_address,
        &mut errors,
    );
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if config.llm.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("llm.timeout_secs"));
    }

    if let Some(t) = config.llm.temperature {
        if !(0.0..=2.0).contains(&t) {
            errors.push(ValidationError::TemperatureOutOfRange(t.to_string()));
        }
    }

    if config.llm.provider == LlmProvider::OpenAi {
        match url::Url::parse(&config.llm.base_url) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {}
            Ok(u) => errors.push(ValidationError::InvalidBaseUrl(format!(
                "unsupported scheme '{}'",
                u.scheme()
            ))),
            Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
        }
        if config.llm.model.trim().is_empty() {
            errors.push(ValidationError::EmptyModel);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

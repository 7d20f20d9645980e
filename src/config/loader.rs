//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable consulted when `llm.api_key` is empty.
pub const API_KEY_ENV: &str = "CHAT_BACKEND_API_KEY";

/// Why a configuration could not be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Command-line values that replace file settings before validation.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
}

impl Overrides {
    fn apply(&self, config: &mut ServiceConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
    }
}

/// Load configuration from `path`, or from defaults when there is no file.
pub fn load_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<ServiceConfig, ConfigError> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };
    parse_config(&content, overrides)
}

/// Parse TOML text, fill the API key from the environment, apply
/// `overrides`, then validate the result.
pub fn parse_config(content: &str, overrides: &Overrides) -> Result<ServiceConfig, ConfigError> {
    let mut config: ServiceConfig = toml::from_str(content)?;

    if config.llm.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.llm.api_key = key;
        }
    }
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LlmProvider;

    #[test]
    fn test_parse_full_document() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "0.0.0.0:8080"

            [llm]
            provider = "openai"
            base_url = "http://localhost:11434/v1"
            api_key = "sk-test"
            model = "llama3"

            [observability]
            log_format = "json"
            "#,
            &Overrides::default(),
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
        assert_eq!(config.llm.api_key, "sk-test");
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[listener\nbind_address = 1", &Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_error_is_validation_error() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n", &Overrides::default()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here.toml");
        let err = load_config(Some(path), &Overrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("cannot read config file"));
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let config = load_config(None, &Overrides::default()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
    }

    #[test]
    fn test_bind_override_replaces_file_value() {
        let overrides = Overrides {
            bind_address: Some("0.0.0.0:9000".into()),
        };
        let config =
            parse_config("[listener]\nbind_address = \"127.0.0.1:1\"\n", &overrides).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn test_bind_override_is_validated() {
        let overrides = Overrides {
            bind_address: Some("nonsense".into()),
        };
        let err = parse_config("", &overrides).unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                &vec![ValidationError::InvalidAddress {
                    field: "listener.bind_address",
                    value: "nonsense".into(),
                }]
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "invalid configuration: listener.bind_address: invalid socket address 'nonsense'"
        );
    }
}

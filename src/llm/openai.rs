//! OpenAI-compatible chat-completion client.
//!
//! # Responsibilities
//! - Translate a [`Message`] into a `/chat/completions` request
//! - Enforce the per-call timeout
//! - Map transport, status and decoding failures onto [`ChatError`]
//!
//! Works against OpenAI and the many servers that copy its API
//! (Ollama, vLLM, llama.cpp server, LM Studio).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::LlmConfig;
use crate::llm::types::{ChatError, ChatReply, ChatResult, Message, Role};
use crate::llm::ChatCompletion;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, PartialEq)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    config: LlmConfig,
    timeout_duration: Duration,
}

impl OpenAiClient {
    /// Create a new client from configuration.
    pub fn new(config: LlmConfig) -> ChatResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ChatError::Upstream(format!("failed to build HTTP client: {}", e)))?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let timeout_duration = Duration::from_secs(config.timeout_secs);

        Ok(Self {
            client,
            endpoint,
            config,
            timeout_duration,
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Conversation sent upstream: configured prompt, per-request prompt,
    /// client history, then the new user text.
    fn build_messages<'a>(&'a self, message: &'a Message) -> Vec<WireMessage<'a>> {
        let mut messages = Vec::with_capacity(message.history.len() + 3);

        if let Some(prompt) = self.config.system_prompt.as_deref() {
            messages.push(WireMessage {
                role: Role::System,
                content: prompt,
            });
        }
        if let Some(prompt) = message.system.as_deref() {
            messages.push(WireMessage {
                role: Role::System,
                content: prompt,
            });
        }
        for turn in &message.history {
            messages.push(WireMessage {
                role: turn.role,
                content: &turn.content,
            });
        }
        messages.push(WireMessage {
            role: Role::User,
            content: &message.text,
        });

        messages
    }

    async fn send(&self, message: &Message) -> ChatResult<ChatReply> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: self.build_messages(message),
            temperature: self.config.temperature,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ChatError::Upstream(format!(
                "status {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::InvalidResponse("no choices in response".to_string()))?;
        let reply = choice.message.content.ok_or_else(|| {
            ChatError::InvalidResponse("first choice has no content".to_string())
        })?;

        Ok(ChatReply {
            reply,
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, message: &Message) -> ChatResult<ChatReply> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.config.model,
            history_len = message.history.len(),
            "Requesting chat completion"
        );

        let result = match timeout(self.timeout_duration, self.send(message)).await {
            Ok(result) => result,
            Err(_) => Err(ChatError::Timeout(self.config.timeout_secs)),
        };

        if let Err(e) = &result {
            tracing::warn!(endpoint = %self.endpoint, error = %e, "Chat completion failed");
        }

        result
    }

    fn name(&self) -> &str {
        "openai"
    }
}

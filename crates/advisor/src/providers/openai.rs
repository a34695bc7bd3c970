//! OpenAI-compatible chat-completion adapter.
//!
//! Speaks the `/chat/completions` wire shape, which self-hosted
//! gateways also expose; the base URL is configurable per provider.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::env::ProviderConfig;
use crate::error::AdvisorError;
use crate::providers::{CompletionConfig, CompletionResult, ProviderAdapter};
use crate::types::{ChatMessage, ChatRole, UsageStats};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const PROVIDER_ID: &str = "openai";

// ============================================================================
// Wire Structures
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// OpenAiProvider
// ============================================================================

/// Chat-completion provider over the OpenAI-compatible HTTP API.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a new provider from a resolved configuration.
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: config.api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Maps a non-success HTTP status to a typed advisor error, using the
/// API's error envelope for the message when it parses.
fn map_error_status(status: reqwest::StatusCode, body: &str) -> AdvisorError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            AdvisorError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            }
        }
        reqwest::StatusCode::TOO_MANY_REQUESTS => AdvisorError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        },
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {} - {}", status, body));
            AdvisorError::Provider {
                provider: PROVIDER_ID.to_string(),
                message,
            }
        }
    }
}

/// Extracts the answer from a parsed completion response.
fn extract_answer(response: ChatCompletionResponse) -> Result<CompletionResult, AdvisorError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AdvisorError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: "response carries no choices".to_string(),
        })?;

    Ok(CompletionResult {
        content: content.trim().to_string(),
        usage: response.usage.map(|u| UsageStats {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

#[async_trait]
impl ProviderAdapter for OpenAiProvider {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn complete(&self, config: CompletionConfig) -> Result<CompletionResult, AdvisorError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut messages = Vec::with_capacity(config.messages.len() + 1);
        messages.push(ChatMessage {
            role: ChatRole::System,
            content: config.system_prompt,
        });
        messages.extend(config.messages);

        let request = ChatCompletionRequest {
            model: config.model_id.clone(),
            messages,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        debug!(
            "openai request: model={} messages={}",
            config.model_id,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AdvisorError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    AdvisorError::Provider {
                        provider: PROVIDER_ID.to_string(),
                        message: format!("Request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, &body));
        }

        let parsed: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| AdvisorError::MalformedResponse {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        extract_answer(parsed)
    }
}

//! Provider adapters for chat-completion backends.
//!
//! The adapter trait gives the service a uniform request/response shape
//! (prompt text in, answer text out, fallible) so backends can be
//! swapped at runtime and tests can register fakes with no network
//! access.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use crate::env::AdvisorEnvironment;
use crate::error::AdvisorError;
use crate::types::{ChatMessage, UsageStats};

// ============================================================================
// Provider Adapter Trait
// ============================================================================

/// Configuration for one chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model ID to use.
    pub model_id: String,
    /// System prompt.
    pub system_prompt: String,
    /// User-facing messages, in order.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate (optional).
    pub max_tokens: Option<u32>,
    /// Temperature for sampling (optional).
    pub temperature: Option<f32>,
}

/// Result of a completion.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    /// The response content.
    pub content: String,
    /// Token usage, if the provider reported it.
    pub usage: Option<UsageStats>,
}

/// Provider adapter trait for chat-completion backends.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Get the provider ID.
    fn provider_id(&self) -> &str;

    /// Perform a chat completion.
    async fn complete(&self, config: CompletionConfig) -> Result<CompletionResult, AdvisorError>;
}

// ============================================================================
// Provider Registry
// ============================================================================

/// Registry of available provider adapters.
///
/// Injectable, so tests can register fakes that never touch the
/// network.
pub struct ProviderRegistry {
    adapters: HashMap<String, Arc<dyn ProviderAdapter>>,
    env: Arc<dyn AdvisorEnvironment>,
}

impl ProviderRegistry {
    pub fn new(env: Arc<dyn AdvisorEnvironment>) -> Self {
        Self {
            adapters: HashMap::new(),
            env,
        }
    }

    /// Register a provider adapter.
    pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        self.adapters
            .insert(adapter.provider_id().to_string(), adapter);
    }

    /// Get a provider adapter by ID.
    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(provider_id).cloned()
    }

    /// Get the default provider adapter.
    pub fn get_default(&self) -> Option<Arc<dyn ProviderAdapter>> {
        self.env.get_default_provider().and_then(|id| self.get(&id))
    }

    /// List all registered provider IDs.
    pub fn list_providers(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }

    /// Get the environment reference.
    pub fn env(&self) -> &Arc<dyn AdvisorEnvironment> {
        &self.env
    }
}

/// Creates a registry with the standard providers whose API keys are
/// configured in the environment.
pub fn create_standard_registry(env: Arc<dyn AdvisorEnvironment>) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new(env.clone());

    match env.get_provider_config("openai") {
        Ok(config) => registry.register(Arc::new(OpenAiProvider::new(config))),
        Err(err) => debug!("openai provider not registered: {err}"),
    }

    registry
}

// ============================================================================
// Stub Provider
// ============================================================================

/// A provider that returns a fixed response. Used in tests and as a
/// placeholder while no API key is configured.
pub struct StubProvider {
    id: String,
    response: String,
}

impl StubProvider {
    pub fn new(id: &str, response: &str) -> Self {
        Self {
            id: id.to_string(),
            response: response.to_string(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for StubProvider {
    fn provider_id(&self) -> &str {
        &self.id
    }

    async fn complete(&self, _config: CompletionConfig) -> Result<CompletionResult, AdvisorError> {
        Ok(CompletionResult {
            content: self.response.clone(),
            usage: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[tokio::test]
    async fn test_stub_provider_complete() {
        let provider = StubProvider::new("test", "Resposta fixa");
        let config = CompletionConfig {
            model_id: "test-model".to_string(),
            system_prompt: "Ets un assistent.".to_string(),
            messages: vec![ChatMessage::user("Hola")],
            max_tokens: None,
            temperature: None,
        };

        let result = provider.complete(config).await.unwrap();
        assert_eq!(result.content, "Resposta fixa");
        assert!(result.usage.is_none());
    }

    #[tokio::test]
    async fn test_provider_registry_lookup_and_default() {
        let env = Arc::new(MockEnvironment::new());
        let mut registry = ProviderRegistry::new(env);

        registry.register(Arc::new(StubProvider::new("stub", "a")));
        registry.register(Arc::new(StubProvider::new("openai", "b")));

        assert!(registry.get("stub").is_some());
        assert!(registry.get("unknown").is_none());
        assert_eq!(registry.list_providers().len(), 2);

        // MockEnvironment's default provider is "stub".
        let default = registry.get_default().unwrap();
        assert_eq!(default.provider_id(), "stub");
    }

    #[test]
    fn test_standard_registry_skips_unconfigured_providers() {
        let env = Arc::new(MockEnvironment::new());
        let registry = create_standard_registry(env);
        assert!(registry.list_providers().is_empty());
    }

    #[test]
    fn test_standard_registry_registers_openai_with_key() {
        let env = Arc::new(MockEnvironment::new().with_api_key("openai", "sk-test"));
        let registry = create_standard_registry(env);
        assert!(registry.get("openai").is_some());
    }
}

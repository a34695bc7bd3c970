//! Environment abstraction for provider secrets and defaults.
//!
//! The advisor never receives API keys from the presentation layer;
//! they are resolved here. The trait keeps the service testable without
//! touching process environment variables.

use thiserror::Error;

/// Resolved configuration for one provider, API key attached.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider_id: String,
    pub api_key: String,
    /// Override for the API base URL (self-hosted gateways).
    pub base_url: Option<String>,
}

/// Environment errors.
#[derive(Debug, Clone, Error)]
pub enum EnvError {
    /// Provider not found in the catalog.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// API key required but not configured.
    #[error("API key required for provider: {0}")]
    MissingApiKey(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Environment abstraction for runtime dependencies.
pub trait AdvisorEnvironment: Send + Sync {
    /// Provider configuration including the API key.
    fn get_provider_config(&self, provider_id: &str) -> Result<ProviderConfig, EnvError>;

    /// Default provider ID from user settings.
    fn get_default_provider(&self) -> Option<String>;

    /// Default model ID for a provider.
    fn get_default_model(&self, provider_id: &str) -> Option<String>;

    /// Locale hint for response language (e.g. "ca", "en-US").
    fn get_locale(&self) -> Option<String>;
}

/// Environment backed by process environment variables.
///
/// API keys are read from `<PROVIDER>_API_KEY` (e.g. `OPENAI_API_KEY`);
/// `CARTERA_AI_PROVIDER`, `CARTERA_AI_MODEL`, and `CARTERA_LOCALE`
/// override the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVarEnvironment;

impl EnvVarEnvironment {
    fn read(name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

impl AdvisorEnvironment for EnvVarEnvironment {
    fn get_provider_config(&self, provider_id: &str) -> Result<ProviderConfig, EnvError> {
        let key_var = format!("{}_API_KEY", provider_id.to_uppercase().replace('-', "_"));
        let api_key =
            Self::read(&key_var).ok_or_else(|| EnvError::MissingApiKey(provider_id.to_string()))?;

        let base_var = format!("{}_BASE_URL", provider_id.to_uppercase().replace('-', "_"));
        Ok(ProviderConfig {
            provider_id: provider_id.to_string(),
            api_key,
            base_url: Self::read(&base_var),
        })
    }

    fn get_default_provider(&self) -> Option<String> {
        Self::read("CARTERA_AI_PROVIDER").or_else(|| Some("openai".to_string()))
    }

    fn get_default_model(&self, provider_id: &str) -> Option<String> {
        Self::read("CARTERA_AI_MODEL").or(match provider_id {
            "openai" => Some("gpt-4".to_string()),
            _ => None,
        })
    }

    fn get_locale(&self) -> Option<String> {
        Self::read("CARTERA_LOCALE")
    }
}

/// Test environment with fixed values.
pub mod test_env {
    use super::*;
    use std::collections::HashMap;

    /// In-memory environment for tests. No process state is touched.
    #[derive(Debug, Clone, Default)]
    pub struct MockEnvironment {
        pub api_keys: HashMap<String, String>,
        pub default_provider: Option<String>,
        pub default_model: Option<String>,
        pub locale: Option<String>,
    }

    impl MockEnvironment {
        pub fn new() -> Self {
            Self {
                default_provider: Some("stub".to_string()),
                default_model: Some("stub-model".to_string()),
                ..Default::default()
            }
        }

        pub fn with_api_key(mut self, provider_id: &str, key: &str) -> Self {
            self.api_keys
                .insert(provider_id.to_string(), key.to_string());
            self
        }
    }

    impl AdvisorEnvironment for MockEnvironment {
        fn get_provider_config(&self, provider_id: &str) -> Result<ProviderConfig, EnvError> {
            let api_key = self
                .api_keys
                .get(provider_id)
                .cloned()
                .ok_or_else(|| EnvError::MissingApiKey(provider_id.to_string()))?;
            Ok(ProviderConfig {
                provider_id: provider_id.to_string(),
                api_key,
                base_url: None,
            })
        }

        fn get_default_provider(&self) -> Option<String> {
            self.default_provider.clone()
        }

        fn get_default_model(&self, _provider_id: &str) -> Option<String> {
            self.default_model.clone()
        }

        fn get_locale(&self) -> Option<String> {
            self.locale.clone()
        }
    }
}

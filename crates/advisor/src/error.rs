//! Advisor error types.

use thiserror::Error;

use cartera_core::portfolio::AggregationError;
use cartera_core::Error as CoreError;

use crate::env::EnvError;

/// Errors reported by the advisor boundary.
///
/// Every variant is a distinct, inspectable outcome; nothing is coerced
/// to a default answer. The presentation layer decides how to render
/// "no data" or "service unavailable".
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Invalid input, e.g. a blank question.
    #[error("{0}")]
    InvalidInput(String),

    /// The active filters left no funds to talk about.
    #[error("No fund data available with the active filters")]
    EmptyPortfolio,

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// The requested provider is not registered.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The provider rejected the credentials.
    #[error("Provider {provider} rejected the credentials")]
    Unauthorized { provider: String },

    /// The provider rate limited or exhausted the quota.
    #[error("Rate limited by provider {provider}")]
    RateLimited { provider: String },

    /// The request to the provider timed out.
    #[error("Timeout contacting provider {provider}")]
    Timeout { provider: String },

    /// The provider returned a response we could not interpret.
    #[error("Malformed response from provider {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    /// Any other provider-side failure, with the underlying cause.
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    /// Core error from cartera-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl From<EnvError> for AdvisorError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::UnknownProvider(id) => AdvisorError::UnknownProvider(id),
            EnvError::MissingApiKey(id) => AdvisorError::MissingApiKey(id),
            EnvError::ConfigError(message) => AdvisorError::InvalidInput(message),
        }
    }
}

impl From<AggregationError> for AdvisorError {
    fn from(err: AggregationError) -> Self {
        AdvisorError::Core(err.into())
    }
}

/// Error code for programmatic handling by the presentation layer.
impl AdvisorError {
    pub fn code(&self) -> &'static str {
        match self {
            AdvisorError::InvalidInput(_) => "INVALID_INPUT",
            AdvisorError::EmptyPortfolio => "EMPTY_PORTFOLIO",
            AdvisorError::MissingApiKey(_) => "MISSING_API_KEY",
            AdvisorError::UnknownProvider(_) => "UNKNOWN_PROVIDER",
            AdvisorError::Unauthorized { .. } => "UNAUTHORIZED",
            AdvisorError::RateLimited { .. } => "RATE_LIMITED",
            AdvisorError::Timeout { .. } => "TIMEOUT",
            AdvisorError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            AdvisorError::Provider { .. } => "PROVIDER_ERROR",
            AdvisorError::Core(_) => "CORE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_errors_wrap_into_core() {
        let err: AdvisorError = AggregationError::EmptyInput.into();
        assert_eq!(err.code(), "CORE_ERROR");
        assert!(matches!(
            err,
            AdvisorError::Core(CoreError::Aggregation(AggregationError::EmptyInput))
        ));
    }

    #[test]
    fn test_env_errors_map_to_advisor_variants() {
        let err: AdvisorError = EnvError::MissingApiKey("openai".to_string()).into();
        assert_eq!(err.code(), "MISSING_API_KEY");
    }
}

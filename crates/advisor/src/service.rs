//! Advisor service - validates input, builds the prompt, and calls the
//! configured provider.
//!
//! The service owns no retry policy: a provider failure is returned to
//! the caller as a typed error and the caller decides whether to try
//! again.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use cartera_core::funds::PortfolioView;
use cartera_core::portfolio::compute;

use crate::env::AdvisorEnvironment;
use crate::error::AdvisorError;
use crate::prompt::PromptTemplate;
use crate::providers::{CompletionConfig, ProviderAdapter, ProviderRegistry};
use crate::types::{AdvisorAnswer, ChatMessage};

// ============================================================================
// Service Trait
// ============================================================================

/// Trait defining the advisor service API.
#[async_trait]
pub trait AdvisorServiceTrait: Send + Sync {
    /// Answers a free-text question about the given view.
    async fn ask(&self, question: &str, view: &PortfolioView)
        -> Result<AdvisorAnswer, AdvisorError>;

    /// Requests a qualitative commentary on the view, quoting the
    /// computed portfolio aggregates.
    async fn review(&self, view: &PortfolioView) -> Result<AdvisorAnswer, AdvisorError>;
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Configuration for the advisor service.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Provider to use. None falls back to the environment default.
    pub provider_id: Option<String>,
    /// Model to use. None falls back to the environment default.
    pub model_id: Option<String>,
    /// Maximum tokens for each completion.
    pub max_tokens: Option<u32>,
    /// Temperature for sampling.
    pub temperature: Option<f32>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            provider_id: None,
            model_id: None,
            max_tokens: Some(1024),
            temperature: Some(0.7),
        }
    }
}

/// Advisor service implementation.
pub struct AdvisorService {
    registry: Arc<ProviderRegistry>,
    template: PromptTemplate,
    config: AdvisorConfig,
}

impl AdvisorService {
    pub fn new(registry: Arc<ProviderRegistry>, config: AdvisorConfig) -> Self {
        Self {
            registry,
            template: PromptTemplate::default(),
            config,
        }
    }

    /// Replaces the prompt template (e.g. a different locale).
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    fn env(&self) -> &Arc<dyn AdvisorEnvironment> {
        self.registry.env()
    }

    /// Resolves the provider adapter from config or environment default.
    fn resolve_provider(&self) -> Result<Arc<dyn ProviderAdapter>, AdvisorError> {
        match &self.config.provider_id {
            Some(id) => self
                .registry
                .get(id)
                .ok_or_else(|| AdvisorError::UnknownProvider(id.clone())),
            None => self.registry.get_default().ok_or_else(|| {
                let id = self
                    .env()
                    .get_default_provider()
                    .unwrap_or_else(|| "none".to_string());
                AdvisorError::UnknownProvider(id)
            }),
        }
    }

    /// Resolves the model for a provider from config or environment.
    fn resolve_model(&self, provider_id: &str) -> Result<String, AdvisorError> {
        self.config
            .model_id
            .clone()
            .or_else(|| self.env().get_default_model(provider_id))
            .ok_or_else(|| {
                AdvisorError::InvalidInput(format!("No model configured for provider {provider_id}"))
            })
    }

    async fn run_completion(
        &self,
        system_prompt: &str,
        user_prompt: String,
    ) -> Result<AdvisorAnswer, AdvisorError> {
        let provider = self.resolve_provider()?;
        let provider_id = provider.provider_id().to_string();
        let model_id = self.resolve_model(&provider_id)?;

        debug!("advisor completion via {provider_id} ({model_id})");

        let result = provider
            .complete(CompletionConfig {
                model_id: model_id.clone(),
                system_prompt: system_prompt.to_string(),
                messages: vec![ChatMessage::user(user_prompt)],
                max_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
            })
            .await?;

        Ok(AdvisorAnswer {
            content: result.content.trim().to_string(),
            provider_id,
            model_id,
            usage: result.usage,
            created_at: Utc::now(),
        })
    }
}

#[async_trait]
impl AdvisorServiceTrait for AdvisorService {
    async fn ask(
        &self,
        question: &str,
        view: &PortfolioView,
    ) -> Result<AdvisorAnswer, AdvisorError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AdvisorError::InvalidInput(
                "Introdueix una pregunta abans d'enviar".to_string(),
            ));
        }
        if view.is_empty() {
            return Err(AdvisorError::EmptyPortfolio);
        }

        info!("advisor question over {} funds", view.len());
        let prompt = self.template.question_prompt(view, question);
        self.run_completion(&self.template.question_system, prompt)
            .await
    }

    async fn review(&self, view: &PortfolioView) -> Result<AdvisorAnswer, AdvisorError> {
        if view.is_empty() {
            return Err(AdvisorError::EmptyPortfolio);
        }

        // Typed aggregation errors (zero total weight) propagate as-is.
        let aggregate = compute(view)?;

        info!("advisor review over {} funds", aggregate.fund_count);
        let prompt = self.template.review_prompt(view, &aggregate);
        self.run_completion(&self.template.review_system, prompt)
            .await
    }
}

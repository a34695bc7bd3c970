//! Cartera Advisor - the text-completion boundary.
//!
//! Serialises a portfolio view into a prompt, submits it to a pluggable
//! chat-completion provider, and returns the answer text. The service
//! validates its inputs and reports failures as typed errors; retry
//! policy belongs to the caller, never to this crate.

pub mod env;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod service;
pub mod types;

pub use env::{AdvisorEnvironment, EnvVarEnvironment, ProviderConfig};
pub use error::AdvisorError;
pub use prompt::{render_table, PromptTemplate};
pub use providers::{
    create_standard_registry, CompletionConfig, CompletionResult, OpenAiProvider,
    ProviderAdapter, ProviderRegistry, StubProvider,
};
pub use service::{AdvisorConfig, AdvisorService, AdvisorServiceTrait};
pub use types::{AdvisorAnswer, ChatMessage, ChatRole, UsageStats};

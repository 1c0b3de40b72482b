//! Credential validation and prompt dispatch against the LLM provider.

mod dispatcher;
mod error;
mod validator;

use std::sync::Arc;

pub use dispatcher::{DISPATCH_MAX_TOKENS, DISPATCH_TEMPERATURE, PromptDispatcher};
pub use error::AssistError;
pub use validator::{CredentialValidator, VALIDATION_MAX_TOKENS, VALIDATION_MESSAGE};

use crate::config::ProviderConfig;
use crate::llm::{LLMError, LLMProvider, OpenAICompatibleProvider};

/// The validator and dispatcher sharing one provider and model.
pub struct Assistant {
    pub validator: CredentialValidator,
    pub dispatcher: PromptDispatcher,
}

impl Assistant {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            validator: CredentialValidator::new(Arc::clone(&provider), model.clone()),
            dispatcher: PromptDispatcher::new(provider, model),
        }
    }

    /// Build an assistant talking to the configured OpenAI-compatible endpoint.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, LLMError> {
        let provider =
            OpenAICompatibleProvider::new(config.base_url.clone(), config.request_timeout())?;
        Ok(Self::new(Arc::new(provider), config.model.clone()))
    }
}

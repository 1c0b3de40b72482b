//! Prompt dispatch to the provider.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::AssistError;
use crate::llm::{ChatRequest, LLMError, LLMProvider};
use crate::prompt::Prompt;
use crate::session::Session;

/// Output cap for generated answers, templates and drafts.
pub const DISPATCH_MAX_TOKENS: u32 = 1000;

/// Sampling temperature for generation.
pub const DISPATCH_TEMPERATURE: f32 = 0.5;

/// Sends prompts with the session's validated credential.
pub struct PromptDispatcher {
    provider: Arc<dyn LLMProvider>,
    model: String,
}

impl PromptDispatcher {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Send `prompt` and return the generated text.
    pub async fn dispatch(&self, session: &Session, prompt: &Prompt) -> Result<String, AssistError> {
        let Some(key) = session.api_key() else {
            return Err(AssistError::NotValidated);
        };

        let request = ChatRequest::single_user(self.model.clone(), prompt.as_str())
            .with_max_tokens(DISPATCH_MAX_TOKENS)
            .with_temperature(DISPATCH_TEMPERATURE);

        let result = self
            .provider
            .chat(key.expose(), request)
            .await
            .and_then(|response| response.into_first_content().ok_or(LLMError::EmptyResponse));

        match result {
            Ok(text) => {
                info!(chars = text.len(), "Generated response");
                Ok(text)
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "Dispatch request failed");
                Err(AssistError::Network(e))
            }
            Err(e) => {
                warn!(error = %e, "Provider did not produce a response");
                Err(AssistError::Generation(e))
            }
        }
    }
}

//! API key validation with a single minimal completion call.

use std::sync::Arc;

use tracing::{info, warn};

use super::error::AssistError;
use crate::llm::{ChatRequest, LLMError, LLMProvider};
use crate::session::{ApiKey, Session};

/// Content of the validation message.
pub const VALIDATION_MESSAGE: &str = "test";

/// Output cap for the validation call.
pub const VALIDATION_MAX_TOKENS: u32 = 5;

/// Checks a credential against the provider and stores it on success.
pub struct CredentialValidator {
    provider: Arc<dyn LLMProvider>,
    model: String,
}

impl CredentialValidator {
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Validate `raw_key` and, on success, store it in `session`.
    ///
    /// The session is only touched on success. A session that already holds
    /// a key is left alone and no request is sent.
    pub async fn validate(&self, session: &mut Session, raw_key: &str) -> Result<(), AssistError> {
        if session.is_validated() {
            return Err(AssistError::AlreadyValidated);
        }
        let Some(key) = ApiKey::parse(raw_key) else {
            return Err(AssistError::NotValidated);
        };

        let request = ChatRequest::single_user(self.model.clone(), VALIDATION_MESSAGE)
            .with_max_tokens(VALIDATION_MAX_TOKENS);

        match self.provider.chat(key.expose(), request).await {
            Ok(_) => {
                session.remember(key);
                info!(model = %self.model, "API key validated");
                Ok(())
            }
            Err(LLMError::Api { status, .. }) => {
                warn!(status, "API key rejected by provider");
                Err(AssistError::InvalidCredential)
            }
            Err(e) if e.is_transport() => {
                warn!(error = %e, "API key validation request failed");
                Err(AssistError::Network(e))
            }
            // 200 with an unreadable body still proves the key works.
            Err(e) => {
                warn!(error = %e, "Validation response was not a chat completion");
                session.remember(key);
                Ok(())
            }
        }
    }
}

//! User-facing assistant errors.

use thiserror::Error;

use crate::llm::LLMError;
use crate::prompt::MissingInput;

/// Outcome of a failed action. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum AssistError {
    /// Validation call answered with a status other than 200.
    #[error("Invalid API key. Please check your API key and try again.")]
    InvalidCredential,

    /// The request never got an answer (connect, DNS, TLS, timeout).
    #[error("An error occurred. Please check your network connection.")]
    Network(#[source] LLMError),

    /// Dispatch call answered without usable text.
    #[error("Error generating response. Please try again.")]
    Generation(#[source] LLMError),

    #[error(transparent)]
    MissingInput(#[from] MissingInput),

    #[error("Please enter your OpenAI API key to proceed.")]
    NotValidated,

    #[error("API key already validated.")]
    AlreadyValidated,
}

impl AssistError {
    /// Warnings are problems with the user's input; no request was sent.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            AssistError::MissingInput(_) | AssistError::NotValidated
        )
    }
}

//! The per-process session context holding the validated credential.

use std::fmt;

/// An API key supplied by the user.
///
/// `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Parse user input; blank input yields `None`. Surrounding whitespace
    /// from pasting is dropped.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Session state: at most one credential, present only once validated.
///
/// The credential is written at most once and only by
/// [`CredentialValidator`](crate::assistant::CredentialValidator).
#[derive(Debug, Default)]
pub struct Session {
    api_key: Option<ApiKey>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validated credential, if any.
    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn is_validated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Store a validated key. Returns `false` if a key was already stored,
    /// leaving the existing one in place.
    pub(crate) fn remember(&mut self, key: ApiKey) -> bool {
        if self.api_key.is_some() {
            return false;
        }
        self.api_key = Some(key);
        true
    }
}

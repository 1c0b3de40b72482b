//! Prompt construction for the three services.
//!
//! Each input type doubles as the HTML form body of its service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document types offered by the template service.
pub const DOCUMENT_TYPES: &[&str] = &[
    "Non-Disclosure Agreement",
    "Employment Contract",
    "Service Agreement",
    "Terms of Service",
    "Privacy Policy",
    OTHER_DOCUMENT_TYPE,
];

/// Selecting this document type means the typed value is used instead.
pub const OTHER_DOCUMENT_TYPE: &str = "Other";

/// Contract types offered by the contract service.
pub const CONTRACT_TYPES: &[&str] = &[
    "Service Agreement",
    "Sales Contract",
    "Partnership Agreement",
    CUSTOM_CONTRACT_TYPE,
];

/// Selecting this contract type means the typed value is used instead.
pub const CUSTOM_CONTRACT_TYPE: &str = "Custom";

/// A prompt ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A required form input was blank. The message is shown as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingInput {
    #[error("Please enter a question.")]
    Question,

    #[error("Please select or specify a document type.")]
    DocumentType,

    #[error("Please fill in all required fields.")]
    ContractFields,
}

// ============================================================================
// Question
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionInput {
    pub question: String,
}

impl QuestionInput {
    pub fn build_prompt(&self) -> Result<Prompt, MissingInput> {
        let question = non_blank(&self.question).ok_or(MissingInput::Question)?;
        Ok(Prompt(format!(
            "As a legal assistant, please provide a clear and detailed answer to this question.\n\
             Include any relevant legal considerations and disclaimers: {question}"
        )))
    }
}

// ============================================================================
// Template request
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateInput {
    pub document_type: String,
    pub custom_document_type: String,
}

impl Default for TemplateInput {
    fn default() -> Self {
        Self {
            document_type: DOCUMENT_TYPES[0].to_string(),
            custom_document_type: String::new(),
        }
    }
}

impl TemplateInput {
    /// The effective document type, honoring the "Other" escape hatch.
    pub fn resolved_document_type(&self) -> Option<&str> {
        resolve_choice(
            &self.document_type,
            &self.custom_document_type,
            OTHER_DOCUMENT_TYPE,
        )
    }

    pub fn build_prompt(&self) -> Result<Prompt, MissingInput> {
        let doc_type = self
            .resolved_document_type()
            .ok_or(MissingInput::DocumentType)?;
        Ok(Prompt(format!(
            "Create a detailed template for a {doc_type} with standard legal clauses and sections."
        )))
    }
}

// ============================================================================
// Contract draft
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInput {
    pub party_a: String,
    pub party_b: String,
    pub contract_type: String,
    pub custom_contract_type: String,
    pub key_terms: String,
}

impl Default for ContractInput {
    fn default() -> Self {
        Self {
            party_a: String::new(),
            party_b: String::new(),
            contract_type: CONTRACT_TYPES[0].to_string(),
            custom_contract_type: String::new(),
            key_terms: String::new(),
        }
    }
}

impl ContractInput {
    /// The effective contract type, honoring the "Custom" escape hatch.
    pub fn resolved_contract_type(&self) -> Option<&str> {
        resolve_choice(
            &self.contract_type,
            &self.custom_contract_type,
            CUSTOM_CONTRACT_TYPE,
        )
    }

    pub fn build_prompt(&self) -> Result<Prompt, MissingInput> {
        let (Some(party_a), Some(party_b), Some(contract_type), Some(key_terms)) = (
            non_blank(&self.party_a),
            non_blank(&self.party_b),
            self.resolved_contract_type(),
            non_blank(&self.key_terms),
        ) else {
            return Err(MissingInput::ContractFields);
        };

        Ok(Prompt(format!(
            "Generate a detailed {contract_type} between {party_a} and {party_b}\n\
             with the following terms and conditions: {key_terms}"
        )))
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn resolve_choice<'a>(selected: &'a str, typed: &'a str, escape_hatch: &str) -> Option<&'a str> {
    if selected.trim() == escape_hatch {
        non_blank(typed)
    } else {
        non_blank(selected)
    }
}

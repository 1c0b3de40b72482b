//! lexdraft - a small web assistant for legal questions, document templates
//! and contract drafts, backed by an OpenAI-compatible chat completion API.

pub mod assistant;
pub mod branding;
pub mod config;
pub mod download;
pub mod handlers;
pub mod llm;
pub mod prompt;
pub mod render;
pub mod server;
pub mod session;

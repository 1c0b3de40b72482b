//! HTTP request handlers.

mod assets;
mod download;
mod health;
mod pages;

pub use assets::logo;
pub use download::download;
pub use health::{livez, readyz};
pub use pages::{ask_question, draft_contract, index, request_template, submit_credential};

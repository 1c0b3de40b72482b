use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tokio::sync::RwLock;
use tower_http::timeout::TimeoutLayer;

use crate::assistant::Assistant;
use crate::branding::Branding;
use crate::handlers;
use crate::render::Pages;
use crate::session::Session;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub session: Arc<RwLock<Session>>,
    pub pages: Arc<Pages>,
    pub branding: Branding,
}

impl AppState {
    /// State for a fresh session (no validated key yet).
    pub fn new(assistant: Assistant, pages: Pages, branding: Branding) -> Self {
        Self {
            assistant: Arc::new(assistant),
            session: Arc::new(RwLock::new(Session::new())),
            pages: Arc::new(pages),
            branding,
        }
    }
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/credential", post(handlers::submit_credential))
        .route("/question", post(handlers::ask_question))
        .route("/template", post(handlers::request_template))
        .route("/contract", post(handlers::draft_contract))
        .route("/download", post(handlers::download))
        .route("/logo", get(handlers::logo))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}

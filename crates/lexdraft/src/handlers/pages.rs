//! Form pages: credential entry and the three services.

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::error;

use crate::assistant::AssistError;
use crate::download::DownloadKind;
use crate::prompt::{ContractInput, MissingInput, Prompt, QuestionInput, TemplateInput};
use crate::render::{DownloadLink, Notice, NoticeLevel, Outcome, PageView, Service};
use crate::server::AppState;

const QUESTION_CAPTION: &str =
    "Note: This is AI-generated guidance and should not be considered as formal legal advice.";

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    service: Service,
}

#[derive(Deserialize)]
pub struct CredentialForm {
    #[serde(default)]
    api_key: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Response {
    let view = page(&state, query.service).await;
    render(&state, &view)
}

/// POST /credential
pub async fn submit_credential(
    State(state): State<AppState>,
    Form(form): Form<CredentialForm>,
) -> Response {
    let result = {
        let mut session = state.session.write().await;
        state
            .assistant
            .validator
            .validate(&mut session, &form.api_key)
            .await
    };

    let view = page(&state, Service::default()).await;
    let view = match result {
        Ok(()) => view.with_notice(NoticeLevel::Success, "API key validated successfully!"),
        Err(e @ AssistError::AlreadyValidated) => {
            view.with_notice(NoticeLevel::Info, e.to_string())
        }
        // The page already prompts for a key.
        Err(AssistError::NotValidated) => view,
        Err(e) => view.with_notice(NoticeLevel::Error, e.to_string()),
    };
    render(&state, &view)
}

/// POST /question
pub async fn ask_question(
    State(state): State<AppState>,
    Form(input): Form<QuestionInput>,
) -> Response {
    let prompt = input.build_prompt();
    let mut view = page(&state, Service::Question).await;
    view.question = input;

    let view = run(&state, view, prompt, |text| Outcome {
        heading: "Legal Guidance:",
        body: text,
        caption: Some(QUESTION_CAPTION),
        download: None,
    })
    .await;
    render(&state, &view)
}

/// POST /template
pub async fn request_template(
    State(state): State<AppState>,
    Form(input): Form<TemplateInput>,
) -> Response {
    let prompt = input.build_prompt();
    let label = input.resolved_document_type().unwrap_or_default().to_string();
    let mut view = page(&state, Service::Template).await;
    view.template = input;

    let view = run(&state, view, prompt, |text| Outcome {
        heading: "Document Template:",
        body: text,
        caption: None,
        download: Some(DownloadLink::new(DownloadKind::Template, label)),
    })
    .await;
    render(&state, &view)
}

/// POST /contract
pub async fn draft_contract(
    State(state): State<AppState>,
    Form(input): Form<ContractInput>,
) -> Response {
    let prompt = input.build_prompt();
    let label = input.resolved_contract_type().unwrap_or_default().to_string();
    let mut view = page(&state, Service::Contract).await;
    view.contract = input;

    let view = run(&state, view, prompt, |text| Outcome {
        heading: "Contract Draft:",
        body: text,
        caption: None,
        download: Some(DownloadLink::new(DownloadKind::Contract, label)),
    })
    .await;
    render(&state, &view)
}

// ============================================================================
// Helpers
// ============================================================================

async fn page(state: &AppState, service: Service) -> PageView {
    let validated = state.session.read().await.is_validated();
    PageView::new(state.branding.logo().is_some(), validated, service)
}

/// Dispatch a built prompt and attach the outcome or the failure notice.
///
/// Nothing is sent when the session has no key or the prompt is incomplete.
async fn run(
    state: &AppState,
    mut view: PageView,
    prompt: Result<Prompt, MissingInput>,
    outcome: impl FnOnce(String) -> Outcome,
) -> PageView {
    let result = match prompt {
        Ok(prompt) => {
            let session = state.session.read().await;
            state.assistant.dispatcher.dispatch(&session, &prompt).await
        }
        Err(missing) => Err(missing.into()),
    };

    match result {
        Ok(text) => view.outcome = Some(outcome(text)),
        Err(e) => {
            let level = if e.is_warning() {
                NoticeLevel::Warning
            } else {
                NoticeLevel::Error
            };
            view.notices.push(Notice::new(level, e.to_string()));
        }
    }
    view
}

fn render(state: &AppState, view: &PageView) -> Response {
    match state.pages.render(view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

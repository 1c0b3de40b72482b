//! Router-level tests: forms, warnings, downloads and assets.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use lexdraft::assistant::Assistant;
use lexdraft::branding::Branding;
use lexdraft::llm::OpenAICompatibleProvider;
use lexdraft::render::Pages;
use lexdraft::server::{AppState, build_app};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApp {
    app: Router,
    state: AppState,
}

async fn test_app(server: &MockServer, branding: Branding) -> TestApp {
    let provider =
        OpenAICompatibleProvider::new(format!("{}/v1", server.uri()), Duration::from_secs(5))
            .unwrap();
    let assistant = Assistant::new(Arc::new(provider), "gpt-4");
    let state = AppState::new(assistant, Pages::new().unwrap(), branding);
    TestApp {
        app: build_app(state.clone(), 30),
        state,
    }
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Mount a validation responder and submit a key through the form.
async fn validate(test: &TestApp, server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({"max_tokens": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .up_to_n_times(1)
        .mount(server)
        .await;

    let (status, html) = post_form(&test.app, "/credential", "api_key=sk-good").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("API key validated successfully!"));
}

#[tokio::test]
async fn health_probes() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;

    for uri in ["/livez", "/readyz"] {
        let response = get(&test.app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}

#[tokio::test]
async fn index_without_key_shows_credential_form() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;

    let response = get(&test.app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"action="/credential""#));
    assert!(html.contains("Please enter your OpenAI API key to proceed."));
}

#[tokio::test]
async fn invalid_key_shows_error_and_keeps_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    let test = test_app(&server, Branding::default()).await;

    let (status, html) = post_form(&test.app, "/credential", "api_key=sk-bad").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Invalid API key. Please check your API key and try again."));
    assert!(html.contains(r#"action="/credential""#));
    assert!(!test.state.session.read().await.is_validated());
}

#[tokio::test]
async fn blank_key_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let test = test_app(&server, Branding::default()).await;

    let (_, html) = post_form(&test.app, "/credential", "api_key=+++").await;

    assert!(html.contains(r#"action="/credential""#));
    assert!(!test.state.session.read().await.is_validated());
}

#[tokio::test]
async fn valid_key_unlocks_services() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;

    validate(&test, &server).await;

    assert!(test.state.session.read().await.is_validated());
    let html = body_text(get(&test.app, "/?service=template").await).await;
    assert!(html.contains("Document Template Generator"));
    assert!(html.contains("Non-Disclosure Agreement"));
    assert!(!html.contains(r#"action="/credential""#));
}

#[tokio::test]
async fn empty_required_fields_send_no_request() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;
    validate(&test, &server).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"max_tokens": 1000})))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let cases = [
        ("/question", "question=", "Please enter a question."),
        (
            "/template",
            "document_type=Other&custom_document_type=",
            "Please select or specify a document type.",
        ),
        (
            "/contract",
            "party_a=Acme&party_b=&contract_type=Sales+Contract&key_terms=Net+30",
            "Please fill in all required fields.",
        ),
        (
            "/contract",
            "party_a=Acme&party_b=Jane&contract_type=Custom&custom_contract_type=&key_terms=Net+30",
            "Please fill in all required fields.",
        ),
    ];

    for (uri, body, warning) in cases {
        let (status, html) = post_form(&test.app, uri, body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(warning), "{uri} with {body}");
        assert!(html.contains("notice warning"));
    }
}

#[tokio::test]
async fn services_before_validation_send_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let test = test_app(&server, Branding::default()).await;

    let (_, html) = post_form(&test.app, "/question", "question=Hello").await;

    assert!(html.contains("Please enter your OpenAI API key to proceed."));
}

#[tokio::test]
async fn question_renders_answer_with_disclaimer() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;
    validate(&test, &server).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"max_tokens": 1000, "temperature": 0.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Verbal contracts can be binding."}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, html) = post_form(
        &test.app,
        "/question",
        "question=Is+a+verbal+contract+binding%3F",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Legal Guidance:"));
    assert!(html.contains("Verbal contracts can be binding."));
    assert!(html.contains("should not be considered as formal legal advice"));
    assert!(!html.contains(r#"action="/download""#));
}

#[tokio::test]
async fn template_renders_download_form() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;
    validate(&test, &server).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"max_tokens": 1000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "NDA TEMPLATE"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_, html) = post_form(
        &test.app,
        "/template",
        "document_type=Non-Disclosure+Agreement&custom_document_type=",
    )
    .await;

    assert!(html.contains("Document Template:"));
    assert!(html.contains("NDA TEMPLATE"));
    assert!(html.contains("non-disclosure_agreement_template.txt"));
}

#[tokio::test]
async fn generation_failure_shows_error() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;
    validate(&test, &server).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, html) = post_form(
        &test.app,
        "/contract",
        "party_a=Acme&party_b=Jane&contract_type=Sales+Contract&key_terms=Net+30",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Error generating response. Please try again."));
    assert!(html.contains("notice error"));
    assert!(!html.contains("Contract Draft:"));
}

#[tokio::test]
async fn download_returns_attachment() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;

    let response = test
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/download")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "kind=contract&label=Sales+Contract&content=THE+DRAFT%0D%0ALine+two",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"sales_contract_draft.txt\""
    );
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "THE DRAFT\nLine two");
}

#[tokio::test]
async fn logo_is_served_when_loaded() {
    let tmp = tempfile::TempDir::new().unwrap();
    let logo_path = tmp.path().join("logo.png");
    std::fs::write(&logo_path, b"\x89PNG fake").unwrap();

    let server = MockServer::start().await;
    let test = test_app(&server, Branding::load(&logo_path).await).await;

    let response = get(&test.app, "/logo").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let html = body_text(get(&test.app, "/").await).await;
    assert!(html.contains(r#"src="/logo""#));
}

#[tokio::test]
async fn missing_logo_falls_back_to_heading() {
    let server = MockServer::start().await;
    let test = test_app(&server, Branding::default()).await;

    assert_eq!(get(&test.app, "/logo").await.status(), StatusCode::NOT_FOUND);
    let html = body_text(get(&test.app, "/").await).await;
    assert!(html.contains("AI-Powered Legal Document Assistant"));
}

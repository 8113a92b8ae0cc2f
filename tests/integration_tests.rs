use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tier1_assistant::config::AppConfig;
use tier1_assistant::handlers;
use tier1_assistant::models::{ContactForm, FormKind};
use tier1_assistant::services::forms::{FormSubmitter, SubmissionError};
use tier1_assistant::services::sessions::SessionStore;
use tier1_assistant::state::AppState;

// ── Mock Submitter ──

#[derive(Clone, Copy)]
enum Outcome {
    Accept,
    Reject,
    NetworkDown,
}

struct MockSubmitter {
    outcome: Outcome,
    sent: Arc<Mutex<Vec<(FormKind, ContactForm)>>>,
}

#[async_trait]
impl FormSubmitter for MockSubmitter {
    async fn submit(&self, kind: FormKind, form: &ContactForm) -> Result<(), SubmissionError> {
        match self.outcome {
            Outcome::Accept => {
                self.sent.lock().unwrap().push((kind, form.clone()));
                Ok(())
            }
            Outcome::Reject => Err(SubmissionError::Rejected(vec![
                "email should be an email".to_string(),
                "form is disabled".to_string(),
            ])),
            Outcome::NetworkDown => Err(SubmissionError::Network),
        }
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        reply_delay_ms: 0,
        session_ttl_minutes: 30,
        contact_form_url: "https://forms.test/contact".to_string(),
        estimate_form_url: "https://forms.test/estimate".to_string(),
    }
}

fn test_state_with(outcome: Outcome) -> (Arc<AppState>, Arc<Mutex<Vec<(FormKind, ContactForm)>>>) {
    build_state(test_config(), outcome)
}

fn build_state(
    config: AppConfig,
    outcome: Outcome,
) -> (Arc<AppState>, Arc<Mutex<Vec<(FormKind, ContactForm)>>>) {
    let sent = Arc::new(Mutex::new(vec![]));
    let state = Arc::new(AppState {
        config,
        sessions: Mutex::new(SessionStore::new(chrono::Duration::minutes(30))),
        submitter: Box::new(MockSubmitter {
            outcome,
            sent: Arc::clone(&sent),
        }),
    });
    (state, sent)
}

fn test_state() -> Arc<AppState> {
    test_state_with(Outcome::Accept).0
}

fn test_app(state: Arc<AppState>) -> Router {
    handlers::router(state)
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(res: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn chat(state: &Arc<AppState>, session_id: Option<&str>, message: &str) -> serde_json::Value {
    let res = test_app(state.clone())
        .oneshot(json_post(
            "/api/chat",
            serde_json::json!({ "session_id": session_id, "message": message }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    read_json(res).await
}

fn valid_form() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "469-866-3951",
        "service": "bathroom",
        "message": "We'd like a tub-to-shower conversion."
    })
}

// ── Health ──

#[tokio::test]
async fn test_health() {
    let res = test_app(test_state())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["status"], "ok");
}

// ── Chat Tests ──

#[tokio::test]
async fn test_chat_scheduling_flow_end_to_end() {
    let state = test_state();

    let first = chat(&state, None, "I want to schedule a consultation").await;
    assert_eq!(first["state"], "collecting_name");
    let id = first["session_id"].as_str().unwrap().to_string();

    chat(&state, Some(id.as_str()), "Jane Doe").await;
    chat(&state, Some(id.as_str()), "Kitchen remodel").await;
    chat(&state, Some(id.as_str()), "Next Tuesday").await;
    let last = chat(&state, Some(id.as_str()), "jane@example.com").await;

    assert_eq!(last["state"], "idle");
    let reply = last["reply"].as_str().unwrap();
    assert!(reply.contains("Kitchen remodel"));
    assert!(reply.contains("Next Tuesday"));
    assert!(reply.contains("jane@example.com"));
}

#[tokio::test]
async fn test_chat_empty_message_rejected() {
    let state = test_state();
    let res = test_app(state.clone())
        .oneshot(json_post("/api/chat", serde_json::json!({ "message": "   " })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(state.sessions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_qualification_returns_quick_replies() {
    let state = test_state();
    let first = chat(&state, None, "Is my project a good fit?").await;
    assert_eq!(first["state"], "qualifying_location");
    let choices = first["quick_replies"].as_array().unwrap();
    assert_eq!(choices.len(), 4);
    assert_eq!(choices[3]["message"], "Outside Texas");
    assert!(first["reply_html"]
        .as_str()
        .unwrap()
        .contains("data-msg=\"Outside Texas\""));

    let id = first["session_id"].as_str().unwrap().to_string();
    let next = chat(&state, Some(id.as_str()), "Outside Texas").await;
    assert_eq!(next["state"], "idle");
}

#[tokio::test]
async fn test_chat_sessions_keep_separate_context() {
    let state = test_state();
    let a = chat(&state, None, "Tell me about bathroom remodels").await;
    let b = chat(&state, None, "Tell me about kitchen remodels").await;
    let a_id = a["session_id"].as_str().unwrap().to_string();
    let b_id = b["session_id"].as_str().unwrap().to_string();

    let a_price = chat(&state, Some(a_id.as_str()), "how much does it cost").await;
    let b_price = chat(&state, Some(b_id.as_str()), "how much does it cost").await;
    assert!(a_price["reply"].as_str().unwrap().contains("Bathroom Estimate"));
    assert!(b_price["reply"].as_str().unwrap().contains("Kitchen Estimate"));
}

#[tokio::test]
async fn test_transcript_and_reset() {
    let state = test_state();
    let first = chat(&state, None, "hello").await;
    let id = first["session_id"].as_str().unwrap().to_string();

    let res = test_app(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/chat/{id}/transcript"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let transcript = read_json(res).await;
    let entries = transcript.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["role"], "bot");
    assert_eq!(entries[1]["role"], "user");
    assert_eq!(entries[1]["content"], "hello");

    let res = test_app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/chat/{id}/reset"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        state.sessions.lock().unwrap().get(&id).unwrap().transcript.len(),
        1
    );
}

#[tokio::test]
async fn test_transcript_unknown_session() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/api/chat/nope/transcript")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_session_not_served() {
    let state = test_state();
    let first = chat(&state, None, "hello").await;
    let id = first["session_id"].as_str().unwrap().to_string();

    state
        .sessions
        .lock()
        .unwrap()
        .get_or_create(Some(id.as_str()))
        .expires_at = chrono::Utc::now().naive_utc() - chrono::Duration::minutes(1);

    let res = test_app(state.clone())
        .oneshot(
            Request::builder()
                .uri(format!("/api/chat/{id}/transcript"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test_app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/chat/{id}/reset"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Typing Delay ──

fn spawn_chat(
    state: &Arc<AppState>,
    session_id: &str,
    message: &str,
) -> tokio::task::JoinHandle<serde_json::Value> {
    let req = json_post(
        "/api/chat",
        serde_json::json!({ "session_id": session_id, "message": message }),
    );
    let app = test_app(state.clone());
    tokio::spawn(async move {
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        read_json(res).await
    })
}

#[tokio::test(start_paused = true)]
async fn test_reply_recorded_before_typing_delay_and_in_order() {
    let mut config = test_config();
    config.reply_delay_ms = 1000;
    let (state, _) = build_state(config, Outcome::Accept);
    let id = state.sessions.lock().unwrap().get_or_create(None).id.clone();

    let first = spawn_chat(&state, &id, "schedule a visit");
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Reply is in the transcript while the response is still held back.
    assert!(!first.is_finished());
    {
        let sessions = state.sessions.lock().unwrap();
        let transcript = &sessions.get(&id).unwrap().transcript;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].content, "I can help you schedule a free in-home consultation. First, what is your name?");
    }

    let second = spawn_chat(&state, &id, "Jane Doe");
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!second.is_finished());
    {
        let sessions = state.sessions.lock().unwrap();
        let transcript = &sessions.get(&id).unwrap().transcript;
        let contents: Vec<&str> = transcript[1..].iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents[0], "schedule a visit");
        assert_eq!(contents[2], "Jane Doe");
        assert!(contents[3].starts_with("Great to meet you, Jane!"));
    }

    let first = first.await.unwrap();
    let second = second.await.unwrap();
    assert_eq!(first["state"], "collecting_name");
    assert_eq!(second["state"], "collecting_project_type");
}

#[tokio::test(start_paused = true)]
async fn test_dropped_request_keeps_recorded_reply() {
    let mut config = test_config();
    config.reply_delay_ms = 1000;
    let (state, _) = build_state(config, Outcome::Accept);
    let id = state.sessions.lock().unwrap().get_or_create(None).id.clone();

    let pending = spawn_chat(&state, &id, "book a visit");
    tokio::time::sleep(Duration::from_millis(10)).await;
    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());

    let sessions = state.sessions.lock().unwrap();
    let session = sessions.get(&id).unwrap();
    assert_eq!(session.transcript.len(), 3);
    assert_eq!(session.dialogue.state().as_str(), "collecting_name");
}

// ── Form Tests ──

#[tokio::test]
async fn test_form_submit_success() {
    let (state, sent) = test_state_with(Outcome::Accept);
    let res = test_app(state)
        .oneshot(json_post("/api/forms/estimate", valid_form()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["submit_label"], "Submit Request");

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, FormKind::Estimate);
}

#[tokio::test]
async fn test_form_validation_errors() {
    let (state, sent) = test_state_with(Outcome::Accept);
    let res = test_app(state)
        .oneshot(json_post(
            "/api/forms/contact",
            serde_json::json!({ "name": " J ", "email": "nope", "message": "hi" }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = read_json(res).await;
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields[0]["field"], "name");
    assert_eq!(fields[0]["message"], "Name must be at least 2 characters.");
    assert_eq!(fields.len(), 4);
    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_form_endpoint_errors_are_joined() {
    let (state, _) = test_state_with(Outcome::Reject);
    let res = test_app(state)
        .oneshot(json_post("/api/forms/contact", valid_form()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let json = read_json(res).await;
    assert_eq!(json["error"], "email should be an email, form is disabled");
}

#[tokio::test]
async fn test_form_network_failure() {
    let (state, _) = test_state_with(Outcome::NetworkDown);
    let res = test_app(state)
        .oneshot(json_post("/api/forms/contact", valid_form()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let json = read_json(res).await;
    assert_eq!(
        json["error"],
        "Network error. Please check your connection and try again."
    );
}

#[tokio::test]
async fn test_unknown_form_kind() {
    let res = test_app(test_state())
        .oneshot(json_post("/api/forms/newsletter", valid_form()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Service Catalog Tests ──

#[tokio::test]
async fn test_service_options() {
    let res = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/api/services/flooring")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(json["title"], "Flooring Selection");
    assert_eq!(json["options"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_estimate_link() {
    let app = test_app(test_state());
    let res = app
        .oneshot(json_post(
            "/api/services/bathroom/estimate-link",
            serde_json::json!({ "selected": ["Guest Bath Update"] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = read_json(res).await;
    assert_eq!(
        json["url"],
        "pages/estimate.html?service=bathroom&details=Guest+Bath+Update"
    );

    let res = test_app(test_state())
        .oneshot(json_post(
            "/api/services/bathroom/estimate-link",
            serde_json::json!({ "selected": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

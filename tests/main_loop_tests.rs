use std::cell::RefCell;

use course_recommender_tui::{
    app::{update, AppState, PanelFocus},
    client::{complete, ApiClient, ApiRequest},
    error::ApiError,
    event::AppEvent,
    model::{DisplayResult, Functionality, Table},
};
use crossterm::event::{KeyCode, KeyEvent};

/// Integration tests for the event loop's request cycle.
/// A scripted client stands in for the network.

struct ScriptedClient {
    responses: RefCell<Vec<Result<Table, ApiError>>>,
    seen: RefCell<Vec<ApiRequest>>,
}

impl ScriptedClient {
    fn new(bodies: &[&str]) -> Self {
        Self {
            responses: RefCell::new(
                bodies
                    .iter()
                    .rev()
                    .map(|b| Table::from_envelope(b.as_bytes()))
                    .collect(),
            ),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ApiClient for ScriptedClient {
    async fn fetch_table(&self, request: &ApiRequest) -> Result<Table, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
    }
}

fn press(state: AppState, code: KeyCode) -> AppState {
    update(state, AppEvent::Key(KeyEvent::from(code)))
}

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = press(state, KeyCode::Char(c));
    }
    state
}

/// One loop iteration's side effect: send the pending request, feed the result back.
async fn run_pending(state: AppState, client: &ScriptedClient) -> AppState {
    match state.pending.clone() {
        Some(request) => update(state, complete(client, &request).await),
        None => state,
    }
}

#[tokio::test]
async fn login_then_enroll_uses_stored_identifier() {
    let client = ScriptedClient::new(&[
        r#"{"data": [{"AppUserID": "42", "FullName": "Jane Doe"}]}"#,
        r#"{"data": [{"EnrollmentResponse": "Enrolled in MIST 460"}]}"#,
    ]);

    // Log in
    let mut state = press(AppState::new(), KeyCode::Enter);
    state = type_text(state, "jdoe");
    state = press(state, KeyCode::Tab);
    state = type_text(state, "0x01");
    state = press(state, KeyCode::Enter);
    assert!(state.is_submitting());
    state = run_pending(state, &client).await;
    assert_eq!(state.session.student_id(), "42");

    // Switch to enroll and submit
    state = press(state, KeyCode::Esc);
    state = press(state, KeyCode::Char('5'));
    state = press(state, KeyCode::Enter);
    assert_eq!(state.ui.focus, PanelFocus::Form);
    state = type_text(state, "123");
    state = press(state, KeyCode::Enter);
    state = run_pending(state, &client).await;

    assert_eq!(
        state.result.as_ref().unwrap().display,
        DisplayResult::success("Enrollment successful.")
    );

    let seen = client.seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].url.ends_with("/validate_user"));
    assert_eq!(
        seen[1].params,
        vec![
            ("studentID", "42".to_string()),
            ("courseOfferingID", "123".to_string())
        ]
    );
}

#[tokio::test]
async fn exactly_one_request_per_submission() {
    let client = ScriptedClient::new(&[r#"{"data": []}"#]);

    let mut state = AppState::with_functionality(Functionality::FindPrerequisites);
    state.ui.focus = PanelFocus::Form;
    state = type_text(state, "MIST");
    state = press(state, KeyCode::Tab);
    state = type_text(state, "460");
    state = press(state, KeyCode::Enter);
    state = press(state, KeyCode::Enter);
    state = run_pending(state, &client).await;
    state = run_pending(state, &client).await;

    assert_eq!(client.seen.borrow().len(), 1);
    assert_eq!(
        state.result.unwrap().display,
        DisplayResult::info("No prerequisites found.")
    );
}

#[tokio::test]
async fn invalid_form_never_reaches_client() {
    let client = ScriptedClient::new(&[]);

    let mut state = AppState::with_functionality(Functionality::DropFromCourseOffering);
    state.ui.focus = PanelFocus::Form;
    state = type_text(state, "123");
    state = press(state, KeyCode::Enter);
    state = run_pending(state, &client).await;

    assert!(client.seen.borrow().is_empty());
    assert!(matches!(
        state.result.unwrap().display,
        DisplayResult::Invalid(_)
    ));
}

#[tokio::test]
async fn transport_failure_then_retry_succeeds() {
    let client = ScriptedClient::new(&[]);
    client
        .responses
        .borrow_mut()
        .push(Table::from_envelope(br#"{"data": [{"CourseOfferingID": 1}]}"#));
    client
        .responses
        .borrow_mut()
        .push(Err(ApiError::Transport("connection reset".into())));

    let mut state = AppState::with_functionality(Functionality::GetStudentEnrolledCourseOfferings);
    state.session.login("42");
    state.ui.focus = PanelFocus::Form;

    state = press(state, KeyCode::Enter);
    state = run_pending(state, &client).await;
    assert!(matches!(
        state.result.as_ref().unwrap().display,
        DisplayResult::Error(_)
    ));
    assert_eq!(state.session.student_id(), "42");

    state = press(state, KeyCode::Enter);
    state = run_pending(state, &client).await;
    assert!(matches!(
        state.result.as_ref().unwrap().display,
        DisplayResult::Table(ref t) if t.len() == 1
    ));
}

#[test]
fn quit_from_selector() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(state.meta.should_quit);
}

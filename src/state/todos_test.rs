use super::*;
use crate::net::gateway::ApiError;
use crate::state::guard::{GuardMode, LOGIN_ROUTE, ViewGuard};
use crate::state::listing::ListView;
use crate::util::storage::MemoryStorage;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn session_token() -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(r#"{"username":"alice","user_id":7}"#);
    format!("{header}.{body}.sig")
}

fn todo(id: u64, content: &str) -> Todo {
    Todo {
        id,
        content: content.to_owned(),
        completed: false,
        created_at: "2024-05-01T10:00:00Z".to_owned(),
        updated_at: "2024-05-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn apply_todos_stores_items() {
    let mut state = TodosState::default();
    let ticket = state.begin_load();
    assert_eq!(apply_todos(&mut state, ticket, Ok(vec![todo(1, "a")])), TodosOutcome::Applied);
    assert_eq!(state.view(), ListView::Populated);
}

#[test]
fn apply_todos_unauthorized_forces_logout_without_error_banner() {
    let mut state = TodosState::default();
    let ticket = state.begin_load();
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(apply_todos(&mut state, ticket, Err(err)), TodosOutcome::ForceLogout);
    assert_eq!(state.load_error, None);
    assert!(!state.loading);
}

#[test]
fn apply_todos_other_failures_are_displayed() {
    let mut state = TodosState::default();
    let ticket = state.begin_load();
    let err = ApiError::Status { status: 500, message: "db offline".to_owned() };
    assert_eq!(apply_todos(&mut state, ticket, Err(err)), TodosOutcome::Applied);
    assert_eq!(state.load_error.as_deref(), Some("Failed to load todos: db offline"));
}

#[test]
fn apply_todos_ignores_stale_ticket() {
    let mut state = TodosState::default();
    let old = state.begin_load();
    let _new = state.begin_load();
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    assert_eq!(apply_todos(&mut state, old, Err(err)), TodosOutcome::Stale);
    assert!(state.loading);
}

#[test]
fn validate_content_trims_and_requires_text() {
    assert_eq!(validate_content("  buy milk "), Ok("buy milk".to_owned()));
    assert_eq!(validate_content("   "), Err("Enter something to do."));
}

#[test]
fn messages_include_context() {
    assert_eq!(created_notice(&todo(1, "ship")), "Added \"ship\".");
    assert_eq!(delete_failed_message(&"boom"), "Failed to delete todo: boom");
    assert_eq!(create_failed_message(&"boom"), "Failed to add todo: boom");
}

// =============================================================
// Forced logout
// =============================================================

#[test]
fn unauthorized_list_clears_token_and_redirects_to_login() {
    let storage = MemoryStorage::with_token(&session_token());
    let mut session = SessionStore::new(storage.clone());
    assert!(session.initialize());

    let mut guard = ViewGuard::new(GuardMode::Protected);
    assert_eq!(guard.observe(session.state()), None);

    let mut todos = TodosState::default();
    let ticket = todos.begin_load();
    let err = ApiError::Status { status: 401, message: "Unauthorized".to_owned() };
    let outcome = apply_todos(&mut todos, ticket, Err(err));

    assert!(enforce_outcome(&mut session, outcome));
    assert_eq!(storage.load(), None);
    assert_eq!(session.token(), None);
    assert_eq!(guard.observe(session.state()), Some(LOGIN_ROUTE));
    assert_eq!(guard.observe(session.state()), None);
}

#[test]
fn other_outcomes_keep_the_session() {
    let storage = MemoryStorage::with_token(&session_token());
    let mut session = SessionStore::new(storage.clone());
    session.initialize();

    assert!(!enforce_outcome(&mut session, TodosOutcome::Applied));
    assert!(!enforce_outcome(&mut session, TodosOutcome::Stale));
    assert!(storage.load().is_some());
    assert!(session.identity().is_some());
}

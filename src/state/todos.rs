//! Todo list state for the default screen.
//!
//! A 401 here is the one error that is not just displayed: it means the
//! stored token is dead, so the screen signs the user out.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use super::listing::{Listing, LoadTicket};
use super::session::SessionStore;
use crate::net::gateway::ApiResult;
use crate::net::types::Todo;
use crate::util::storage::TokenStorage;

pub type TodosState = Listing<Todo>;

/// What the screen must do after applying a todo-list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodosOutcome {
    Applied,
    Stale,
    ForceLogout,
}

pub fn apply_todos(state: &mut TodosState, ticket: LoadTicket, result: ApiResult<Vec<Todo>>) -> TodosOutcome {
    if !state.is_current(ticket) {
        return TodosOutcome::Stale;
    }
    match result {
        Err(e) if e.is_unauthorized() => {
            state.finish_load(ticket, Ok(Vec::new()));
            TodosOutcome::ForceLogout
        }
        other => {
            state.finish_load(ticket, other.map_err(|e| format!("Failed to load todos: {e}")));
            TodosOutcome::Applied
        }
    }
}

/// Apply the session side of a todo-list outcome. Returns whether the session
/// was dropped.
pub fn enforce_outcome<S: TokenStorage>(session: &mut SessionStore<S>, outcome: TodosOutcome) -> bool {
    if outcome != TodosOutcome::ForceLogout {
        return false;
    }
    log::warn!("todo list rejected the session token; signing out");
    session.logout();
    true
}

/// Trimmed todo content, or the validation message to show.
///
/// # Errors
///
/// Returns a message when the content is blank.
pub fn validate_content(raw: &str) -> Result<String, &'static str> {
    let content = raw.trim();
    if content.is_empty() {
        return Err("Enter something to do.");
    }
    Ok(content.to_owned())
}

pub fn created_notice(todo: &Todo) -> String {
    format!("Added \"{}\".", todo.content)
}

pub const DELETED_NOTICE: &str = "Todo deleted.";

pub fn delete_failed_message(error: &impl std::fmt::Display) -> String {
    format!("Failed to delete todo: {error}")
}

pub fn create_failed_message(error: &impl std::fmt::Display) -> String {
    format!("Failed to add todo: {error}")
}

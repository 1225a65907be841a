//! Project list state.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::listing::{Listing, LoadTicket};
use crate::net::gateway::ApiResult;
use crate::net::types::Project;

pub type ProjectsState = Listing<Project>;

/// Drop soft-deleted rows.
pub fn active_projects(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(Project::is_active).collect()
}

/// Apply a project-list response, filtering soft-deleted rows.
pub fn apply_projects(state: &mut ProjectsState, ticket: LoadTicket, result: ApiResult<Vec<Project>>) -> bool {
    let result = result
        .map(active_projects)
        .map_err(|e| format!("Failed to load projects: {e}"));
    state.finish_load(ticket, result)
}

/// Trimmed project name, or the validation message to show.
///
/// # Errors
///
/// Returns a message when the name is blank.
pub fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter a project name.");
    }
    Ok(name.to_owned())
}

pub fn created_notice(project: &Project) -> String {
    format!("Project \"{}\" created.", project.name)
}

pub fn create_failed_message(error: &impl std::fmt::Display) -> String {
    format!("Failed to create project: {error}")
}

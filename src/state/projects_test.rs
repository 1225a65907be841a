use super::*;
use crate::net::gateway::ApiError;
use crate::state::listing::ListView;

fn project(id: u64, name: &str, deleted_at: Option<&str>) -> Project {
    Project {
        id,
        name: name.to_owned(),
        organization_id: 1,
        deleted_at: deleted_at.map(str::to_owned),
        created_at: "2024-05-01T10:00:00Z".to_owned(),
        updated_at: "2024-05-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn soft_deleted_projects_never_render() {
    let mut state = ProjectsState::default();
    let ticket = state.begin_load();
    apply_projects(
        &mut state,
        ticket,
        Ok(vec![
            project(1, "Live", None),
            project(2, "Gone", Some("2024-06-01T00:00:00Z")),
            project(3, "Also live", None),
        ]),
    );
    let ids: Vec<u64> = state.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn all_deleted_renders_empty() {
    let mut state = ProjectsState::default();
    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Ok(vec![project(2, "Gone", Some("2024-06-01T00:00:00Z"))]));
    assert_eq!(state.view(), ListView::Empty);
}

#[test]
fn refetch_without_mutation_renders_same_set() {
    let rows = vec![project(1, "Live", None), project(2, "Gone", Some("2024-06-01T00:00:00Z"))];
    let mut state = ProjectsState::default();
    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Ok(rows.clone()));
    let first = state.items.clone();
    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Ok(rows));
    assert_eq!(state.items, first);
}

#[test]
fn create_then_refresh_shows_single_acme() {
    let mut state = ProjectsState::default();
    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Ok(vec![project(1, "Beta", None)]));

    let created = project(2, "Acme", None);
    assert_eq!(created_notice(&created), "Project \"Acme\" created.");

    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Ok(vec![project(1, "Beta", None), created]));
    let acme: Vec<&Project> = state.items.iter().filter(|p| p.name == "Acme").collect();
    assert_eq!(acme.len(), 1);
    assert!(!acme[0].created_at.is_empty());
}

#[test]
fn load_failure_is_prefixed() {
    let mut state = ProjectsState::default();
    let ticket = state.begin_load();
    apply_projects(&mut state, ticket, Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(state.load_error.as_deref(), Some("Failed to load projects: connection refused"));
}

#[test]
fn validate_name_requires_non_blank() {
    assert_eq!(validate_name(" Acme "), Ok("Acme".to_owned()));
    assert_eq!(validate_name(""), Err("Enter a project name."));
}

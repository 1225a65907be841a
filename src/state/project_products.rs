//! Project detail: the products owned by one project.
//!
//! The project id comes from the route, so an unusable id is a local
//! validation failure and no request is made for it.

#[cfg(test)]
#[path = "project_products_test.rs"]
mod project_products_test;

use super::listing::{Listing, LoadTicket};
use crate::net::gateway::ApiResult;
use crate::net::types::{ProjectProduct, SharedProduct};

pub type ProjectProductsState = Listing<ProjectProduct>;

pub const INVALID_PROJECT_ID: &str = "Invalid project id.";

/// Parse the `:project_id` route parameter.
///
/// # Errors
///
/// Returns a message when the parameter is missing, non-numeric, or zero.
pub fn parse_project_id(raw: Option<&str>) -> Result<u64, &'static str> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(INVALID_PROJECT_ID)
}

pub fn apply_project_products(
    state: &mut ProjectProductsState,
    ticket: LoadTicket,
    result: ApiResult<Vec<ProjectProduct>>,
) -> bool {
    state.finish_load(ticket, result.map_err(|e| format!("Failed to load project products: {e}")))
}

/// Where a project product came from.
pub fn lineage_label(product: &ProjectProduct) -> String {
    match product.original_shared_product_id {
        Some(id) => format!("Copied from shared #{id}"),
        None => "Project only".to_owned(),
    }
}

pub fn promoted_notice(source: &ProjectProduct, shared: &SharedProduct) -> String {
    format!("Promoted \"{}\" to shared product #{}.", source.name, shared.id)
}

pub fn promote_failed_message(error: &impl std::fmt::Display) -> String {
    format!("Failed to promote product: {error}")
}

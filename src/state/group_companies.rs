//! Read-only group company list.

#[cfg(test)]
#[path = "group_companies_test.rs"]
mod group_companies_test;

use super::listing::{Listing, LoadTicket};
use crate::net::gateway::ApiResult;
use crate::net::types::GroupCompany;

pub type GroupCompaniesState = Listing<GroupCompany>;

pub fn apply_group_companies(
    state: &mut GroupCompaniesState,
    ticket: LoadTicket,
    result: ApiResult<Vec<GroupCompany>>,
) -> bool {
    state.finish_load(ticket, result.map_err(|e| format!("Failed to load group companies: {e}")))
}

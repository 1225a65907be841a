//! Copyable shared-catalog screen.
//!
//! The screen loads two resources in sequence (shared products, then the
//! projects that can receive a copy) and reports both failures together.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::listing::{ListScreen, Listing, LoadTicket};
use super::projects::active_projects;
use crate::net::gateway::ApiResult;
use crate::net::types::{Project, ProjectProduct, SharedProduct};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Listing<SharedProduct>,
    /// Active projects offered as copy destinations.
    pub projects: Vec<Project>,
    pub destination: Option<u64>,
}

impl CatalogState {
    /// Apply both halves of a catalog load. Returns `false` if stale.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        products: ApiResult<Vec<SharedProduct>>,
        projects: ApiResult<Vec<Project>>,
    ) -> bool {
        if !self.products.is_current(ticket) {
            return false;
        }

        let mut errors = Vec::new();
        let products = products.map_err(|e| format!("Failed to load shared products: {e}"));
        match projects {
            Ok(rows) => self.set_projects(rows),
            Err(e) => errors.push(format!("Failed to load projects: {e}")),
        }

        match products {
            Ok(items) => {
                self.products.finish_load(ticket, Ok(items));
            }
            Err(message) => errors.insert(0, message),
        }
        if !errors.is_empty() {
            self.products.loading = false;
            self.products.load_error = Some(errors.join("\n"));
        }
        true
    }

    /// Replace destination candidates, keeping the current choice if it is
    /// still offered and otherwise defaulting to the first project.
    pub fn set_projects(&mut self, rows: Vec<Project>) {
        self.projects = active_projects(rows);
        let still_offered = self
            .destination
            .is_some_and(|id| self.projects.iter().any(|p| p.id == id));
        if !still_offered {
            self.destination = self.projects.first().map(|p| p.id);
        }
    }

    /// Select a destination from a `<select>` value.
    pub fn select_destination(&mut self, raw: &str) {
        self.destination = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| self.projects.iter().any(|p| p.id == *id));
    }

    /// Destination for a copy, or the validation message to show.
    ///
    /// # Errors
    ///
    /// Returns a message when no destination project is selected.
    pub fn copy_destination(&self) -> Result<u64, &'static str> {
        self.destination.ok_or("Select a destination project.")
    }
}

impl ListScreen for CatalogState {
    type Item = SharedProduct;

    fn listing_mut(&mut self) -> &mut Listing<SharedProduct> {
        &mut self.products
    }
}

pub fn copied_notice(product: &ProjectProduct) -> String {
    format!("Copied \"{}\" into the project.", product.name)
}

pub fn copy_failed_message(error: &impl std::fmt::Display) -> String {
    format!("Failed to copy product: {error}")
}

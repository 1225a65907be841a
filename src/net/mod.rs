//! Networking modules for the catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` shapes requests and errors, `api` binds concrete endpoints,
//! `fetch` is the browser transport, and `types` defines the wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod fake;
pub mod fetch;
pub mod gateway;
pub mod types;

//! Client-side state.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust with no reactive types, so it can be tested
//! natively. Pages wrap these values in signals and call into them from event
//! handlers and spawned futures.

pub mod catalog;
pub mod group_companies;
pub mod guard;
pub mod listing;
pub mod project_products;
pub mod projects;
pub mod session;
pub mod todos;

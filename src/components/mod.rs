//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared screen chrome (sidebar, banners, dialogs, the
//! credential form) while reading the session from Leptos context.

pub mod auth_form;
pub mod banner;
pub mod confirm_dialog;
pub mod layout;
pub mod sidebar;

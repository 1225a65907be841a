//! Utility helpers shared across pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (storage, timers, clock) are isolated here behind plain
//! functions and traits so that state modules stay testable off the browser.

pub mod clock;
pub mod format;
pub mod jwt;
pub mod notice;
pub mod route_guard;
pub mod storage;

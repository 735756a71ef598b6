//! Data models
//!
//! Shared between the reservation engine and its callers (UI, demo binary).
//! UI-facing types serialize in camelCase.

pub mod dining_table;
pub mod reservation;
pub mod time_slot;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
pub use time_slot::*;

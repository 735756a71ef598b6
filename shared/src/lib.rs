//! Shared types for the reservation engine
//!
//! Common types used across crates: domain models (tables, reservations,
//! time slots), the unified error type and id/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    DiningTable, Reservation, ReservationRequest, ReservationStatus, TableType, TimeSlot,
};

//! Utilities - error re-exports, logging, time arithmetic, contact checks

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

//! Unified error system for the reservation engine
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::ReservationNotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::InvalidFormat, "Invalid time: 7pm");
//!
//! // Create an error with details
//! let err = AppError::validation_errors(vec!["Name is required".to_string()])
//!     .with_detail("field", "name");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

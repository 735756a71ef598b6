//! Booking errors and response envelopes

use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::Reservation;
use thiserror::Error;

/// Failure of a lifecycle operation. Display strings are shown to guests
/// verbatim.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// One or more business rules failed
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Reservation not found")]
    NotFound(String),

    #[error("Reservations can only be cancelled at least {hours} hours in advance")]
    CancellationWindow { hours: u32 },

    #[error("Reservation has already been cancelled")]
    AlreadyCancelled(String),

    /// Input that could not be interpreted at all
    #[error("{0}")]
    InvalidInput(String),
}

impl BookingError {
    /// Messages for display, one per violated rule
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<AppError> for BookingError {
    fn from(err: AppError) -> Self {
        Self::InvalidInput(err.message)
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(errors) => AppError::validation_errors(errors),
            BookingError::NotFound(ref id) => {
                AppError::with_message(ErrorCode::ReservationNotFound, err.to_string())
                    .with_detail("id", id.clone())
            }
            BookingError::CancellationWindow { hours } => {
                AppError::with_message(ErrorCode::CancellationWindowClosed, err.to_string())
                    .with_detail("hours", hours)
            }
            BookingError::AlreadyCancelled(ref id) => {
                AppError::with_message(ErrorCode::ReservationAlreadyCancelled, err.to_string())
                    .with_detail("id", id.clone())
            }
            BookingError::InvalidInput(message) => AppError::invalid_format(message),
        }
    }
}

/// Result of `create_reservation` in the shape the booking UI consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<Result<Reservation, BookingError>> for CreateReservationResponse {
    fn from(result: Result<Reservation, BookingError>) -> Self {
        match result {
            Ok(reservation) => Self {
                success: true,
                reservation: Some(reservation),
                errors: None,
            },
            Err(err) => Self {
                success: false,
                reservation: None,
                errors: Some(err.messages()),
            },
        }
    }
}

/// Result of `cancel_reservation` in the shape the booking UI consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<Result<T, BookingError>> for CancelReservationResponse {
    fn from(result: Result<T, BookingError>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                error: None,
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BookingError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.messages(), vec!["a", "b"]);
        assert_eq!(err.to_string(), "a; b");

        let err = BookingError::CancellationWindow { hours: 24 };
        assert_eq!(
            err.messages(),
            vec!["Reservations can only be cancelled at least 24 hours in advance"]
        );
    }

    #[test]
    fn test_into_app_error_codes() {
        let err: AppError = BookingError::NotFound("X1".to_string()).into();
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
        assert_eq!(err.message, "Reservation not found");

        let err: AppError = BookingError::AlreadyCancelled("X1".to_string()).into();
        assert_eq!(err.code, ErrorCode::ReservationAlreadyCancelled);

        let err: AppError = BookingError::CancellationWindow { hours: 24 }.into();
        assert_eq!(err.code, ErrorCode::CancellationWindowClosed);

        let err: AppError = BookingError::Validation(vec!["Name is required".to_string()]).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Name is required");
    }

    #[test]
    fn test_create_response_shape() {
        let response: CreateReservationResponse =
            Err(BookingError::Validation(vec!["Name is required".to_string()])).into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0], "Name is required");
        assert!(json.get("reservation").is_none());
    }

    #[test]
    fn test_cancel_response_shape() {
        let response: CancelReservationResponse = Ok::<(), BookingError>(()).into();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"success":true}"#
        );

        let response: CancelReservationResponse =
            Err::<(), _>(BookingError::NotFound("nope".to_string())).into();
        assert_eq!(response.error.as_deref(), Some("Reservation not found"));
    }
}

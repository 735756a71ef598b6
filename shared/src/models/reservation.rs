//! Reservation Model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Reservation status
///
/// `Pending` is part of the taxonomy shown to clients, but no booking flow
/// currently produces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

/// Booking intent submitted by a guest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Calendar date of the visit
    pub date: NaiveDate,
    /// Start time, `HH:MM` (24h)
    pub time: String,
    pub guests: u32,
    pub table_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Stored booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    #[serde(flatten)]
    pub request: ReservationRequest,
    pub status: ReservationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Reservation {
    /// Promote a validated request into a confirmed reservation
    pub fn confirmed(id: impl Into<String>, request: ReservationRequest, now: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            request,
            status: ReservationStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    pub fn table_id(&self) -> i64 {
        self.request.table_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: "19:00".to_string(),
            guests: 2,
            table_id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn test_confirmed_stamps_both_timestamps() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let reservation = Reservation::confirmed("K3F9Q2", request(), now);

        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.created_at, now);
        assert_eq!(reservation.updated_at, now);
        assert_eq!(reservation.table_id(), 1);
        assert!(!reservation.is_cancelled());
    }

    #[test]
    fn test_serialize_flattens_request_fields() {
        let now = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let json = serde_json::to_value(Reservation::confirmed("ABC", request(), now)).unwrap();

        assert_eq!(json["id"], "ABC");
        assert_eq!(json["tableId"], 1);
        assert_eq!(json["date"], "2026-03-14");
        assert_eq!(json["status"], "confirmed");
        assert!(json.get("specialRequests").is_none());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let status: ReservationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ReservationStatus::Pending);
    }
}

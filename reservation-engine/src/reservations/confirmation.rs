//! Booking confirmation delivery
//!
//! No real e-mail is sent. [`SimulatedConfirmation`] waits a fixed delay,
//! standing in for the mail round trip, and logs the message it would send.

use std::time::Duration;

use async_trait::async_trait;
use shared::models::Reservation;

#[async_trait]
pub trait ConfirmationSender: Send + Sync {
    async fn send_confirmation(&self, reservation: &Reservation);
}

#[derive(Debug, Clone)]
pub struct SimulatedConfirmation {
    delay: Duration,
}

impl SimulatedConfirmation {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay, for tests and batch tooling
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SimulatedConfirmation {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl ConfirmationSender for SimulatedConfirmation {
    async fn send_confirmation(&self, reservation: &Reservation) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        tracing::info!(
            reservation = %reservation.id,
            email = %reservation.request.email,
            date = %reservation.request.date,
            time = %reservation.request.time,
            "Confirmation e-mail sent (simulated)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::ReservationRequest;

    #[tokio::test]
    async fn test_instant_confirmation_completes() {
        let request = ReservationRequest {
            date: NaiveDate::from_ymd_opt(2026, 5, 9).unwrap(),
            time: "19:00".to_string(),
            guests: 2,
            table_id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            special_requests: None,
        };
        let created = NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let reservation = Reservation::confirmed("ABC", request, created);

        let started = std::time::Instant::now();
        SimulatedConfirmation::instant()
            .send_confirmation(&reservation)
            .await;
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}

//! Reservation storage
//!
//! Append-only history of bookings. Records are never removed; the only
//! mutation after insert is a status change.

use chrono::NaiveDateTime;
use parking_lot::RwLock;
use shared::models::{Reservation, ReservationStatus};

/// Storage seam for reservations
pub trait ReservationStore: Send + Sync {
    /// Append a reservation at the end of the history
    fn insert(&self, reservation: Reservation);

    fn find(&self, id: &str) -> Option<Reservation>;

    /// Full history in insertion order
    fn list(&self) -> Vec<Reservation>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change a reservation's status and stamp `updated_at`.
    /// Returns the updated record, or `None` if the id is unknown.
    fn set_status(
        &self,
        id: &str,
        status: ReservationStatus,
        updated_at: NaiveDateTime,
    ) -> Option<Reservation>;
}

/// Process-local store backed by a `Vec`
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    reservations: RwLock<Vec<Reservation>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn insert(&self, reservation: Reservation) {
        self.reservations.write().push(reservation);
    }

    fn find(&self, id: &str) -> Option<Reservation> {
        self.reservations.read().iter().find(|r| r.id == id).cloned()
    }

    fn list(&self) -> Vec<Reservation> {
        self.reservations.read().clone()
    }

    fn len(&self) -> usize {
        self.reservations.read().len()
    }

    fn set_status(
        &self,
        id: &str,
        status: ReservationStatus,
        updated_at: NaiveDateTime,
    ) -> Option<Reservation> {
        let mut reservations = self.reservations.write();
        let reservation = reservations.iter_mut().find(|r| r.id == id)?;
        reservation.status = status;
        reservation.updated_at = updated_at;
        Some(reservation.clone())
    }
}

//! Reservation booking engine
//!
//! Slot generation, table allocation, request validation and the booking
//! lifecycle on top of a pluggable reservation store.

pub mod allocator;
pub mod busyness;
pub mod clock;
pub mod confirmation;
pub mod error;
pub mod form;
pub mod service;
pub mod slots;
pub mod store;
pub mod validator;

pub use allocator::TableAllocator;
pub use busyness::{BusynessSimulator, NoBusyness, RandomBusyness, SeededBusyness};
pub use clock::{Clock, FixedClock, SystemClock};
pub use confirmation::{ConfirmationSender, SimulatedConfirmation};
pub use error::{BookingError, CancelReservationResponse, CreateReservationResponse};
pub use form::{ContactErrors, FormError, ReservationForm};
pub use service::{ReservationService, ReservationServiceBuilder};
pub use slots::SlotGenerator;
pub use store::{InMemoryReservationStore, ReservationStore};
pub use validator::{RequestValidator, ValidationResult};

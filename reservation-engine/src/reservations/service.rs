//! Reservation service
//!
//! Public entry point of the engine. Wires configuration, storage, clock,
//! busyness simulation and confirmation delivery together and exposes the
//! booking lifecycle: list slots, list tables, validate, create, get and
//! cancel.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use shared::models::{DiningTable, Reservation, ReservationRequest, ReservationStatus, TimeSlot};
use shared::util::reservation_code;
use tokio::sync::Mutex;

use super::allocator::TableAllocator;
use super::busyness::{BusynessSimulator, NoBusyness, RandomBusyness, SeededBusyness};
use super::clock::{Clock, SystemClock};
use super::confirmation::{ConfirmationSender, SimulatedConfirmation};
use super::error::BookingError;
use super::slots::SlotGenerator;
use super::store::{InMemoryReservationStore, ReservationStore};
use super::validator::{RequestValidator, ValidationResult};
use crate::core::{Config, RestaurantConfig};
use crate::utils::AppResult;
use crate::utils::time::{hours_between, slot_start};

pub struct ReservationService {
    config: Arc<RestaurantConfig>,
    store: Arc<dyn ReservationStore>,
    clock: Arc<dyn Clock>,
    allocator: Arc<TableAllocator>,
    slots: SlotGenerator,
    validator: RequestValidator,
    confirmation: Arc<dyn ConfirmationSender>,
    /// Serializes validate + append so two creates can't take the same table
    booking_lock: Mutex<()>,
}

/// Builder for [`ReservationService`]; every seam has a production default
pub struct ReservationServiceBuilder {
    config: RestaurantConfig,
    store: Option<Arc<dyn ReservationStore>>,
    clock: Option<Arc<dyn Clock>>,
    busyness: Option<Arc<dyn BusynessSimulator>>,
    confirmation: Option<Arc<dyn ConfirmationSender>>,
}

impl ReservationServiceBuilder {
    pub fn store(mut self, store: Arc<dyn ReservationStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn busyness(mut self, busyness: Arc<dyn BusynessSimulator>) -> Self {
        self.busyness = Some(busyness);
        self
    }

    pub fn confirmation(mut self, confirmation: Arc<dyn ConfirmationSender>) -> Self {
        self.confirmation = Some(confirmation);
        self
    }

    pub fn build(self) -> ReservationService {
        let config = Arc::new(self.config);
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryReservationStore::new()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let busyness = self.busyness.unwrap_or_else(|| Arc::new(RandomBusyness));
        let confirmation = self
            .confirmation
            .unwrap_or_else(|| Arc::new(SimulatedConfirmation::default()));

        let allocator = Arc::new(TableAllocator::new(config.clone(), store.clone(), busyness));
        let slots = SlotGenerator::new(config.clone(), allocator.clone(), clock.clone());
        let validator = RequestValidator::new(config.clone(), allocator.clone(), clock.clone());

        ReservationService {
            config,
            store,
            clock,
            allocator,
            slots,
            validator,
            confirmation,
            booking_lock: Mutex::new(()),
        }
    }
}

impl ReservationService {
    pub fn builder(config: RestaurantConfig) -> ReservationServiceBuilder {
        ReservationServiceBuilder {
            config,
            store: None,
            clock: None,
            busyness: None,
            confirmation: None,
        }
    }

    /// Production wiring from runtime settings
    pub fn from_config(settings: &Config, config: RestaurantConfig) -> Self {
        let busyness: Arc<dyn BusynessSimulator> = if !settings.enable_busyness_simulation {
            Arc::new(NoBusyness)
        } else if let Some(seed) = settings.busyness_seed {
            Arc::new(SeededBusyness::new(seed))
        } else {
            Arc::new(RandomBusyness)
        };
        let confirmation = SimulatedConfirmation::new(Duration::from_millis(
            settings.confirmation_delay_ms,
        ));

        Self::builder(config)
            .busyness(busyness)
            .confirmation(Arc::new(confirmation))
            .build()
    }

    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    pub fn generate_time_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        self.slots.generate(date)
    }

    pub fn get_available_tables(&self, date: NaiveDate, time: &str) -> AppResult<Vec<DiningTable>> {
        self.allocator.available_tables(date, time)
    }

    pub fn validate_request(&self, request: &ReservationRequest) -> ValidationResult {
        self.validator.validate(request)
    }

    pub async fn create_reservation(
        &self,
        request: ReservationRequest,
    ) -> Result<Reservation, BookingError> {
        let reservation = {
            let _guard = self.booking_lock.lock().await;

            let validation = self.validator.validate(&request);
            if !validation.is_valid {
                tracing::warn!(
                    date = %request.date,
                    time = %request.time,
                    table = request.table_id,
                    errors = ?validation.errors,
                    "Reservation rejected"
                );
                return Err(BookingError::Validation(validation.errors));
            }

            let reservation = Reservation::confirmed(self.next_id(), request, self.clock.now());
            self.store.insert(reservation.clone());
            reservation
        };

        self.confirmation.send_confirmation(&reservation).await;

        tracing::info!(
            reservation = %reservation.id,
            date = %reservation.request.date,
            time = %reservation.request.time,
            table = reservation.table_id(),
            guests = reservation.request.guests,
            "Reservation created"
        );
        Ok(reservation)
    }

    pub fn get_reservation(&self, id: &str) -> Result<Reservation, BookingError> {
        self.store
            .find(id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))
    }

    /// Every stored reservation, oldest first
    pub fn list_reservations(&self) -> Vec<Reservation> {
        self.store.list()
    }

    pub async fn cancel_reservation(&self, id: &str) -> Result<Reservation, BookingError> {
        let _guard = self.booking_lock.lock().await;

        let reservation = self.get_reservation(id)?;
        if reservation.is_cancelled() {
            return Err(BookingError::AlreadyCancelled(id.to_string()));
        }

        let now = self.clock.now();
        let start = slot_start(reservation.request.date, &reservation.request.time)?;
        let hours = self.config.cancellation_notice_hours;
        if hours_between(now, start) < f64::from(hours) {
            tracing::warn!(reservation = %id, %start, "Cancellation refused, too close to start");
            return Err(BookingError::CancellationWindow { hours });
        }

        let cancelled = self
            .store
            .set_status(id, ReservationStatus::Cancelled, now)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        tracing::info!(reservation = %id, "Reservation cancelled");
        Ok(cancelled)
    }

    fn next_id(&self) -> String {
        loop {
            let id = reservation_code();
            if self.store.find(&id).is_none() {
                return id;
            }
        }
    }
}

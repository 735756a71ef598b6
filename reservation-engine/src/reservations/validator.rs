//! Request Validator
//!
//! Runs every business rule against a prospective booking and reports all
//! violations in one pass. Contact fields are only checked for presence;
//! format checks live in [`super::form`].

use std::sync::Arc;

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::models::ReservationRequest;

use super::allocator::TableAllocator;
use super::clock::Clock;
use crate::core::RestaurantConfig;
use crate::utils::time::slot_start;
use crate::utils::validation::is_present;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub struct RequestValidator {
    config: Arc<RestaurantConfig>,
    allocator: Arc<TableAllocator>,
    clock: Arc<dyn Clock>,
}

impl RequestValidator {
    pub fn new(
        config: Arc<RestaurantConfig>,
        allocator: Arc<TableAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            allocator,
            clock,
        }
    }

    pub fn validate(&self, request: &ReservationRequest) -> ValidationResult {
        let config = &self.config;
        let now = self.clock.now();
        let mut errors = Vec::new();

        let start = slot_start(request.date, &request.time).ok();

        // 1. Timing
        match start {
            Some(start) => {
                if start < now {
                    errors.push(
                        "Cannot make reservations for a time that has already passed".to_string(),
                    );
                }
            }
            None => errors.push(format!("Invalid reservation time: {}", request.time)),
        }

        let latest = now + Duration::days(i64::from(config.max_advance_booking_days));
        let too_far_ahead = request.date.and_time(NaiveTime::MIN) > latest;
        if too_far_ahead {
            errors.push(format!(
                "Reservations can only be made up to {} days in advance",
                config.max_advance_booking_days
            ));
        }

        if let Some(start) = start {
            let earliest =
                now + Duration::minutes(i64::from(config.minimum_reservation_notice_minutes));
            if start < earliest {
                errors.push(format!(
                    "Reservations must be made at least {} minutes in advance",
                    config.minimum_reservation_notice_minutes
                ));
            }
        }

        // 2. Party size
        if request.guests < config.min_party_size {
            errors.push(format!("Minimum party size is {}", config.min_party_size));
        }
        if request.guests > config.max_party_size {
            errors.push(format!(
                "Maximum party size is {}. Please contact us for larger groups",
                config.max_party_size
            ));
        }

        // 3. Table suitability
        match config.find_table(request.table_id) {
            None => errors.push("Selected table is not available".to_string()),
            Some(table) => {
                if request.guests < table.min_party_size {
                    errors.push(format!(
                        "This table requires a minimum of {} guests",
                        table.min_party_size
                    ));
                }
                if request.guests > table.max_party_size {
                    errors.push(format!(
                        "This table can only accommodate up to {} guests",
                        table.max_party_size
                    ));
                }
            }
        }

        // 4. Live availability, only inside the booking horizon
        if let Some(start) = start
            && !too_far_ahead
        {
            let free = self.allocator.available_tables_at(start);
            if !free.iter().any(|t| t.id == request.table_id) {
                errors.push("The selected table is not available at this time".to_string());
            }
        }

        // 5. Contact presence
        if !is_present(&request.name) {
            errors.push("Name is required".to_string());
        }
        if !is_present(&request.email) {
            errors.push("Email is required".to_string());
        }
        if !is_present(&request.phone) {
            errors.push("Phone number is required".to_string());
        }

        ValidationResult::from_errors(errors)
    }
}

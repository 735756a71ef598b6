//! Restaurant reservation engine
//!
//! # Overview
//!
//! Availability and booking engine for a single restaurant:
//!
//! - **Slots** (`reservations::slots`): bookable start times of a day
//! - **Allocation** (`reservations::allocator`): tables free for a dining window
//! - **Validation** (`reservations::validator`): every business rule in one pass
//! - **Lifecycle** (`reservations::service`): create, look up and cancel bookings
//!
//! # Layout
//!
//! ```text
//! reservation-engine/src/
//! ├── core/          # runtime settings and restaurant rules
//! ├── reservations/  # booking engine
//! └── utils/         # logging, time and contact-format helpers
//! ```

pub mod core;
pub mod reservations;
pub mod utils;

pub use core::{Config, RestaurantConfig};
pub use reservations::{
    BookingError, CancelReservationResponse, CreateReservationResponse, ReservationForm,
    ReservationService, ValidationResult,
};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read runtime settings and start logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}

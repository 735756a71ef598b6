use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{DiningTable, TableType};

/// Engine runtime configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_JSON | false | emit JSON log lines |
/// | LOG_DIR | (unset) | daily rolling log files in this directory |
/// | CONFIRMATION_DELAY_MS | 1000 | simulated confirmation e-mail delay |
/// | ENABLE_BUSYNESS_SIMULATION | true | fake busyness while no bookings exist |
/// | BUSYNESS_SEED | (unset) | fixed RNG seed for the busyness simulation |
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Simulated delivery delay for confirmation e-mails (milliseconds)
    pub confirmation_delay_ms: u64,
    pub enable_busyness_simulation: bool,
    pub busyness_seed: Option<u64>,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: var("LOG_DIR").filter(|d| !d.trim().is_empty()),
            confirmation_delay_ms: var("CONFIRMATION_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            enable_busyness_simulation: var("ENABLE_BUSYNESS_SIMULATION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            busyness_seed: var("BUSYNESS_SEED").and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

/// Restaurant booking rules and floor plan
///
/// Read-only after startup. Scalar rules can be overridden through
/// environment variables; the table list can be replaced by a JSON file
/// named in `RESTAURANT_TABLES_FILE`.
///
/// | Variable | Default |
/// |----------|---------|
/// | OPENING_HOUR | 11 |
/// | CLOSING_HOUR | 22 |
/// | DINING_DURATION_MINUTES | 120 |
/// | MAX_ADVANCE_BOOKING_DAYS | 30 |
/// | MIN_RESERVATION_NOTICE_MINUTES | 15 |
/// | MIN_PARTY_SIZE | 1 |
/// | MAX_PARTY_SIZE | 8 |
/// | TIME_SLOT_INTERVAL_MINUTES | 30 |
/// | CANCELLATION_NOTICE_HOURS | 24 |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantConfig {
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub dining_duration_minutes: u32,
    pub max_advance_booking_days: u32,
    pub minimum_reservation_notice_minutes: u32,
    pub min_party_size: u32,
    pub max_party_size: u32,
    pub time_slot_interval_minutes: u32,
    pub cancellation_notice_hours: u32,
    pub tables: Vec<DiningTable>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            opening_hour: 11,
            closing_hour: 22,
            dining_duration_minutes: 120,
            max_advance_booking_days: 30,
            minimum_reservation_notice_minutes: 15,
            min_party_size: 1,
            max_party_size: 8,
            time_slot_interval_minutes: 30,
            cancellation_notice_hours: 24,
            tables: default_tables(),
        }
    }
}

fn table(
    id: i64,
    name: &str,
    capacity: u32,
    count: u32,
    table_type: TableType,
    min_party_size: u32,
    max_party_size: u32,
) -> DiningTable {
    DiningTable {
        id,
        name: name.to_string(),
        capacity,
        count,
        table_type,
        min_party_size,
        max_party_size,
        is_available: true,
    }
}

/// The restaurant's floor plan
pub fn default_tables() -> Vec<DiningTable> {
    vec![
        table(1, "Window Table", 2, 4, TableType::Window, 1, 2),
        table(2, "Standard Table", 4, 8, TableType::Standard, 2, 4),
        table(3, "Booth", 4, 6, TableType::Booth, 2, 4),
        table(4, "Large Table", 6, 4, TableType::Large, 4, 6),
        table(5, "Private Room", 8, 2, TableType::Private, 6, 8),
    ]
}

impl RestaurantConfig {
    /// Load from environment variables and validate
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source and validate
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();
        let num = |key: &str, default: u32| -> AppResult<u32> {
            match var(key) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    AppError::config(format!("{key} must be a non-negative integer, got '{raw}'"))
                }),
                None => Ok(default),
            }
        };

        let tables = match var("RESTAURANT_TABLES_FILE") {
            Some(path) => load_tables(Path::new(&path))?,
            None => defaults.tables,
        };

        let config = Self {
            opening_hour: num("OPENING_HOUR", defaults.opening_hour)?,
            closing_hour: num("CLOSING_HOUR", defaults.closing_hour)?,
            dining_duration_minutes: num("DINING_DURATION_MINUTES", defaults.dining_duration_minutes)?,
            max_advance_booking_days: num(
                "MAX_ADVANCE_BOOKING_DAYS",
                defaults.max_advance_booking_days,
            )?,
            minimum_reservation_notice_minutes: num(
                "MIN_RESERVATION_NOTICE_MINUTES",
                defaults.minimum_reservation_notice_minutes,
            )?,
            min_party_size: num("MIN_PARTY_SIZE", defaults.min_party_size)?,
            max_party_size: num("MAX_PARTY_SIZE", defaults.max_party_size)?,
            time_slot_interval_minutes: num(
                "TIME_SLOT_INTERVAL_MINUTES",
                defaults.time_slot_interval_minutes,
            )?,
            cancellation_notice_hours: num(
                "CANCELLATION_NOTICE_HOURS",
                defaults.cancellation_notice_hours,
            )?,
            tables,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants, reporting every violation at once
    pub fn validate(&self) -> AppResult<()> {
        let mut problems = Vec::new();

        if self.opening_hour >= self.closing_hour {
            problems.push(format!(
                "opening hour {} must be before closing hour {}",
                self.opening_hour, self.closing_hour
            ));
        }
        if self.closing_hour > 24 {
            problems.push(format!("closing hour {} is past midnight", self.closing_hour));
        }
        if self.time_slot_interval_minutes == 0 {
            problems.push("time slot interval must be positive".to_string());
        }
        if self.dining_duration_minutes == 0 {
            problems.push("dining duration must be positive".to_string());
        }
        if self.min_party_size > self.max_party_size {
            problems.push(format!(
                "min party size {} exceeds max party size {}",
                self.min_party_size, self.max_party_size
            ));
        }

        let mut seen = HashSet::new();
        for t in &self.tables {
            if !seen.insert(t.id) {
                problems.push(format!("duplicate table id {}", t.id));
            }
            if t.min_party_size > t.max_party_size {
                problems.push(format!(
                    "table {} ({}): min party size {} exceeds max party size {}",
                    t.id, t.name, t.min_party_size, t.max_party_size
                ));
            }
            if t.max_party_size > t.capacity {
                problems.push(format!(
                    "table {} ({}): max party size {} exceeds capacity {}",
                    t.id, t.name, t.max_party_size, t.capacity
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::config(format!(
                "Invalid restaurant configuration: {}",
                problems.join("; ")
            ))
            .with_detail("problems", problems))
        }
    }

    pub fn find_table(&self, id: i64) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }
}

fn load_tables(path: &Path) -> AppResult<Vec<DiningTable>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Failed to read table file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::config(format!("Failed to parse table file {}: {}", path.display(), e))
    })
}

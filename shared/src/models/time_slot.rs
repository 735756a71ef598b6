//! Time Slot Model

use super::DiningTable;
use serde::{Deserialize, Serialize};

/// One bookable start time for a given date, derived on every query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// `HH:MM`, 24h, zero padded
    pub time: String,
    pub is_available: bool,
    pub available_tables: Vec<DiningTable>,
}

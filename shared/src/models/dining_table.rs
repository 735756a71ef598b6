//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Seating category of a dining table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableType {
    Window,
    Standard,
    Booth,
    Large,
    Private,
}

/// Dining table entity
///
/// One entry describes a table type together with how many physical
/// instances of it the floor has. Tables come from configuration and are
/// never created or destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub count: u32,
    #[serde(rename = "type")]
    pub table_type: TableType,
    pub min_party_size: u32,
    pub max_party_size: u32,
    /// Static configuration flag, not derived from bookings
    pub is_available: bool,
}

impl DiningTable {
    /// Whether a party of `guests` fits this table's size limits
    pub fn fits_party(&self, guests: u32) -> bool {
        guests >= self.min_party_size && guests <= self.max_party_size
    }
}

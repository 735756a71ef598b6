//! Table Allocator
//!
//! Answers "which tables can take a booking starting at this moment?".
//! A stored reservation blocks its table when its dining window overlaps
//! the requested one. Cancelled reservations never block.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{DiningTable, Reservation};

use super::busyness::BusynessSimulator;
use super::store::ReservationStore;
use crate::core::RestaurantConfig;
use crate::utils::time::{add_minutes, slot_start};
use crate::utils::{AppError, AppResult};

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

pub struct TableAllocator {
    config: Arc<RestaurantConfig>,
    store: Arc<dyn ReservationStore>,
    busyness: Arc<dyn BusynessSimulator>,
}

impl TableAllocator {
    pub fn new(
        config: Arc<RestaurantConfig>,
        store: Arc<dyn ReservationStore>,
        busyness: Arc<dyn BusynessSimulator>,
    ) -> Self {
        Self {
            config,
            store,
            busyness,
        }
    }

    fn dining_end(&self, start: NaiveDateTime) -> Option<NaiveDateTime> {
        add_minutes(start, self.config.dining_duration_minutes)
    }

    /// Tables bookable on `date` at `time` (`HH:MM`), in configuration order
    pub fn available_tables(&self, date: NaiveDate, time: &str) -> AppResult<Vec<DiningTable>> {
        let start = slot_start(date, time)?;
        if self.dining_end(start).is_none() {
            return Err(AppError::invalid_format(format!(
                "Reservation time out of range: {} {}",
                date, time
            )));
        }
        Ok(self.available_tables_at(start))
    }

    /// Tables bookable for a reservation starting at `start`.
    ///
    /// Empty when the dining window would run past the end of the calendar.
    pub fn available_tables_at(&self, start: NaiveDateTime) -> Vec<DiningTable> {
        let Some(end) = self.dining_end(start) else {
            tracing::warn!(at = %start, "Dining window out of range");
            return Vec::new();
        };
        let reservations = self.store.list();

        let mut reserved = self.overlapping_table_ids(&reservations, start, end);

        if reservations.is_empty() {
            let busy = self
                .busyness
                .busy_tables(start.date(), start.time(), &self.config.tables);
            tracing::trace!(at = %start, busy = busy.len(), "Applied busyness simulation");
            reserved.extend(busy);
        }

        self.config
            .tables
            .iter()
            .filter(|t| t.is_available && !reserved.contains(&t.id))
            .cloned()
            .collect()
    }

    fn overlapping_table_ids(
        &self,
        reservations: &[Reservation],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> HashSet<i64> {
        reservations
            .iter()
            .filter(|r| !r.is_cancelled())
            .filter_map(|r| match slot_start(r.request.date, &r.request.time) {
                Ok(other_start) => Some((r, other_start)),
                Err(e) => {
                    tracing::warn!(reservation = %r.id, "Skipping stored reservation: {}", e);
                    None
                }
            })
            .filter(|(_, other_start)| {
                let other_end = self.dining_end(*other_start).unwrap_or(NaiveDateTime::MAX);
                overlaps(start, end, *other_start, other_end)
            })
            .map(|(r, _)| r.table_id())
            .collect()
    }
}

//! Slot Generator
//!
//! Produces the bookable start times of a day, from opening time (or, for
//! today, the first interval boundary after the minimum notice) up to but
//! not including closing time.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared::models::TimeSlot;

use super::allocator::TableAllocator;
use super::clock::Clock;
use crate::core::RestaurantConfig;
use crate::utils::time::{add_minutes, at_hour, format_slot_time, round_up_to_interval};

/// Lazy, restartable sequence of slot start instants
#[derive(Debug, Clone)]
pub struct SlotStarts {
    next: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl Iterator for SlotStarts {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current.checked_add_signed(self.step).unwrap_or(self.end);
        Some(current)
    }
}

pub struct SlotGenerator {
    config: Arc<RestaurantConfig>,
    allocator: Arc<TableAllocator>,
    clock: Arc<dyn Clock>,
}

impl SlotGenerator {
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

    /// Start instants offered for `date`
    pub fn slot_starts(&self, date: NaiveDate) -> SlotStarts {
        let opening = at_hour(date, self.config.opening_hour);
        // closing at midnight after the last calendar day
        let closing = at_hour(date, self.config.closing_hour).unwrap_or(NaiveDateTime::MAX);
        let interval = self.config.time_slot_interval_minutes;

        let now = self.clock.now();
        let mut start = opening;
        if date == now.date()
            && let Some(earliest) = add_minutes(now, self.config.minimum_reservation_notice_minutes)
            && opening.is_some_and(|opening| earliest > opening)
        {
            start = round_up_to_interval(earliest, interval);
        }

        SlotStarts {
            next: start.unwrap_or(closing),
            end: closing,
            step: Duration::minutes(i64::from(interval.max(1))),
        }
    }

    /// Lazily evaluated slots for `date`
    pub fn slots(&self, date: NaiveDate) -> impl Iterator<Item = TimeSlot> + '_ {
        let opening = at_hour(date, self.config.opening_hour);
        let closing = at_hour(date, self.config.closing_hour);
        let duration = self.config.dining_duration_minutes;

        self.slot_starts(date).map(move |start| {
            let available_tables = self.allocator.available_tables_at(start);
            let within_hours = opening.is_some_and(|opening| start >= opening)
                && add_minutes(start, duration)
                    .is_some_and(|end| closing.is_none_or(|closing| end <= closing));
            TimeSlot {
                time: format_slot_time(start),
                is_available: within_hours && !available_tables.is_empty(),
                available_tables,
            }
        })
    }

    pub fn generate(&self, date: NaiveDate) -> Vec<TimeSlot> {
        let slots: Vec<TimeSlot> = self.slots(date).collect();
        tracing::debug!(
            %date,
            slots = slots.len(),
            available = slots.iter().filter(|s| s.is_available).count(),
            "Generated time slots"
        );
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservations::busyness::NoBusyness;
    use crate::reservations::clock::FixedClock;
    use crate::reservations::store::InMemoryReservationStore;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 8).unwrap()
    }

    fn generator_at(now: NaiveDateTime, config: RestaurantConfig) -> SlotGenerator {
        let config = Arc::new(config);
        let allocator = Arc::new(TableAllocator::new(
            config.clone(),
            Arc::new(InMemoryReservationStore::new()),
            Arc::new(NoBusyness),
        ));
        SlotGenerator::new(config, allocator, Arc::new(FixedClock::new(now)))
    }

    fn times(slots: &[TimeSlot]) -> Vec<&str> {
        slots.iter().map(|s| s.time.as_str()).collect()
    }

    #[test]
    fn test_future_day_spans_opening_to_closing() {
        let now = friday().pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());

        assert_eq!(slots.len(), 22);
        assert_eq!(slots.first().unwrap().time, "11:00");
        assert_eq!(slots.last().unwrap().time, "21:30");
    }

    #[test]
    fn test_slots_are_evenly_spaced() {
        let now = friday().pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap();
        let generator = generator_at(now, RestaurantConfig::default());
        let starts: Vec<NaiveDateTime> = generator.slot_starts(friday()).collect();

        for pair in starts.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::minutes(30));
        }
    }

    #[test]
    fn test_slot_starts_is_restartable() {
        let now = friday().pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap();
        let generator = generator_at(now, RestaurantConfig::default());
        let starts = generator.slot_starts(friday());

        let first: Vec<_> = starts.clone().collect();
        let second: Vec<_> = starts.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_late_slots_are_unavailable_when_dinner_would_overrun_closing() {
        let now = friday().pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());

        let slot = |time: &str| slots.iter().find(|s| s.time == time).unwrap();
        assert!(slot("20:00").is_available);
        assert!(!slot("20:30").is_available);
        assert!(!slot("21:30").is_available);
        // tables are still listed, the slot just can't be booked
        assert_eq!(slot("21:30").available_tables.len(), 5);
    }

    #[test]
    fn test_today_starts_after_notice_rounded_up() {
        // 14:05 + 15 min notice = 14:20 → first slot 14:30
        let now = friday().and_hms_opt(14, 5, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());
        assert_eq!(slots.first().unwrap().time, "14:30");
    }

    #[test]
    fn test_today_notice_landing_on_boundary_keeps_it() {
        // 14:15 + 15 = 14:30 exactly
        let now = friday().and_hms_opt(14, 15, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());
        assert_eq!(slots.first().unwrap().time, "14:30");
    }

    #[test]
    fn test_today_slot_within_notice_is_not_offered() {
        // now 14:25, a 14:30 slot is only 5 minutes away
        let now = friday().and_hms_opt(14, 25, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());

        assert!(!times(&slots).contains(&"14:30"));
        assert_eq!(slots.first().unwrap().time, "15:00");
        let earliest = now + Duration::minutes(15);
        for start in generator_at(now, RestaurantConfig::default()).slot_starts(friday()) {
            assert!(start >= earliest);
        }
    }

    #[test]
    fn test_today_before_opening_uses_opening_time() {
        let now = friday().and_hms_opt(8, 0, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());
        assert_eq!(slots.first().unwrap().time, "11:00");
    }

    #[test]
    fn test_today_after_last_slot_is_empty() {
        let now = friday().and_hms_opt(21, 50, 0).unwrap();
        let slots = generator_at(now, RestaurantConfig::default()).generate(friday());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_last_calendar_day_does_not_panic() {
        let now = friday().and_hms_opt(10, 0, 0).unwrap();
        let config = RestaurantConfig {
            closing_hour: 24,
            ..RestaurantConfig::default()
        };
        let slots = generator_at(now, config).generate(NaiveDate::MAX);

        assert_eq!(slots.first().unwrap().time, "11:00");
        assert_eq!(slots.last().unwrap().time, "23:30");
        let slot = |time: &str| slots.iter().find(|s| s.time == time).unwrap();
        assert!(slot("21:30").is_available);
        // dining window would end past the last representable instant
        assert!(!slot("22:30").is_available);
        assert!(slot("22:30").available_tables.is_empty());
    }

    #[test]
    fn test_custom_interval() {
        let now = friday().pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap();
        let config = RestaurantConfig {
            opening_hour: 17,
            closing_hour: 19,
            time_slot_interval_minutes: 15,
            ..RestaurantConfig::default()
        };
        let slots = generator_at(now, config).generate(friday());
        assert_eq!(
            times(&slots),
            vec!["17:00", "17:15", "17:30", "17:45", "18:00", "18:15", "18:30", "18:45"]
        );
    }
}

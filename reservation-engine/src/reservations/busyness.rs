//! Busyness simulation
//!
//! Until the first real booking lands, the allocator hides a share of the
//! floor plan so a fresh demo does not look empty. The share depends on the
//! day of week and the time of day:
//!
//! | Day | 12:00–13:30 | 18:30–20:30 | otherwise |
//! |-----|-------------|-------------|-----------|
//! | Fri / Sat / Sun | 60% | 80% | 30% |
//! | Mon–Thu | 50% | 70% | 30% |
//!
//! Both windows are inclusive at each end.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shared::models::DiningTable;

use crate::utils::time::minute_of_day;

const LUNCH: (u32, u32) = (12 * 60, 13 * 60 + 30);
const PEAK_DINNER: (u32, u32) = (18 * 60 + 30, 20 * 60 + 30);

/// Percentage of tables to mark busy at `date`/`time`
pub fn busyness_percent(date: NaiveDate, time: NaiveTime) -> u32 {
    let weekend = matches!(date.weekday(), Weekday::Fri | Weekday::Sat | Weekday::Sun);
    let minute = minute_of_day(time);
    let in_window = |(start, end): (u32, u32)| minute >= start && minute <= end;

    match (weekend, in_window(PEAK_DINNER), in_window(LUNCH)) {
        (true, true, _) => 80,
        (true, _, true) => 60,
        (false, true, _) => 70,
        (false, _, true) => 50,
        _ => 30,
    }
}

/// `floor(table_count * percent / 100)`
pub fn simulated_busy_count(table_count: usize, date: NaiveDate, time: NaiveTime) -> usize {
    table_count * busyness_percent(date, time) as usize / 100
}

/// Strategy deciding which tables look taken while no real bookings exist
pub trait BusynessSimulator: Send + Sync {
    /// Ids of tables to treat as reserved
    fn busy_tables(&self, date: NaiveDate, time: NaiveTime, tables: &[DiningTable]) -> HashSet<i64>;
}

fn pick_busy<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    time: NaiveTime,
    tables: &[DiningTable],
) -> HashSet<i64> {
    let count = simulated_busy_count(tables.len(), date, time);
    let mut ids: Vec<i64> = tables.iter().map(|t| t.id).collect();
    ids.shuffle(rng);
    ids.into_iter().take(count).collect()
}

/// Fresh randomness on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomBusyness;

impl BusynessSimulator for RandomBusyness {
    fn busy_tables(&self, date: NaiveDate, time: NaiveTime, tables: &[DiningTable]) -> HashSet<i64> {
        pick_busy(&mut rand::thread_rng(), date, time, tables)
    }
}

/// Reproducible sequence from a fixed seed
#[derive(Debug)]
pub struct SeededBusyness {
    rng: Mutex<StdRng>,
}

impl SeededBusyness {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl BusynessSimulator for SeededBusyness {
    fn busy_tables(&self, date: NaiveDate, time: NaiveTime, tables: &[DiningTable]) -> HashSet<i64> {
        pick_busy(&mut *self.rng.lock(), date, time, tables)
    }
}

/// Simulation switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBusyness;

impl BusynessSimulator for NoBusyness {
    fn busy_tables(&self, _: NaiveDate, _: NaiveTime, _: &[DiningTable]) -> HashSet<i64> {
        HashSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_tables;

    // 2026-05-07 is a Thursday, 2026-05-08 a Friday
    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 7).unwrap()
    }

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 8).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_weekend_buckets() {
        assert_eq!(busyness_percent(friday(), t(18, 30)), 80);
        assert_eq!(busyness_percent(friday(), t(20, 30)), 80);
        assert_eq!(busyness_percent(friday(), t(12, 0)), 60);
        assert_eq!(busyness_percent(friday(), t(13, 30)), 60);
        assert_eq!(busyness_percent(friday(), t(15, 0)), 30);

        let sunday = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        assert_eq!(busyness_percent(sunday, t(19, 0)), 80);
    }

    #[test]
    fn test_weekday_buckets() {
        assert_eq!(busyness_percent(thursday(), t(19, 0)), 70);
        assert_eq!(busyness_percent(thursday(), t(12, 30)), 50);
        assert_eq!(busyness_percent(thursday(), t(21, 0)), 30);
        assert_eq!(busyness_percent(thursday(), t(13, 31)), 30);
        assert_eq!(busyness_percent(thursday(), t(18, 29)), 30);
    }

    #[test]
    fn test_busy_count_floors() {
        // 5 tables: 80% → 4, 70% → 3, 60% → 3, 50% → 2, 30% → 1
        assert_eq!(simulated_busy_count(5, friday(), t(19, 0)), 4);
        assert_eq!(simulated_busy_count(5, thursday(), t(19, 0)), 3);
        assert_eq!(simulated_busy_count(5, friday(), t(12, 0)), 3);
        assert_eq!(simulated_busy_count(5, thursday(), t(12, 0)), 2);
        assert_eq!(simulated_busy_count(5, thursday(), t(16, 0)), 1);
        assert_eq!(simulated_busy_count(0, friday(), t(19, 0)), 0);
    }

    #[test]
    fn test_random_picks_known_tables() {
        let tables = default_tables();
        let busy = RandomBusyness.busy_tables(friday(), t(19, 0), &tables);
        assert_eq!(busy.len(), 4);
        assert!(busy.iter().all(|id| tables.iter().any(|t| t.id == *id)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let tables = default_tables();
        let a = SeededBusyness::new(7);
        let b = SeededBusyness::new(7);
        for _ in 0..5 {
            assert_eq!(
                a.busy_tables(thursday(), t(19, 0), &tables),
                b.busy_tables(thursday(), t(19, 0), &tables)
            );
        }
    }

    #[test]
    fn test_no_busyness() {
        assert!(
            NoBusyness
                .busy_tables(friday(), t(19, 0), &default_tables())
                .is_empty()
        );
    }
}

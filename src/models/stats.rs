use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::pin::Pin;
use super::region::region_label;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Figures shown under the map: total pins, regions visited, days exploring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub count: usize,
    pub distinct_regions: usize,
    pub days_exploring: i64,
}

impl SummaryStats {
    pub fn compute(pins: &[Pin], now: DateTime<Utc>) -> Self {
        let distinct_regions = pins
            .iter()
            .map(|p| region_label(p.lat, p.lng))
            .collect::<HashSet<_>>()
            .len();

        let days_exploring = pins
            .iter()
            .map(|p| p.created_at)
            .min()
            .map(|earliest| days_between(earliest, now))
            .unwrap_or(0);

        Self {
            count: pins.len(),
            distinct_regions,
            days_exploring,
        }
    }
}

/// Whole days from `earliest` to `now`, rounded to nearest. Never negative.
fn days_between(earliest: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - earliest).num_milliseconds() as f64;
    ((millis / MILLIS_PER_DAY).round() as i64).max(0)
}

//! Calendar and time-of-day helpers shared by the channel models.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::f64::consts::PI;

/// Normalized time-of-day signal in `[0, 1]`.
///
/// Troughs at midnight, peaks at noon and sits at the midpoint at 06:00
/// and 18:00.
pub fn diurnal_factor(hour: f64) -> f64 {
    (((hour - 6.0) * PI / 12.0).sin() + 1.0) / 2.0
}

/// Whole local hour (0-23) as a real phase input
pub fn local_hour(instant: &NaiveDateTime) -> f64 {
    instant.hour() as f64
}

/// Day of week with Monday = 0
pub fn day_of_week(instant: &NaiveDateTime) -> u32 {
    instant.weekday().num_days_from_monday()
}

pub fn is_weekend(instant: &NaiveDateTime) -> bool {
    day_of_week(instant) >= 5
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

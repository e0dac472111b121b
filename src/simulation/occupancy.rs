//! # Occupancy Channel
//!
//! Binary presence indicator. Each slot draws independently from a
//! probability composed from the calendar: high during weekday business
//! hours, low otherwise, with an occasional weekend lift.

use chrono::NaiveDateTime;
use rand::{Rng, RngCore};

use super::channel::ChannelModel;
use super::diurnal::{day_of_week, is_weekend, local_hour};
use crate::domain::Channel;

/// First business hour (inclusive)
pub const BUSINESS_START_HOUR: f64 = 8.0;
/// End of business hours (exclusive)
pub const BUSINESS_END_HOUR: f64 = 18.0;
/// Occupancy probability during weekday business hours
pub const BUSINESS_PROBABILITY: f64 = 0.7;
/// Occupancy probability outside business hours
pub const IDLE_PROBABILITY: f64 = 0.05;
/// Chance that a weekend slot gets a spike
pub const WEEKEND_SPIKE_PROBABILITY: f64 = 0.12;
/// Probability added to a weekend slot when the spike fires
pub const WEEKEND_SPIKE_LIFT: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyModel;

impl OccupancyModel {
    pub fn new() -> Self {
        Self
    }

    /// Monday to Friday, 08:00 to 17:59
    pub fn is_business_hours(instant: &NaiveDateTime) -> bool {
        let hour = local_hour(instant);
        day_of_week(instant) < 5 && (BUSINESS_START_HOUR..BUSINESS_END_HOUR).contains(&hour)
    }

    /// Probability before any weekend spike
    pub fn base_probability(instant: &NaiveDateTime) -> f64 {
        if Self::is_business_hours(instant) {
            BUSINESS_PROBABILITY
        } else {
            IDLE_PROBABILITY
        }
    }

    /// Probability for one slot, drawing the weekend spike from `rng`
    pub fn slot_probability(instant: &NaiveDateTime, rng: &mut dyn RngCore) -> f64 {
        let mut probability = Self::base_probability(instant);
        if is_weekend(instant) && rng.gen_bool(WEEKEND_SPIKE_PROBABILITY) {
            probability += WEEKEND_SPIKE_LIFT;
        }
        probability.clamp(0.0, 1.0)
    }
}

impl ChannelModel for OccupancyModel {
    fn channel(&self) -> Channel {
        Channel::Occupancy
    }

    fn base_value(&self, instant: NaiveDateTime) -> f64 {
        Self::base_probability(&instant)
    }

    fn sample(&self, instant: NaiveDateTime, rng: &mut dyn RngCore) -> f64 {
        let probability = Self::slot_probability(&instant, rng);
        if rng.gen_bool(probability) {
            1.0
        } else {
            0.0
        }
    }
}

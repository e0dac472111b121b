//! # Temperature Channel
//!
//! Indoor air temperature following the diurnal factor between roughly
//! 20 °C at midnight and 26 °C at noon, with Gaussian sensor noise.

use chrono::NaiveDateTime;
use rand::RngCore;
use rand_distr::{Distribution, Normal};

use super::channel::ChannelModel;
use super::diurnal::{diurnal_factor, local_hour, round_to};
use crate::domain::Channel;
use crate::error::Result;

/// Temperature at the diurnal trough (°C)
pub const MIN_TEMPERATURE_C: f64 = 20.0;
/// Swing between trough and peak (°C)
pub const DIURNAL_AMPLITUDE_C: f64 = 6.0;
/// Sensor noise standard deviation (°C)
pub const NOISE_STD_DEV_C: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct TemperatureModel {
    noise: Normal<f64>,
}

impl TemperatureModel {
    pub fn new() -> Result<Self> {
        Ok(Self {
            noise: Normal::new(0.0, NOISE_STD_DEV_C)?,
        })
    }

    /// Noise-free temperature for a local hour
    pub fn base_temperature_c(hour: f64) -> f64 {
        MIN_TEMPERATURE_C + DIURNAL_AMPLITUDE_C * diurnal_factor(hour)
    }
}

impl ChannelModel for TemperatureModel {
    fn channel(&self) -> Channel {
        Channel::Temperature
    }

    fn base_value(&self, instant: NaiveDateTime) -> f64 {
        Self::base_temperature_c(local_hour(&instant))
    }

    fn sample(&self, instant: NaiveDateTime, rng: &mut dyn RngCore) -> f64 {
        let value = self.base_value(instant) + self.noise.sample(rng);
        round_to(value, self.channel().decimals())
    }
}

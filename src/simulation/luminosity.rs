//! # Luminosity Channel
//!
//! Office illuminance in lux. Daylight hours (06:00 through 18:59) follow the
//! diurnal factor, peaking at 600 lux at noon; other hours have a zero base.
//! Noise is applied to every sample and the result is clamped at zero.

use chrono::NaiveDateTime;
use rand::RngCore;
use rand_distr::{Distribution, Normal};

use super::channel::ChannelModel;
use super::diurnal::{diurnal_factor, local_hour, round_to};
use crate::domain::Channel;
use crate::error::Result;

/// First daylight hour (inclusive)
pub const DAYLIGHT_START_HOUR: f64 = 6.0;
/// Last daylight hour (inclusive)
pub const DAYLIGHT_END_HOUR: f64 = 18.0;
/// Daylight illuminance when the diurnal factor is zero (lux)
pub const DAYLIGHT_FLOOR_LUX: f64 = 50.0;
/// Additional illuminance at the diurnal peak (lux)
pub const DAYLIGHT_SWING_LUX: f64 = 550.0;
/// Sensor noise standard deviation (lux)
pub const NOISE_STD_DEV_LUX: f64 = 15.0;

#[derive(Debug, Clone)]
pub struct LuminosityModel {
    noise: Normal<f64>,
}

impl LuminosityModel {
    pub fn new() -> Result<Self> {
        Ok(Self {
            noise: Normal::new(0.0, NOISE_STD_DEV_LUX)?,
        })
    }

    pub fn is_daylight(hour: f64) -> bool {
        (DAYLIGHT_START_HOUR..=DAYLIGHT_END_HOUR).contains(&hour)
    }

    /// Noise-free illuminance for a local hour
    pub fn base_lux(hour: f64) -> f64 {
        if Self::is_daylight(hour) {
            DAYLIGHT_FLOOR_LUX + diurnal_factor(hour) * DAYLIGHT_SWING_LUX
        } else {
            0.0
        }
    }
}

impl ChannelModel for LuminosityModel {
    fn channel(&self) -> Channel {
        Channel::Luminosity
    }

    fn base_value(&self, instant: NaiveDateTime) -> f64 {
        Self::base_lux(local_hour(&instant))
    }

    fn sample(&self, instant: NaiveDateTime, rng: &mut dyn RngCore) -> f64 {
        let lux = (self.base_value(instant) + self.noise.sample(rng)).max(0.0);
        round_to(lux, self.channel().decimals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[rstest]
    #[case(5.0, false)]
    #[case(6.0, true)]
    #[case(12.0, true)]
    #[case(18.0, true)]
    #[case(19.0, false)]
    fn test_daylight_threshold(#[case] hour: f64, #[case] daylight: bool) {
        assert_eq!(LuminosityModel::is_daylight(hour), daylight);
    }

    #[test]
    fn test_base_lux_profile() {
        assert_eq!(LuminosityModel::base_lux(2.0), 0.0);
        assert_eq!(LuminosityModel::base_lux(23.0), 0.0);
        assert!((LuminosityModel::base_lux(6.0) - 325.0).abs() < 1e-9);
        assert!((LuminosityModel::base_lux(12.0) - 600.0).abs() < 1e-9);
        assert!((LuminosityModel::base_lux(18.0) - 325.0).abs() < 1e-9);
    }

    #[test]
    fn test_samples_never_negative() {
        let model = LuminosityModel::new().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            for hour in 0..24 {
                assert!(model.sample(at(hour), &mut rng) >= 0.0);
            }
        }
    }

    #[test]
    fn test_night_mean_is_small() {
        let model = LuminosityModel::new().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let samples: Vec<f64> = (0..2000).map(|_| model.sample(at(2), &mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        // E[max(0, N(0, 15))] is about 6 lux
        assert!(mean < 10.0, "night mean {}", mean);
        assert!(samples.iter().any(|&v| v == 0.0));
    }
}

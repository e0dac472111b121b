use chrono::NaiveDateTime;
use rand::RngCore;

use crate::domain::{Channel, Reading};

use super::TimeGrid;

/// A per-instant generative model for one sensor channel.
///
/// Values depend only on the instant's calendar attributes and fresh draws
/// from `rng`; there is no state carried between instants.
pub trait ChannelModel {
    fn channel(&self) -> Channel;

    /// Noise-free value at `instant`
    fn base_value(&self, instant: NaiveDateTime) -> f64;

    /// Final, rounded value at `instant`
    fn sample(&self, instant: NaiveDateTime, rng: &mut dyn RngCore) -> f64;

    /// One reading per grid instant, in grid order
    fn generate(&self, grid: &TimeGrid, rng: &mut dyn RngCore) -> Vec<Reading> {
        let channel = self.channel();
        let mut readings = Vec::with_capacity(grid.len());
        for &instant in grid.iter() {
            let value = self.sample(instant, rng);
            readings.push(Reading::new(instant, channel, value));
        }
        readings
    }
}

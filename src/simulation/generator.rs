//! # Series Generator
//!
//! Orchestrates one run: derives the window from the clock, builds the time
//! grid, samples every channel in a fixed order from a single threaded
//! generator and assembles the result.

use chrono::{DateTime, TimeZone, Utc};
use rand::RngCore;
use tracing::{debug, info};

use super::{
    assembler, ChannelModel, LuminosityModel, OccupancyModel, TemperatureModel, TimeGrid,
    TimeWindow,
};
use crate::domain::{ReadingTable, CHANNEL_COUNT};
use crate::error::Result;

/// Produces the smart office reading table
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    temperature: TemperatureModel,
    luminosity: LuminosityModel,
    occupancy: OccupancyModel,
}

impl SeriesGenerator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temperature: TemperatureModel::new()?,
            luminosity: LuminosityModel::new()?,
            occupancy: OccupancyModel::new(),
        })
    }

    /// Channel models in emission order
    pub fn channels(&self) -> [&dyn ChannelModel; CHANNEL_COUNT] {
        [&self.temperature, &self.luminosity, &self.occupancy]
    }

    /// Generate the week ending the local day before `now` in `tz`
    pub fn generate<Z: TimeZone>(
        &self,
        now: DateTime<Utc>,
        tz: &Z,
        rng: &mut dyn RngCore,
    ) -> Result<ReadingTable> {
        let window = TimeWindow::ending_before(now, tz)?;
        self.generate_for_window(&window, rng)
    }

    /// Generate readings for an explicit week window
    pub fn generate_for_window(
        &self,
        window: &TimeWindow,
        rng: &mut dyn RngCore,
    ) -> Result<ReadingTable> {
        let grid = TimeGrid::office_week(window)?;
        debug!(
            start = %window.start(),
            end = %window.end(),
            instants = grid.len(),
            "built time grid"
        );

        let mut series = Vec::with_capacity(CHANNEL_COUNT);
        for model in self.channels() {
            let readings = model.generate(&grid, rng);
            debug!(channel = %model.channel(), readings = readings.len(), "sampled channel");
            series.push(readings);
        }

        let table = assembler::assemble(&grid, series)?;
        info!(
            rows = table.len(),
            first = ?table.first_timestamp(),
            last = ?table.last_timestamp(),
            "generated smart office readings"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Channel;
    use crate::simulation::time_grid::GRID_LEN;
    use chrono::{NaiveDate, Timelike};
    use rand::{rngs::StdRng, SeedableRng};

    fn week() -> TimeWindow {
        TimeWindow::for_last_day(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()).unwrap()
    }

    #[test]
    fn test_generate_for_window_shape() {
        let generator = SeriesGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let table = generator.generate_for_window(&week(), &mut rng).unwrap();

        assert_eq!(table.len(), CHANNEL_COUNT * GRID_LEN);
        assert_eq!(table.len(), 2016);
        for channel in [Channel::Temperature, Channel::Luminosity, Channel::Occupancy] {
            assert_eq!(table.channel(channel).count(), GRID_LEN);
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let generator = SeriesGenerator::new().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 8, 15, 0, 0).unwrap();

        let a = generator
            .generate(now, &chrono_tz::America::Sao_Paulo, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = generator
            .generate(now, &chrono_tz::America::Sao_Paulo, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let c = generator
            .generate(now, &chrono_tz::America::Sao_Paulo, &mut StdRng::seed_from_u64(8))
            .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_base_values_at_reference_hours() {
        let generator = SeriesGenerator::new().unwrap();
        let grid = TimeGrid::office_week(&week()).unwrap();
        let [temperature, luminosity, _] = generator.channels();

        let noon = grid.iter().find(|t| t.hour() == 12).copied().unwrap();
        let two_am = grid.iter().find(|t| t.hour() == 2).copied().unwrap();

        assert!((temperature.base_value(noon) - 26.0).abs() < 1e-9);
        assert_eq!(luminosity.base_value(two_am), 0.0);
    }
}

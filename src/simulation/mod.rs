//! # Smart Office Simulation
//!
//! Synthesizes a week of sensor readings for a single office.
//!
//! ## Components
//!
//! - **Time grid**: seven whole local days sampled every 15 minutes
//! - **Temperature**: diurnal indoor temperature with Gaussian noise
//! - **Luminosity**: daylight-gated illuminance, clamped at zero
//! - **Occupancy**: business-hours presence with weekend spikes
//! - **Generator**: runs the channels and assembles one ordered table
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use smart_office_sim::simulation::SeriesGenerator;
//!
//! let generator = SeriesGenerator::new().unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let table = generator
//!     .generate(chrono::Utc::now(), &chrono_tz::America::Sao_Paulo, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(table.len(), 2016);
//! ```

pub mod assembler;
pub mod channel;
pub mod diurnal;
pub mod generator;
pub mod luminosity;
pub mod occupancy;
pub mod temperature;
pub mod time_grid;

pub use assembler::assemble;
pub use channel::ChannelModel;
pub use generator::SeriesGenerator;
pub use luminosity::LuminosityModel;
pub use occupancy::OccupancyModel;
pub use temperature::TemperatureModel;
pub use time_grid::{TimeGrid, TimeWindow, GRID_LEN, SAMPLES_PER_DAY, SAMPLE_INTERVAL_MINUTES};

//! Synthetic smart office sensor readings (temperature, luminosity and
//! occupancy) for one week, written as a CSV fixture.

pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod simulation;
pub mod telemetry;

pub use error::{GeneratorError, Result};

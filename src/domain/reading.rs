use chrono::NaiveDateTime;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{GeneratorError, Result};

/// Logical sensor stream. Declaration order is the emission order used to
/// break timestamp ties in a [`ReadingTable`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum Channel {
    #[strum(serialize = "temperatura_c")]
    Temperature,
    #[strum(serialize = "luminosidade_lux")]
    Luminosity,
    #[strum(serialize = "ocupacao_bool")]
    Occupancy,
}

/// Number of channels contributing to every instant of the grid
pub const CHANNEL_COUNT: usize = 3;

impl Channel {
    /// Identifier of the single physical sensor behind this channel
    pub fn sensor_id(&self) -> &'static str {
        match self {
            Channel::Temperature => "temp-01",
            Channel::Luminosity => "lux-01",
            Channel::Occupancy => "occ-01",
        }
    }

    /// Literal written to the `type` column
    pub fn channel_type(&self) -> &'static str {
        self.into()
    }

    /// Decimal places kept for values of this channel
    pub fn decimals(&self) -> usize {
        match self {
            Channel::Temperature => 2,
            Channel::Luminosity => 1,
            Channel::Occupancy => 0,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

/// One synthetic sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Local wall-clock instant
    pub timestamp: NaiveDateTime,
    pub channel: Channel,
    /// °C, lux, or 0/1 for occupancy
    pub value: f64,
}

impl Reading {
    pub fn new(timestamp: NaiveDateTime, channel: Channel, value: f64) -> Self {
        Self {
            timestamp,
            channel,
            value,
        }
    }

    pub fn sensor_id(&self) -> &'static str {
        self.channel.sensor_id()
    }

    pub fn channel_type(&self) -> &'static str {
        self.channel.channel_type()
    }
}

/// All readings of one generation run, ordered by timestamp.
///
/// Holds exactly one reading per channel for each of `instants` grid points.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingTable {
    readings: Vec<Reading>,
    instants: usize,
}

impl ReadingTable {
    /// Wrap readings ordered by timestamp.
    ///
    /// Each group of readings sharing a timestamp must hold every channel
    /// exactly once, and timestamps must strictly increase between groups.
    pub fn new(readings: Vec<Reading>, instants: usize) -> Result<Self> {
        let expected = CHANNEL_COUNT * instants;
        if readings.len() != expected {
            return Err(GeneratorError::DataIntegrity {
                expected,
                actual: readings.len(),
            });
        }

        if let Some(w) = readings.windows(2).find(|w| w[1].timestamp < w[0].timestamp) {
            return Err(GeneratorError::Misaligned(format!(
                "reading at {} follows reading at {}",
                w[1].timestamp, w[0].timestamp
            )));
        }

        let mut previous = None;
        for group in readings.chunks(CHANNEL_COUNT) {
            let timestamp = group[0].timestamp;
            if group.iter().any(|r| r.timestamp != timestamp) || previous == Some(timestamp) {
                return Err(GeneratorError::Misaligned(format!(
                    "instant {} does not hold exactly {} readings",
                    timestamp, CHANNEL_COUNT
                )));
            }
            if let Some(missing) = Channel::iter().find(|c| group.iter().all(|r| r.channel != *c)) {
                return Err(GeneratorError::Misaligned(format!(
                    "instant {} has no {} reading",
                    timestamp, missing
                )));
            }
            previous = Some(timestamp);
        }

        Ok(Self {
            readings,
            instants,
        })
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of grid instants covered
    pub fn instants(&self) -> usize {
        self.instants
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.readings.first().map(|r| r.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.readings.last().map(|r| r.timestamp)
    }

    /// Readings of a single channel, in timestamp order
    pub fn channel(&self, channel: Channel) -> impl Iterator<Item = &Reading> + '_ {
        self.readings.iter().filter(move |r| r.channel == channel)
    }
}

impl<'a> IntoIterator for &'a ReadingTable {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

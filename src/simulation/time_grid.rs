//! # Time Grid
//!
//! Builds the sampling instants for one generation run: seven whole local
//! calendar days ending the day before "today", sampled every 15 minutes.
//!
//! The grid lives in naive local wall-clock time. The timezone is only used
//! to decide which calendar day is "yesterday"; daylight-saving transitions
//! therefore never add or drop samples and every day holds exactly
//! [`SAMPLES_PER_DAY`] instants.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{GeneratorError, Result};

/// Sampling interval in minutes
pub const SAMPLE_INTERVAL_MINUTES: i64 = 15;

/// Number of whole local days covered by a window
pub const WINDOW_DAYS: u64 = 7;

/// Samples per local calendar day at the default interval
pub const SAMPLES_PER_DAY: usize = (24 * 60 / SAMPLE_INTERVAL_MINUTES) as usize;

/// Instants in a full window
pub const GRID_LEN: usize = WINDOW_DAYS as usize * SAMPLES_PER_DAY;

/// Default sampling step
pub fn sample_interval() -> Duration {
    Duration::minutes(SAMPLE_INTERVAL_MINUTES)
}

/// Closed local wall-clock interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end < start {
            return Err(GeneratorError::InvalidWindow(format!(
                "end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Window of [`WINDOW_DAYS`] whole days whose last day is `last_day`.
    ///
    /// Starts at 00:00:00 on the first day and ends at 23:59:00 on `last_day`.
    pub fn for_last_day(last_day: NaiveDate) -> Result<Self> {
        let first_day = last_day
            .checked_sub_days(Days::new(WINDOW_DAYS - 1))
            .ok_or_else(|| {
                GeneratorError::InvalidWindow(format!("no first day for {}", last_day))
            })?;

        let start = first_day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| GeneratorError::InvalidWindow("invalid start time".into()))?;
        let end = last_day
            .and_hms_opt(23, 59, 0)
            .ok_or_else(|| GeneratorError::InvalidWindow("invalid end time".into()))?;

        Self::new(start, end)
    }

    /// Window ending on the local calendar day before `now` in `tz`.
    pub fn ending_before<Z: TimeZone>(now: DateTime<Utc>, tz: &Z) -> Result<Self> {
        let today = now.with_timezone(tz).date_naive();
        let last_day = today.pred_opt().ok_or_else(|| {
            GeneratorError::InvalidWindow(format!("no day before {}", today))
        })?;
        Self::for_last_day(last_day)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Last local calendar day of the window
    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }
}

/// Ordered, evenly spaced sampling instants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    instants: Vec<NaiveDateTime>,
}

impl TimeGrid {
    /// Every `start + k * step` that does not pass the window end.
    ///
    /// The window start is always included; the end is included when it
    /// falls on a step.
    pub fn build(window: &TimeWindow, step: Duration) -> Result<Self> {
        if step <= Duration::zero() {
            return Err(GeneratorError::InvalidWindow(format!(
                "sampling step must be positive, got {}",
                step
            )));
        }

        let mut instants = Vec::new();
        let mut current = window.start();
        while current <= window.end() {
            instants.push(current);
            match current.checked_add_signed(step) {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(Self { instants })
    }

    /// Grid for a full office week, verified to hold [`GRID_LEN`] instants.
    pub fn office_week(window: &TimeWindow) -> Result<Self> {
        let grid = Self::build(window, sample_interval())?;
        if grid.len() != GRID_LEN {
            return Err(GeneratorError::DataIntegrity {
                expected: GRID_LEN,
                actual: grid.len(),
            });
        }
        Ok(grid)
    }

    pub fn instants(&self) -> &[NaiveDateTime] {
        &self.instants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDateTime> {
        self.instants.iter()
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.instants.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.instants.last().copied()
    }
}

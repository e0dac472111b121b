//! Flattens per-channel series into one timestamp-ordered table.

use tracing::debug;

use crate::domain::{Reading, ReadingTable};
use crate::error::{GeneratorError, Result};

use super::TimeGrid;

/// Concatenate channel series in the given order and stable-sort by
/// timestamp, so readings sharing an instant keep their channel order.
///
/// Every series must carry exactly the grid's instants, in grid order.
pub fn assemble<I>(grid: &TimeGrid, series: I) -> Result<ReadingTable>
where
    I: IntoIterator<Item = Vec<Reading>>,
{
    let mut readings = Vec::new();
    for (index, channel_series) in series.into_iter().enumerate() {
        let on_grid = channel_series.len() == grid.len()
            && channel_series
                .iter()
                .zip(grid.iter())
                .all(|(r, t)| r.timestamp == *t);
        if !on_grid {
            return Err(GeneratorError::Misaligned(format!(
                "series {} does not follow the time grid",
                index
            )));
        }
        readings.extend(channel_series);
    }
    readings.sort_by_key(|r| r.timestamp);

    debug!(rows = readings.len(), instants = grid.len(), "assembled reading table");
    ReadingTable::new(readings, grid.len())
}

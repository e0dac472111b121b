use chrono::NaiveDateTime;
use std::fmt;
use strum::IntoEnumIterator;

use super::csv_writer::TIMESTAMP_FORMAT;
use crate::domain::{Channel, ReadingTable};

/// Console report printed after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub rows: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    /// Row count per channel, in emission order
    pub per_type: Vec<(Channel, usize)>,
}

impl TableSummary {
    pub fn from_table(table: &ReadingTable) -> Self {
        let per_type = Channel::iter()
            .map(|channel| (channel, table.channel(channel).count()))
            .collect();

        Self {
            rows: table.len(),
            first: table.iter().map(|r| r.timestamp).min(),
            last: table.iter().map(|r| r.timestamp).max(),
            per_type,
        }
    }

    pub fn count(&self, channel: Channel) -> usize {
        self.per_type
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rows generated: {}", self.rows)?;
        match (self.first, self.last) {
            (Some(first), Some(last)) => writeln!(
                f,
                "Period: {} -> {}",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            )?,
            _ => writeln!(f, "Period: empty")?,
        }
        writeln!(f, "type")?;
        for (channel, count) in &self.per_type {
            writeln!(f, "{:<18}{}", channel.channel_type(), count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Reading;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_summary_counts_and_period() {
        let t0 = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let t1 = t0 + Duration::minutes(15);
        let readings = [t0, t1]
            .into_iter()
            .flat_map(|t| Channel::iter().map(move |c| Reading::new(t, c, 0.0)))
            .collect();
        let table = ReadingTable::new(readings, 2).unwrap();

        let summary = TableSummary::from_table(&table);
        assert_eq!(summary.rows, 6);
        assert_eq!(summary.first, Some(t0));
        assert_eq!(summary.last, Some(t1));
        assert_eq!(summary.count(Channel::Occupancy), 2);

        let text = summary.to_string();
        assert!(text.contains("Rows generated: 6"));
        assert!(text.contains("Period: 2024-01-01 00:00:00 -> 2024-01-01 00:15:00"));
        assert!(text.contains("luminosidade_lux  2"));
    }
}

//! CSV rendering and atomic file output for reading tables.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::domain::{Reading, ReadingTable};
use crate::error::{GeneratorError, Result};

/// Naive local timestamp layout of the `timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
struct CsvRow {
    timestamp: String,
    sensor_id: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    value: String,
}

impl From<&Reading> for CsvRow {
    fn from(reading: &Reading) -> Self {
        Self {
            timestamp: reading.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sensor_id: reading.sensor_id(),
            kind: reading.channel_type(),
            value: reading.channel.format_value(reading.value),
        }
    }
}

/// Render the table with a `timestamp,sensor_id,type,value` header
pub fn render_csv(table: &ReadingTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::with_capacity(table.len() * 48));
    for reading in table {
        writer.serialize(CsvRow::from(reading))?;
    }
    writer
        .into_inner()
        .map_err(|e| GeneratorError::Csv(e.into_error().into()))
}

/// Render the table and replace `path` with it in one step.
///
/// Returns the number of bytes written.
pub fn write_table(table: &ReadingTable, path: &Path) -> Result<usize> {
    let bytes = render_csv(table)?;
    write_atomic(path, &bytes)?;
    info!(path = %path.display(), rows = table.len(), bytes = bytes.len(), "wrote reading table");
    Ok(bytes.len())
}

/// Write to a sibling temporary file, then rename over `path`.
/// The temporary file is removed on failure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_path(path)?;

    let result = fs::write(&tmp, bytes)
        .map_err(|source| GeneratorError::Io {
            path: tmp.clone(),
            source,
        })
        .and_then(|_| {
            fs::rename(&tmp, path).map_err(|source| GeneratorError::Io {
                path: path.to_path_buf(),
                source,
            })
        });

    if let Err(err) = &result {
        warn!(path = %path.display(), error = %err, "failed to write output");
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| GeneratorError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name"),
    })?;

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

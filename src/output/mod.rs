pub mod csv_writer;
pub mod summary;

pub use csv_writer::{render_csv, write_atomic, write_table, TIMESTAMP_FORMAT};
pub use summary::TableSummary;

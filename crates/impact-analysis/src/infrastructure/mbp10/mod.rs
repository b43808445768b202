//! Databento MBP-10 CSV input

mod loader;
mod schema;

pub use loader::{Mbp10Loader, date_from_filename, parse_snapshots, read_snapshots};
pub use schema::{LevelColumns, Mbp10Schema, RowRejection};

mod console;
mod csv_writer;

pub use console::ConsoleReport;
pub use csv_writer::{CSV_HEADER, CsvImpactWriter};

//! Impact curve CSV output
//!
//! One file per symbol and side, `<SYMBOL>_<side>_impact.csv`:
//!
//! ```text
//! order_size,avg_impact,impact_bps
//! 10,0.000333,3.333333
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use csv::Writer as CsvWriter;
use tempfile::NamedTempFile;

use crate::application::CurveWriter;
use crate::domain::ImpactCurve;
use crate::error::{AnalysisError, Result};

pub const CSV_HEADER: [&str; 3] = ["order_size", "avg_impact", "impact_bps"];

#[derive(Debug, Clone)]
pub struct CsvImpactWriter {
    output_dir: PathBuf,
    precision: usize,
}

impl CsvImpactWriter {
    pub const DEFAULT_PRECISION: usize = 6;

    pub fn new(output_dir: impl Into<PathBuf>, precision: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            precision,
        }
    }

    pub fn path_for(&self, curve: &ImpactCurve) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}_impact.csv", curve.symbol, curve.side))
    }

    /// Full file body for `curve`
    pub fn render(&self, curve: &ImpactCurve) -> Result<Vec<u8>> {
        let mut wtr = CsvWriter::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;

        let p = self.precision;
        for result in &curve.results {
            wtr.write_record(&[
                result.order_size.to_string(),
                format!("{:.p$}", result.avg_impact),
                format!("{:.p$}", result.impact_bps),
            ])?;
        }

        wtr.into_inner()
            .map_err(|e| AnalysisError::io(self.path_for(curve), e.into_error()))
    }
}

impl Default for CsvImpactWriter {
    fn default() -> Self {
        Self::new(".", Self::DEFAULT_PRECISION)
    }
}

impl CurveWriter for CsvImpactWriter {
    fn write_curve(&self, curve: &ImpactCurve) -> Result<PathBuf> {
        let body = self.render(curve)?;
        let path = self.path_for(curve);

        fs::create_dir_all(&self.output_dir).map_err(|e| AnalysisError::io(&self.output_dir, e))?;

        // Staged next to the target so the rename stays on one filesystem
        let mut staged =
            NamedTempFile::new_in(&self.output_dir).map_err(|e| AnalysisError::io(&self.output_dir, e))?;
        if let Err(e) = staged.write_all(&body).and_then(|()| staged.as_file().sync_all()) {
            return Err(AnalysisError::io(staged.path(), e));
        }
        staged
            .persist(&path)
            .map_err(|e| AnalysisError::io(&path, e.error))?;
        Ok(path)
    }
}

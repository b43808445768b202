//! MBP-10 Schema Binding
//!
//! Maps CSV columns onto snapshot fields. Databento MBP-10 files lay each
//! depth tier out as six columns starting at index 13:
//!
//! ```text
//! 13 + 6i  bid_px_NN    14 + 6i  ask_px_NN
//! 15 + 6i  bid_sz_NN    16 + 6i  ask_sz_NN
//! 17 + 6i  bid_ct_NN    18 + 6i  ask_ct_NN
//! ```
//!
//! The header binding looks the same columns up by name so that files with
//! extra or reordered columns still load.

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;
use trading_core::{ParseError, Price, PriceLevel, Quantity};

use crate::domain::{BOOK_DEPTH, BookSnapshot};
use crate::infrastructure::config::SchemaMode;

/// Why a data row did not become a snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("row has {fields} fields, need at least {required}")]
    TooShort { fields: usize, required: usize },

    #[error("column {column}: {error}")]
    Malformed { column: usize, error: ParseError },

    #[error("best bid or best ask is not positive")]
    NoTouch,
}

/// Column indices of one depth tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColumns {
    pub bid_px: usize,
    pub ask_px: usize,
    pub bid_sz: usize,
    pub ask_sz: usize,
}

impl LevelColumns {
    const fn fixed(level: usize) -> Self {
        Self {
            bid_px: 13 + 6 * level,
            ask_px: 14 + 6 * level,
            bid_sz: 15 + 6 * level,
            ask_sz: 16 + 6 * level,
        }
    }

    fn max_index(&self) -> usize {
        self.bid_px.max(self.ask_px).max(self.bid_sz).max(self.ask_sz)
    }
}

/// Resolved column layout for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mbp10Schema {
    timestamp: usize,
    levels: [LevelColumns; BOOK_DEPTH],
    min_fields: usize,
    mode: SchemaMode,
}

impl Mbp10Schema {
    /// Minimum row width of the fixed layout (through `ask_sz_09`)
    pub const FIXED_MIN_FIELDS: usize = 71;

    pub fn fixed_offsets() -> Self {
        let levels: [LevelColumns; BOOK_DEPTH] = std::array::from_fn(LevelColumns::fixed);
        Self {
            timestamp: 0,
            levels,
            min_fields: Self::FIXED_MIN_FIELDS,
            mode: SchemaMode::FixedOffsets,
        }
    }

    /// Bind by column name; `None` if any tier column is missing
    pub fn from_header(header: &StringRecord) -> Option<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);

        let mut levels = [LevelColumns::fixed(0); BOOK_DEPTH];
        for (i, slot) in levels.iter_mut().enumerate() {
            *slot = LevelColumns {
                bid_px: find(&format!("bid_px_{i:02}"))?,
                ask_px: find(&format!("ask_px_{i:02}"))?,
                bid_sz: find(&format!("bid_sz_{i:02}"))?,
                ask_sz: find(&format!("ask_sz_{i:02}"))?,
            };
        }

        let timestamp = find("ts_recv").or_else(|| find("ts_event")).unwrap_or(0);
        let min_fields = levels
            .iter()
            .map(LevelColumns::max_index)
            .fold(timestamp, usize::max)
            + 1;

        Some(Self {
            timestamp,
            levels,
            min_fields,
            mode: SchemaMode::Header,
        })
    }

    /// Binding for a file with `header` under the configured mode
    pub fn resolve(mode: SchemaMode, header: &StringRecord) -> Self {
        match mode {
            SchemaMode::FixedOffsets => Self::fixed_offsets(),
            SchemaMode::Header => Self::from_header(header).unwrap_or_else(Self::fixed_offsets),
        }
    }

    pub fn mode(&self) -> SchemaMode {
        self.mode
    }

    pub fn min_fields(&self) -> usize {
        self.min_fields
    }

    /// Turn a data row into a snapshot
    ///
    /// Empty fields leave the tier at zero. The row must carry a positive
    /// best bid and best ask.
    pub fn parse_row(
        &self,
        record: &StringRecord,
        date: Option<NaiveDate>,
    ) -> Result<BookSnapshot, RowRejection> {
        if record.len() < self.min_fields {
            return Err(RowRejection::TooShort {
                fields: record.len(),
                required: self.min_fields,
            });
        }

        let timestamp = record.get(self.timestamp).unwrap_or_default().trim();
        let mut snapshot = BookSnapshot::empty(timestamp, date);

        for (i, columns) in self.levels.iter().enumerate() {
            snapshot.bids[i] = PriceLevel::new(
                field(record, columns.bid_px, Price::parse)?.unwrap_or_default(),
                field(record, columns.bid_sz, Quantity::parse)?.unwrap_or_default(),
            );
            snapshot.asks[i] = PriceLevel::new(
                field(record, columns.ask_px, Price::parse)?.unwrap_or_default(),
                field(record, columns.ask_sz, Quantity::parse)?.unwrap_or_default(),
            );
        }

        if !snapshot.best_bid().price.is_positive() || !snapshot.best_ask().price.is_positive() {
            return Err(RowRejection::NoTouch);
        }
        Ok(snapshot)
    }
}

/// Parse column `index`; `Ok(None)` when the field is empty
fn field<T>(
    record: &StringRecord,
    index: usize,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Result<Option<T>, RowRejection> {
    match record.get(index).map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .map_err(|error| RowRejection::Malformed {
                column: index,
                error,
            }),
    }
}

//! Completion statistics over categorized, tagged record files.
//!
//! Input rows are delimited text where the third field is a category, the
//! fourth a space-separated tag list and the fifth a solved marker. The
//! [`Progress`] accumulator tallies totals and solved counts per category,
//! per tag and globally, and renders a percentage report via `Display`.

mod progress;
pub use progress::Progress;

mod record;
pub use record::{read_records, ReadOptions, Record, Tags};

mod tally;
pub use tally::Tally;

/// Minimum number of fields a row must have to be a valid record.
pub const MIN_FIELDS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "line {line}: expected at least {} fields, found {fields}",
        MIN_FIELDS
    )]
    MalformedRecord { line: u64, fields: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

mod filing;
mod news;
mod raw_record;
mod vertical;

pub use filing::FilingRecord;
pub use news::NewsRecord;
pub use raw_record::RawRecord;
pub use vertical::Vertical;

use serde::Serialize;

/// Record type produced by one vertical of the pipeline
pub trait VerticalRecord: Serialize + Clone + Send + Sync + 'static {
    const VERTICAL: Vertical;

    /// Select and rename upstream columns; absent columns become `""`
    fn from_raw(raw: &RawRecord) -> Self;

    /// Upstream date string used for ordering
    fn date(&self) -> &str;
}

/// Ordered records for one ticker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<R> {
    pub ticker: String,
    pub records: Vec<R>,
}

impl<R> ResultSet<R> {
    pub fn new(ticker: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            ticker: ticker.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

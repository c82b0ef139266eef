use crate::constants::filing_column;
use crate::models::{RawRecord, Vertical, VerticalRecord};
use serde::Serialize;

/// A single SEC filing as exposed by the API
///
/// Dates keep the upstream formatting (MM/DD/YYYY).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRecord {
    pub filing_date: String,
    pub report_date: String,
    pub form: String,
    pub description: String,
    pub filing_url: String,
    pub document_url: String,
}

impl VerticalRecord for FilingRecord {
    const VERTICAL: Vertical = Vertical::SecFilings;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            filing_date: raw.field(filing_column::FILING_DATE).to_string(),
            report_date: raw.field(filing_column::REPORT_DATE).to_string(),
            form: raw.field(filing_column::FORM).to_string(),
            description: raw.field(filing_column::DESCRIPTION).to_string(),
            filing_url: raw.field(filing_column::FILING).to_string(),
            document_url: raw.field(filing_column::DOCUMENT).to_string(),
        }
    }

    fn date(&self) -> &str {
        &self.filing_date
    }
}

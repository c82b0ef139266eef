use crate::constants::news_column;
use crate::models::{RawRecord, Vertical, VerticalRecord};
use serde::Serialize;

/// A single news item as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    /// YYYY-MM-DD HH:MM:SS, as sent upstream
    pub date: String,
    pub title: String,
    pub url: String,
    pub source: String,
    pub category: String,
}

impl VerticalRecord for NewsRecord {
    const VERTICAL: Vertical = Vertical::News;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            date: raw.field(news_column::DATE).to_string(),
            title: raw.field(news_column::TITLE).to_string(),
            url: raw
                .field_any(&[news_column::URL, news_column::URL_UPPER])
                .to_string(),
            source: raw.field(news_column::SOURCE).to_string(),
            category: raw.field(news_column::CATEGORY).to_string(),
        }
    }

    fn date(&self) -> &str {
        &self.date
    }
}

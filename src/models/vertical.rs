//! Disclosure vertical served by the upstream export
//!
//! Each vertical fixes its endpoint, query parameters, date format and sort
//! direction. Everything else in the pipeline is shared.

use crate::config::AppConfig;
use crate::constants::query;
use crate::services::date_normalizer::DateFormat;
use crate::services::sorter::SortDirection;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    /// SEC filings, oldest first
    ///
    /// Dates: MM/DD/YYYY
    SecFilings,

    /// Ticker news, newest first
    ///
    /// Dates: YYYY-MM-DD HH:MM:SS
    News,
}

impl Vertical {
    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Vertical::SecFilings => "SEC filings",
            Vertical::News => "news",
        }
    }

    /// Route segment and log field value
    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::SecFilings => "sec-filings",
            Vertical::News => "news",
        }
    }

    pub fn date_format(&self) -> DateFormat {
        match self {
            Vertical::SecFilings => DateFormat::UsSlashDate,
            Vertical::News => DateFormat::IsoDateTime,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            Vertical::SecFilings => SortDirection::Ascending,
            Vertical::News => SortDirection::Descending,
        }
    }

    /// Export endpoint for this vertical
    pub fn endpoint<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            Vertical::SecFilings => &config.sec_filings_url,
            Vertical::News => &config.news_url,
        }
    }

    /// Query parameters in the order the upstream documents them
    ///
    /// Filings are requested newest-first upstream; the pipeline still sorts
    /// locally because the upstream order is not guaranteed stable.
    pub fn query_params(&self, ticker: &str, credential: &str) -> Vec<(&'static str, String)> {
        match self {
            Vertical::SecFilings => vec![
                (query::TICKER, ticker.to_string()),
                (query::ORDER, query::FILINGS_ORDER.to_string()),
                (query::AUTH, credential.to_string()),
            ],
            Vertical::News => vec![
                (query::VIEW, query::NEWS_VIEW.to_string()),
                (query::TICKER, ticker.to_string()),
                (query::CATEGORY, query::NEWS_CATEGORY.to_string()),
                (query::AUTH, credential.to_string()),
            ],
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

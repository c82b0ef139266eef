//! Fetch → decode → normalize → sort, shared by every vertical
//!
//! A vertical is described by its [`VerticalRecord`] type: the record mapping,
//! and through [`Vertical`] the endpoint, date format and sort direction.

use crate::constants::{MARKET_TIMEZONE, RECENT_NEWS_LIMIT};
use crate::error::Result;
use crate::models::{FilingRecord, NewsRecord, RawRecord, ResultSet, Vertical, VerticalRecord};
use crate::services::csv_decoder::decode;
use crate::services::date_normalizer::{normalize, sort_key, NormalizedTimestamp};
use crate::services::fetcher::Fetcher;
use crate::services::sorter::{current_date_in, filter_same_day, recent, sort_by_timestamp, Clock, SystemClock};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Map raw rows into records and order them by their vertical's date.
///
/// Each date is normalized once here; the result is the only ordering pass.
pub fn ingest<R: VerticalRecord>(rows: &[RawRecord]) -> Vec<R> {
    let vertical = R::VERTICAL;
    let format = vertical.date_format();

    let keyed: Vec<(NormalizedTimestamp, R)> = rows
        .iter()
        .map(|row| {
            let record = R::from_raw(row);
            (sort_key(record.date(), format), record)
        })
        .collect();

    let unparsable = keyed.iter().filter(|(key, _)| key.is_sentinel()).count();
    if unparsable > 0 {
        debug!(%vertical, unparsable, "Records with unparsable dates sorted as earliest");
    }

    sort_by_timestamp(keyed, |(key, _)| *key, vertical.direction())
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}

/// News split into the terminal's "today" and "recent" views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDigest {
    pub ticker: String,
    /// Current date in the market timezone
    pub today: NaiveDate,
    pub todays: Vec<NewsRecord>,
    pub recent: Vec<NewsRecord>,
    pub total: usize,
}

impl NewsDigest {
    /// Build both views from a newest-first result set
    pub fn build(news: ResultSet<NewsRecord>, today: NaiveDate) -> Self {
        let format = Vertical::News.date_format();
        let todays = filter_same_day(&news.records, |item| normalize(&item.date, format).ok(), today);
        let recent = recent(&news.records, RECENT_NEWS_LIMIT);

        Self {
            ticker: news.ticker,
            today,
            todays,
            recent,
            total: news.records.len(),
        }
    }
}

/// Entry point shared by the API and the terminal
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    clock: Arc<dyn Clock>,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher) -> Self {
        Self::with_clock(fetcher, Arc::new(SystemClock))
    }

    pub fn with_clock(fetcher: Fetcher, clock: Arc<dyn Clock>) -> Self {
        Self { fetcher, clock }
    }

    /// Run one vertical for `ticker`. Any failure aborts the whole result.
    #[instrument(skip(self), fields(vertical = %R::VERTICAL))]
    pub async fn run<R: VerticalRecord>(&self, ticker: &str) -> Result<ResultSet<R>> {
        let credential = self.fetcher.config().credential();
        let body = self.fetcher.fetch(R::VERTICAL, ticker, credential).await?;

        let rows = decode(&body)?;
        let records = ingest::<R>(&rows);

        info!(records = records.len(), "Pipeline complete");
        Ok(ResultSet::new(ticker, records))
    }

    /// SEC filings, oldest first
    pub async fn filings(&self, ticker: &str) -> Result<ResultSet<FilingRecord>> {
        self.run::<FilingRecord>(ticker).await
    }

    /// News, newest first
    pub async fn news(&self, ticker: &str) -> Result<ResultSet<NewsRecord>> {
        self.run::<NewsRecord>(ticker).await
    }

    /// News with today's items (US Eastern) and the most recent items
    pub async fn news_digest(&self, ticker: &str) -> Result<NewsDigest> {
        let news = self.news(ticker).await?;
        let today = current_date_in(MARKET_TIMEZONE, self.clock.as_ref());
        Ok(NewsDigest::build(news, today))
    }
}

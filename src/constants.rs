//! Upstream Export Constants
//!
//! Endpoints, query parameters and column names of the Finviz Elite CSV
//! export. Column names are matched verbatim against the CSV header.

/// Default SEC filings export endpoint
pub const DEFAULT_SEC_FILINGS_URL: &str = "https://elite.finviz.com/export/latest-filings";

/// Default news export endpoint
pub const DEFAULT_NEWS_URL: &str = "https://elite.finviz.com/news_export.ashx";

/// Environment variable holding the upstream credential
pub const API_TOKEN_ENV: &str = "FINVIZ_API_TOKEN";

/// Timezone used to decide what "today" means for news (US Eastern)
pub const MARKET_TIMEZONE: chrono_tz::Tz = chrono_tz::America::New_York;

/// Short label printed next to market dates
pub const MARKET_TIMEZONE_LABEL: &str = "EST";

/// Number of items in the "recent news" view
pub const RECENT_NEWS_LIMIT: usize = 10;

/// Service information returned by `GET /`
pub const API_TITLE: &str = "Stocks Scanner API";
pub const API_VERSION: &str = "1.0.0";
pub const API_DESCRIPTION: &str =
    "API for scanning stocks, retrieving SEC filings, and reading market news";

/// Query parameter names understood by the export endpoints
pub mod query {
    pub const TICKER: &str = "t";
    pub const AUTH: &str = "auth";
    pub const ORDER: &str = "o";
    pub const VIEW: &str = "v";
    pub const CATEGORY: &str = "c";

    /// Newest filings first
    pub const FILINGS_ORDER: &str = "-filingDate";
    /// Stock news view
    pub const NEWS_VIEW: &str = "3";
    /// Ticker news category
    pub const NEWS_CATEGORY: &str = "1";
}

/// Column names of the SEC filings export
pub mod filing_column {
    pub const FILING_DATE: &str = "Filing Date";
    pub const REPORT_DATE: &str = "Report Date";
    pub const FORM: &str = "Form";
    pub const DESCRIPTION: &str = "Description";
    pub const FILING: &str = "Filing";
    pub const DOCUMENT: &str = "Document";
}

/// Column names of the news export
pub mod news_column {
    pub const DATE: &str = "Date";
    pub const TITLE: &str = "Title";
    pub const URL: &str = "Url";
    /// Older exports spell the link column in capitals
    pub const URL_UPPER: &str = "URL";
    pub const SOURCE: &str = "Source";
    pub const CATEGORY: &str = "Category";
}

pub mod csv_decoder;
pub mod date_normalizer;
pub mod fetcher;
pub mod pipeline;
pub mod sorter;

pub use csv_decoder::decode;
pub use date_normalizer::{format_news_time, normalize, sort_key, DateFormat, DateParseWarning, NormalizedTimestamp};
pub use fetcher::{Fetcher, ReqwestTransport, Transport};
pub use pipeline::{ingest, NewsDigest, Pipeline};
pub use sorter::{Clock, FixedClock, SortDirection, SystemClock};

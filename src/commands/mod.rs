pub mod news;
pub mod sec;
pub mod serve;
pub mod shell;

use crate::config::AppConfig;
use crate::services::{Fetcher, Pipeline};
use std::sync::Arc;

/// Pipeline wired to the real transport
pub fn build_pipeline(config: Arc<AppConfig>) -> Pipeline {
    Pipeline::new(Fetcher::from_config(config))
}

/// Pipeline configured from the process environment
pub fn pipeline_from_env() -> Pipeline {
    build_pipeline(Arc::new(AppConfig::from_env()))
}

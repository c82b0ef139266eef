use crate::commands::build_pipeline;
use crate::config::AppConfig;
use crate::server::{self, AppState};
use std::net::IpAddr;
use std::sync::Arc;

pub async fn run(host: Option<IpAddr>, port: Option<u16>) {
    let mut config = AppConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    println!("🚀 Starting stock scanner API on {}", config.socket_addr());

    let config = Arc::new(config);
    let pipeline = build_pipeline(config.clone());

    if let Err(e) = server::serve(&config, AppState::new(pipeline)).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}

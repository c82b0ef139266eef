use clap::{Parser, Subcommand};
use std::net::IpAddr;

use crate::commands;

#[derive(Parser)]
#[command(name = "stock-scanner")]
#[command(about = "SEC filings and news scanner backed by Finviz exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the JSON API server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show today's and recent news for a ticker
    News {
        /// Ticker symbol, e.g. AAPL
        ticker: String,
    },
    /// Show SEC filings for a ticker, oldest first
    Sec {
        /// Ticker symbol, e.g. AAPL
        ticker: String,
    },
    /// Interactive shell (default)
    Shell,
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Serve { host, port } => {
            commands::serve::run(host, port).await;
        }
        Commands::News { ticker } => {
            commands::news::run(ticker).await;
        }
        Commands::Sec { ticker } => {
            commands::sec::run(ticker).await;
        }
        Commands::Shell => {
            commands::shell::run().await;
        }
    }
}

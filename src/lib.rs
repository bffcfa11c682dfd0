// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;
pub mod sentiment;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries)
pub use domain::Symbol;
pub use engine::{MarketInsights, PipelineError, PipelineReport, PricePipeline};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Daily crypto price forecast and signals", long_about = None)]
pub struct Cli {
    /// Instrument to analyse
    #[arg(long, default_value_t = Symbol::BtcUsd)]
    pub symbol: Symbol,

    /// Directory holding <TICKER>.csv daily price files
    #[arg(long, conflicts_with = "demo", required_unless_present = "demo")]
    pub data_dir: Option<PathBuf>,

    /// Use the built-in synthetic series instead of CSV files
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Fetch latest headlines for the symbol
    #[arg(long, default_value_t = false, requires = "news_api_key")]
    pub news: bool,

    /// API key for the news endpoint
    #[arg(long, env = config::NEWS.client.api_key_env, hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// Number of headlines to show
    #[arg(long, default_value_t = config::NEWS.client.default_limit)]
    pub news_limit: usize,

    /// Free text to score for sentiment
    #[arg(long)]
    pub sentiment: Option<String>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_run_needs_no_data_dir() {
        let cli = Cli::try_parse_from(["crypto-forecast", "--demo", "--symbol", "eth-usd"]).unwrap();
        assert!(cli.demo);
        assert_eq!(cli.symbol, Symbol::EthUsd);
        assert_eq!(cli.news_limit, 5);
    }

    #[test]
    fn source_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["crypto-forecast"]).is_err());
        assert!(Cli::try_parse_from(["crypto-forecast", "--demo", "--data-dir", "x"]).is_err());
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        assert!(Cli::try_parse_from(["crypto-forecast", "--demo", "--symbol", "DOGE-USD"]).is_err());
    }
}

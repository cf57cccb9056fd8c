//! Gen-AI stock analyst CLI
//!
//! Fetches fundamentals, news, and a year of price history for one
//! ticker, derives technical signals, and prints a generated analysis.
//!
//! # Usage
//!
//! ```bash
//! # Point the generator at a hosted or local OpenAI-compatible server
//! export OPENAI_API_BASE="http://localhost:1234/v1"
//! export OPENAI_MODEL="your-model-name"
//!
//! # Optional provider keys; sources degrade gracefully without them
//! export ALPHA_VANTAGE_API_KEY="..."
//! export FINNHUB_API_KEY="..."
//!
//! cargo run --bin analyst -p analyst-stock -- AAPL
//! ```

use analyst_llm::SharedGenerator;
use analyst_stock::{
    AnalysisEngine, AnalystConfig, CliFormatter, FundamentalsScope, LiveMarketData,
    ReportFormatter,
};
use clap::Parser;
use std::env;
use std::sync::Arc;

/// Gen-AI fundamental + technical stock analyst
#[derive(Debug, Parser)]
#[command(name = "analyst", version, about)]
struct Cli {
    /// Stock ticker to analyze (e.g. AAPL, RELIANCE.NS)
    ticker: String,

    /// Fetch only price and market cap instead of full fundamentals
    #[arg(long)]
    reduced: bool,

    /// Model identifier passed to the generation backend
    #[arg(long)]
    model: Option<String>,

    /// Maximum tokens the generator may produce
    #[arg(long)]
    max_tokens: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,analyst_stock=info".to_string()),
        )
        .init();

    let cli = Cli::parse();

    let mut builder = AnalystConfig::builder().with_env_keys();
    if let Some(max_tokens) = cli.max_tokens {
        builder = builder.max_output_tokens(max_tokens);
    }
    if cli.reduced {
        builder = builder.fundamentals_scope(FundamentalsScope::PriceOnly);
    }

    let mut config = builder.build()?.with_env_model();
    if let Some(model) = cli.model {
        config.model = model;
    }
    config.validate()?;
    let config = Arc::new(config);

    let source = Arc::new(LiveMarketData::new(Arc::clone(&config)));
    let generator = Arc::new(SharedGenerator::new());
    let engine = AnalysisEngine::new(source, generator, config);

    let formatter = CliFormatter;
    match engine.analyze(&cli.ticker).await {
        Ok(outcome) => {
            println!("{}", formatter.format_outcome(&outcome));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e.to_string()));
            Err(e.into())
        }
    }
}

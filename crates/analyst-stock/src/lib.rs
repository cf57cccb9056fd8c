//! Gen-AI stock analyst pipeline
//!
//! This crate ingests per-ticker market data, derives technical-analysis
//! signals, and assembles a structured prompt for a generative model.
//! It includes:
//!
//! - Fault-isolated data acquisition (fundamentals, news, price history)
//! - Technical indicators (SMA, RSI, MACD) over daily closes
//! - Qualitative signal classification (trend, momentum, MACD trend)
//! - Report assembly and fixed-structure prompt rendering
//! - An analysis engine coordinating one request end to end
//!
//! # Architecture
//!
//! Each data class fetches behind its own fault wall and degrades to an
//! explicit sentinel state; downstream stages branch only on "is this
//! value available", never on "did a fetch fail". The generation call is
//! the single failure mode that aborts a request.
//!
//! # Example
//!
//! ```rust,ignore
//! use analyst_stock::{AnalysisEngine, AnalystConfig, LiveMarketData};
//! use analyst_llm::SharedGenerator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(AnalystConfig::default().with_env_keys());
//!     let source = Arc::new(LiveMarketData::new(Arc::clone(&config)));
//!     let generator = Arc::new(SharedGenerator::new());
//!
//!     let engine = AnalysisEngine::new(source, generator, config);
//!     let outcome = engine.analyze("AAPL").await?;
//!     println!("{}", outcome.analysis_text);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod interface;
pub mod market;
pub mod prompts;
pub mod report;
pub mod signals;
pub mod types;

// Re-export main types for convenience
pub use config::{AnalystConfig, FundamentalsScope};
pub use engine::{AnalysisEngine, AnalysisOutcome};
pub use error::{AnalystError, Result};
pub use indicators::{IndicatorResult, compute};
pub use interface::{CliFormatter, ReportFormatter};
pub use market::{LiveMarketData, MarketDataFacade, MarketDataSource};
pub use report::AnalysisReport;
pub use signals::{MacdTrend, Momentum, SignalSet, Trend, classify};
pub use types::{FundamentalsSnapshot, NewsDigest, NewsHeadline, PricePoint, PriceSeries};

//! Provider API clients
//!
//! Typed HTTP clients for the external market-data providers. These
//! return `Result`s; the acquisition facade above them is what turns
//! failures into sentinel values.

pub mod alpha_vantage;
pub mod finnhub;
pub mod yahoo;

pub use alpha_vantage::{AlphaVantageClient, CompanyOverview};
pub use finnhub::{FinnhubClient, FinnhubNewsArticle};
pub use yahoo::YahooHistoryClient;

//! Error types for analysis operations

use thiserror::Error;

/// Analysis pipeline errors
///
/// Data-layer failures never surface through this type: the acquisition
/// facade absorbs them into sentinel values. What remains is invalid
/// input, configuration problems, and the one terminal failure mode of a
/// request - the generation call.
#[derive(Debug, Error)]
pub enum AnalystError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid stock symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data not available for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Rate limit exceeded for API
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded { provider: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// Alpha Vantage API error
    #[error("Alpha Vantage error: {0}")]
    AlphaVantageError(String),

    /// Finnhub API error
    #[error("Finnhub error: {0}")]
    FinnhubError(String),

    /// Prompt template rendering error
    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    /// Text generation failed; terminal for the analysis request
    #[error("Generation error: {0}")]
    Generation(#[from] analyst_llm::GeneratorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalystError>;

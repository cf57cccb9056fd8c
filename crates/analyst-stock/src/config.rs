//! Configuration for analysis operations

use crate::error::{Result, AnalystError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How much of the fundamentals record to request
///
/// `PriceOnly` is the degraded mode for providers that block detailed
/// company fields: the snapshot carries the latest price (and market cap
/// when the provider exposes it) and every other field stays absent. It
/// is the same record and the same pipeline, just fewer populated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundamentalsScope {
    /// Full company overview (name, sector, ratios)
    Full,
    /// Latest price and market cap only
    PriceOnly,
}

impl Default for FundamentalsScope {
    fn default() -> Self {
        Self::Full
    }
}

/// Configuration for the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystConfig {
    /// Model identifier passed to the generation backend
    pub model: String,

    /// Maximum tokens the generator may produce per analysis
    pub max_output_tokens: usize,

    /// Sampling temperature for generation
    pub temperature: f32,

    /// Maximum number of news headlines kept in the digest
    pub news_limit: usize,

    /// Days of daily price history to request
    pub history_days: i64,

    /// How much of the fundamentals record to request
    pub fundamentals_scope: FundamentalsScope,

    /// Cache TTL for price history
    pub cache_ttl_history: Duration,

    /// Cache TTL for fundamental data
    pub cache_ttl_fundamentals: Duration,

    /// Cache TTL for news data
    pub cache_ttl_news: Duration,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Alpha Vantage API key (optional; fundamentals degrade without it)
    pub alpha_vantage_api_key: Option<String>,

    /// Finnhub API key (optional; news degrades without it)
    pub finnhub_api_key: Option<String>,

    /// Alpha Vantage requests per minute (free tier: 5)
    pub alpha_vantage_rate_limit: u32,

    /// Finnhub requests per minute (free tier: 60)
    pub finnhub_rate_limit: u32,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_output_tokens: 900,
            temperature: 0.7,
            news_limit: 5,
            history_days: 365,
            fundamentals_scope: FundamentalsScope::Full,
            cache_ttl_history: Duration::from_secs(60),
            cache_ttl_fundamentals: Duration::from_secs(3600),
            cache_ttl_news: Duration::from_secs(300),
            request_timeout: Duration::from_secs(30),
            alpha_vantage_api_key: None,
            finnhub_api_key: None,
            alpha_vantage_rate_limit: 5,
            finnhub_rate_limit: 60,
        }
    }
}

impl AnalystConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalystConfigBuilder {
        AnalystConfigBuilder::default()
    }

    /// Load provider API keys from the environment
    ///
    /// Reads `ALPHA_VANTAGE_API_KEY` and `FINNHUB_API_KEY` when set;
    /// missing keys leave the corresponding source degraded, they are
    /// not an error.
    pub fn with_env_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("FINNHUB_API_KEY") {
            self.finnhub_api_key = Some(key);
        }
        self
    }

    /// Load the generation model name from `OPENAI_MODEL` when set
    pub fn with_env_model(mut self) -> Self {
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            self.model = model;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(AnalystError::ConfigError(
                "model must not be empty".to_string(),
            ));
        }

        if self.max_output_tokens == 0 {
            return Err(AnalystError::ConfigError(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }

        if self.news_limit == 0 {
            return Err(AnalystError::ConfigError(
                "news_limit must be greater than 0".to_string(),
            ));
        }

        if self.history_days <= 0 {
            return Err(AnalystError::ConfigError(
                "history_days must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AnalystConfig
#[derive(Debug, Default)]
pub struct AnalystConfigBuilder {
    model: Option<String>,
    max_output_tokens: Option<usize>,
    temperature: Option<f32>,
    news_limit: Option<usize>,
    history_days: Option<i64>,
    fundamentals_scope: Option<FundamentalsScope>,
    cache_ttl_history: Option<Duration>,
    cache_ttl_fundamentals: Option<Duration>,
    cache_ttl_news: Option<Duration>,
    request_timeout: Option<Duration>,
    alpha_vantage_api_key: Option<String>,
    finnhub_api_key: Option<String>,
}

impl AnalystConfigBuilder {
    /// Set the generation model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the maximum generated tokens
    pub fn max_output_tokens(mut self, tokens: usize) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the news headline limit
    pub fn news_limit(mut self, limit: usize) -> Self {
        self.news_limit = Some(limit);
        self
    }

    /// Set the days of price history requested
    pub fn history_days(mut self, days: i64) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Set the fundamentals scope
    pub fn fundamentals_scope(mut self, scope: FundamentalsScope) -> Self {
        self.fundamentals_scope = Some(scope);
        self
    }

    /// Set cache TTL for price history
    pub fn cache_ttl_history(mut self, duration: Duration) -> Self {
        self.cache_ttl_history = Some(duration);
        self
    }

    /// Set cache TTL for fundamental data
    pub fn cache_ttl_fundamentals(mut self, duration: Duration) -> Self {
        self.cache_ttl_fundamentals = Some(duration);
        self
    }

    /// Set cache TTL for news data
    pub fn cache_ttl_news(mut self, duration: Duration) -> Self {
        self.cache_ttl_news = Some(duration);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set Finnhub API key
    pub fn finnhub_api_key(mut self, key: impl Into<String>) -> Self {
        self.finnhub_api_key = Some(key.into());
        self
    }

    /// Load API keys from the environment
    pub fn with_env_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("FINNHUB_API_KEY") {
            self.finnhub_api_key = Some(key);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalystConfig> {
        let defaults = AnalystConfig::default();

        let config = AnalystConfig {
            model: self.model.unwrap_or(defaults.model),
            max_output_tokens: self.max_output_tokens.unwrap_or(defaults.max_output_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            news_limit: self.news_limit.unwrap_or(defaults.news_limit),
            history_days: self.history_days.unwrap_or(defaults.history_days),
            fundamentals_scope: self
                .fundamentals_scope
                .unwrap_or(defaults.fundamentals_scope),
            cache_ttl_history: self.cache_ttl_history.unwrap_or(defaults.cache_ttl_history),
            cache_ttl_fundamentals: self
                .cache_ttl_fundamentals
                .unwrap_or(defaults.cache_ttl_fundamentals),
            cache_ttl_news: self.cache_ttl_news.unwrap_or(defaults.cache_ttl_news),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            finnhub_api_key: self.finnhub_api_key,
            alpha_vantage_rate_limit: defaults.alpha_vantage_rate_limit,
            finnhub_rate_limit: defaults.finnhub_rate_limit,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalystConfig::default();
        assert_eq!(config.news_limit, 5);
        assert_eq!(config.max_output_tokens, 900);
        assert_eq!(config.history_days, 365);
        assert_eq!(config.fundamentals_scope, FundamentalsScope::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalystConfig::builder()
            .model("mistral-7b-instruct")
            .max_output_tokens(512)
            .fundamentals_scope(FundamentalsScope::PriceOnly)
            .request_timeout(Duration::from_secs(60))
            .build()
            .expect("config should validate");

        assert_eq!(config.model, "mistral-7b-instruct");
        assert_eq!(config.max_output_tokens, 512);
        assert_eq!(config.fundamentals_scope, FundamentalsScope::PriceOnly);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation_rejects_zero_news_limit() {
        let config = AnalystConfig {
            news_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = AnalystConfig {
            model: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Finnhub API client for company news

use crate::error::{Result, AnalystError};
use crate::types::NewsHeadline;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Finnhub news article
///
/// Every field is optional at the wire level; malformed entries keep
/// their slot and resolve to placeholder headline fields downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinnhubNewsArticle {
    /// Publish time (UNIX timestamp)
    #[serde(default)]
    pub datetime: Option<i64>,
    /// News headline
    #[serde(default)]
    pub headline: Option<String>,
    /// News source
    #[serde(default)]
    pub source: Option<String>,
    /// Article summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Article URL
    #[serde(default)]
    pub url: Option<String>,
}

impl FinnhubNewsArticle {
    /// Convert the wire record into a headline with fallbacks applied
    pub fn into_headline(self) -> NewsHeadline {
        NewsHeadline::new(self.headline, self.source)
    }
}

/// Finnhub client for the company-news API
pub struct FinnhubClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

impl FinnhubClient {
    /// Create a new Finnhub client with rate limiting
    ///
    /// # Arguments
    /// * `api_key` - Finnhub API key
    /// * `rate_limit` - Requests per minute (free tier: 60, premium: 300+)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(60).expect("nonzero")));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            rate_limiter,
        }
    }

    /// Get company news for a specific symbol, newest first
    ///
    /// # Arguments
    /// * `symbol` - Stock symbol (e.g., "AAPL")
    /// * `from` - Start date (YYYY-MM-DD)
    /// * `to` - End date (YYYY-MM-DD)
    pub async fn get_company_news(
        &self,
        symbol: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<FinnhubNewsArticle>> {
        self.rate_limiter.until_ready().await;

        let url = format!(
            "https://finnhub.io/api/v1/company-news?symbol={}&from={}&to={}&token={}",
            symbol, from, to, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AnalystError::FinnhubError(format!("Finnhub request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalystError::FinnhubError(format!(
                "Finnhub API error {status}: {body}"
            )));
        }

        let mut articles = response
            .json::<Vec<FinnhubNewsArticle>>()
            .await
            .map_err(|e| AnalystError::FinnhubError(format!("Failed to parse Finnhub response: {e}")))?;

        // Providers drift on ordering; the digest contract is newest first
        articles.sort_by_key(|a| std::cmp::Reverse(a.datetime.unwrap_or(0)));

        Ok(articles)
    }
}

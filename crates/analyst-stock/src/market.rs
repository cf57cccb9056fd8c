//! Data acquisition facade
//!
//! The only I/O boundary of the pipeline besides the generation call.
//! The upstream providers rate-limit, drift their schemas, and block
//! individual fields, so each data class fetches behind its own fault
//! wall: a fundamentals outage must never suppress technicals or news.
//! Everything past this module sees sentinel values, never errors.

use crate::api::{AlphaVantageClient, FinnhubClient, FinnhubNewsArticle, YahooHistoryClient};
use crate::cache::{CacheKey, CacheManager};
use crate::config::{AnalystConfig, FundamentalsScope};
use crate::error::{Result, AnalystError};
use crate::types::{FundamentalsSnapshot, NewsDigest, NewsHeadline, PriceSeries};
use async_trait::async_trait;
use chrono::{Days, Utc};
use std::sync::Arc;

/// Days of history searched for recent company news
const NEWS_LOOKBACK_DAYS: u64 = 30;

/// Provider seam for the three market-data calls
///
/// Implementations may fail; the facade is what absorbs those
/// failures. Kept as a trait so tests can drive the pipeline without
/// the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the fundamentals record for a ticker
    async fn fundamentals(
        &self,
        ticker: &str,
        scope: FundamentalsScope,
    ) -> Result<FundamentalsSnapshot>;

    /// Fetch recent news headlines for a ticker, newest first
    async fn news(&self, ticker: &str) -> Result<Vec<NewsHeadline>>;

    /// Fetch about one year of daily price history for a ticker
    async fn price_history(&self, ticker: &str) -> Result<PriceSeries>;
}

/// Live provider composition: Yahoo history, Alpha Vantage
/// fundamentals, Finnhub news, each behind its data class's cache
pub struct LiveMarketData {
    yahoo: YahooHistoryClient,
    alpha_vantage: Option<AlphaVantageClient>,
    finnhub: Option<FinnhubClient>,
    caches: CacheManager,
    config: Arc<AnalystConfig>,
}

impl LiveMarketData {
    /// Create the live source from configuration
    ///
    /// Clients whose API key is absent are simply not constructed;
    /// their fetches fail and degrade at the facade like any other
    /// provider error.
    pub fn new(config: Arc<AnalystConfig>) -> Self {
        let alpha_vantage = config
            .alpha_vantage_api_key
            .as_ref()
            .map(|key| AlphaVantageClient::new(key.clone(), config.alpha_vantage_rate_limit));
        let finnhub = config
            .finnhub_api_key
            .as_ref()
            .map(|key| FinnhubClient::new(key.clone(), config.finnhub_rate_limit));
        let caches = CacheManager::new(
            config.cache_ttl_history,
            config.cache_ttl_fundamentals,
            config.cache_ttl_news,
        );

        Self {
            yahoo: YahooHistoryClient::new(),
            alpha_vantage,
            finnhub,
            caches,
            config,
        }
    }

    async fn fetch_fundamentals_uncached(
        &self,
        ticker: &str,
        scope: FundamentalsScope,
    ) -> Result<FundamentalsSnapshot> {
        match scope {
            FundamentalsScope::Full => {
                let client = self.alpha_vantage.as_ref().ok_or_else(|| {
                    AnalystError::ConfigError(
                        "Alpha Vantage API key required for fundamental data".to_string(),
                    )
                })?;
                let overview = client.get_company_overview(ticker).await?;
                Ok(overview.into_snapshot())
            }
            FundamentalsScope::PriceOnly => {
                let close = self.yahoo.get_latest_close(ticker).await?;
                Ok(FundamentalsSnapshot {
                    last_price: Some(close),
                    ..Default::default()
                })
            }
        }
    }

    async fn fetch_news_uncached(&self, ticker: &str) -> Result<Vec<NewsHeadline>> {
        let client = self.finnhub.as_ref().ok_or_else(|| {
            AnalystError::ConfigError("Finnhub API key required for news data".to_string())
        })?;

        let to = Utc::now().date_naive();
        let from = to
            .checked_sub_days(Days::new(NEWS_LOOKBACK_DAYS))
            .unwrap_or(to);

        let articles = client
            .get_company_news(
                ticker,
                &from.format("%Y-%m-%d").to_string(),
                &to.format("%Y-%m-%d").to_string(),
            )
            .await?;

        Ok(articles
            .into_iter()
            .map(FinnhubNewsArticle::into_headline)
            .collect())
    }
}

#[async_trait]
impl MarketDataSource for LiveMarketData {
    async fn fundamentals(
        &self,
        ticker: &str,
        scope: FundamentalsScope,
    ) -> Result<FundamentalsSnapshot> {
        let key = CacheKey::new(ticker, "fundamentals", serde_json::json!({"scope": scope}));
        let value = self
            .caches
            .fundamentals
            .get_or_fetch(key, || async {
                let snapshot = self.fetch_fundamentals_uncached(ticker, scope).await?;
                Ok::<_, AnalystError>(serde_json::to_value(snapshot)?)
            })
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn news(&self, ticker: &str) -> Result<Vec<NewsHeadline>> {
        let key = CacheKey::new(ticker, "news", serde_json::json!({}));
        let value = self
            .caches
            .news
            .get_or_fetch(key, || async {
                let headlines = self.fetch_news_uncached(ticker).await?;
                Ok::<_, AnalystError>(serde_json::to_value(headlines)?)
            })
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn price_history(&self, ticker: &str) -> Result<PriceSeries> {
        let key = CacheKey::new(
            ticker,
            "history",
            serde_json::json!({"days": self.config.history_days}),
        );
        let value = self
            .caches
            .history
            .get_or_fetch(key, || async {
                let series = self
                    .yahoo
                    .get_daily_history(ticker, self.config.history_days)
                    .await?;
                Ok::<_, AnalystError>(serde_json::to_value(series)?)
            })
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Fault-isolating wrapper over a market-data source
///
/// Each fetch returns a populated value or that data class's sentinel,
/// plus an optional user-facing notice describing the degradation.
/// No provider error crosses this boundary.
pub struct MarketDataFacade {
    source: Arc<dyn MarketDataSource>,
    config: Arc<AnalystConfig>,
}

impl MarketDataFacade {
    /// Create a facade over a source
    pub fn new(source: Arc<dyn MarketDataSource>, config: Arc<AnalystConfig>) -> Self {
        Self { source, config }
    }

    /// Fetch fundamentals, degrading to the all-absent snapshot
    pub async fn fetch_fundamentals(&self, ticker: &str) -> (FundamentalsSnapshot, Option<String>) {
        match self
            .source
            .fundamentals(ticker, self.config.fundamentals_scope)
            .await
        {
            Ok(snapshot) => (snapshot, None),
            Err(e) => {
                tracing::warn!("Fundamentals unavailable for {}: {}", ticker, e);
                (
                    FundamentalsSnapshot::unavailable(),
                    Some(format!("Company data could not be fetched: {e}")),
                )
            }
        }
    }

    /// Fetch the news digest, degrading to the empty digest
    ///
    /// An empty provider result and a failed fetch produce the same
    /// digest text; only the notice differs.
    pub async fn fetch_news(&self, ticker: &str) -> (NewsDigest, Option<String>) {
        match self.source.news(ticker).await {
            Ok(headlines) => (
                NewsDigest::from_headlines(headlines, self.config.news_limit),
                None,
            ),
            Err(e) => {
                tracing::warn!("News unavailable for {}: {}", ticker, e);
                (
                    NewsDigest::empty(),
                    Some(format!("News data could not be fetched: {e}")),
                )
            }
        }
    }

    /// Fetch price history, degrading to the empty series
    ///
    /// Downstream indicator computation treats the empty series exactly
    /// as "too short", so this sentinel needs no special handling.
    pub async fn fetch_price_history(&self, ticker: &str) -> (PriceSeries, Option<String>) {
        match self.source.price_history(ticker).await {
            Ok(series) => (series, None),
            Err(e) => {
                tracing::warn!("Price history unavailable for {}: {}", ticker, e);
                (
                    PriceSeries::empty(),
                    Some(format!("Price history could not be fetched: {e}")),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NO_RECENT_NEWS, PricePoint};
    use chrono::NaiveDate;

    fn config() -> Arc<AnalystConfig> {
        Arc::new(AnalystConfig::default())
    }

    fn sample_series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        PriceSeries::from_points(
            (0..10)
                .map(|i| PricePoint {
                    date: start + Days::new(i),
                    close: 100.0 + i as f64,
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_fundamentals_failure_degrades_to_sentinel() {
        let mut source = MockMarketDataSource::new();
        source.expect_fundamentals().returning(|_, _| {
            Err(AnalystError::ApiError("rate limited".to_string()))
        });

        let facade = MarketDataFacade::new(Arc::new(source), config());
        let (snapshot, notice) = facade.fetch_fundamentals("AAPL").await;

        assert!(snapshot.is_unavailable());
        assert!(notice.expect("notice present").contains("rate limited"));
    }

    #[tokio::test]
    async fn test_news_failure_degrades_to_empty_digest() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_news()
            .returning(|_| Err(AnalystError::ApiError("offline".to_string())));

        let facade = MarketDataFacade::new(Arc::new(source), config());
        let (digest, notice) = facade.fetch_news("AAPL").await;

        assert!(digest.is_empty());
        assert_eq!(digest.digest_text, NO_RECENT_NEWS);
        assert!(notice.is_some());
    }

    #[tokio::test]
    async fn test_empty_news_is_valid_without_notice() {
        let mut source = MockMarketDataSource::new();
        source.expect_news().returning(|_| Ok(Vec::new()));

        let facade = MarketDataFacade::new(Arc::new(source), config());
        let (digest, notice) = facade.fetch_news("AAPL").await;

        assert!(digest.is_empty());
        assert_eq!(digest.digest_text, NO_RECENT_NEWS);
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_history_failure_degrades_to_empty_series() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_price_history()
            .returning(|_| Err(AnalystError::ApiError("schema changed".to_string())));

        let facade = MarketDataFacade::new(Arc::new(source), config());
        let (series, notice) = facade.fetch_price_history("AAPL").await;

        assert!(series.is_empty());
        assert!(notice.is_some());
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_others() {
        let mut source = MockMarketDataSource::new();
        source.expect_fundamentals().returning(|_, _| {
            Err(AnalystError::ApiError("blocked".to_string()))
        });
        source.expect_news().returning(|_| {
            Ok(vec![NewsHeadline::new(
                Some("Quarterly results beat estimates".to_string()),
                Some("Reuters".to_string()),
            )])
        });
        let series = sample_series();
        source
            .expect_price_history()
            .returning(move |_| Ok(series.clone()));

        let facade = MarketDataFacade::new(Arc::new(source), config());

        let (snapshot, _) = facade.fetch_fundamentals("AAPL").await;
        let (digest, _) = facade.fetch_news("AAPL").await;
        let (history, _) = facade.fetch_price_history("AAPL").await;

        assert!(snapshot.is_unavailable());
        assert_eq!(digest.headlines.len(), 1);
        assert_eq!(history.len(), 10);
    }

    #[tokio::test]
    async fn test_news_digest_respects_configured_limit() {
        let mut source = MockMarketDataSource::new();
        source.expect_news().returning(|_| {
            Ok((0..9)
                .map(|i| NewsHeadline::new(Some(format!("Headline {i}")), None))
                .collect())
        });

        let facade = MarketDataFacade::new(Arc::new(source), config());
        let (digest, _) = facade.fetch_news("AAPL").await;
        assert_eq!(digest.headlines.len(), 5);
    }
}

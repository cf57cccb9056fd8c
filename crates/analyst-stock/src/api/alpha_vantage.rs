//! Alpha Vantage API client for company fundamentals

use crate::error::{Result, AnalystError};
use crate::types::FundamentalsSnapshot;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;

const BASE_URL: &str = "https://www.alphavantage.co/query";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
}

/// Company overview response
///
/// Alpha Vantage serializes every metric as a string and marks blocked
/// or missing values as "None" or "-"; fields also come and go with
/// schema changes, so each one is optional at the wire level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyOverview {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, rename = "MarketCapitalization")]
    pub market_cap: Option<String>,
    #[serde(default, rename = "RevenueTTM")]
    pub revenue_ttm: Option<String>,
    #[serde(default, rename = "GrossProfitTTM")]
    pub gross_profit_ttm: Option<String>,
    #[serde(default, rename = "TrailingPE")]
    pub trailing_pe: Option<String>,
    #[serde(default, rename = "PriceToBookRatio")]
    pub price_to_book: Option<String>,
    #[serde(default, rename = "ReturnOnEquityTTM")]
    pub return_on_equity: Option<String>,
    #[serde(default, rename = "DebtToEquity")]
    pub debt_to_equity: Option<String>,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client with API key and rate limit
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (default: 5 for free tier)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(5).expect("nonzero")));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            rate_limiter,
        }
    }

    /// Get the company overview for a symbol
    pub async fn get_company_overview(&self, symbol: &str) -> Result<CompanyOverview> {
        self.rate_limiter.until_ready().await;

        let mut params = HashMap::new();
        params.insert("function", "OVERVIEW");
        params.insert("symbol", symbol);
        params.insert("apikey", &self.api_key);

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(AnalystError::AlphaVantageError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let data: serde_json::Value = response.json().await?;

        // Check for API error messages
        if let Some(error) = data.get("Error Message") {
            return Err(AnalystError::AlphaVantageError(error.to_string()));
        }

        if data.get("Note").is_some() {
            return Err(AnalystError::RateLimitExceeded {
                provider: "Alpha Vantage".to_string(),
            });
        }

        // An unknown symbol answers with an empty object
        if data.as_object().is_none_or(serde_json::Map::is_empty) {
            return Err(AnalystError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "Empty overview response".to_string(),
            });
        }

        let overview: CompanyOverview = serde_json::from_value(data)?;
        Ok(overview)
    }
}

/// Parse an Alpha Vantage numeric string, treating the provider's
/// "None" and "-" placeholders as absent
pub fn parse_metric(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() || value == "None" || value == "-" {
        return None;
    }
    value.parse().ok()
}

impl CompanyOverview {
    /// Convert the wire record into a fundamentals snapshot
    ///
    /// Each field resolves independently; a malformed metric string
    /// ends up absent rather than failing the whole record.
    pub fn into_snapshot(self) -> FundamentalsSnapshot {
        FundamentalsSnapshot {
            name: self.name.filter(|s| !s.is_empty() && s != "None"),
            sector: self.sector.filter(|s| !s.is_empty() && s != "None"),
            industry: self.industry.filter(|s| !s.is_empty() && s != "None"),
            market_cap: parse_metric(self.market_cap.as_deref()),
            revenue: parse_metric(self.revenue_ttm.as_deref()),
            gross_profit: parse_metric(self.gross_profit_ttm.as_deref()),
            trailing_pe: parse_metric(self.trailing_pe.as_deref()),
            price_to_book: parse_metric(self.price_to_book.as_deref()),
            return_on_equity: parse_metric(self.return_on_equity.as_deref()),
            debt_to_equity: parse_metric(self.debt_to_equity.as_deref()),
            last_price: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!(parse_metric(Some("1234.5")), Some(1234.5));
        assert_eq!(parse_metric(Some("None")), None);
        assert_eq!(parse_metric(Some("-")), None);
        assert_eq!(parse_metric(Some("")), None);
        assert_eq!(parse_metric(Some("abc")), None);
        assert_eq!(parse_metric(None), None);
    }

    #[test]
    fn test_overview_into_snapshot() {
        let overview: CompanyOverview = serde_json::from_value(serde_json::json!({
            "Name": "Apple Inc",
            "Sector": "TECHNOLOGY",
            "Industry": "ELECTRONIC COMPUTERS",
            "MarketCapitalization": "3000000000000",
            "RevenueTTM": "400000000000",
            "GrossProfitTTM": "170000000000",
            "TrailingPE": "31.5",
            "PriceToBookRatio": "46.2",
            "ReturnOnEquityTTM": "1.47",
        }))
        .expect("overview should parse");

        let snapshot = overview.into_snapshot();
        assert_eq!(snapshot.name.as_deref(), Some("Apple Inc"));
        assert_eq!(snapshot.market_cap, Some(3.0e12));
        assert_eq!(snapshot.trailing_pe, Some(31.5));
        // Field the provider omitted resolves to absent, not an error
        assert_eq!(snapshot.debt_to_equity, None);
    }

    #[test]
    fn test_blocked_fields_resolve_to_absent() {
        let overview: CompanyOverview = serde_json::from_value(serde_json::json!({
            "Name": "None",
            "MarketCapitalization": "None",
            "TrailingPE": "-",
        }))
        .expect("overview should parse");

        let snapshot = overview.into_snapshot();
        assert_eq!(snapshot.name, None);
        assert_eq!(snapshot.market_cap, None);
        assert_eq!(snapshot.trailing_pe, None);
    }

    #[tokio::test]
    #[ignore] // Requires network access and API key
    async fn test_get_company_overview() {
        let client = AlphaVantageClient::new(
            std::env::var("ALPHA_VANTAGE_API_KEY").expect("key set"),
            5,
        );
        let overview = client.get_company_overview("AAPL").await.expect("overview");
        assert!(overview.name.is_some());
    }
}

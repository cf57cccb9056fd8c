//! Yahoo Finance API client for daily price history

use crate::error::{Result, AnalystError};
use crate::types::{PricePoint, PriceSeries};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

/// Yahoo Finance API client
pub struct YahooHistoryClient {}

impl YahooHistoryClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Get daily closes covering the most recent `days` calendar days
    ///
    /// Trading-calendar gaps are expected; the series carries one point
    /// per trading day the provider returned.
    pub async fn get_daily_history(&self, symbol: &str, days: i64) -> Result<PriceSeries> {
        let end = Utc::now();
        let start = end - chrono::Duration::days(days);

        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| AnalystError::YahooFinanceError(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| AnalystError::YahooFinanceError(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        let points: Vec<PricePoint> = quotes
            .iter()
            .filter_map(|q| {
                DateTime::from_timestamp(q.timestamp as i64, 0).map(|dt| PricePoint {
                    date: dt.date_naive(),
                    close: q.close,
                })
            })
            .collect();

        Ok(PriceSeries::from_points(points))
    }

    /// Get the latest closing price for a symbol
    pub async fn get_latest_close(&self, symbol: &str) -> Result<f64> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        let response = provider
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        let quote = response
            .last_quote()
            .map_err(|e| AnalystError::YahooFinanceError(e.to_string()))?;

        Ok(quote.close)
    }
}

impl Default for YahooHistoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for YahooHistoryClient {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_daily_history() {
        let client = YahooHistoryClient::new();
        let series = client
            .get_daily_history("AAPL", 365)
            .await
            .expect("history fetch");
        assert!(!series.is_empty());
        // Roughly one trading year of daily closes
        assert!(series.len() > 200);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_get_latest_close() {
        let client = YahooHistoryClient::new();
        let close = client.get_latest_close("AAPL").await.expect("quote fetch");
        assert!(close > 0.0);
    }
}

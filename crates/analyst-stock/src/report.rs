//! Analysis report assembly

use crate::error::Result;
use crate::indicators::IndicatorResult;
use crate::prompts::render_analyst_prompt;
use crate::signals::SignalSet;
use crate::types::{FundamentalsSnapshot, NewsDigest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One complete analysis record
///
/// Built once per request from already-normalized inputs and never
/// mutated afterwards; there is no persistence, the record lives for
/// the duration of the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub fundamentals: FundamentalsSnapshot,
    pub news: NewsDigest,
    pub indicators: IndicatorResult,
    pub signals: SignalSet,
    /// The rendered generation prompt
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
}

/// Assemble a report and render its prompt
///
/// Pure aggregation and formatting: no retries, no caching, no
/// branching on how the inputs were obtained.
pub fn build_report(
    ticker: &str,
    fundamentals: FundamentalsSnapshot,
    news: NewsDigest,
    indicators: IndicatorResult,
    signals: SignalSet,
) -> Result<AnalysisReport> {
    let prompt = render_analyst_prompt(ticker, &fundamentals, &news, &indicators, &signals)?;

    Ok(AnalysisReport {
        ticker: ticker.to_string(),
        fundamentals,
        news,
        indicators,
        signals,
        prompt,
        timestamp: Utc::now(),
    })
}

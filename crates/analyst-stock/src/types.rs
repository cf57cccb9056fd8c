//! Core data model for the analysis pipeline
//!
//! Every record here is built once at the acquisition boundary and read
//! downstream without further branching on where its data came from:
//! a missing field and a failed fetch collapse into the same absent
//! state, rendered with an explicit placeholder rather than omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder rendered for any absent value
pub const NOT_AVAILABLE: &str = "N/A";

/// Digest text used when no headlines were fetched, for any reason
pub const NO_RECENT_NEWS: &str = "No major recent news available.";

/// Title fallback for a headline the provider returned without one
pub const NO_TITLE: &str = "No Title Available";

/// Source fallback for a headline the provider returned without one
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Render an optional text field, substituting the placeholder
pub fn display_text(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Render an optional numeric field, substituting the placeholder
///
/// Whole numbers print without decimals (market caps, revenues);
/// everything else keeps two.
pub fn display_number(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1.0e15 => format!("{v:.0}"),
        Some(v) => format!("{v:.2}"),
    }
}

/// Point-in-time company fundamentals
///
/// All fields are independently optional; `None` renders as
/// [`NOT_AVAILABLE`]. A failed fetch produces [`Self::unavailable`],
/// which is indistinguishable downstream from a response with every
/// field blocked - deliberately so.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<f64>,
    pub revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub debt_to_equity: Option<f64>,
    /// Latest close; populated in the reduced price-only scope
    pub last_price: Option<f64>,
}

impl FundamentalsSnapshot {
    /// Snapshot with every field absent, used when the fetch fails
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// True when no field carries a value
    pub fn is_unavailable(&self) -> bool {
        self.name.is_none()
            && self.sector.is_none()
            && self.industry.is_none()
            && self.market_cap.is_none()
            && self.revenue.is_none()
            && self.gross_profit.is_none()
            && self.trailing_pe.is_none()
            && self.price_to_book.is_none()
            && self.return_on_equity.is_none()
            && self.debt_to_equity.is_none()
            && self.last_price.is_none()
    }
}

/// A single news headline with its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsHeadline {
    pub title: String,
    pub source: String,
}

impl NewsHeadline {
    /// Build a headline, substituting fallbacks for missing fields
    ///
    /// Entries with missing fields are kept with placeholders rather
    /// than skipped, so the digest length reflects what the provider
    /// actually returned.
    pub fn new(title: Option<String>, source: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()).unwrap_or_else(|| NO_TITLE.to_string()),
            source: source
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        }
    }
}

/// Recent headlines plus their concatenated digest text
///
/// An empty digest is a valid state meaning "no recent news"; a failed
/// news fetch produces the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDigest {
    /// Up to the configured limit of headlines, newest first
    pub headlines: Vec<NewsHeadline>,
    /// Headline titles joined by newlines, or [`NO_RECENT_NEWS`]
    pub digest_text: String,
}

impl NewsDigest {
    /// Digest for an empty or failed news fetch
    pub fn empty() -> Self {
        Self {
            headlines: Vec::new(),
            digest_text: NO_RECENT_NEWS.to_string(),
        }
    }

    /// Build a digest from provider headlines, newest first
    pub fn from_headlines(headlines: Vec<NewsHeadline>, limit: usize) -> Self {
        let headlines: Vec<NewsHeadline> = headlines.into_iter().take(limit).collect();
        if headlines.is_empty() {
            return Self::empty();
        }

        let digest_text = headlines
            .iter()
            .map(|h| h.title.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            headlines,
            digest_text,
        }
    }

    /// True when no headlines were fetched
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }
}

/// One daily closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Chronologically ordered daily closes, up to one trading year
///
/// Construction sorts by date and keeps one close per day, so the
/// dates are strictly increasing. Trading-calendar gaps are fine. An
/// empty series is valid and means every indicator is undefined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Series for an empty or failed history fetch
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from provider points, enforcing date order
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    /// The ordered points
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Number of trading days in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date")
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(display_text(Some("Apple Inc")), "Apple Inc");
        assert_eq!(display_text(None), NOT_AVAILABLE);

        assert_eq!(display_number(Some(3.0e12)), "3000000000000");
        assert_eq!(display_number(Some(31.456)), "31.46");
        assert_eq!(display_number(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_unavailable_snapshot() {
        let snapshot = FundamentalsSnapshot::unavailable();
        assert!(snapshot.is_unavailable());

        let populated = FundamentalsSnapshot {
            market_cap: Some(1.0e12),
            ..Default::default()
        };
        assert!(!populated.is_unavailable());
    }

    #[test]
    fn test_headline_fallbacks() {
        let headline = NewsHeadline::new(None, Some("Reuters".to_string()));
        assert_eq!(headline.title, NO_TITLE);
        assert_eq!(headline.source, "Reuters");

        let headline = NewsHeadline::new(Some(String::new()), None);
        assert_eq!(headline.title, NO_TITLE);
        assert_eq!(headline.source, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_digest_from_headlines() {
        let headlines = vec![
            NewsHeadline::new(Some("First".to_string()), Some("A".to_string())),
            NewsHeadline::new(Some("Second".to_string()), Some("B".to_string())),
        ];
        let digest = NewsDigest::from_headlines(headlines, 5);
        assert_eq!(digest.headlines.len(), 2);
        assert_eq!(digest.digest_text, "First\nSecond");
    }

    #[test]
    fn test_digest_respects_limit() {
        let headlines: Vec<NewsHeadline> = (0..8)
            .map(|i| NewsHeadline::new(Some(format!("Headline {i}")), None))
            .collect();
        let digest = NewsDigest::from_headlines(headlines, 5);
        assert_eq!(digest.headlines.len(), 5);
    }

    #[test]
    fn test_empty_digest_uses_fixed_literal() {
        let digest = NewsDigest::from_headlines(Vec::new(), 5);
        assert!(digest.is_empty());
        assert_eq!(digest.digest_text, NO_RECENT_NEWS);
        assert_eq!(digest, NewsDigest::empty());
    }

    #[test]
    fn test_series_sorts_and_dedups() {
        let series = PriceSeries::from_points(vec![
            PricePoint { date: date(3), close: 103.0 },
            PricePoint { date: date(1), close: 101.0 },
            PricePoint { date: date(2), close: 102.0 },
            PricePoint { date: date(2), close: 102.5 },
        ]);

        assert_eq!(series.len(), 3);
        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::empty();
        assert!(series.is_empty());
        assert_eq!(series.closes(), Vec::<f64>::new());
    }
}

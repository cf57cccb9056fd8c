//! Report formatting for the presentation boundary

use crate::engine::AnalysisOutcome;
use crate::indicators::IndicatorResult;
use crate::signals::SignalSet;
use crate::types::{
    FundamentalsSnapshot, NewsDigest, NOT_AVAILABLE, display_number, display_text,
};

/// Renders analysis results into display text
///
/// The display contract is four blocks in fixed order: fundamentals
/// summary, news list, technical summary, generated analysis.
pub trait ReportFormatter: Send + Sync {
    fn format_fundamentals(&self, fundamentals: &FundamentalsSnapshot) -> String;
    fn format_news(&self, news: &NewsDigest) -> String;
    fn format_technicals(&self, indicators: &IndicatorResult, signals: &SignalSet) -> String;
    fn format_analysis(&self, text: &str) -> String;
    fn format_outcome(&self, outcome: &AnalysisOutcome) -> String;
    fn format_error(&self, error: &str) -> String;
}

/// Plain-terminal formatter
pub struct CliFormatter;

impl ReportFormatter for CliFormatter {
    fn format_fundamentals(&self, fundamentals: &FundamentalsSnapshot) -> String {
        let mut out = String::from("🏢 Company & Financial Summary\n");
        out.push_str(&format!(
            "Name: {}\n",
            display_text(fundamentals.name.as_deref())
        ));
        out.push_str(&format!(
            "Sector: {}\n",
            display_text(fundamentals.sector.as_deref())
        ));
        out.push_str(&format!(
            "Industry: {}\n",
            display_text(fundamentals.industry.as_deref())
        ));
        out.push_str(&format!(
            "Price: {}\n",
            display_number(fundamentals.last_price)
        ));
        out.push_str(&format!(
            "Market Cap: {}\n",
            display_number(fundamentals.market_cap)
        ));
        out.push_str(&format!(
            "Revenue: {}\n",
            display_number(fundamentals.revenue)
        ));
        out.push_str(&format!(
            "Profit: {}\n",
            display_number(fundamentals.gross_profit)
        ));
        out.push_str(&format!(
            "PE Ratio: {}\n",
            display_number(fundamentals.trailing_pe)
        ));
        out.push_str(&format!(
            "PB Ratio: {}\n",
            display_number(fundamentals.price_to_book)
        ));
        out.push_str(&format!(
            "ROE: {}\n",
            display_number(fundamentals.return_on_equity)
        ));
        out.push_str(&format!(
            "Debt to Equity: {}\n",
            display_number(fundamentals.debt_to_equity)
        ));
        out
    }

    fn format_news(&self, news: &NewsDigest) -> String {
        let mut out = String::from("📰 Latest News Headlines\n");
        if news.is_empty() {
            out.push_str("No recent news available for this stock.\n");
        } else {
            for headline in &news.headlines {
                out.push_str(&format!("- {} ({})\n", headline.title, headline.source));
            }
        }
        out
    }

    fn format_technicals(&self, indicators: &IndicatorResult, signals: &SignalSet) -> String {
        let rsi_value = indicators
            .rsi
            .map_or_else(|| NOT_AVAILABLE.to_string(), |rsi| format!("{rsi:.2}"));

        let mut out = String::from("📊 Technical Indicators\n");
        out.push_str(&format!("SMA Trend: {}\n", signals.trend.label()));
        out.push_str(&format!(
            "RSI: {} → {}\n",
            rsi_value,
            signals.momentum.label()
        ));
        out.push_str(&format!("MACD: {}\n", signals.macd_trend.label()));
        out
    }

    fn format_analysis(&self, text: &str) -> String {
        format!("🤖 Gen-AI Analysis\n{text}\n")
    }

    fn format_outcome(&self, outcome: &AnalysisOutcome) -> String {
        let mut out = String::new();

        for warning in &outcome.warnings {
            out.push_str(&format!("ℹ {warning}\n"));
        }
        if !outcome.warnings.is_empty() {
            out.push('\n');
        }

        out.push_str(&self.format_fundamentals(&outcome.report.fundamentals));
        out.push('\n');
        out.push_str(&self.format_news(&outcome.report.news));
        out.push('\n');
        out.push_str(&self.format_technicals(
            &outcome.report.indicators,
            &outcome.report.signals,
        ));
        out.push('\n');
        out.push_str(&self.format_analysis(&outcome.analysis_text));
        out
    }

    fn format_error(&self, error: &str) -> String {
        format!("❌ Error: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{MacdTrend, Momentum, Trend};
    use crate::types::NewsHeadline;

    #[test]
    fn test_fundamentals_block_renders_placeholders() {
        let block = CliFormatter.format_fundamentals(&FundamentalsSnapshot::unavailable());
        assert!(block.starts_with("🏢 Company & Financial Summary"));
        assert!(block.contains("Name: N/A"));
        assert!(block.contains("Debt to Equity: N/A"));
    }

    #[test]
    fn test_news_block_lists_headlines() {
        let digest = NewsDigest::from_headlines(
            vec![NewsHeadline::new(
                Some("Dividend raised".to_string()),
                Some("WSJ".to_string()),
            )],
            5,
        );
        let block = CliFormatter.format_news(&digest);
        assert!(block.contains("- Dividend raised (WSJ)"));
    }

    #[test]
    fn test_empty_news_block_shows_notice() {
        let block = CliFormatter.format_news(&NewsDigest::empty());
        assert!(block.contains("No recent news available for this stock."));
    }

    #[test]
    fn test_technicals_block_never_omits_signals() {
        let signals = SignalSet {
            trend: Trend::Unavailable,
            momentum: Momentum::Unavailable,
            macd_trend: MacdTrend::Unavailable,
        };
        let block = CliFormatter.format_technicals(&IndicatorResult::default(), &signals);
        assert!(block.contains("SMA Trend: N/A"));
        assert!(block.contains("RSI: N/A → N/A"));
        assert!(block.contains("MACD: N/A"));
    }

    #[test]
    fn test_error_formatting() {
        assert_eq!(
            CliFormatter.format_error("boom"),
            "❌ Error: boom".to_string()
        );
    }
}

//! Qualitative signal classification
//!
//! Maps raw indicator values onto discrete trend and momentum labels.
//! Total over every input shape: an undefined indicator classifies as
//! `Unavailable`, never as an error.

use crate::indicators::IndicatorResult;
use crate::types::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};

/// RSI level above which momentum reads overbought
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI level below which momentum reads oversold
pub const RSI_OVERSOLD: f64 = 30.0;

/// Long-versus-short moving-average trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Short average at or above the long average (golden cross)
    Bullish,
    /// Short average below the long average
    Bearish,
    /// One or both averages undefined
    Unavailable,
}

impl Trend {
    /// Display label for prompts and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullish => "Bullish (Golden Cross Trend)",
            Self::Bearish => "Bearish (Below Long Term Trend)",
            Self::Unavailable => NOT_AVAILABLE,
        }
    }
}

/// RSI momentum reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Momentum {
    /// RSI above 70
    Overbought,
    /// RSI below 30
    Oversold,
    /// RSI within the neutral band, 70 and 30 included
    Neutral,
    /// RSI undefined
    Unavailable,
}

impl Momentum {
    /// Display label for prompts and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overbought => "Overbought - Possible Correction",
            Self::Oversold => "Oversold - Possible Reversal",
            Self::Neutral => "Neutral Momentum",
            Self::Unavailable => NOT_AVAILABLE,
        }
    }
}

/// MACD line versus signal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdTrend {
    /// MACD line strictly above its signal line
    BullishMomentum,
    /// MACD line at or below its signal line
    BearishMomentum,
    /// One or both lines undefined
    Unavailable,
}

impl MacdTrend {
    /// Display label for prompts and reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::BullishMomentum => "Bullish Momentum",
            Self::BearishMomentum => "Bearish Momentum",
            Self::Unavailable => NOT_AVAILABLE,
        }
    }
}

/// Classified signals for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    pub trend: Trend,
    pub momentum: Momentum,
    pub macd_trend: MacdTrend,
}

/// Classify raw indicator values into qualitative labels
///
/// The tie-breaks are contracts, not accidents: an SMA tie is Bullish
/// (inclusive comparison), a MACD tie is BearishMomentum (the bullish
/// side requires a strict lead).
pub fn classify(indicators: &IndicatorResult) -> SignalSet {
    let trend = match (indicators.sma_short, indicators.sma_long) {
        (Some(short), Some(long)) => {
            if short >= long {
                Trend::Bullish
            } else {
                Trend::Bearish
            }
        }
        _ => Trend::Unavailable,
    };

    let momentum = match indicators.rsi {
        Some(rsi) if rsi > RSI_OVERBOUGHT => Momentum::Overbought,
        Some(rsi) if rsi < RSI_OVERSOLD => Momentum::Oversold,
        Some(_) => Momentum::Neutral,
        None => Momentum::Unavailable,
    };

    let macd_trend = match (indicators.macd_line, indicators.macd_signal_line) {
        (Some(line), Some(signal)) => {
            if line > signal {
                MacdTrend::BullishMomentum
            } else {
                MacdTrend::BearishMomentum
            }
        }
        _ => MacdTrend::Unavailable,
    };

    SignalSet {
        trend,
        momentum,
        macd_trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(
        sma_short: Option<f64>,
        sma_long: Option<f64>,
        rsi: Option<f64>,
        macd_line: Option<f64>,
        macd_signal_line: Option<f64>,
    ) -> IndicatorResult {
        IndicatorResult {
            sma_short,
            sma_long,
            rsi,
            macd_line,
            macd_signal_line,
        }
    }

    #[test]
    fn test_trend_classification() {
        let signals = classify(&indicators(Some(110.0), Some(100.0), None, None, None));
        assert_eq!(signals.trend, Trend::Bullish);

        let signals = classify(&indicators(Some(90.0), Some(100.0), None, None, None));
        assert_eq!(signals.trend, Trend::Bearish);
    }

    #[test]
    fn test_sma_tie_is_bullish() {
        let signals = classify(&indicators(Some(100.0), Some(100.0), None, None, None));
        assert_eq!(signals.trend, Trend::Bullish);
    }

    #[test]
    fn test_partial_sma_is_unavailable() {
        // A defined short average with an undefined long average must
        // not produce a directional verdict
        let signals = classify(&indicators(Some(110.0), None, None, None, None));
        assert_eq!(signals.trend, Trend::Unavailable);

        let signals = classify(&indicators(None, Some(100.0), None, None, None));
        assert_eq!(signals.trend, Trend::Unavailable);
    }

    #[test]
    fn test_momentum_bands() {
        assert_eq!(
            classify(&indicators(None, None, Some(75.0), None, None)).momentum,
            Momentum::Overbought
        );
        assert_eq!(
            classify(&indicators(None, None, Some(25.0), None, None)).momentum,
            Momentum::Oversold
        );
        assert_eq!(
            classify(&indicators(None, None, Some(50.0), None, None)).momentum,
            Momentum::Neutral
        );
        assert_eq!(
            classify(&indicators(None, None, None, None, None)).momentum,
            Momentum::Unavailable
        );
    }

    #[test]
    fn test_momentum_boundaries_are_neutral() {
        assert_eq!(
            classify(&indicators(None, None, Some(70.0), None, None)).momentum,
            Momentum::Neutral
        );
        assert_eq!(
            classify(&indicators(None, None, Some(30.0), None, None)).momentum,
            Momentum::Neutral
        );
    }

    #[test]
    fn test_macd_classification() {
        assert_eq!(
            classify(&indicators(None, None, None, Some(1.5), Some(1.0))).macd_trend,
            MacdTrend::BullishMomentum
        );
        assert_eq!(
            classify(&indicators(None, None, None, Some(0.5), Some(1.0))).macd_trend,
            MacdTrend::BearishMomentum
        );
    }

    #[test]
    fn test_macd_tie_is_bearish() {
        assert_eq!(
            classify(&indicators(None, None, None, Some(1.0), Some(1.0))).macd_trend,
            MacdTrend::BearishMomentum
        );
    }

    #[test]
    fn test_classify_is_total() {
        // Every defined/undefined combination yields a fully populated
        // signal set
        let options = [None, Some(1.0)];
        for &sma_short in &options {
            for &sma_long in &options {
                for &rsi in &options {
                    for &macd_line in &options {
                        for &macd_signal in &options {
                            let signals = classify(&indicators(
                                sma_short,
                                sma_long,
                                rsi,
                                macd_line,
                                macd_signal,
                            ));
                            // Constructing the set proves totality; the
                            // unavailable cases must line up with input
                            assert_eq!(
                                signals.trend == Trend::Unavailable,
                                sma_short.is_none() || sma_long.is_none()
                            );
                            assert_eq!(signals.momentum == Momentum::Unavailable, rsi.is_none());
                            assert_eq!(
                                signals.macd_trend == MacdTrend::Unavailable,
                                macd_line.is_none() || macd_signal.is_none()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let input = indicators(Some(101.0), Some(100.0), Some(55.0), Some(0.4), Some(0.2));
        assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Trend::Bullish.label(), "Bullish (Golden Cross Trend)");
        assert_eq!(Momentum::Unavailable.label(), NOT_AVAILABLE);
        assert_eq!(MacdTrend::BearishMomentum.label(), "Bearish Momentum");
    }
}

//! Technical indicator computation
//!
//! Pure functions over a closing-price series. Every indicator is
//! `None` until the series covers its window; an empty series is
//! treated exactly like a too-short one.

use crate::types::PriceSeries;
use serde::{Deserialize, Serialize};

/// Window for the short simple moving average
pub const SMA_SHORT_WINDOW: usize = 50;

/// Window for the long simple moving average
pub const SMA_LONG_WINDOW: usize = 200;

/// Lookback for the relative strength index
pub const RSI_PERIOD: usize = 14;

/// Fast EMA period for MACD
pub const MACD_FAST_PERIOD: usize = 12;

/// Slow EMA period for MACD
pub const MACD_SLOW_PERIOD: usize = 26;

/// Signal-line EMA period for MACD
pub const MACD_SIGNAL_PERIOD: usize = 9;

/// Indicator values for the latest point of a series
///
/// A field is `None` when the series is shorter than the indicator's
/// window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Mean of the most recent 50 closes
    pub sma_short: Option<f64>,
    /// Mean of the most recent 200 closes
    pub sma_long: Option<f64>,
    /// Wilder RSI over a 14-period lookback, in [0, 100]
    pub rsi: Option<f64>,
    /// EMA(12) - EMA(26) of closes
    pub macd_line: Option<f64>,
    /// EMA(9) of the MACD line
    pub macd_signal_line: Option<f64>,
}

/// Compute all indicators for a series
///
/// Deterministic and side-effect free; closing prices only.
pub fn compute(series: &PriceSeries) -> IndicatorResult {
    let closes = series.closes();

    let (macd_line, macd_signal_line) = macd(&closes);

    IndicatorResult {
        sma_short: sma_last(&closes, SMA_SHORT_WINDOW),
        sma_long: sma_last(&closes, SMA_LONG_WINDOW),
        rsi: wilder_rsi(&closes, RSI_PERIOD),
        macd_line,
        macd_signal_line,
    }
}

/// Mean of the most recent `window` closes, `None` below the window
fn sma_last(closes: &[f64], window: usize) -> Option<f64> {
    if window == 0 || closes.len() < window {
        return None;
    }
    let tail = &closes[closes.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Wilder RSI over `period` price changes
///
/// Seed averages are the simple means of the gains and losses across
/// the first `period` changes; later changes are folded in with
/// `avg = (avg * (period - 1) + change) / period`. Needs `period + 1`
/// closes. The degenerate ratios are pinned: zero average loss with
/// zero average gain is 50 (flat series), zero average loss with
/// positive average gain is 100.
fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let mut avg_gain = changes[..period]
        .iter()
        .map(|&c| if c > 0.0 { c } else { 0.0 })
        .sum::<f64>()
        / period as f64;
    let mut avg_loss = changes[..period]
        .iter()
        .map(|&c| if c < 0.0 { -c } else { 0.0 })
        .sum::<f64>()
        / period as f64;

    for &change in &changes[period..] {
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        avg_gain = (avg_gain * (period - 1) as f64 + gain) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + loss) / period as f64;
    }

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Some(50.0);
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Exponential moving average of the whole series
///
/// Seeded at the first value, `alpha = 2 / (period + 1)` from the
/// second point on. Returns one value per input point.
fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut ema = match values.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(ema);
    for &value in &values[1..] {
        ema = alpha * value + (1.0 - alpha) * ema;
        out.push(ema);
    }
    out
}

/// MACD line and signal line for the latest point
///
/// Both are `None` until the series covers the slow EMA period.
fn macd(closes: &[f64]) -> (Option<f64>, Option<f64>) {
    if closes.len() < MACD_SLOW_PERIOD {
        return (None, None);
    }

    let fast = ema_series(closes, MACD_FAST_PERIOD);
    let slow = ema_series(closes, MACD_SLOW_PERIOD);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = ema_series(&macd_line, MACD_SIGNAL_PERIOD);

    (macd_line.last().copied(), signal.last().copied())
}

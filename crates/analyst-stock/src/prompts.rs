//! Prompt template for the generation step
//!
//! One fixed-section MiniJinja template. Every absent value arrives
//! here already rendered as its placeholder, so the prompt shape is
//! identical whatever the providers returned - only the values change.

use crate::error::Result;
use crate::indicators::IndicatorResult;
use crate::signals::SignalSet;
use crate::types::{FundamentalsSnapshot, NewsDigest, NOT_AVAILABLE, display_number, display_text};
use minijinja::Environment;

/// The analyst prompt
///
/// Section order is part of the contract: identification, ratios,
/// news, technicals, then the requested output structure.
const ANALYST_PROMPT_TEMPLATE: &str = "\
You are a professional equity research analyst.
Analyze this stock fundamentally and technically and give a final investment view.

Company: {{ name }}
Ticker: {{ ticker }}
Sector: {{ sector }}
Industry: {{ industry }}
Price: {{ last_price }}
Market Cap: {{ market_cap }}
Revenue: {{ revenue }}
Profit: {{ gross_profit }}
PE: {{ trailing_pe }}
PB: {{ price_to_book }}
ROE: {{ return_on_equity }}
Debt to Equity: {{ debt_to_equity }}

News Headlines:
{{ news_text }}

Technicals:
SMA Trend: {{ sma_signal }}
RSI: {{ rsi_signal }} ({{ rsi_value }})
MACD: {{ macd_signal }}

Provide output in this structure:
1. Company Overview
2. Financial Health
3. Growth Outlook
4. Key Risks
5. News Sentiment
6. Technical Trend Summary
7. Final Verdict: Bullish / Bearish / Neutral
";

/// Render the analyst prompt from normalized inputs
pub fn render_analyst_prompt(
    ticker: &str,
    fundamentals: &FundamentalsSnapshot,
    news: &NewsDigest,
    indicators: &IndicatorResult,
    signals: &SignalSet,
) -> Result<String> {
    let vars = minijinja::context! {
        ticker => ticker,
        name => display_text(fundamentals.name.as_deref()),
        sector => display_text(fundamentals.sector.as_deref()),
        industry => display_text(fundamentals.industry.as_deref()),
        last_price => display_number(fundamentals.last_price),
        market_cap => display_number(fundamentals.market_cap),
        revenue => display_number(fundamentals.revenue),
        gross_profit => display_number(fundamentals.gross_profit),
        trailing_pe => display_number(fundamentals.trailing_pe),
        price_to_book => display_number(fundamentals.price_to_book),
        return_on_equity => display_number(fundamentals.return_on_equity),
        debt_to_equity => display_number(fundamentals.debt_to_equity),
        news_text => news.digest_text.as_str(),
        sma_signal => signals.trend.label(),
        rsi_signal => signals.momentum.label(),
        rsi_value => indicators
            .rsi
            .map_or_else(|| NOT_AVAILABLE.to_string(), |rsi| format!("{rsi:.2}")),
        macd_signal => signals.macd_trend.label(),
    };

    let env = Environment::new();
    Ok(env.render_str(ANALYST_PROMPT_TEMPLATE, vars)?)
}

//! Analysis engine
//!
//! Coordinates one analysis request: fetch the three data classes
//! concurrently, derive signals, assemble the report, and run the
//! generation step. Data-layer degradation surfaces as warnings on the
//! outcome; only a generation failure aborts the request.

use crate::config::AnalystConfig;
use crate::error::{Result, AnalystError};
use crate::market::{MarketDataFacade, MarketDataSource};
use crate::report::{AnalysisReport, build_report};
use crate::{indicators, signals};
use analyst_llm::{
    GenerationRequest, OpenAiConfig, OpenAiGenerator, SharedGenerator, TextGenerator,
};
use std::sync::Arc;

/// Result of one analysis request
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The assembled report, prompt included
    pub report: AnalysisReport,
    /// Generated analysis text, passed through unmodified
    pub analysis_text: String,
    /// Informational notices for data classes that degraded
    pub warnings: Vec<String>,
}

/// One-ticker-in, one-report-out analysis coordinator
///
/// Holds no per-request state; concurrent `analyze` calls share only
/// the read-only configuration and the generator handle.
pub struct AnalysisEngine {
    facade: MarketDataFacade,
    generator: Arc<SharedGenerator>,
    config: Arc<AnalystConfig>,
}

impl AnalysisEngine {
    /// Create an engine over a market-data source and generator handle
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        generator: Arc<SharedGenerator>,
        config: Arc<AnalystConfig>,
    ) -> Self {
        Self {
            facade: MarketDataFacade::new(source, Arc::clone(&config)),
            generator,
            config,
        }
    }

    /// Run a full analysis for one ticker
    ///
    /// The ticker passes through to the providers unvalidated beyond
    /// being non-empty; a malformed symbol surfaces as provider-side
    /// fetch degradation, not as an input error.
    pub async fn analyze(&self, ticker: &str) -> Result<AnalysisOutcome> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(AnalystError::InvalidSymbol(
                "ticker must not be empty".to_string(),
            ));
        }

        tracing::info!("Starting analysis for {}", ticker);

        // The three fetches are independent and fault-isolated, so they
        // run concurrently
        let ((fundamentals, fundamentals_notice), (news, news_notice), (series, history_notice)) = tokio::join!(
            self.facade.fetch_fundamentals(ticker),
            self.facade.fetch_news(ticker),
            self.facade.fetch_price_history(ticker),
        );

        let indicator_result = indicators::compute(&series);
        let signal_set = signals::classify(&indicator_result);

        let report = build_report(ticker, fundamentals, news, indicator_result, signal_set)?;

        let generator = self
            .generator
            .get_or_init(|| async {
                let provider = OpenAiGenerator::with_config(OpenAiConfig::from_env())?;
                Ok(Arc::new(provider) as Arc<dyn TextGenerator>)
            })
            .await?;

        let request = GenerationRequest::builder(self.config.model.as_str())
            .prompt(report.prompt.clone())
            .max_tokens(self.config.max_output_tokens)
            .temperature(self.config.temperature)
            .build();

        tracing::info!("Requesting generated analysis for {}", ticker);
        let response = generator.generate(request).await?;

        let warnings: Vec<String> = [fundamentals_notice, news_notice, history_notice]
            .into_iter()
            .flatten()
            .collect();

        Ok(AnalysisOutcome {
            report,
            analysis_text: response.text,
            warnings,
        })
    }
}

use {
    crate::{
        analysis::{FeatureEngine, Forecaster, signals},
        data::{MarketDataProvider, SeriesLoader},
        domain::Symbol,
        engine::{PipelineError, PipelineResult},
        models::{FeatureRow, Forecast, PriceSeries, SeriesSummary, SignalPair},
    },
    serde::Serialize,
};

/// Everything one run produces. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub symbol: Symbol,
    pub summary: SeriesSummary,
    pub series: PriceSeries,
    pub features: Vec<FeatureRow>,
    pub forecast: Forecast,
    /// None when the series is too short for any feature row.
    pub signals: Option<SignalPair>,
}

/// Load -> features -> forecast -> signals, re-executed from scratch on every call.
pub struct PricePipeline {
    loader: SeriesLoader,
    feature_engine: FeatureEngine,
    forecaster: Forecaster,
}

impl PricePipeline {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self {
            loader: SeriesLoader::new(provider),
            feature_engine: FeatureEngine::default(),
            forecaster: Forecaster::default(),
        }
    }

    pub async fn run(&self, symbol: Symbol) -> PipelineResult<PipelineReport> {
        // 1. Series
        let series = self.loader.load(symbol).await?;
        let summary = SeriesSummary::from_series(&series)
            .ok_or_else(|| PipelineError::DataUnavailable(format!("empty series for {}", symbol)))?;

        // 2. Features
        let features = self.feature_engine.compute(&series);

        // 3. Forecast (full close series, not just feature rows)
        let forecast = self.forecaster.forecast(&series)?;

        // 4. Signals
        let signals = signals::evaluate_latest(&features);
        if signals.is_none() {
            log::warn!(
                "{}: {} bars is not enough history for signals.",
                symbol,
                series.len()
            );
        }

        Ok(PipelineReport {
            symbol,
            summary,
            series,
            features,
            forecast,
            signals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SyntheticProvider;
    use chrono::NaiveDate;

    fn pipeline(bars: usize) -> PricePipeline {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        PricePipeline::new(Box::new(SyntheticProvider::new(as_of, bars)))
    }

    #[tokio::test]
    async fn full_run_produces_every_stage() {
        let report = pipeline(400).run(Symbol::BtcUsd).await.unwrap();
        assert_eq!(report.series.len(), 400);
        assert_eq!(report.features.len(), 371);
        assert_eq!(report.forecast.horizon(), 30);
        assert!(report.signals.is_some());
        assert_eq!(report.summary.last_date, report.series.last_date().unwrap());
    }

    #[tokio::test]
    async fn short_series_forecasts_without_signals() {
        let report = pipeline(20).run(Symbol::EthUsd).await.unwrap();
        assert!(report.features.is_empty());
        assert_eq!(report.signals, None);
        assert_eq!(report.forecast.horizon(), 30);
    }

    #[tokio::test]
    async fn tiny_series_fails_forecast() {
        let err = pipeline(3).run(Symbol::SolUsd).await.unwrap_err();
        assert!(matches!(err, PipelineError::InsufficientHistory { .. }));
    }
}

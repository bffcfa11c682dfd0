use anyhow::Result;
use async_trait::async_trait;

use crate::{
    config::constants::market::LOOKBACK_MONTHS,
    data::{RawFrame, build_series, normalize_columns},
    domain::Symbol,
    engine::{PipelineError, PipelineResult},
    models::PriceSeries,
};

/// Abstract interface for fetching daily market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the trailing `lookback_months` of daily bars for `symbol`, ending at the provider's "now".
    async fn fetch_daily_series(&self, symbol: Symbol, lookback_months: u32) -> Result<RawFrame>;
}

/// Fetches, normalizes and validates one series per call. One attempt, no retry.
pub struct SeriesLoader {
    provider: Box<dyn MarketDataProvider>,
    lookback_months: u32,
}

impl SeriesLoader {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            lookback_months: LOOKBACK_MONTHS,
        }
    }

    pub async fn load(&self, symbol: Symbol) -> PipelineResult<PriceSeries> {
        let frame = self
            .provider
            .fetch_daily_series(symbol, self.lookback_months)
            .await
            .map_err(|e| PipelineError::DataUnavailable(format!("{}: {:#}", symbol, e)))?;

        let frame = normalize_columns(frame);
        let series = build_series(symbol, &frame)?;

        log::info!(
            "Loaded {} daily bars for {} ({} .. {}).",
            series.len(),
            symbol,
            series.dates.first().map(|d| d.to_string()).unwrap_or_default(),
            series.dates.last().map(|d| d.to_string()).unwrap_or_default(),
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ColumnKey;
    use anyhow::bail;
    use chrono::NaiveDate;

    struct FailingProvider;

    #[async_trait]
    impl MarketDataProvider for FailingProvider {
        async fn fetch_daily_series(&self, _: Symbol, _: u32) -> Result<RawFrame> {
            bail!("connection refused")
        }
    }

    struct FixedProvider(RawFrame);

    #[async_trait]
    impl MarketDataProvider for FixedProvider {
        async fn fetch_daily_series(&self, _: Symbol, _: u32) -> Result<RawFrame> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn provider_error_is_data_unavailable() {
        let loader = SeriesLoader::new(Box::new(FailingProvider));
        let err = loader.load(Symbol::BtcUsd).await.unwrap_err();
        assert!(matches!(err, PipelineError::DataUnavailable(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn unsorted_nested_frame_loads_ascending() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let frame = RawFrame::new(vec![d(2), d(1)])
            .with_column(ColumnKey::nested(["Open", "SOL-USD"]), vec![2.0, 1.0])
            .with_column(ColumnKey::nested(["High", "SOL-USD"]), vec![2.5, 1.5])
            .with_column(ColumnKey::nested(["Low", "SOL-USD"]), vec![1.5, 0.5])
            .with_column(ColumnKey::nested(["Close", "SOL-USD"]), vec![2.2, 1.2]);

        let series = SeriesLoader::new(Box::new(FixedProvider(frame)))
            .load(Symbol::SolUsd)
            .await
            .unwrap();
        assert_eq!(series.dates, vec![d(1), d(2)]);
        assert_eq!(series.closes(), vec![1.2, 2.2]);
    }
}

use itertools::Itertools;

use crate::{
    config::{DF, Price, ReturnPct, VolatilityPct, constants},
    models::{FeatureRow, PriceSeries},
    utils::RollingWindow,
};

/// Derives return, moving averages and rolling volatility from a close series.
#[derive(Debug, Clone, Copy)]
pub struct FeatureEngine {
    pub short_window: usize,
    pub long_window: usize,
    pub volatility_window: usize,
}

impl Default for FeatureEngine {
    fn default() -> Self {
        Self {
            short_window: constants::features::SHORT_MA_WINDOW,
            long_window: constants::features::LONG_MA_WINDOW,
            volatility_window: constants::features::VOLATILITY_WINDOW,
        }
    }
}

impl FeatureEngine {
    /// Number of leading rows that lack full history for at least one field.
    /// Returns start at index 1, so the volatility window needs `volatility_window` prior bars.
    pub fn warmup_rows(&self) -> usize {
        (self.long_window - 1)
            .max(self.short_window - 1)
            .max(self.volatility_window)
    }

    /// One FeatureRow per date whose fields are all defined, in date order.
    /// An empty result means insufficient history, not failure.
    pub fn compute(&self, series: &PriceSeries) -> Vec<FeatureRow> {
        let closes = series.closes();
        let warmup = self.warmup_rows();
        if closes.len() <= warmup {
            if DF.log_feature_engine {
                log::info!(
                    "{}: {} bars, need more than {} for features.",
                    series.symbol,
                    closes.len(),
                    warmup
                );
            }
            return Vec::new();
        }

        // returns[t] is defined for t >= 1
        let returns: Vec<Option<ReturnPct>> = std::iter::once(None)
            .chain(
                closes
                    .iter()
                    .tuple_windows()
                    .map(|(prev, cur)| Some(ReturnPct::calculate(*cur, *prev))),
            )
            .collect();

        let mut short = RollingWindow::new(self.short_window);
        let mut long = RollingWindow::new(self.long_window);
        let mut vol = RollingWindow::new(self.volatility_window);

        let mut rows = Vec::with_capacity(closes.len() - warmup);
        for (t, close) in closes.iter().enumerate() {
            short.push(*close);
            long.push(*close);
            if let Some(r) = returns[t] {
                vol.push(r.value());
            }

            let (Some(ret), Some(ma_s), Some(ma_l), Some(sd)) =
                (returns[t], short.mean(), long.mean(), vol.sample_std_dev())
            else {
                continue;
            };

            rows.push(FeatureRow {
                bar: series.bar(t),
                daily_return: ret,
                ma_short: Price::new(ma_s),
                ma_long: Price::new(ma_l),
                volatility: VolatilityPct::new(sd),
            });
        }

        if DF.log_feature_engine {
            log::info!(
                "{}: {} feature rows from {} bars (first {}).",
                series.symbol,
                rows.len(),
                closes.len(),
                rows.first().map(|r| r.date().to_string()).unwrap_or_default()
            );
        }

        debug_assert_eq!(rows.len(), closes.len() - warmup);
        rows
    }
}

use {
    crate::{
        config::{Price, ReturnPct, VolatilityPct},
        domain::PriceBar,
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A PriceBar augmented with the engineered indicators.
/// Only produced for dates with full trailing history for every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub bar: PriceBar,
    /// close[t] / close[t-1] - 1
    pub daily_return: ReturnPct,
    /// Mean close over the short window
    pub ma_short: Price,
    /// Mean close over the long window
    pub ma_long: Price,
    /// Sample std-dev of daily returns over the volatility window
    pub volatility: VolatilityPct,
}

impl FeatureRow {
    pub fn date(&self) -> NaiveDate {
        self.bar.date
    }
}

impl fmt::Display for FeatureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|ret={}|ma_s={}|ma_l={}|vol={}",
            self.bar.date, self.daily_return, self.ma_short, self.ma_long, self.volatility,
        )
    }
}

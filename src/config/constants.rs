// Top Level Constants
pub const LOG_PERFORMANCE: bool = false;

pub mod market {
    /// Trailing window requested from the market data source.
    pub const LOOKBACK_YEARS: u32 = 5;
    pub const LOOKBACK_MONTHS: u32 = LOOKBACK_YEARS * 12;
}

pub mod features {
    pub const SHORT_MA_WINDOW: usize = 7;
    pub const LONG_MA_WINDOW: usize = 30;
    pub const VOLATILITY_WINDOW: usize = 7;
}

pub mod forecast {
    use crate::config::ArimaOrder;

    pub const ORDER: ArimaOrder = ArimaOrder::new(5, 1, 0);
    pub const HORIZON_DAYS: usize = 30;
    pub const PREVIEW_DAYS: usize = 5;
    /// Extra observations demanded on top of p + d before a fit is attempted.
    pub const FIT_MARGIN: usize = 10;
    /// Singular values below this (relative) are treated as zero by the least-squares solve.
    pub const SVD_EPSILON: f64 = 1e-12;
}

pub mod signals {
    use crate::config::VolatilityPct;

    /// Rolling volatility strictly above this is HIGH risk.
    pub const RISK_VOLATILITY_THRESHOLD: VolatilityPct = VolatilityPct::new(0.02);
}

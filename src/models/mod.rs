mod feature_row;
mod forecast;
mod price_series;
mod signal;
mod summary;

pub use {
    feature_row::FeatureRow,
    forecast::{Forecast, ForecastPoint, ModelSummary},
    price_series::PriceSeries,
    signal::{RiskLevel, SignalPair, TrendSignal},
    summary::SeriesSummary,
};

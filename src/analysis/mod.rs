// Feature engineering, forecasting and signal rules
mod arima;
mod features;
mod forecaster;
pub mod signals;

pub use {
    arima::ArimaModel,
    features::FeatureEngine,
    forecaster::Forecaster,
};

use {
    crate::config::ArimaOrder,
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_close: f64,
}

/// Diagnostics from the model fit that produced a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub order: ArimaOrder,
    pub ar_coeffs: Vec<f64>,
    pub sigma2: f64,
    pub n_obs: usize,
    pub aic: f64,
}

/// A fixed-horizon point forecast, one point per calendar day after the last observation.
/// Created fresh by one fit and discarded with the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub points: Vec<ForecastPoint>,
    pub model: ModelSummary,
}

impl Forecast {
    /// The first `n` points (fewer if the horizon is shorter).
    pub fn preview(&self, n: usize) -> &[ForecastPoint] {
        &self.points[..n.min(self.points.len())]
    }

    pub fn horizon(&self) -> usize {
        self.points.len()
    }
}

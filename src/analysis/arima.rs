//! ARIMA(p, d, 0) estimation by conditional least squares.

use nalgebra::{DMatrix, DVector};
use statrs::statistics::Statistics;

use crate::{
    config::{ArimaOrder, constants::forecast},
    engine::{PipelineError, PipelineResult},
};

/// A fitted ARIMA model, holding everything needed to extrapolate from the end of its sample.
#[derive(Debug, Clone)]
pub struct ArimaModel {
    pub order: ArimaOrder,
    pub ar_coeffs: Vec<f64>,
    /// Only estimated when d == 0; differenced models carry no trend term.
    pub constant: f64,
    pub residuals: Vec<f64>,
    pub sigma2: f64,
    pub aic: f64,
    pub n_obs: usize,
    /// Last value of the series at each differencing level 0..d (level 0 = raw series).
    level_anchors: Vec<f64>,
    /// Trailing p values of the d-times differenced series.
    diff_tail: Vec<f64>,
}

impl ArimaModel {
    pub fn min_observations(order: ArimaOrder) -> usize {
        order.p + order.d + forecast::FIT_MARGIN
    }

    pub fn fit(data: &[f64], order: ArimaOrder) -> PipelineResult<Self> {
        if order.q != 0 {
            return Err(PipelineError::ModelFit(format!(
                "{} requested but moving-average terms are not supported",
                order
            )));
        }

        let required = Self::min_observations(order);
        if data.len() < required {
            return Err(PipelineError::InsufficientHistory {
                required,
                available: data.len(),
            });
        }

        if let Some(idx) = data.iter().position(|v| !v.is_finite()) {
            return Err(PipelineError::ModelFit(format!(
                "non-finite observation at index {}",
                idx
            )));
        }

        // 1. Difference d times, remembering where each level ends
        let mut level_anchors = Vec::with_capacity(order.d);
        let mut diff = data.to_vec();
        for _ in 0..order.d {
            level_anchors.push(*diff.last().unwrap_or(&0.0));
            diff = difference(&diff);
        }

        // 2. Regress on p lags
        let with_constant = order.d == 0;
        let (ar_coeffs, constant, residuals) = estimate_ar(&diff, order.p, with_constant)?;

        // 3. Fit diagnostics
        let n = residuals.len();
        let sigma2 = residuals.iter().map(|r| r * r).mean();
        let k = (order.p + usize::from(with_constant) + 1) as f64;
        let log_likelihood =
            -0.5 * n as f64 * (1.0 + (2.0 * std::f64::consts::PI * sigma2).ln());
        let aic = -2.0 * log_likelihood + 2.0 * k;

        if ar_coeffs.iter().any(|c| !c.is_finite()) || !constant.is_finite() {
            return Err(PipelineError::ModelFit(
                "least-squares solve produced non-finite coefficients".to_string(),
            ));
        }

        let diff_tail = diff[diff.len() - order.p..].to_vec();

        Ok(Self {
            order,
            ar_coeffs,
            constant,
            residuals,
            sigma2,
            aic,
            n_obs: data.len(),
            level_anchors,
            diff_tail,
        })
    }

    /// Iterative one-step-ahead forecasts. Each step sees only observed or earlier forecast values.
    pub fn forecast(&self, steps: usize) -> PipelineResult<Vec<f64>> {
        let p = self.order.p;
        let mut extended = self.diff_tail.clone();
        let mut diff_forecasts = Vec::with_capacity(steps);

        for _ in 0..steps {
            let len = extended.len();
            let next = self.constant
                + (0..p)
                    .map(|i| self.ar_coeffs[i] * extended[len - 1 - i])
                    .sum::<f64>();
            extended.push(next);
            diff_forecasts.push(next);
        }

        // Undo differencing, innermost level first
        let mut result = diff_forecasts;
        for anchor in self.level_anchors.iter().rev() {
            result = integrate(&result, *anchor);
        }

        if let Some(idx) = result.iter().position(|v| !v.is_finite()) {
            return Err(PipelineError::ModelFit(format!(
                "forecast diverged at step {}",
                idx + 1
            )));
        }
        Ok(result)
    }
}

/// First difference of a series.
fn difference(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Inverse of `difference`: cumulative sum anchored at `start`.
fn integrate(diff: &[f64], start: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(diff.len());
    let mut cumsum = start;
    for &d in diff {
        cumsum += d;
        result.push(cumsum);
    }
    result
}

/// OLS of y[t] on [1?, y[t-1], ..., y[t-p]] via SVD (rank-deficient designs get the minimum-norm solution).
fn estimate_ar(
    data: &[f64],
    p: usize,
    with_constant: bool,
) -> PipelineResult<(Vec<f64>, f64, Vec<f64>)> {
    let n = data.len();
    let cols = p + usize::from(with_constant);
    if cols == 0 {
        return Ok((vec![], 0.0, data.to_vec()));
    }

    let rows = n - p;
    let mut x_data = Vec::with_capacity(rows * cols);
    for t in p..n {
        if with_constant {
            x_data.push(1.0);
        }
        for i in 1..=p {
            x_data.push(data[t - i]);
        }
    }

    let x = DMatrix::from_row_slice(rows, cols, &x_data);
    let y = DVector::from_column_slice(&data[p..]);

    let svd = x.clone().svd(true, true);
    let eps = forecast::SVD_EPSILON * svd.singular_values.max().max(1.0);
    let beta = svd
        .solve(&y, eps)
        .map_err(|e| PipelineError::ModelFit(e.to_string()))?;

    let residuals: Vec<f64> = (&y - &x * &beta).iter().copied().collect();

    let (constant, ar_coeffs) = if with_constant {
        (beta[0], beta.iter().skip(1).copied().collect())
    } else {
        (0.0, beta.iter().copied().collect())
    };

    Ok((ar_coeffs, constant, residuals))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: ArimaOrder = ArimaOrder::new(5, 1, 0);

    /// Deterministic pseudo-noise in [-0.5, 0.5).
    fn noise(i: usize) -> f64 {
        let mut x = (i as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
        x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        x ^= x >> 31;
        (x >> 11) as f64 / (1u64 << 53) as f64 - 0.5
    }

    #[test]
    fn difference_and_integrate_are_inverse() {
        let data = vec![1.0, 3.0, 6.0, 10.0, 15.0];
        let diff = difference(&data);
        assert_eq!(diff, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(integrate(&diff, 1.0), data[1..].to_vec());
    }

    #[test]
    fn rejects_short_series() {
        let err = ArimaModel::fit(&[1.0, 2.0, 3.0], ORDER).unwrap_err();
        assert_eq!(
            err,
            PipelineError::InsufficientHistory {
                required: 16,
                available: 3
            }
        );
    }

    #[test]
    fn rejects_non_finite_input() {
        let mut data: Vec<f64> = (0..40).map(|i| 100.0 + noise(i)).collect();
        data[17] = f64::NAN;
        assert!(matches!(
            ArimaModel::fit(&data, ORDER),
            Err(PipelineError::ModelFit(_))
        ));
    }

    #[test]
    fn rejects_moving_average_terms() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + noise(i)).collect();
        assert!(matches!(
            ArimaModel::fit(&data, ArimaOrder::new(1, 1, 1)),
            Err(PipelineError::ModelFit(_))
        ));
    }

    #[test]
    fn recovers_ar1_coefficient_on_differences() {
        // Differences follow AR(1) with phi = 0.6
        let phi = 0.6;
        let mut diffs = vec![0.0];
        for i in 1..600 {
            diffs.push(phi * diffs[i - 1] + noise(i));
        }
        let levels = integrate(&diffs, 1_000.0);

        let model = ArimaModel::fit(&levels, ArimaOrder::new(1, 1, 0)).unwrap();
        assert!((model.ar_coeffs[0] - phi).abs() < 0.1, "{:?}", model.ar_coeffs);
        assert_eq!(model.constant, 0.0);
    }

    #[test]
    fn linear_series_extrapolates_linearly() {
        // Constant differences make the design rank one; the min-norm solve still continues the trend.
        let data: Vec<f64> = (0..50).map(|i| 10.0 + 2.0 * i as f64).collect();
        let model = ArimaModel::fit(&data, ORDER).unwrap();
        let fc = model.forecast(3).unwrap();
        for (k, v) in fc.iter().enumerate() {
            let expected = 10.0 + 2.0 * (50 + k) as f64;
            assert!((v - expected).abs() < 1e-6, "{v} vs {expected}");
        }
    }

    #[test]
    fn flat_series_forecasts_flat() {
        let data = vec![42.0; 30];
        let model = ArimaModel::fit(&data, ORDER).unwrap();
        assert_eq!(model.forecast(5).unwrap(), vec![42.0; 5]);
    }

    #[test]
    fn forecast_has_requested_length_and_starts_near_last_value() {
        let data: Vec<f64> = (0..200)
            .map(|i| 500.0 + (i as f64 * 0.2).sin() * 20.0 + noise(i) * 3.0)
            .collect();
        let model = ArimaModel::fit(&data, ORDER).unwrap();
        let fc = model.forecast(30).unwrap();
        assert_eq!(fc.len(), 30);
        assert!((fc[0] - data[199]).abs() < 50.0);
        assert_eq!(model.ar_coeffs.len(), 5);
        assert_eq!(model.residuals.len(), 199 - 5);
        assert!(model.sigma2 > 0.0);
    }
}

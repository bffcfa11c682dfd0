use crate::{
    analysis::ArimaModel,
    config::{ArimaOrder, DF, constants},
    engine::{PipelineError, PipelineResult},
    models::{Forecast, ForecastPoint, ModelSummary, PriceSeries},
    trace_time,
    utils::following_calendar_days,
};

/// Fits a fresh ARIMA model on every call and projects closes forward one calendar day at a time.
#[derive(Debug, Clone, Copy)]
pub struct Forecaster {
    pub order: ArimaOrder,
    pub horizon: usize,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self {
            order: constants::forecast::ORDER,
            horizon: constants::forecast::HORIZON_DAYS,
        }
    }
}

impl Forecaster {
    pub fn forecast(&self, series: &PriceSeries) -> PipelineResult<Forecast> {
        let closes = series.closes();
        let last_date = series.last_date().ok_or(PipelineError::InsufficientHistory {
            required: ArimaModel::min_observations(self.order),
            available: 0,
        })?;

        let model = trace_time!("ARIMA fit", 20_000, {
            ArimaModel::fit(&closes, self.order)
        })?;

        if DF.log_model_fit {
            log::info!(
                "{} {} fitted on {} closes: ar={:?} sigma2={:.6} aic={:.2}",
                series.symbol,
                self.order,
                model.n_obs,
                model.ar_coeffs,
                model.sigma2,
                model.aic
            );
        }

        let values = model.forecast(self.horizon)?;
        let dates = following_calendar_days(last_date, self.horizon).ok_or_else(|| {
            PipelineError::InvalidInput(format!(
                "{} + {} days leaves the supported date range",
                last_date, self.horizon
            ))
        })?;

        let points = dates
            .into_iter()
            .zip(values)
            .map(|(date, predicted_close)| ForecastPoint {
                date,
                predicted_close,
            })
            .collect();

        Ok(Forecast {
            points,
            model: ModelSummary {
                order: model.order,
                ar_coeffs: model.ar_coeffs,
                sigma2: model.sigma2,
                n_obs: model.n_obs,
                aic: model.aic,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceBar, Symbol};
    use chrono::{Days, NaiveDate};

    fn series(n: usize) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let bars = (0..n)
            .map(|i| {
                let c = 200.0 + (i as f64 * 0.3).sin() * 10.0 + i as f64 * 0.05;
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                PriceBar::new(date, c, c + 1.0, c - 1.0, c)
            })
            .collect();
        PriceSeries::from_bars(Symbol::EthUsd, bars)
    }

    #[test]
    fn thirty_consecutive_dates_after_last_bar() {
        let s = series(120);
        let last = s.last_date().unwrap();
        let fc = Forecaster::default().forecast(&s).unwrap();
        assert_eq!(fc.horizon(), 30);
        for (k, p) in fc.points.iter().enumerate() {
            assert_eq!(p.date, last.checked_add_days(Days::new(k as u64 + 1)).unwrap());
            assert!(p.predicted_close.is_finite());
        }
        assert_eq!(fc.preview(5), &fc.points[..5]);
        assert_eq!(fc.model.n_obs, 120);
    }

    #[test]
    fn three_bars_is_insufficient() {
        let err = Forecaster::default().forecast(&series(3)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientHistory { available: 3, .. }
        ));
    }

    #[test]
    fn empty_series_is_insufficient() {
        let err = Forecaster::default().forecast(&series(0)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientHistory { available: 0, .. }
        ));
    }

    #[test]
    fn same_input_same_forecast() {
        let s = series(300);
        let a = Forecaster::default().forecast(&s).unwrap();
        let b = Forecaster::default().forecast(&s).unwrap();
        assert_eq!(a, b);
    }
}

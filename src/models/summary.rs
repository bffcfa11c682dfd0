use {
    crate::{
        config::{ClosePrice, HighPrice, LowPrice, PriceLike},
        models::PriceSeries,
        utils::{get_max, get_min},
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Headline metrics for the loaded window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub current_price: ClosePrice,
    pub highest_price: HighPrice,
    pub lowest_price: LowPrice,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub bar_count: usize,
}

impl SeriesSummary {
    /// Returns None for an empty series.
    pub fn from_series(series: &PriceSeries) -> Option<Self> {
        let first_date = *series.dates.first()?;
        let last_date = *series.dates.last()?;
        let current_price = *series.close_prices.last()?;

        let highs: Vec<f64> = series.high_prices.iter().map(|h| h.value()).collect();
        let lows: Vec<f64> = series.low_prices.iter().map(|l| l.value()).collect();

        Some(Self {
            current_price,
            highest_price: HighPrice::new(get_max(&highs)),
            lowest_price: LowPrice::new(get_min(&lows)),
            first_date,
            last_date,
            bar_count: series.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceBar, Symbol};

    #[test]
    fn summary_picks_last_close_and_extremes() {
        let d = |day| NaiveDate::from_ymd_opt(2023, 5, day).unwrap();
        let series = PriceSeries::from_bars(
            Symbol::BtcUsd,
            vec![
                PriceBar::new(d(1), 10.0, 12.0, 9.0, 11.0),
                PriceBar::new(d(2), 11.0, 15.0, 10.5, 14.0),
                PriceBar::new(d(3), 14.0, 14.5, 8.0, 9.5),
            ],
        );
        let s = SeriesSummary::from_series(&series).unwrap();
        assert_eq!(s.current_price.value(), 9.5);
        assert_eq!(s.highest_price.value(), 15.0);
        assert_eq!(s.lowest_price.value(), 8.0);
        assert_eq!(s.bar_count, 3);
        assert_eq!((s.first_date, s.last_date), (d(1), d(3)));
    }

    #[test]
    fn empty_series_has_no_summary() {
        let series = PriceSeries::from_bars(Symbol::BtcUsd, vec![]);
        assert!(SeriesSummary::from_series(&series).is_none());
    }
}

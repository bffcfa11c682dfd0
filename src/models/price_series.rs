use {
    crate::{
        config::{ClosePrice, HighPrice, LowPrice, OpenPrice, PriceLike},
        domain::{PriceBar, Symbol},
    },
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

/// Daily OHLC series for one symbol, stored column-wise.
/// Immutable once loaded; owned by a single pipeline run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: Symbol,
    pub dates: Vec<NaiveDate>,
    pub open_prices: Vec<OpenPrice>,
    pub high_prices: Vec<HighPrice>,
    pub low_prices: Vec<LowPrice>,
    pub close_prices: Vec<ClosePrice>,
}

impl PriceSeries {
    /// Builds the series in ascending date order. Ties keep source order (no de-duplication).
    pub fn from_bars(symbol: Symbol, mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);

        let len = bars.len();
        let mut dates = Vec::with_capacity(len);
        let mut open_vec = Vec::with_capacity(len);
        let mut high_vec = Vec::with_capacity(len);
        let mut low_vec = Vec::with_capacity(len);
        let mut close_vec = Vec::with_capacity(len);

        for b in &bars {
            dates.push(b.date);
            open_vec.push(b.open_price);
            high_vec.push(b.high_price);
            low_vec.push(b.low_price);
            close_vec.push(b.close_price);
        }

        Self {
            symbol,
            dates,
            open_prices: open_vec,
            high_prices: high_vec,
            low_prices: low_vec,
            close_prices: close_vec,
        }
    }

    pub fn bar(&self, idx: usize) -> PriceBar {
        PriceBar {
            date: self.dates[idx],
            open_price: self.open_prices[idx],
            high_price: self.high_prices[idx],
            low_price: self.low_prices[idx],
            close_price: self.close_prices[idx],
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = PriceBar> + '_ {
        (0..self.len()).map(|idx| self.bar(idx))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Close prices as raw floats (model input).
    pub fn closes(&self) -> Vec<f64> {
        self.close_prices.iter().map(|c| c.value()).collect()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn from_bars_sorts_ascending() {
        let bars = vec![
            PriceBar::new(d(3), 3.0, 3.5, 2.5, 3.2),
            PriceBar::new(d(1), 1.0, 1.5, 0.5, 1.2),
            PriceBar::new(d(2), 2.0, 2.5, 1.5, 2.2),
        ];
        let series = PriceSeries::from_bars(Symbol::BtcUsd, bars);
        assert_eq!(series.dates, vec![d(1), d(2), d(3)]);
        assert_eq!(series.closes(), vec![1.2, 2.2, 3.2]);
        assert_eq!(series.last_date(), Some(d(3)));
        assert_eq!(series.bar(1).high_price.value(), 2.5);
    }

    #[test]
    fn empty_series() {
        let series = PriceSeries::from_bars(Symbol::EthUsd, vec![]);
        assert!(series.is_empty());
        assert_eq!(series.last_date(), None);
        assert_eq!(series.bars().count(), 0);
    }
}

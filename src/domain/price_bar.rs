use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{ClosePrice, HighPrice, LowPrice, OpenPrice};

// One calendar day's observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,

    pub open_price: OpenPrice,
    pub high_price: HighPrice,
    pub low_price: LowPrice,
    pub close_price: ClosePrice,
}

impl PriceBar {
    // A constructor for convenience
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        PriceBar {
            date,
            open_price: OpenPrice::new(open),
            high_price: HighPrice::new(high),
            low_price: LowPrice::new(low),
            close_price: ClosePrice::new(close),
        }
    }
}

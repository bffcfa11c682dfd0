use {
    crate::{
        config::{DEMO, DemoSeries},
        data::{ColumnKey, MarketDataProvider, RawFrame},
        domain::Symbol,
        utils::{lookback_start, today_local},
    },
    anyhow::{Result, anyhow},
    async_trait::async_trait,
    chrono::{Days, NaiveDate},
    std::f64::consts::TAU,
};

/// Deterministic demo series: exponential drift, two seasonal waves and hashed jitter.
/// The same `(symbol, as_of, bar_count)` always yields the same frame.
pub struct SyntheticProvider {
    as_of: NaiveDate,
    bar_count: usize,
    nested: bool,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            as_of: today_local(),
            bar_count: DEMO.bar_count,
            nested: false,
        }
    }
}

impl SyntheticProvider {
    pub fn new(as_of: NaiveDate, bar_count: usize) -> Self {
        Self {
            as_of,
            bar_count,
            nested: false,
        }
    }

    /// Emit `(field, ticker)` column keys like a multi-ticker download.
    pub fn with_nested_columns(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn generate(&self, symbol: Symbol) -> Result<RawFrame> {
        let params = DEMO
            .series_for(symbol)
            .ok_or_else(|| anyhow!("no demo parameters for {}", symbol))?;

        let mut index = Vec::with_capacity(self.bar_count);
        let mut opens = Vec::with_capacity(self.bar_count);
        let mut highs = Vec::with_capacity(self.bar_count);
        let mut lows = Vec::with_capacity(self.bar_count);
        let mut closes = Vec::with_capacity(self.bar_count);

        let mut prev_close = close_at(params, 0);
        for i in 0..self.bar_count {
            let back = (self.bar_count - 1 - i) as u64;
            let date = self
                .as_of
                .checked_sub_days(Days::new(back))
                .ok_or_else(|| anyhow!("{} bars before {} is out of range", back, self.as_of))?;

            let close = close_at(params, i);
            let open = prev_close;
            let wick = 1.0 + 0.01 * jitter(i, 17).abs();
            index.push(date);
            opens.push(open);
            highs.push(open.max(close) * wick);
            lows.push(open.min(close) / wick);
            closes.push(close);
            prev_close = close;
        }

        let key = |field: &str| {
            if self.nested {
                ColumnKey::nested([field, symbol.ticker()])
            } else {
                ColumnKey::flat(field)
            }
        };

        Ok(RawFrame::new(index)
            .with_column(key("Open"), opens)
            .with_column(key("High"), highs)
            .with_column(key("Low"), lows)
            .with_column(key("Close"), closes))
    }
}

fn close_at(params: &DemoSeries, i: usize) -> f64 {
    let t = i as f64;
    let trend = params.base_price * (params.daily_drift * t).exp();
    let waves = 0.6 * (TAU * t / 365.0).sin() + 0.4 * (TAU * t / 29.0).sin();
    trend * (1.0 + params.wave_amplitude * waves) * (1.0 + 0.015 * jitter(i, 3))
}

/// Deterministic value in [-1, 1).
fn jitter(i: usize, salt: u64) -> f64 {
    let mut x = (i as u64).wrapping_add(salt).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x ^= x >> 29;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 32;
    (x % 20_000) as f64 / 10_000.0 - 1.0
}

#[async_trait]
impl MarketDataProvider for SyntheticProvider {
    async fn fetch_daily_series(&self, symbol: Symbol, lookback_months: u32) -> Result<RawFrame> {
        let mut frame = self.generate(symbol)?;
        let start = lookback_start(self.as_of, lookback_months);
        frame.retain_dates(|d| d >= start);
        Ok(frame)
    }
}

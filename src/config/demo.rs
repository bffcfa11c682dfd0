use crate::domain::Symbol;

pub struct DemoSeries {
    pub symbol: Symbol,
    pub base_price: f64,
    /// Fractional drift per day.
    pub daily_drift: f64,
    /// Relative amplitude of the seasonal waves.
    pub wave_amplitude: f64,
}

pub struct DemoConfig {
    /// Calendar days generated per symbol (one bar per day).
    pub bar_count: usize,
    pub series: &'static [DemoSeries],
}

impl DemoConfig {
    pub fn series_for(&self, symbol: Symbol) -> Option<&DemoSeries> {
        self.series.iter().find(|s| s.symbol == symbol)
    }
}

pub const DEMO: DemoConfig = DemoConfig {
    bar_count: 5 * 365,
    series: &[
        DemoSeries {
            symbol: Symbol::BtcUsd,
            base_price: 11_500.0,
            daily_drift: 0.0011,
            wave_amplitude: 0.12,
        },
        DemoSeries {
            symbol: Symbol::EthUsd,
            base_price: 380.0,
            daily_drift: 0.0013,
            wave_amplitude: 0.18,
        },
        DemoSeries {
            symbol: Symbol::SolUsd,
            base_price: 2.6,
            daily_drift: 0.0024,
            wave_amplitude: 0.25,
        },
    ],
};

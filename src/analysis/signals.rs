use crate::{
    config::{DF, constants::signals::RISK_VOLATILITY_THRESHOLD},
    models::{FeatureRow, RiskLevel, SignalPair, TrendSignal},
};

/// BUY only when the short average is strictly above the long one.
pub fn trend_signal(row: &FeatureRow) -> TrendSignal {
    if row.ma_short > row.ma_long {
        TrendSignal::Buy
    } else {
        TrendSignal::Sell
    }
}

/// HIGH only when volatility strictly exceeds the threshold.
pub fn risk_level(row: &FeatureRow) -> RiskLevel {
    if row.volatility > RISK_VOLATILITY_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

pub fn evaluate(row: &FeatureRow) -> SignalPair {
    let pair = SignalPair {
        trend: trend_signal(row),
        risk: risk_level(row),
    };
    if DF.log_signals {
        log::info!("{} -> {} / {}", row, pair.trend, pair.risk);
    }
    pair
}

/// Signals for the most recent row. None when no row has full history.
pub fn evaluate_latest(rows: &[FeatureRow]) -> Option<SignalPair> {
    rows.last().map(evaluate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Price, ReturnPct, VolatilityPct};
    use crate::domain::PriceBar;
    use chrono::NaiveDate;

    fn row(ma_short: f64, ma_long: f64, vol: f64) -> FeatureRow {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        FeatureRow {
            bar: PriceBar::new(date, 100.0, 101.0, 99.0, 100.0),
            daily_return: ReturnPct::new(0.0),
            ma_short: Price::new(ma_short),
            ma_long: Price::new(ma_long),
            volatility: VolatilityPct::new(vol),
        }
    }

    #[test]
    fn short_above_long_is_buy() {
        assert_eq!(trend_signal(&row(105.0, 100.0, 0.01)), TrendSignal::Buy);
    }

    #[test]
    fn equal_averages_is_sell() {
        assert_eq!(trend_signal(&row(100.0, 100.0, 0.01)), TrendSignal::Sell);
        assert_eq!(trend_signal(&row(99.0, 100.0, 0.01)), TrendSignal::Sell);
    }

    #[test]
    fn risk_threshold_is_strict() {
        assert_eq!(risk_level(&row(1.0, 1.0, 0.021)), RiskLevel::High);
        assert_eq!(risk_level(&row(1.0, 1.0, 0.02)), RiskLevel::Low);
        assert_eq!(risk_level(&row(1.0, 1.0, 0.0)), RiskLevel::Low);
    }

    #[test]
    fn latest_uses_last_row() {
        let rows = [row(90.0, 100.0, 0.05), row(110.0, 100.0, 0.01)];
        assert_eq!(
            evaluate_latest(&rows),
            Some(SignalPair {
                trend: TrendSignal::Buy,
                risk: RiskLevel::Low
            })
        );
        assert_eq!(evaluate_latest(&[]), None);
    }
}

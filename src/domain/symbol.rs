use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// The fixed set of instruments the dashboard can analyse.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Default,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    #[default]
    #[strum(serialize = "BTC-USD")]
    #[serde(rename = "BTC-USD")]
    BtcUsd,
    #[strum(serialize = "ETH-USD")]
    #[serde(rename = "ETH-USD")]
    EthUsd,
    #[strum(serialize = "SOL-USD")]
    #[serde(rename = "SOL-USD")]
    SolUsd,
}

impl Symbol {
    /// Ticker as used by the data source (also the CSV file stem).
    pub fn ticker(&self) -> &'static str {
        match self {
            Self::BtcUsd => "BTC-USD",
            Self::EthUsd => "ETH-USD",
            Self::SolUsd => "SOL-USD",
        }
    }

    pub fn base_asset(&self) -> &'static str {
        self.ticker().split('-').next().unwrap_or_default()
    }

    /// Free-text query used for headline searches.
    pub fn news_query(&self) -> &'static str {
        match self {
            Self::BtcUsd => "Bitcoin",
            Self::EthUsd => "Ethereum",
            Self::SolUsd => "Solana",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_tickers_case_insensitively() {
        assert_eq!(Symbol::from_str("BTC-USD").ok(), Some(Symbol::BtcUsd));
        assert_eq!(Symbol::from_str("eth-usd").ok(), Some(Symbol::EthUsd));
        assert!(Symbol::from_str("DOGE-USD").is_err());
    }

    #[test]
    fn display_round_trips_through_ticker() {
        for symbol in Symbol::iter() {
            assert_eq!(symbol.to_string(), symbol.ticker());
        }
        assert_eq!(Symbol::SolUsd.base_asset(), "SOL");
    }
}

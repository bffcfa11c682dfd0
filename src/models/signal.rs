use {
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendSignal {
    #[strum(to_string = "BUY")]
    Buy,
    #[strum(to_string = "SELL")]
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[strum(to_string = "HIGH")]
    High,
    #[strum(to_string = "LOW")]
    Low,
}

/// The two independent decisions drawn from the latest feature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalPair {
    pub trend: TrendSignal,
    pub risk: RiskLevel,
}

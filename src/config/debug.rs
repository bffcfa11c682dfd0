//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log raw frame shape and the outcome of column flattening.
    pub log_normalization: bool,

    /// Log row counts produced by the feature engine.
    pub log_feature_engine: bool,

    /// Log fitted coefficients and residual variance.
    pub log_model_fit: bool,

    /// Log the evaluated signal pair.
    pub log_signals: bool,

    /// Log outgoing news requests and article counts.
    pub log_news: bool,
}

pub const DF: LogFlags = LogFlags {
    log_normalization: true,
    log_model_fit: true,

    log_feature_engine: false,
    log_signals: false,
    log_news: false,
};

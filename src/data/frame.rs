use {
    crate::{
        config::DF,
        domain::{PriceBar, Symbol},
        engine::{PipelineError, PipelineResult},
        models::PriceSeries,
    },
    chrono::NaiveDate,
    std::{collections::HashSet, fmt},
};

/// Column identifier as delivered by a provider. Nested keys list levels outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Flat(String),
    Nested(Vec<String>),
}

impl ColumnKey {
    pub fn flat(name: impl Into<String>) -> Self {
        Self::Flat(name.into())
    }

    pub fn nested<S: Into<String>>(levels: impl IntoIterator<Item = S>) -> Self {
        Self::Nested(levels.into_iter().map(Into::into).collect())
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Flat(name) => write!(f, "{}", name),
            ColumnKey::Nested(levels) => write!(f, "({})", levels.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlattenError {
    Collision { name: String },
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlattenError::Collision { name } => {
                write!(f, "more than one column flattens to '{}'", name)
            }
        }
    }
}

impl std::error::Error for FlattenError {}

/// Raw tabular result of a market-data fetch: a date index plus keyed numeric columns.
/// Missing or unparsable cells are NaN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFrame {
    pub index: Vec<NaiveDate>,
    pub columns: Vec<(ColumnKey, Vec<f64>)>,
}

impl RawFrame {
    pub fn new(index: Vec<NaiveDate>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, key: ColumnKey, values: Vec<f64>) -> Self {
        self.columns.push((key, values));
        self
    }

    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn has_nested_columns(&self) -> bool {
        self.columns.iter().any(|(k, _)| k.is_nested())
    }

    /// Values of the flat column named `name` (ASCII case-insensitive).
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.iter().find_map(|(key, values)| match key {
            ColumnKey::Flat(n) if n.eq_ignore_ascii_case(name) => Some(values.as_slice()),
            _ => None,
        })
    }

    /// Keeps only rows whose date satisfies `keep`.
    pub fn retain_dates(&mut self, keep: impl Fn(NaiveDate) -> bool) {
        let mask: Vec<bool> = self.index.iter().map(|d| keep(*d)).collect();
        let filter = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .zip(&mask)
                .filter_map(|(v, keep)| keep.then_some(*v))
                .collect()
        };
        for (_, values) in self.columns.iter_mut() {
            *values = filter(values);
        }
        self.index = self
            .index
            .iter()
            .zip(&mask)
            .filter_map(|(d, keep)| keep.then_some(*d))
            .collect();
    }

    /// Collapses nested keys to their field level (level 0).
    /// A key with no levels becomes `Unnamed: <position>`.
    pub fn try_flatten(&self) -> Result<RawFrame, FlattenError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(self.columns.len());

        for (position, (key, values)) in self.columns.iter().enumerate() {
            let name = match key {
                ColumnKey::Flat(name) => name.clone(),
                ColumnKey::Nested(levels) => levels
                    .first()
                    .cloned()
                    .unwrap_or_else(|| format!("Unnamed: {}", position)),
            };
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(FlattenError::Collision { name });
            }
            columns.push((ColumnKey::Flat(name), values.clone()));
        }

        Ok(RawFrame {
            index: self.index.clone(),
            columns,
        })
    }
}

/// Best-effort flattening. Any failure is logged and the frame passes through unchanged.
pub fn normalize_columns(frame: RawFrame) -> RawFrame {
    if !frame.has_nested_columns() {
        return frame;
    }

    match frame.try_flatten() {
        Ok(flat) => {
            if DF.log_normalization {
                log::info!(
                    "Flattened {} nested columns over {} rows.",
                    flat.columns.len(),
                    flat.row_count()
                );
            }
            flat
        }
        Err(e) => {
            log::warn!("Column flattening skipped: {}", e);
            frame
        }
    }
}

const REQUIRED_FIELDS: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Builds an ascending PriceSeries from a (flattened) frame.
pub fn build_series(symbol: Symbol, frame: &RawFrame) -> PipelineResult<PriceSeries> {
    if frame.is_empty() {
        return Err(PipelineError::DataUnavailable(format!(
            "no rows returned for {}",
            symbol
        )));
    }

    let mut fields: Vec<&[f64]> = Vec::with_capacity(REQUIRED_FIELDS.len());
    for name in REQUIRED_FIELDS {
        let values = frame.column(name).ok_or_else(|| {
            PipelineError::DataUnavailable(format!("{}: missing '{}' column", symbol, name))
        })?;
        if values.len() != frame.row_count() {
            return Err(PipelineError::DataUnavailable(format!(
                "{}: '{}' has {} values for {} dates",
                symbol,
                name,
                values.len(),
                frame.row_count()
            )));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite() || *v <= 0.0) {
            return Err(PipelineError::DataUnavailable(format!(
                "{}: bad '{}' value {} on {}",
                symbol, name, values[idx], frame.index[idx]
            )));
        }
        fields.push(values);
    }

    let bars = frame
        .index
        .iter()
        .enumerate()
        .map(|(i, date)| PriceBar::new(*date, fields[0][i], fields[1][i], fields[2][i], fields[3][i]))
        .collect();

    Ok(PriceSeries::from_bars(symbol, bars))
}

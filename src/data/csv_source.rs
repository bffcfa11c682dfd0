use {
    crate::{
        data::{ColumnKey, MarketDataProvider, RawFrame},
        domain::Symbol,
        utils::{format_date, lookback_start, parse_leading_date, today_local},
    },
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    chrono::NaiveDate,
    csv::{ReaderBuilder, StringRecord, Writer},
    std::path::{Path, PathBuf},
};

/// Offline provider reading `<dir>/<TICKER>.csv`.
///
/// Accepts a flat header (`Date,Open,High,Low,Close,...`) or the multi-row header
/// written by common downloaders:
///
/// ```text
/// Price,Close,High,Low,Open,Volume
/// Ticker,BTC-USD,BTC-USD,BTC-USD,BTC-USD,BTC-USD
/// Date,,,,,
/// 2020-01-01,7200.1,7254.3,7174.9,7194.8,18565664997
/// ```
pub struct CsvProvider {
    dir: PathBuf,
    as_of: NaiveDate,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            as_of: today_local(),
        }
    }

    /// Treat `as_of` as "now" when applying the lookback window.
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn path_for(&self, symbol: Symbol) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.ticker()))
    }
}

#[async_trait]
impl MarketDataProvider for CsvProvider {
    async fn fetch_daily_series(&self, symbol: Symbol, lookback_months: u32) -> Result<RawFrame> {
        let path = self.path_for(symbol);
        let mut frame = read_frame(&path)?;

        let start = lookback_start(self.as_of, lookback_months);
        let as_of = self.as_of;
        frame.retain_dates(|d| d >= start && d <= as_of);
        Ok(frame)
    }
}

/// Parses a price CSV with one or more header rows. Header rows are every row before
/// the first one whose leading cell is a date.
pub fn read_frame(path: &Path) -> Result<RawFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut headers: Vec<StringRecord> = Vec::new();
    let mut index = Vec::new();
    let mut rows: Vec<StringRecord> = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("{}: bad record {}", path.display(), line + 1))?;
        let first = record.get(0).unwrap_or_default();
        match parse_leading_date(first) {
            Some(date) => {
                index.push(date);
                rows.push(record);
            }
            None if rows.is_empty() => headers.push(record),
            None => bail!(
                "{}: line {}: '{}' is not a date",
                path.display(),
                line + 1,
                first
            ),
        }
    }

    if headers.is_empty() {
        bail!("{}: no header row", path.display());
    }

    let width = headers.iter().map(|h| h.len()).max().unwrap_or(0);
    let keys: Vec<ColumnKey> = (1..width)
        .map(|col| column_key(&headers, col))
        .collect();

    let mut frame = RawFrame::new(index);
    for (offset, key) in keys.into_iter().enumerate() {
        let col = offset + 1;
        let values = rows
            .iter()
            .map(|r| {
                r.get(col)
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            })
            .collect();
        frame = frame.with_column(key, values);
    }
    Ok(frame)
}

fn column_key(headers: &[StringRecord], col: usize) -> ColumnKey {
    if let [single] = headers {
        return ColumnKey::flat(single.get(col).unwrap_or_default().trim());
    }
    ColumnKey::nested(
        headers
            .iter()
            .filter_map(|h| h.get(col).map(str::trim))
            .filter(|cell| !cell.is_empty()),
    )
}

/// Writes a frame using the multi-row header layout when its keys are nested.
pub fn write_frame(path: &Path, frame: &RawFrame, ticker: &str) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let names: Vec<String> = frame
        .columns
        .iter()
        .map(|(key, _)| match key {
            ColumnKey::Flat(name) => name.clone(),
            ColumnKey::Nested(levels) => levels.first().cloned().unwrap_or_default(),
        })
        .collect();

    if frame.has_nested_columns() {
        let blanks = vec![String::new(); names.len()];
        let tickers = vec![ticker.to_string(); names.len()];
        writer.write_record(std::iter::once("Price".to_string()).chain(names))?;
        writer.write_record(std::iter::once("Ticker".to_string()).chain(tickers))?;
        writer.write_record(std::iter::once("Date".to_string()).chain(blanks))?;
    } else {
        writer.write_record(std::iter::once("Date".to_string()).chain(names))?;
    }

    for (row, date) in frame.index.iter().enumerate() {
        let cells = frame.columns.iter().map(|(_, v)| v[row].to_string());
        writer.write_record(std::iter::once(format_date(*date)).chain(cells))?;
    }

    writer.flush()?;
    Ok(())
}

mod csv_source;
mod frame;
mod news;
mod provider;
mod synthetic;

pub use {
    csv_source::{CsvProvider, read_frame, write_frame},
    frame::{ColumnKey, FlattenError, RawFrame, build_series, normalize_columns},
    news::{Article, NewsApiClient, NewsProvider, parse_articles},
    provider::{MarketDataProvider, SeriesLoader},
    synthetic::SyntheticProvider,
};

#[cfg(test)]
pub(crate) use news::test_server;

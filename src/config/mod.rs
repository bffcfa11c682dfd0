//! Configuration module for the forecast pipeline.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod news;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::LOG_PERFORMANCE;
pub use debug::DF;
pub use demo::{DEMO, DemoConfig, DemoSeries};
pub use news::{NEWS, NewsApiConfig};
pub use types::{
    ArimaOrder, ClosePrice, HighPrice, LowPrice, OpenPrice, Price, PriceLike, ReturnPct,
    SentimentScore, VolatilityPct,
};

mod error;
mod insights;
mod pipeline;

pub use {
    error::{PipelineError, PipelineResult},
    insights::MarketInsights,
    pipeline::{PipelineReport, PricePipeline},
};

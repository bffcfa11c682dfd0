use std::{error::Error, fmt};

/// Failure states surfaced to the invoking layer. No stage retries or substitutes a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Upstream series fetch returned nothing, or a frame we cannot read as OHLC.
    DataUnavailable(String),
    /// Not enough observations for the requested computation.
    InsufficientHistory { required: usize, available: usize },
    /// The forecasting routine could not produce a finite fit.
    ModelFit(String),
    /// News or sentiment collaborator unreachable or answered with an error.
    ExternalService(String),
    /// Caller supplied something the pipeline cannot act on.
    InvalidInput(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
            PipelineError::InsufficientHistory {
                required,
                available,
            } => write!(
                f,
                "Insufficient history: need at least {} observations, have {}",
                required, available
            ),
            PipelineError::ModelFit(msg) => write!(f, "Model fit failed: {}", msg),
            PipelineError::ExternalService(msg) => {
                write!(f, "External service failed: {}.", msg)
            }
            PipelineError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl Error for PipelineError {}

pub type PipelineResult<T> = Result<T, PipelineError>;

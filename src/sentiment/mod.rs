//! Free-text sentiment classification.

mod lexicon;

use {
    crate::config::SentimentScore,
    anyhow::Result,
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

pub use lexicon::LexiconClassifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    #[strum(to_string = "POSITIVE")]
    Positive,
    #[strum(to_string = "NEGATIVE")]
    Negative,
}

/// A binary label and the classifier's confidence in it, in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub confidence: f64,
}

pub trait SentimentClassifier: Send + Sync {
    /// Callers reject blank text before classifying.
    fn classify(&self, text: &str) -> Result<Classification>;
}

impl From<Classification> for SentimentScore {
    fn from(c: Classification) -> Self {
        match c.label {
            SentimentLabel::Positive => SentimentScore::new(c.confidence),
            SentimentLabel::Negative => SentimentScore::new(-c.confidence),
        }
    }
}

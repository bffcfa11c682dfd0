use {
    super::{Classification, SentimentClassifier, SentimentLabel},
    anyhow::{Result, bail},
    std::collections::{HashMap, HashSet},
};

const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("bullish", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("gain", 0.5),
    ("gains", 0.5),
    ("profit", 0.6),
    ("growth", 0.6),
    ("rise", 0.5),
    ("rises", 0.5),
    ("up", 0.3),
    ("strong", 0.5),
    ("positive", 0.5),
    ("optimistic", 0.6),
    ("record", 0.6),
    ("adoption", 0.5),
    ("approval", 0.6),
    ("approved", 0.6),
    ("upgrade", 0.6),
    ("breakout", 0.6),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("moon", 0.7),
    ("good", 0.5),
    ("great", 0.7),
    ("love", 0.7),
    ("excellent", 0.8),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("bearish", -0.8),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("drop", -0.6),
    ("drops", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("decline", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("down", -0.4),
    ("weak", -0.5),
    ("negative", -0.5),
    ("fear", -0.6),
    ("uncertainty", -0.5),
    ("selloff", -0.7),
    ("dump", -0.7),
    ("hack", -0.8),
    ("hacked", -0.8),
    ("ban", -0.7),
    ("crisis", -0.8),
    ("fail", -0.7),
    ("scam", -0.9),
    ("fraud", -0.9),
    ("bad", -0.5),
    ("terrible", -0.8),
    ("hate", -0.7),
    ("worst", -0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "cannot", "cant", "dont", "doesnt", "didnt", "wont", "isnt",
    "arent", "wasnt", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("highly", 1.5),
    ("massively", 1.8),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

/// Tokens after a negation that have their polarity flipped.
const NEGATION_SCOPE: usize = 3;
/// Normalization constant for `x / sqrt(x^2 + alpha)`.
const NORMALIZATION_ALPHA: f64 = 2.0;

/// Rule-based financial/crypto word lexicon with negation and intensifier handling.
/// Confidence is 0.5 for neutral text and approaches 1.0 as the net score grows.
pub struct LexiconClassifier {
    words: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self {
            words: POSITIVE_TERMS
                .iter()
                .chain(NEGATIVE_TERMS)
                .copied()
                .collect(),
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl LexiconClassifier {
    /// Net polarity of `text`, normalized into (-1, 1).
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|t| {
                t.chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0.0;
        let mut negated_for = 0usize;
        let mut boost = 1.0;

        for token in &tokens {
            if self.negations.contains(token.as_str()) {
                negated_for = NEGATION_SCOPE;
                continue;
            }
            if let Some(m) = self.intensifiers.get(token.as_str()) {
                boost = *m;
                continue;
            }

            if let Some(score) = self.words.get(token.as_str()) {
                let sign = if negated_for > 0 { -1.0 } else { 1.0 };
                total += sign * score * boost;
            }
            boost = 1.0;
            negated_for = negated_for.saturating_sub(1);
        }

        total / (total * total + NORMALIZATION_ALPHA).sqrt()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        if text.trim().is_empty() {
            bail!("cannot classify empty text");
        }

        let polarity = self.polarity(text);
        let label = if polarity >= 0.0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        };
        Ok(Classification {
            label,
            confidence: 0.5 + 0.5 * polarity.abs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullish_text_is_positive() {
        let c = LexiconClassifier::default()
            .classify("Bitcoin surges to a record high on ETF approval")
            .unwrap();
        assert_eq!(c.label, SentimentLabel::Positive);
        assert!(c.confidence > 0.7 && c.confidence < 1.0);
    }

    #[test]
    fn bearish_text_is_negative() {
        let c = LexiconClassifier::default()
            .classify("Exchange hacked, prices crash amid fear")
            .unwrap();
        assert_eq!(c.label, SentimentLabel::Negative);
        assert!(c.confidence > 0.7);
    }

    #[test]
    fn negation_flips_polarity() {
        let lex = LexiconClassifier::default();
        assert!(lex.polarity("this is good") > 0.0);
        assert!(lex.polarity("this is not good") < 0.0);
    }

    #[test]
    fn intensifier_strengthens() {
        let lex = LexiconClassifier::default();
        assert!(lex.polarity("very bullish") > lex.polarity("bullish"));
    }

    #[test]
    fn neutral_text_has_half_confidence() {
        let c = LexiconClassifier::default()
            .classify("The meeting is on Tuesday")
            .unwrap();
        assert_eq!(c.confidence, 0.5);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(LexiconClassifier::default().classify("   \n").is_err());
    }
}

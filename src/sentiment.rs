//! Keyword-based sentiment classification for headlines and blurbs.
//!
//! A deliberately small heuristic: count positive and negative keyword
//! hits and label by the imbalance. Consumers only act on the label; the
//! score is informational.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "positive", "growth", "win", "success", "benefit", "surge",
    "record", "best", "strong",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "terrible", "negative", "loss", "fail", "decline", "drop", "worst", "weak",
    "fraud", "lawsuit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Aggregate label counts, e.g. for a page of search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentTally {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }
}

/// Classifies a piece of text. Empty or whitespace-only input is neutral
/// with a zero score.
pub fn classify(text: &str) -> (SentimentLabel, f64) {
    let text = text.trim();
    if text.is_empty() {
        return (SentimentLabel::Neutral, 0.0);
    }

    let lowered = text.to_lowercase();
    let pos = POSITIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();

    if pos > neg {
        (SentimentLabel::Positive, (pos - neg) as f64 / 10.0)
    } else if neg > pos {
        (SentimentLabel::Negative, -((neg - pos) as f64) / 10.0)
    } else {
        (SentimentLabel::Neutral, 0.0)
    }
}

/// Tallies labels over a batch of texts.
pub fn tally<'a, I>(texts: I) -> SentimentTally
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = SentimentTally::default();
    for text in texts {
        counts.record(classify(text).0);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(classify(""), (SentimentLabel::Neutral, 0.0));
        assert_eq!(classify("   \t\n"), (SentimentLabel::Neutral, 0.0));
    }

    #[test]
    fn test_positive_text() {
        let (label, score) = classify("Record growth and strong earnings");
        assert_eq!(label, SentimentLabel::Positive);
        assert!(score > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let (label, score) = classify("Fraud lawsuit follows terrible losses");
        assert_eq!(label, SentimentLabel::Negative);
        assert!(score < 0.0);
    }

    #[test]
    fn test_balanced_text_is_neutral() {
        let (label, score) = classify("good news and bad news");
        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_tally_counts_labels() {
        let counts = tally([
            "strong growth",
            "terrible decline",
            "the weather today",
        ]);
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
    }
}

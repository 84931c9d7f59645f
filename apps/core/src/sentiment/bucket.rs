//! Six-band sentiment labels.
//!
//! The real-time classifier and the history analyzer share the labels but not
//! the cut points: the classifier works on a weighted average in roughly
//! [-10, 5], the analyzer on an unbounded per-message sum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds (inclusive) for the classifier's normalized score.
const CLASSIFIER_THRESHOLDS: [f64; 5] = [-6.0, -3.0, -1.0, 1.0, 3.0];

/// Upper bounds (inclusive) for the analyzer's per-message score.
const HISTORY_THRESHOLDS: [f64; 5] = [-5.0, -2.0, 0.0, 2.0, 4.0];

/// Sentiment band, ordered from most negative to most positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBucket {
    SevereNegative,
    ModerateNegative,
    MildNegative,
    Neutral,
    MildPositive,
    Positive,
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl SentimentBucket {
    const ORDERED: [SentimentBucket; 6] = [
        SentimentBucket::SevereNegative,
        SentimentBucket::ModerateNegative,
        SentimentBucket::MildNegative,
        SentimentBucket::Neutral,
        SentimentBucket::MildPositive,
        SentimentBucket::Positive,
    ];

    fn from_thresholds(score: f64, thresholds: &[f64; 5]) -> Self {
        thresholds
            .iter()
            .position(|&upper| score <= upper)
            .map(|i| Self::ORDERED[i])
            // NaN compares false everywhere; it cannot come out of the scorers
            .unwrap_or(SentimentBucket::Positive)
    }

    /// Band for a classifier normalized score (`<= -6, -3, -1, 1, 3`, else positive).
    pub fn from_classifier_score(score: f64) -> Self {
        Self::from_thresholds(score, &CLASSIFIER_THRESHOLDS)
    }

    /// Band for an analyzer per-message score (`<= -5, -2, 0, 2, 4`, else positive).
    pub fn from_history_score(score: f64) -> Self {
        Self::from_thresholds(score, &HISTORY_THRESHOLDS)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentBucket::SevereNegative => "severe_negative",
            SentimentBucket::ModerateNegative => "moderate_negative",
            SentimentBucket::MildNegative => "mild_negative",
            SentimentBucket::Neutral => "neutral",
            SentimentBucket::MildPositive => "mild_positive",
            SentimentBucket::Positive => "positive",
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            SentimentBucket::SevereNegative
                | SentimentBucket::ModerateNegative
                | SentimentBucket::MildNegative
        )
    }
}

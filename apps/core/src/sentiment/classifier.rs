//! Real-time message classifier.
//!
//! Scores a single message against a weighted lexicon: the first matching
//! keyword of each category marks the category, matched categories are
//! averaged by weight, and the average is bucketed into a sentiment band.
//! Pure and total; an empty message yields a neutral, zero-confidence result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bucket::SentimentBucket;
use super::lexicon::LexiconTable;
use super::matcher::{KeywordMatcher, SubstringMatcher};

/// Total weight at which confidence saturates at 1.0
const CONFIDENCE_SATURATION_WEIGHT: f64 = 5.0;

/// Result of classifying one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Sentiment band
    pub sentiment: SentimentBucket,
    /// Weighted average of matched base scores (0 when nothing matched)
    pub normalized_score: f64,
    /// Matched categories, in lexicon order
    pub matched_categories: Vec<String>,
    /// Whether the crisis category matched
    pub crisis_detected: bool,
    /// Confidence (0.0 - 1.0), grows with the matched weight
    pub confidence: f64,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            sentiment: SentimentBucket::Neutral,
            normalized_score: 0.0,
            matched_categories: vec![],
            crisis_detected: false,
            confidence: 0.0,
        }
    }
}

impl ClassificationResult {
    /// Score rounded to two decimals, for display
    pub fn rounded_score(&self) -> f64 {
        (self.normalized_score * 100.0).round() / 100.0
    }

    /// Matched categories joined with commas (empty string when none)
    pub fn emotions_csv(&self) -> String {
        self.matched_categories.join(",")
    }
}

/// Message classifier over an injected lexicon
pub struct MessageClassifier<M = SubstringMatcher> {
    lexicon: LexiconTable,
    matcher: M,
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new(LexiconTable::default())
    }
}

impl MessageClassifier {
    /// Create a classifier using substring matching
    pub fn new(lexicon: LexiconTable) -> Self {
        Self::with_matcher(lexicon, SubstringMatcher)
    }
}

impl<M: KeywordMatcher> MessageClassifier<M> {
    /// Create a classifier with a custom matching strategy
    pub fn with_matcher(lexicon: LexiconTable, matcher: M) -> Self {
        Self { lexicon, matcher }
    }

    pub fn lexicon(&self) -> &LexiconTable {
        &self.lexicon
    }

    /// Classify a single message
    pub fn classify(&self, text: &str) -> ClassificationResult {
        score(&self.lexicon, &self.matcher, text)
    }
}

/// Score `text` against a borrowed lexicon
fn score<M: KeywordMatcher + ?Sized>(
    lexicon: &LexiconTable,
    matcher: &M,
    text: &str,
) -> ClassificationResult {
    let normalized = matcher.normalize(text);
    if normalized.trim().is_empty() {
        return ClassificationResult::default();
    }

    let mut matched_categories = Vec::new();
    let mut weighted_score = 0.0;
    let mut total_weight = 0.0;
    let mut crisis_detected = false;

    for entry in lexicon.entries() {
        // First matching keyword marks the category; the rest are not scanned
        let hit = entry
            .keywords
            .iter()
            .any(|keyword| matcher.contains(&normalized, keyword));
        if !hit {
            continue;
        }

        matched_categories.push(entry.category.clone());
        weighted_score += entry.base_score * entry.weight;
        total_weight += entry.weight;
        crisis_detected |= entry.crisis;
    }

    let normalized_score = if total_weight > 0.0 {
        weighted_score / total_weight
    } else {
        0.0
    };

    // A crisis match always lands in the most negative band
    let sentiment = if crisis_detected {
        SentimentBucket::SevereNegative
    } else {
        SentimentBucket::from_classifier_score(normalized_score)
    };

    let confidence = (total_weight / CONFIDENCE_SATURATION_WEIGHT).min(1.0);

    debug!(
        sentiment = sentiment.label(),
        score = normalized_score,
        categories = matched_categories.len(),
        crisis = crisis_detected,
        "Message classified"
    );

    ClassificationResult {
        sentiment,
        normalized_score,
        matched_categories,
        crisis_detected,
        confidence,
    }
}

/// Classify `text` against `lexicon` with substring matching.
pub fn classify(text: &str, lexicon: &LexiconTable) -> ClassificationResult {
    score(lexicon, &SubstringMatcher, text)
}

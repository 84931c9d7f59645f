//! Weighted lexicon used by the real-time message classifier.
//!
//! Each category carries a signed base score and a severity weight. A category
//! contributes `base_score * weight` to the weighted average when any one of its
//! keywords is found in a message.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, Result};

/// One category of the classifier lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Category name reported in `ClassificationResult::matched_categories`
    pub category: String,
    /// Trigger keywords, stored lower-cased
    pub keywords: Vec<String>,
    /// Signed score of the category
    pub base_score: f64,
    /// Severity weight
    pub weight: f64,
    /// Marks the acute self-harm category that trips the crisis gate
    #[serde(default)]
    pub crisis: bool,
}

impl LexiconEntry {
    pub fn new(category: &str, keywords: &[&str], base_score: f64, weight: f64) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            base_score,
            weight,
            crisis: false,
        }
    }

    /// Mark this entry as the crisis category
    pub fn crisis(mut self) -> Self {
        self.crisis = true;
        self
    }
}

/// Ordered classifier lexicon. Order only affects the order of reported categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LexiconTable {
    entries: Vec<LexiconEntry>,
}

impl Default for LexiconTable {
    fn default() -> Self {
        Self::mental_health()
    }
}

impl LexiconTable {
    /// Build a table from entries, lower-casing keywords and rejecting unusable entries.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(entries.len());
        for mut entry in entries {
            if entry.category.trim().is_empty() {
                return Err(CoreError::Validation(
                    "lexicon entry has an empty category name".to_string(),
                ));
            }
            entry.keywords = entry
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            if entry.keywords.is_empty() {
                return Err(CoreError::Validation(format!(
                    "lexicon category '{}' has no keywords",
                    entry.category
                )));
            }
            if !(entry.weight > 0.0) || !entry.weight.is_finite() {
                return Err(CoreError::Validation(format!(
                    "lexicon category '{}' has non-positive weight {}",
                    entry.category, entry.weight
                )));
            }
            if !entry.base_score.is_finite() {
                return Err(CoreError::Validation(format!(
                    "lexicon category '{}' has a non-finite base score",
                    entry.category
                )));
            }
            normalized.push(entry);
        }
        Ok(Self {
            entries: normalized,
        })
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<LexiconEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the crisis category, if the table has one
    pub fn crisis_category(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.crisis)
            .map(|e| e.category.as_str())
    }

    /// The default English mental-health lexicon (8 categories).
    pub fn mental_health() -> Self {
        let entries = vec![
            LexiconEntry::new(
                "acute_crisis",
                &[
                    "suicide",
                    "kill myself",
                    "end it all",
                    "want to die",
                    "harm myself",
                    "better off dead",
                    "no point living",
                ],
                -10.0,
                5.0,
            )
            .crisis(),
            LexiconEntry::new(
                "severe_depression",
                &[
                    "hopeless",
                    "worthless",
                    "useless",
                    "failure",
                    "hate myself",
                    "nothing matters",
                    "empty inside",
                ],
                -8.0,
                3.0,
            ),
            LexiconEntry::new(
                "severe_anxiety",
                &[
                    "panic attack",
                    "cant breathe",
                    "heart racing",
                    "terrified",
                    "scared to death",
                ],
                -7.0,
                2.5,
            ),
            LexiconEntry::new(
                "moderate_depression",
                &[
                    "sad",
                    "depressed",
                    "down",
                    "low",
                    "unhappy",
                    "miserable",
                    "gloomy",
                    "blue",
                    "not great",
                    "feeling down",
                ],
                -5.0,
                2.0,
            ),
            LexiconEntry::new(
                "moderate_anxiety",
                &[
                    "worried",
                    "anxious",
                    "nervous",
                    "stressed",
                    "tense",
                    "restless",
                    "uneasy",
                    "pareshaan",
                    "ghabra",
                ],
                -4.0,
                1.5,
            ),
            LexiconEntry::new(
                "isolation",
                &["alone", "lonely", "isolated", "no friends", "nobody cares"],
                -4.0,
                1.5,
            ),
            LexiconEntry::new(
                "positive",
                &[
                    "happy",
                    "good",
                    "great",
                    "better",
                    "improving",
                    "grateful",
                    "thankful",
                    "blessed",
                ],
                5.0,
                1.0,
            ),
            LexiconEntry::new(
                "coping",
                &[
                    "trying",
                    "working on it",
                    "getting help",
                    "therapy",
                    "medication",
                    "support",
                ],
                3.0,
                1.2,
            ),
        ];

        Self { entries }
    }
}

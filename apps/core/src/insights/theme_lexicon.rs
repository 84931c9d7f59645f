//! Theme lexicon used by the history analyzer.
//!
//! Unlike the classifier lexicon, every keyword hit counts, and a theme's
//! contribution to the per-message score is decided by its `ScoreRule`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, Result};

/// How matches of a theme move the per-message score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// -2 per match
    Negative,
    /// +3 per match
    Positive,
    /// +1 per match when the message carries a positive marker, otherwise -0.5
    Contextual,
    /// -0.5 per match
    Mild,
}

impl ScoreRule {
    /// Score contribution of `matches` keyword hits
    pub fn contribution(&self, matches: usize, has_positive_marker: bool) -> f64 {
        let matches = matches as f64;
        match self {
            ScoreRule::Negative => -2.0 * matches,
            ScoreRule::Positive => 3.0 * matches,
            ScoreRule::Contextual if has_positive_marker => matches,
            ScoreRule::Contextual | ScoreRule::Mild => -0.5 * matches,
        }
    }
}

/// One theme of the analyzer lexicon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// snake_case theme name, e.g. "sleep_issues"
    pub name: String,
    pub keywords: Vec<String>,
    pub rule: ScoreRule,
}

impl ThemeEntry {
    pub fn new(name: &str, keywords: &[&str], rule: ScoreRule) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            rule,
        }
    }

    /// Display label: underscores to spaces, each word capitalized ("Sleep Issues")
    pub fn label(&self) -> String {
        display_label(&self.name)
    }
}

/// Turn a snake_case theme name into its chart label
pub fn display_label(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Theme lexicon plus the two fixed word lists the analyzer consults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeLexicon {
    pub themes: Vec<ThemeEntry>,
    /// Literal crisis phrases, checked independently of the theme score
    pub crisis_keywords: Vec<String>,
    /// Tokens that flip `Contextual` themes positive
    pub positive_markers: Vec<String>,
}

impl Default for ThemeLexicon {
    fn default() -> Self {
        Self::mental_health()
    }
}

fn lowercase_all(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl ThemeLexicon {
    pub fn new(
        themes: Vec<ThemeEntry>,
        crisis_keywords: Vec<String>,
        positive_markers: Vec<String>,
    ) -> Result<Self> {
        let clean = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        let mut normalized = Vec::with_capacity(themes.len());
        for mut theme in themes {
            if theme.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "theme entry has an empty name".to_string(),
                ));
            }
            theme.keywords = clean(theme.keywords);
            if theme.keywords.is_empty() {
                return Err(CoreError::Validation(format!(
                    "theme '{}' has no keywords",
                    theme.name
                )));
            }
            normalized.push(theme);
        }

        Ok(Self {
            themes: normalized,
            crisis_keywords: clean(crisis_keywords),
            positive_markers: clean(positive_markers),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: ThemeLexicon = serde_json::from_str(json)?;
        Self::new(raw.themes, raw.crisis_keywords, raw.positive_markers)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn theme(&self, name: &str) -> Option<&ThemeEntry> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// The default 11-theme dashboard lexicon.
    pub fn mental_health() -> Self {
        use ScoreRule::*;

        let themes = vec![
            ThemeEntry::new(
                "anxiety",
                &[
                    "anxious", "worried", "stress", "panic", "nervous", "overwhelmed", "afraid",
                    "tense", "restless",
                ],
                Negative,
            ),
            ThemeEntry::new(
                "depression",
                &[
                    "sad", "depressed", "hopeless", "empty", "worthless", "lonely", "down", "low",
                    "gloomy",
                ],
                Negative,
            ),
            ThemeEntry::new(
                "anger",
                &[
                    "angry", "frustrated", "mad", "irritated", "furious", "upset", "rage",
                    "annoyed",
                ],
                Negative,
            ),
            ThemeEntry::new(
                "positive",
                &[
                    "happy", "good", "better", "grateful", "thankful", "excited", "joy", "great",
                    "amazing", "wonderful",
                ],
                Positive,
            ),
            ThemeEntry::new(
                "neutral",
                &["ok", "fine", "normal", "regular", "usual", "alright"],
                Mild,
            ),
            ThemeEntry::new(
                "sleep_issues",
                &[
                    "insomnia", "can't sleep", "tired", "exhausted", "sleepless", "nightmares",
                ],
                Negative,
            ),
            ThemeEntry::new(
                "relationships",
                &[
                    "family", "friends", "partner", "spouse", "relationship", "social", "people",
                ],
                Contextual,
            ),
            ThemeEntry::new(
                "work_stress",
                &[
                    "job", "work", "career", "boss", "office", "workplace", "employment",
                ],
                Mild,
            ),
            ThemeEntry::new(
                "self_esteem",
                &[
                    "confidence", "self-worth", "failure", "success", "achievement", "pride",
                ],
                Contextual,
            ),
            ThemeEntry::new(
                "physical_health",
                &["pain", "sick", "health", "body", "physical", "medical"],
                Mild,
            ),
            ThemeEntry::new(
                "future_concerns",
                &["future", "tomorrow", "plans", "goals", "dreams", "hopes", "fears"],
                Mild,
            ),
        ];

        Self {
            themes,
            crisis_keywords: lowercase_all(&[
                "suicide",
                "kill myself",
                "end it all",
                "want to die",
                "hurt myself",
                "self harm",
                "hopeless",
                "worthless",
            ]),
            positive_markers: lowercase_all(&["good", "better", "happy"]),
        }
    }

    /// The lighter 5-theme lexicon used for the conversation overview.
    pub fn overview() -> Self {
        use ScoreRule::*;

        let themes = vec![
            ThemeEntry::new(
                "anxiety",
                &["anxious", "worried", "stress", "panic", "nervous", "overwhelmed"],
                Negative,
            ),
            ThemeEntry::new(
                "depression",
                &["sad", "depressed", "hopeless", "empty", "worthless", "lonely"],
                Negative,
            ),
            ThemeEntry::new(
                "anger",
                &["angry", "frustrated", "mad", "irritated", "furious"],
                Negative,
            ),
            ThemeEntry::new(
                "positive",
                &["happy", "good", "better", "grateful", "thankful", "excited"],
                Positive,
            ),
            ThemeEntry::new(
                "support",
                &["help", "support", "advice", "guidance", "listen"],
                Mild,
            ),
        ];

        Self {
            themes,
            crisis_keywords: vec![],
            positive_markers: vec![],
        }
    }
}

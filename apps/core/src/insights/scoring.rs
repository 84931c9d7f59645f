//! Per-message scoring for the history analyzer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::theme_lexicon::ThemeLexicon;
use super::timestamp::{DayPart, ParsedTimestamp};
use crate::sentiment::{KeywordMatcher, SentimentBucket};

/// How many matched themes are spelled out in `emotions_detected`
const EMOTION_SUMMARY_THEMES: usize = 3;

/// A stored user message, as read from the chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub text: String,
    /// ISO-8601 timestamp, e.g. "2024-05-17T09:15:00"
    pub timestamp: String,
}

impl HistoryRecord {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Keyword hits of one theme in one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMatch {
    pub theme: String,
    pub count: usize,
}

/// Signals derived from a single history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedMessage {
    pub sentiment: SentimentBucket,
    /// Themes with at least one hit, in lexicon order
    pub matched_themes: Vec<ThemeMatch>,
    /// e.g. "anxiety(2), work_stress(1)" or "neutral"
    pub emotions_detected: String,
    pub crisis_flag: bool,
    pub score: f64,
    pub confidence: f64,
    pub word_count: usize,
    /// Raw timestamp as supplied
    pub timestamp: String,
    pub date: Option<NaiveDate>,
    pub day_part: Option<DayPart>,
}

impl AnalyzedMessage {
    /// Daily split used by the dashboard: > 0 positive, < -1 negative
    pub fn is_positive_day_signal(&self) -> bool {
        self.score > 0.0
    }

    pub fn is_negative_day_signal(&self) -> bool {
        self.score < -1.0
    }
}

/// Score one record. Every keyword of every theme is counted.
pub fn analyze_message<M: KeywordMatcher + ?Sized>(
    record: &HistoryRecord,
    lexicon: &ThemeLexicon,
    matcher: &M,
) -> AnalyzedMessage {
    let text = matcher.normalize(&record.text);
    let word_count = text.split_whitespace().count();

    let has_positive_marker = lexicon
        .positive_markers
        .iter()
        .any(|marker| matcher.contains(&text, marker));

    let mut matched_themes = Vec::new();
    let mut score = 0.0;

    for theme in &lexicon.themes {
        let count = theme
            .keywords
            .iter()
            .filter(|keyword| matcher.contains(&text, keyword))
            .count();
        if count == 0 {
            continue;
        }
        score += theme.rule.contribution(count, has_positive_marker);
        matched_themes.push(ThemeMatch {
            theme: theme.name.clone(),
            count,
        });
    }

    let crisis_flag = lexicon
        .crisis_keywords
        .iter()
        .any(|keyword| matcher.contains(&text, keyword));

    let emotions_detected = if matched_themes.is_empty() {
        "neutral".to_string()
    } else {
        matched_themes
            .iter()
            .take(EMOTION_SUMMARY_THEMES)
            .map(|m| format!("{}({})", m.theme, m.count))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let confidence = (0.4 + matched_themes.len() as f64 * 0.1).min(0.9);
    let parsed = ParsedTimestamp::parse(&record.timestamp);

    AnalyzedMessage {
        sentiment: SentimentBucket::from_history_score(score),
        matched_themes,
        emotions_detected,
        crisis_flag,
        score,
        confidence,
        word_count,
        timestamp: record.timestamp.clone(),
        date: parsed.date(),
        day_part: parsed.day_part(),
    }
}

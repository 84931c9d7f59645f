//! Lightweight conversation overview.
//!
//! A coarser companion to the dashboard snapshot: a theme counts once per
//! message that mentions it, and activity is a plain per-day message count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::aggregate::{top_themes, THEME_RANKING_LIMIT};
use super::scoring::HistoryRecord;
use super::theme_lexicon::{display_label, ThemeLexicon};
use super::timestamp::ParsedTimestamp;
use crate::sentiment::KeywordMatcher;

const MIN_CONVERSATIONS_FOR_CONSISTENCY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    /// Title-cased theme label
    pub theme: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationOverview {
    pub conversation_count: usize,
    pub emotional_themes: Vec<ThemeCount>,
    pub activity_pattern: Vec<ActivityDay>,
    pub progress_indicators: Vec<String>,
}

/// Summarize a history with a (typically `ThemeLexicon::overview()`) lexicon.
pub fn summarize<M: KeywordMatcher + ?Sized>(
    records: &[HistoryRecord],
    lexicon: &ThemeLexicon,
    matcher: &M,
) -> ConversationOverview {
    if records.is_empty() {
        return ConversationOverview::default();
    }

    let mut tally: Vec<(String, usize)> = lexicon
        .themes
        .iter()
        .map(|t| (t.name.clone(), 0))
        .collect();
    let mut activity: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();

    for record in records {
        let text = matcher.normalize(&record.text);
        for (theme, slot) in lexicon.themes.iter().zip(tally.iter_mut()) {
            if theme.keywords.iter().any(|k| matcher.contains(&text, k)) {
                slot.1 += 1;
            }
        }
        if let Some(date) = ParsedTimestamp::parse(&record.timestamp).date() {
            *activity.entry(date).or_insert(0) += 1;
        }
    }

    let mentions = |name: &str| {
        tally
            .iter()
            .find(|(theme, _)| theme == name)
            .map_or(0, |(_, count)| *count)
    };

    let mut progress_indicators = Vec::new();
    if records.len() >= MIN_CONVERSATIONS_FOR_CONSISTENCY {
        progress_indicators.push(
            "You've engaged in multiple conversations - great for building consistency!"
                .to_string(),
        );
    }
    if mentions("positive") > 0 {
        progress_indicators.push(
            "You've shared positive moments - celebrating progress is important!".to_string(),
        );
    }
    if mentions("support") > 0 {
        progress_indicators.push(
            "You're actively seeking support - that shows strength and wisdom!".to_string(),
        );
    }

    ConversationOverview {
        conversation_count: records.len(),
        emotional_themes: top_themes(&tally, THEME_RANKING_LIMIT)
            .into_iter()
            .map(|(theme, count)| ThemeCount {
                theme: display_label(&theme),
                count,
            })
            .collect(),
        activity_pattern: activity
            .into_iter()
            .map(|(date, count)| ActivityDay {
                date: date.format("%Y-%m-%d").to_string(),
                count,
            })
            .collect(),
        progress_indicators,
    }
}

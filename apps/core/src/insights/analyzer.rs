//! History Analyzer - Main orchestrator for the insights module.
//!
//! Re-scores a window of past messages with the theme lexicon and runs the
//! aggregation passes that feed the dashboard.
//!
//! Records are expected in chronological order (oldest first). Only the newest
//! `window_size` records are read.

use std::time::Instant;
use tracing::{debug, info};

use super::aggregate;
use super::scoring::{analyze_message, AnalyzedMessage, HistoryRecord};
use super::snapshot::DashboardSnapshot;
use super::theme_lexicon::ThemeLexicon;
use crate::config::CoreConfig;
use crate::sentiment::{KeywordMatcher, SubstringMatcher};

/// Hard ceiling on the analysis window
pub const MAX_WINDOW: usize = 100;
/// Analyzed messages returned in `recent_messages` by default
pub const DEFAULT_RECENT_LIMIT: usize = 20;
/// Days kept in the mood series by default
pub const DEFAULT_DAILY_SERIES_LEN: usize = 14;

/// Main history analyzer
pub struct HistoryAnalyzer<M = SubstringMatcher> {
    lexicon: ThemeLexicon,
    matcher: M,
    window_size: usize,
    recent_limit: usize,
    daily_series_len: usize,
}

impl Default for HistoryAnalyzer {
    fn default() -> Self {
        Self::new(ThemeLexicon::default())
    }
}

impl HistoryAnalyzer {
    /// Create an analyzer with default window settings
    pub fn new(lexicon: ThemeLexicon) -> Self {
        Self::with_matcher(lexicon, SubstringMatcher)
    }

    /// Create an analyzer sized from configuration
    pub fn from_config(lexicon: ThemeLexicon, config: &CoreConfig) -> Self {
        Self::new(lexicon)
            .with_window(config.window_size)
            .with_recent_limit(config.recent_limit)
            .with_daily_series_len(config.daily_series_len)
    }
}

impl<M: KeywordMatcher> HistoryAnalyzer<M> {
    pub fn with_matcher(lexicon: ThemeLexicon, matcher: M) -> Self {
        Self {
            lexicon,
            matcher,
            window_size: MAX_WINDOW,
            recent_limit: DEFAULT_RECENT_LIMIT,
            daily_series_len: DEFAULT_DAILY_SERIES_LEN,
        }
    }

    /// Window size, capped at `MAX_WINDOW`
    pub fn with_window(mut self, window_size: usize) -> Self {
        self.window_size = window_size.min(MAX_WINDOW);
        self
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    pub fn with_daily_series_len(mut self, days: usize) -> Self {
        self.daily_series_len = days;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn lexicon(&self) -> &ThemeLexicon {
        &self.lexicon
    }

    /// Newest `window_size` records, still oldest first
    fn window<'a>(&self, records: &'a [HistoryRecord]) -> &'a [HistoryRecord] {
        let start = records.len().saturating_sub(self.window_size);
        &records[start..]
    }

    /// Analyze a chronological history into a dashboard snapshot
    pub fn analyze(&self, records: &[HistoryRecord]) -> DashboardSnapshot {
        let start = Instant::now();
        let window = self.window(records);

        if window.is_empty() {
            debug!("No history to analyze, returning empty snapshot");
            return DashboardSnapshot::default();
        }

        // 1. Per-message signals, newest first
        let analyzed: Vec<AnalyzedMessage> = window
            .iter()
            .rev()
            .map(|record| analyze_message(record, &self.lexicon, &self.matcher))
            .collect();

        // 2. Theme tallies and ranking
        let tally = aggregate::tally_themes(&analyzed, &self.lexicon);
        let theme_ranking = aggregate::rank_themes(&tally);

        // 3. Daily mood and crisis series
        let daily_mood = aggregate::daily_mood_series(&analyzed, self.daily_series_len);

        // 4. Progress
        let progress = aggregate::progress_metrics(&analyzed);

        // 5. Engagement
        let engagement = aggregate::engagement_profile(&analyzed);

        // 6. Weekly summary
        let weekly_summary = aggregate::weekly_summary(&analyzed, &tally);

        // 7. Recent per-message classifications
        let recent_messages: Vec<AnalyzedMessage> =
            analyzed.into_iter().take(self.recent_limit).collect();

        let undated = window
            .len()
            .saturating_sub(daily_mood.iter().map(|d| d.message_count).sum::<usize>());
        info!(
            records = records.len(),
            analyzed = window.len(),
            days = daily_mood.len(),
            crisis_alerts = weekly_summary.crisis_alerts,
            "History analyzed"
        );
        debug!(
            undated_or_trimmed = undated,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Analyzer pass complete"
        );

        DashboardSnapshot {
            recent_messages,
            theme_ranking,
            daily_mood,
            progress,
            engagement,
            weekly_summary,
        }
    }
}

/// Analyze `records` with `lexicon`, reading at most `window_size` (capped at 100) of the newest.
pub fn analyze(
    records: &[HistoryRecord],
    lexicon: &ThemeLexicon,
    window_size: usize,
) -> DashboardSnapshot {
    HistoryAnalyzer::new(lexicon.clone())
        .with_window(window_size)
        .analyze(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::snapshot::EngagementLevel;

    fn record(text: &str, ts: &str) -> HistoryRecord {
        HistoryRecord::new(text, ts)
    }

    #[test]
    fn test_empty_history() {
        let analyzer = HistoryAnalyzer::default();
        let snapshot = analyzer.analyze(&[]);

        assert_eq!(snapshot, DashboardSnapshot::default());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_window_is_capped() {
        let analyzer = HistoryAnalyzer::default().with_window(500);
        assert_eq!(analyzer.window_size(), MAX_WINDOW);
    }

    #[test]
    fn test_window_keeps_newest_records() {
        let mut records = vec![record("hopeless", "2024-01-01T10:00:00")];
        records.extend((0..3).map(|i| record("happy", &format!("2024-01-02T1{}:00:00", i))));

        let snapshot = HistoryAnalyzer::default().with_window(3).analyze(&records);

        assert_eq!(snapshot.engagement.total_conversations, 3);
        assert_eq!(snapshot.weekly_summary.crisis_alerts, 0);
        assert_eq!(snapshot.dates(), vec!["2024-01-02"]);
    }

    #[test]
    fn test_recent_messages_newest_first() {
        let records = vec![
            record("first", "2024-01-01T08:00:00"),
            record("second", "2024-01-01T09:00:00"),
            record("third", "2024-01-01T10:00:00"),
        ];
        let snapshot = HistoryAnalyzer::default()
            .with_recent_limit(2)
            .analyze(&records);

        let stamps: Vec<&str> = snapshot
            .recent_messages
            .iter()
            .map(|m| m.timestamp.as_str())
            .collect();
        assert_eq!(stamps, vec!["2024-01-01T10:00:00", "2024-01-01T09:00:00"]);
    }

    #[test]
    fn test_unparseable_timestamp_counts_everywhere_else() {
        let records = vec![
            record("I am so happy today", "2024-01-01T08:00:00"),
            record("worried about work", "garbage"),
        ];
        let snapshot = HistoryAnalyzer::default().analyze(&records);

        assert_eq!(snapshot.engagement.total_conversations, 2);
        assert_eq!(snapshot.weekly_summary.day_part_counts.morning, 1);
        assert_eq!(snapshot.daily_mood.len(), 1);
        assert_eq!(snapshot.daily_mood[0].message_count, 1);

        let themes: Vec<&str> = snapshot
            .theme_ranking
            .iter()
            .map(|t| t.theme.as_str())
            .collect();
        assert!(themes.contains(&"anxiety"));
        assert!(themes.contains(&"work_stress"));
    }

    #[test]
    fn test_engagement_level_from_history() {
        let long = "word ".repeat(20);
        let records = vec![record(&long, "2024-01-01T08:00:00")];
        let snapshot = HistoryAnalyzer::default().analyze(&records);

        assert_eq!(snapshot.engagement.max_word_count, 20);
        assert_eq!(snapshot.engagement.level, EngagementLevel::High);
    }

    #[test]
    fn test_free_function_matches_analyzer() {
        let records = vec![
            record("tired and sad", "2024-01-01T23:00:00"),
            record("better today", "2024-01-02T13:00:00"),
        ];
        let lexicon = ThemeLexicon::mental_health();

        assert_eq!(
            analyze(&records, &lexicon, 100),
            HistoryAnalyzer::new(lexicon.clone()).analyze(&records)
        );
    }
}

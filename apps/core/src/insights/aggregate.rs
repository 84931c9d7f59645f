//! Aggregation passes over a window of analyzed messages.
//!
//! Each pass is a free function so the analyzer reads as a list of steps and
//! each step can be tested on hand-built messages.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::scoring::AnalyzedMessage;
use super::snapshot::{
    Baseline, DailyMoodPoint, DayPartCounts, EngagementLevel, EngagementProfile, ProgressMetrics,
    ThemeRank, WeeklySummary,
};
use super::theme_lexicon::{display_label, ThemeLexicon};

/// Themes shown on the chart
pub const THEME_RANKING_LIMIT: usize = 5;
/// Themes listed as primary emotions in the weekly summary
pub const PRIMARY_EMOTION_LIMIT: usize = 3;
/// Fewest messages for which progress is reported
pub const MIN_MESSAGES_FOR_PROGRESS: usize = 5;
/// Messages per progress comparison window
pub const PROGRESS_WINDOW: usize = 10;

const MOOD_BASELINE: f64 = 5.0;
const MOOD_MIN: f64 = 1.0;
const MOOD_MAX: f64 = 10.0;

/// Fallback chart color for labels outside the palette
pub const FALLBACK_COLOR: &str = "#95a5a6";

const THEME_PALETTE: &[(&str, &str)] = &[
    ("Anxiety", "#e74c3c"),
    ("Depression", "#8e44ad"),
    ("Anger", "#e67e22"),
    ("Positive", "#27ae60"),
    ("Neutral", "#95a5a6"),
    ("Sleep Issues", "#3498db"),
    ("Relationships", "#f39c12"),
    ("Work Stress", "#e74c3c"),
    ("Self Esteem", "#9b59b6"),
    ("Physical Health", "#1abc9c"),
    ("Future Concerns", "#34495e"),
];

/// Chart color for a display label
pub fn theme_color(label: &str) -> &'static str {
    THEME_PALETTE
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Map a day's average message score onto the 1-10 mood scale
pub fn mood_score(avg_score: f64) -> f64 {
    (MOOD_BASELINE + avg_score).clamp(MOOD_MIN, MOOD_MAX)
}

/// Running totals for one calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyAggregate {
    pub count: usize,
    pub score_sum: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub crisis_count: usize,
}

impl DailyAggregate {
    pub fn add(&mut self, message: &AnalyzedMessage) {
        self.count += 1;
        self.score_sum += message.score;
        if message.is_positive_day_signal() {
            self.positive_count += 1;
        } else if message.is_negative_day_signal() {
            self.negative_count += 1;
        } else {
            self.neutral_count += 1;
        }
        if message.crisis_flag {
            self.crisis_count += 1;
        }
    }

    pub fn avg_score(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.score_sum / self.count as f64
        }
    }
}

/// Total keyword hits per theme across the window, in lexicon order
pub fn tally_themes(messages: &[AnalyzedMessage], lexicon: &ThemeLexicon) -> Vec<(String, usize)> {
    lexicon
        .themes
        .iter()
        .map(|theme| {
            let total = messages
                .iter()
                .flat_map(|m| m.matched_themes.iter())
                .filter(|hit| hit.theme == theme.name)
                .map(|hit| hit.count)
                .sum();
            (theme.name.clone(), total)
        })
        .collect()
}

/// Nonzero themes by descending tally; ties keep lexicon order
pub fn top_themes(tally: &[(String, usize)], limit: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = tally
        .iter()
        .filter(|(_, count)| *count > 0)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

pub fn rank_themes(tally: &[(String, usize)]) -> Vec<ThemeRank> {
    top_themes(tally, THEME_RANKING_LIMIT)
        .into_iter()
        .map(|(theme, count)| {
            let label = display_label(&theme);
            let color = theme_color(&label).to_string();
            ThemeRank {
                theme,
                label,
                count,
                color,
            }
        })
        .collect()
}

/// Group by calendar date; messages without a usable date are skipped
pub fn daily_aggregates(messages: &[AnalyzedMessage]) -> BTreeMap<NaiveDate, DailyAggregate> {
    let mut days: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();
    for message in messages {
        if let Some(date) = message.date {
            days.entry(date).or_default().add(message);
        }
    }
    days
}

/// Mood trajectory over the most recent `max_days` dates that have messages, ascending.
/// Days without messages are absent, not zero-filled.
pub fn daily_mood_series(messages: &[AnalyzedMessage], max_days: usize) -> Vec<DailyMoodPoint> {
    let days = daily_aggregates(messages);
    let skip = days.len().saturating_sub(max_days);

    days.into_iter()
        .skip(skip)
        .map(|(date, day)| DailyMoodPoint {
            date: date.format("%Y-%m-%d").to_string(),
            mood_score: mood_score(day.avg_score()),
            crisis_alerts: day.crisis_count,
            message_count: day.count,
            positive_count: day.positive_count,
            negative_count: day.negative_count,
            neutral_count: day.neutral_count,
        })
        .collect()
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Recent-vs-older comparison; `newest_first` must be ordered newest first.
///
/// With 10 or fewer messages there is nothing older to compare against and the
/// older average is the mean of a single 0, flagged as `Baseline::Synthetic`.
pub fn progress_metrics(newest_first: &[AnalyzedMessage]) -> Option<ProgressMetrics> {
    if newest_first.len() < MIN_MESSAGES_FOR_PROGRESS {
        return None;
    }

    let scores: Vec<f64> = newest_first.iter().map(|m| m.score).collect();
    let recent = &scores[..scores.len().min(PROGRESS_WINDOW)];

    let (older, baseline) = if scores.len() > PROGRESS_WINDOW {
        let end = scores.len().min(PROGRESS_WINDOW * 2);
        (scores[PROGRESS_WINDOW..end].to_vec(), Baseline::Measured)
    } else {
        (vec![0.0], Baseline::Synthetic)
    };

    let recent_avg = mean(recent);
    let older_avg = mean(&older);

    Some(ProgressMetrics {
        recent_avg,
        older_avg,
        improved: recent_avg > older_avg,
        delta: (recent_avg - older_avg).abs(),
        baseline,
    })
}

pub fn engagement_profile(messages: &[AnalyzedMessage]) -> EngagementProfile {
    if messages.is_empty() {
        return EngagementProfile::default();
    }

    let total_words: usize = messages.iter().map(|m| m.word_count).sum();
    let avg_word_count = total_words as f64 / messages.len() as f64;
    let max_word_count = messages.iter().map(|m| m.word_count).max().unwrap_or(0);

    EngagementProfile {
        total_conversations: messages.len(),
        avg_word_count,
        max_word_count,
        level: EngagementLevel::from_avg_words(avg_word_count),
    }
}

pub fn weekly_summary(messages: &[AnalyzedMessage], tally: &[(String, usize)]) -> WeeklySummary {
    let mut day_part_counts = DayPartCounts::default();
    for part in messages.iter().filter_map(|m| m.day_part) {
        day_part_counts.record(part);
    }

    WeeklySummary {
        most_active_time: day_part_counts.busiest(),
        day_part_counts,
        primary_emotions: top_themes(tally, PRIMARY_EMOTION_LIMIT)
            .into_iter()
            .map(|(theme, _)| theme)
            .collect(),
        conversation_frequency: messages.len(),
        crisis_alerts: messages.iter().filter(|m| m.crisis_flag).count(),
    }
}

//! Dashboard Snapshot - output structure of the history analyzer.
//!
//! Everything the insights page renders, recomputed on every request.

use serde::{Deserialize, Serialize};

use super::scoring::AnalyzedMessage;
use super::timestamp::DayPart;

/// One bar of the theme chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRank {
    /// snake_case theme name
    pub theme: String,
    /// Chart label, e.g. "Sleep Issues"
    pub label: String,
    pub count: usize,
    /// Hex color
    pub color: String,
}

/// One day of the mood trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMoodPoint {
    /// YYYY-MM-DD
    pub date: String,
    /// 1-10 scale
    pub mood_score: f64,
    pub crisis_alerts: usize,
    pub message_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

/// Whether `older_avg` was measured or is the zero fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    Measured,
    /// Fewer than 11 messages: `older_avg` is 0 and means "no prior baseline"
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    /// Mean score of the newest (up to) 10 messages
    pub recent_avg: f64,
    /// Mean score of messages 11-20 counting from the newest
    pub older_avg: f64,
    pub improved: bool,
    pub delta: f64,
    pub baseline: Baseline,
}

impl ProgressMetrics {
    /// Averages and delta rounded to one decimal, for display
    pub fn rounded(&self) -> Self {
        let round1 = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            recent_avg: round1(self.recent_avg),
            older_avg: round1(self.older_avg),
            delta: round1(self.delta),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    /// <= 8 words Low, <= 15 Medium, else High
    pub fn from_avg_words(avg_word_count: f64) -> Self {
        if avg_word_count > 15.0 {
            EngagementLevel::High
        } else if avg_word_count > 8.0 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementProfile {
    pub total_conversations: usize,
    pub avg_word_count: f64,
    pub max_word_count: usize,
    pub level: EngagementLevel,
}

impl Default for EngagementProfile {
    fn default() -> Self {
        Self {
            total_conversations: 0,
            avg_word_count: 0.0,
            max_word_count: 0,
            level: EngagementLevel::Low,
        }
    }
}

/// Per day-part message counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPartCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub night: usize,
}

impl DayPartCounts {
    pub fn record(&mut self, part: DayPart) {
        *self.slot(part) += 1;
    }

    pub fn get(&self, part: DayPart) -> usize {
        match part {
            DayPart::Morning => self.morning,
            DayPart::Afternoon => self.afternoon,
            DayPart::Evening => self.evening,
            DayPart::Night => self.night,
        }
    }

    fn slot(&mut self, part: DayPart) -> &mut usize {
        match part {
            DayPart::Morning => &mut self.morning,
            DayPart::Afternoon => &mut self.afternoon,
            DayPart::Evening => &mut self.evening,
            DayPart::Night => &mut self.night,
        }
    }

    /// Busiest part of the day; earlier parts win ties. `None` if nothing was counted.
    pub fn busiest(&self) -> Option<DayPart> {
        let mut best: Option<(DayPart, usize)> = None;
        for part in DayPart::ALL {
            let count = self.get(part);
            if count == 0 {
                continue;
            }
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((part, count));
            }
        }
        best.map(|(part, _)| part)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub most_active_time: Option<DayPart>,
    pub day_part_counts: DayPartCounts,
    /// Top 3 theme names
    pub primary_emotions: Vec<String>,
    pub conversation_frequency: usize,
    pub crisis_alerts: usize,
}

/// Complete analyzer output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Newest analyzed messages first
    pub recent_messages: Vec<AnalyzedMessage>,
    /// Top 5 themes by tally
    pub theme_ranking: Vec<ThemeRank>,
    /// Ascending by date, at most the configured number of days
    pub daily_mood: Vec<DailyMoodPoint>,
    /// `None` when fewer than 5 messages were analyzed
    pub progress: Option<ProgressMetrics>,
    pub engagement: EngagementProfile,
    pub weekly_summary: WeeklySummary,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.engagement.total_conversations == 0
    }

    pub fn dates(&self) -> Vec<&str> {
        self.daily_mood.iter().map(|p| p.date.as_str()).collect()
    }

    pub fn mood_scores(&self) -> Vec<f64> {
        self.daily_mood.iter().map(|p| p.mood_score).collect()
    }

    /// Crisis-flagged messages per day, parallel to `mood_scores`
    pub fn crisis_alerts(&self) -> Vec<usize> {
        self.daily_mood.iter().map(|p| p.crisis_alerts).collect()
    }

    pub fn chart_labels(&self) -> Vec<&str> {
        self.theme_ranking.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn chart_counts(&self) -> Vec<usize> {
        self.theme_ranking.iter().map(|t| t.count).collect()
    }

    pub fn chart_colors(&self) -> Vec<&str> {
        self.theme_ranking.iter().map(|t| t.color.as_str()).collect()
    }
}

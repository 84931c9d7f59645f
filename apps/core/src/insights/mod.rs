//! # Insights Module
//!
//! Batch analysis of a user's message history for the insights dashboard.
//! Uses its own theme lexicon and scoring, separate from the real-time
//! classifier in `sentiment`.
//!
//! ## Components
//! - `theme_lexicon`: themes, score rules, crisis and positive word lists
//! - `timestamp`: date / time-of-day extraction
//! - `scoring`: per-message signals
//! - `aggregate`: aggregation passes
//! - `snapshot`: output data structure
//! - `analyzer`: main orchestrator
//! - `overview`: lightweight conversation overview

pub mod aggregate;
pub mod analyzer;
pub mod overview;
pub mod scoring;
pub mod snapshot;
pub mod theme_lexicon;
pub mod timestamp;

pub use analyzer::{analyze, HistoryAnalyzer, MAX_WINDOW};
pub use overview::{summarize, ConversationOverview};
pub use scoring::{analyze_message, AnalyzedMessage, HistoryRecord, ThemeMatch};
pub use snapshot::{
    Baseline, DailyMoodPoint, DashboardSnapshot, DayPartCounts, EngagementLevel,
    EngagementProfile, ProgressMetrics, ThemeRank, WeeklySummary,
};
pub use theme_lexicon::{ScoreRule, ThemeEntry, ThemeLexicon};
pub use timestamp::{DayPart, ParsedTimestamp};

//! Mood-tracking record built from a classification.
//!
//! The core only shapes the row; the chat service owns the store it goes into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::SentimentBucket;
use super::classifier::ClassificationResult;

/// Longest message excerpt kept in a mood log row, in characters
pub const MAX_LOGGED_MESSAGE_CHARS: usize = 500;

/// Cohort id under which anonymous demo conversations are stored
pub const DEMO_SUBJECT_ID: i64 = 99999;

/// Who a message history belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Registered(i64),
    /// Anonymous visitor; never tracked
    Guest,
    /// Shared demo cohort
    Demo,
}

impl Subject {
    /// Storage id, `None` for guests
    pub fn id(&self) -> Option<i64> {
        match self {
            Subject::Registered(id) => Some(*id),
            Subject::Demo => Some(DEMO_SUBJECT_ID),
            Subject::Guest => None,
        }
    }
}

/// One mood-tracking row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub subject_id: i64,
    pub sentiment: SentimentBucket,
    pub confidence: f64,
    /// Matched categories joined with commas
    pub emotions_detected: String,
    pub crisis_flag: bool,
    /// Message excerpt, at most `MAX_LOGGED_MESSAGE_CHARS` characters
    pub user_message: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodLogEntry {
    /// Build the row for `subject`, or `None` if the subject is not tracked.
    pub fn build(
        subject: Subject,
        result: &ClassificationResult,
        message: &str,
        recorded_at: DateTime<Utc>,
    ) -> Option<Self> {
        let subject_id = subject.id()?;

        Some(Self {
            subject_id,
            sentiment: result.sentiment,
            confidence: result.confidence,
            emotions_detected: result.emotions_csv(),
            crisis_flag: result.crisis_detected,
            user_message: message.chars().take(MAX_LOGGED_MESSAGE_CHARS).collect(),
            timestamp: recorded_at,
        })
    }
}

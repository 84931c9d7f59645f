//! Timestamp handling for history records.
//!
//! Only two pieces of an ISO-8601 timestamp are used: the calendar date (first
//! ten characters) and the hour (characters 11-13). Either may be unusable on
//! its own; each failure only removes the record from the aggregates that need
//! that piece.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl DayPart {
    /// Tie-break order used when picking the most active part of the day
    pub const ALL: [DayPart; 4] = [
        DayPart::Morning,
        DayPart::Afternoon,
        DayPart::Evening,
        DayPart::Night,
    ];

    /// 05-11 morning, 12-16 afternoon, 17-20 evening, otherwise night
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPart::Morning,
            12..=16 => DayPart::Afternoon,
            17..=20 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
            DayPart::Night => "night",
        }
    }
}

/// What could be recovered from a record's timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    Complete { date: NaiveDate, day_part: DayPart },
    DateOnly { date: NaiveDate },
    TimeOnly { day_part: DayPart },
    Unparseable,
}

impl ParsedTimestamp {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let date = raw
            .get(..10)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        let day_part = raw
            .get(11..13)
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|h| *h < 24)
            .map(DayPart::from_hour);

        match (date, day_part) {
            (Some(date), Some(day_part)) => ParsedTimestamp::Complete { date, day_part },
            (Some(date), None) => ParsedTimestamp::DateOnly { date },
            (None, Some(day_part)) => ParsedTimestamp::TimeOnly { day_part },
            (None, None) => ParsedTimestamp::Unparseable,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ParsedTimestamp::Complete { date, .. } | ParsedTimestamp::DateOnly { date } => {
                Some(*date)
            }
            _ => None,
        }
    }

    pub fn day_part(&self) -> Option<DayPart> {
        match self {
            ParsedTimestamp::Complete { day_part, .. } | ParsedTimestamp::TimeOnly { day_part } => {
                Some(*day_part)
            }
            _ => None,
        }
    }
}

//! Integration Tests
//!
//! The ingestion path (classify, gate, mood log) feeding the history analyzer,
//! and shared use of one classifier / analyzer across threads.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use crate::config::CoreConfig;
use crate::insights::{summarize, HistoryAnalyzer, HistoryRecord, ThemeLexicon};
use crate::sentiment::{
    CrisisGate, GateDecision, MessageClassifier, MoodLogEntry, SentimentBucket, Subject,
    SubstringMatcher,
};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 10, hour, 0, 0).unwrap()
}

#[cfg(test)]
mod ingestion_tests {
    use super::*;

    #[test]
    fn test_crisis_message_is_gated_and_logged() {
        let classifier = MessageClassifier::default();
        let gate = CrisisGate::default();
        let message = "I can't go on, I want to die";

        let result = classifier.classify(message);
        let payload = match gate.decide(&result) {
            GateDecision::Crisis(payload) => payload.clone(),
            GateDecision::Proceed => panic!("crisis message must be gated"),
        };
        assert_eq!(payload.response_type, "crisis_intervention");

        let entry = MoodLogEntry::build(Subject::Registered(7), &result, message, at(23))
            .expect("registered users are tracked");
        assert!(entry.crisis_flag);
        assert_eq!(entry.sentiment, SentimentBucket::SevereNegative);
        assert!(entry.emotions_detected.starts_with("acute_crisis"));
    }

    #[test]
    fn test_ordinary_message_proceeds() {
        let classifier = MessageClassifier::default();
        let gate = CrisisGate::default();

        let result = classifier.classify("Therapy is helping, feeling better");
        assert_eq!(gate.decide(&result), GateDecision::Proceed);
        assert_eq!(result.matched_categories, vec!["positive", "coping"]);

        let entry = MoodLogEntry::build(Subject::Guest, &result, "x", at(9));
        assert!(entry.is_none());
    }

    #[test]
    fn test_logged_messages_feed_the_dashboard() {
        let classifier = MessageClassifier::default();
        let messages = [
            (8, "worried about my job"),
            (13, "lunch with friends was good"),
            (19, "tired but ok"),
            (22, "feeling hopeless tonight"),
            (23, "can't sleep"),
        ];

        let history: Vec<HistoryRecord> = messages
            .iter()
            .filter_map(|(hour, text)| {
                let result = classifier.classify(text);
                MoodLogEntry::build(Subject::Demo, &result, text, at(*hour))
            })
            .map(|entry| {
                HistoryRecord::new(
                    entry.user_message,
                    entry.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
                )
            })
            .collect();

        let snapshot = HistoryAnalyzer::default().analyze(&history);

        assert_eq!(snapshot.engagement.total_conversations, 5);
        assert_eq!(snapshot.dates(), vec!["2024-07-10"]);
        assert_eq!(snapshot.weekly_summary.crisis_alerts, 1);
        assert_eq!(snapshot.weekly_summary.day_part_counts.night, 2);
        assert!(snapshot.progress.is_some());
        assert_eq!(
            snapshot.recent_messages[0].emotions_detected,
            "sleep_issues(1)"
        );
    }

    #[test]
    fn test_overview_of_same_history() {
        let records = vec![
            HistoryRecord::new("anxious and need advice", "2024-07-10T08:00:00"),
            HistoryRecord::new("happy, thanks for the help", "2024-07-11T08:00:00"),
        ];
        let overview = summarize(&records, &ThemeLexicon::overview(), &SubstringMatcher);

        assert_eq!(overview.conversation_count, 2);
        assert_eq!(overview.activity_pattern.len(), 2);
        assert_eq!(overview.emotional_themes[0].theme, "Support");
        assert_eq!(overview.emotional_themes[0].count, 2);
    }

    #[test]
    fn test_snapshot_serializes_for_the_dashboard() {
        let records = vec![HistoryRecord::new("so happy", "2024-07-10T10:00:00")];
        let snapshot = HistoryAnalyzer::default().analyze(&records);

        let json = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(json["daily_mood"][0]["mood_score"], 8.0);
        assert_eq!(json["recent_messages"][0]["sentiment"], "mild_positive");
        assert_eq!(json["weekly_summary"]["most_active_time"], "morning");
    }

    #[test]
    fn test_analyzer_from_config() {
        let config = CoreConfig {
            window_size: 2,
            recent_limit: 1,
            daily_series_len: 1,
            ..Default::default()
        };
        let records = vec![
            HistoryRecord::new("sad", "2024-07-08T10:00:00"),
            HistoryRecord::new("ok", "2024-07-09T10:00:00"),
            HistoryRecord::new("good", "2024-07-10T10:00:00"),
        ];
        let snapshot =
            HistoryAnalyzer::from_config(ThemeLexicon::default(), &config).analyze(&records);

        assert_eq!(snapshot.engagement.total_conversations, 2);
        assert_eq!(snapshot.recent_messages.len(), 1);
        assert_eq!(snapshot.dates(), vec!["2024-07-10"]);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_classifier_across_tasks() {
        let classifier = Arc::new(MessageClassifier::default());
        let expected = classifier.classify("lonely and stressed");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let classifier = Arc::clone(&classifier);
                tokio::task::spawn_blocking(move || classifier.classify("lonely and stressed"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.expect("task completes"), expected);
        }
    }

    #[tokio::test]
    async fn test_concurrent_snapshots_are_identical() {
        let analyzer = Arc::new(HistoryAnalyzer::default());
        let records: Arc<Vec<HistoryRecord>> = Arc::new(
            (0..30)
                .map(|i| {
                    HistoryRecord::new(
                        if i % 3 == 0 { "anxious" } else { "grateful" },
                        format!("2024-07-{:02}T{:02}:00:00", 1 + i % 10, i % 24),
                    )
                })
                .collect(),
        );
        let expected = analyzer.analyze(&records);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                let records = Arc::clone(&records);
                tokio::task::spawn_blocking(move || analyzer.analyze(&records))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.expect("task completes"), expected);
        }
    }
}

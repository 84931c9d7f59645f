//! Classifier Tests
//!
//! Fixed scenarios and properties of the real-time message classifier.

use crate::sentiment::{
    classify, ClassificationResult, LexiconTable, MessageClassifier, SentimentBucket,
};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_hopeless_and_want_to_die() {
        let result = classify("I feel hopeless and want to die", &LexiconTable::mental_health());

        assert_eq!(
            result.matched_categories,
            vec!["acute_crisis", "severe_depression"]
        );
        assert!(result.crisis_detected);
        assert_eq!(result.sentiment, SentimentBucket::SevereNegative);
        assert_eq!(result.confidence, 1.0);
        // (-10*5 + -8*3) / 8
        assert!((result.normalized_score - (-9.25)).abs() < 1e-9);
    }

    #[test]
    fn test_happy_and_grateful() {
        let result = classify("I am happy and grateful today", &LexiconTable::mental_health());

        assert_eq!(result.matched_categories, vec!["positive"]);
        assert_eq!(result.normalized_score, 5.0);
        assert_eq!(result.sentiment, SentimentBucket::Positive);
        assert!((result.confidence - 0.2).abs() < 1e-9);
        assert!(!result.crisis_detected);
    }

    #[test]
    fn test_empty_message() {
        let result = classify("", &LexiconTable::mental_health());

        assert_eq!(result.sentiment, SentimentBucket::Neutral);
        assert_eq!(result.normalized_score, 0.0);
        assert!(result.matched_categories.is_empty());
        assert!(!result.crisis_detected);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result, ClassificationResult::default());
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        let result = classify("The train was on time", &LexiconTable::mental_health());

        assert_eq!(result.sentiment, SentimentBucket::Neutral);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        let lexicon = LexiconTable::mental_health();
        assert_eq!(
            classify("PANIC ATTACK at work", &lexicon).matched_categories,
            vec!["severe_anxiety"]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "I feel hopeless and want to die",
        "Lonely, worried and not great",
        "Trying therapy, feeling better",
        "My heart racing, terrified",
        "Just a normal Tuesday",
    ];

    #[test]
    fn test_determinism() {
        let classifier = MessageClassifier::default();
        for text in SAMPLES {
            assert_eq!(classifier.classify(text), classifier.classify(text), "{}", text);
        }
    }

    #[test]
    fn test_crisis_dominates_positive_language() {
        let lexicon = LexiconTable::mental_health();
        let crisis = lexicon
            .entries()
            .iter()
            .find(|e| e.crisis)
            .expect("default lexicon has a crisis category")
            .clone();

        for keyword in &crisis.keywords {
            let text = format!(
                "{} but I'm happy, grateful, trying therapy and getting help",
                keyword
            );
            let result = classify(&text, &lexicon);

            assert!(result.crisis_detected, "{}", text);
            assert_eq!(result.sentiment, SentimentBucket::SevereNegative, "{}", text);
        }
    }

    #[test]
    fn test_confidence_never_decreases_as_categories_add_up() {
        let classifier = MessageClassifier::default();
        let fragments = [
            "happy", "therapy", "lonely", "worried", "sad", "terrified", "useless", "suicide",
        ];

        let mut text = String::new();
        let mut previous = 0.0;
        for fragment in fragments {
            text.push(' ');
            text.push_str(fragment);
            let confidence = classifier.classify(&text).confidence;
            assert!(confidence >= previous, "'{}' lowered confidence", fragment);
            assert!((0.0..=1.0).contains(&confidence));
            previous = confidence;
        }
        assert_eq!(previous, 1.0);
    }

    #[test]
    fn test_bucket_is_function_of_score_without_crisis() {
        let classifier = MessageClassifier::default();
        for text in SAMPLES {
            let result = classifier.classify(text);
            if !result.crisis_detected {
                assert_eq!(
                    result.sentiment,
                    SentimentBucket::from_classifier_score(result.normalized_score)
                );
            }
        }
    }
}

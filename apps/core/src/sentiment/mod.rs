//! # Sentiment Module
//!
//! Real-time, per-message analysis run at ingestion time.
//!
//! ## Components
//! - `matcher`: keyword matching strategies (substring by default)
//! - `lexicon`: weighted category lexicon
//! - `bucket`: six-band sentiment labels
//! - `classifier`: weighted-average message classifier
//! - `crisis`: crisis gate and fixed safety payload
//! - `mood_log`: mood-tracking record shaping

pub mod bucket;
pub mod classifier;
pub mod crisis;
pub mod lexicon;
pub mod matcher;
pub mod mood_log;

pub use bucket::SentimentBucket;
pub use classifier::{classify, ClassificationResult, MessageClassifier};
pub use crisis::{regional_hotlines, CrisisGate, CrisisPayload, GateDecision, Hotline};
pub use lexicon::{LexiconEntry, LexiconTable};
pub use matcher::{KeywordMatcher, SubstringMatcher, WordBoundaryMatcher};
pub use mood_log::{MoodLogEntry, Subject, DEMO_SUBJECT_ID, MAX_LOGGED_MESSAGE_CHARS};

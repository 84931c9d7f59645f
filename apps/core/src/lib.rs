// Dil Azaad Core
// Sentiment classification, crisis gating and mood insights for the chat service.

pub mod config;
pub mod error;
pub mod insights;
pub mod sentiment;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use config::{CoreConfig, LogFormat};
pub use error::{CoreError, Result};
pub use insights::{analyze, DashboardSnapshot, HistoryAnalyzer, HistoryRecord, ThemeLexicon};
pub use sentiment::{
    classify, ClassificationResult, CrisisGate, CrisisPayload, LexiconTable, MessageClassifier,
    SentimentBucket,
};

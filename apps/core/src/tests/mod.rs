//! Test Module
//!
//! Cross-module scenarios for the core.
//!
//! ## Test Categories
//! - `classifier_tests`: message classification properties and fixed scenarios
//! - `analyzer_tests`: dashboard snapshot scenarios over message histories
//! - `integration_tests`: ingestion flow (classify, gate, mood log) and concurrent use

pub mod classifier_tests;
pub mod integration_tests;

//! Crisis gate.
//!
//! Decides, before any generative reply is requested, whether a message must be
//! answered with the fixed safety payload instead.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::classifier::ClassificationResult;

const CRISIS_MESSAGE: &str = "IMMEDIATE SUPPORT NEEDED

I'm very concerned about what you're sharing with me. Your life has value and meaning.

RIGHT NOW:
- You are not alone in this
- These feelings can change with proper help
- Call someone - a friend, family member, or helpline
- Go to your nearest hospital if you're in immediate danger

Please reach out to a human counselor or crisis helpline immediately. I care about your wellbeing.";

/// A helpline entry shown with the crisis payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotline {
    pub name: String,
    pub contact: String,
}

impl Hotline {
    fn new(name: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }
}

/// Fixed, non-generated support response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisPayload {
    /// Always "crisis_intervention"
    pub response_type: String,
    pub message: String,
    pub hotlines: Vec<Hotline>,
    pub suggested_actions: Vec<String>,
    /// Always "crisis"
    pub mood_category: String,
}

impl Default for CrisisPayload {
    fn default() -> Self {
        Self {
            response_type: "crisis_intervention".to_string(),
            message: CRISIS_MESSAGE.to_string(),
            hotlines: vec![
                Hotline::new("Umang Mental Health Helpline", "0317-6367833"),
                Hotline::new("Pakistan Emergency", "15 or 1122"),
                Hotline::new("Crisis Text Line (International)", "Text HOME to 741741"),
            ],
            suggested_actions: vec![
                "call_crisis_hotline".to_string(),
                "reach_out_to_trusted_person".to_string(),
                "visit_emergency_room".to_string(),
            ],
            mood_category: "crisis".to_string(),
        }
    }
}

/// City helpline directory, keyed by lower-case region name.
pub fn regional_hotlines() -> Vec<(&'static str, Hotline)> {
    vec![
        ("karachi", Hotline::new("Umang Hotline", "0311-7786264")),
        ("lahore", Hotline::new("Rozan Helpline", "0304-1111741")),
        ("islamabad", Hotline::new("PAHCHAAN", "051-111555627")),
        ("rawalpindi", Hotline::new("Mind Organisation", "051-8090541")),
        ("emergency", Hotline::new("Emergency", "1122 or 15")),
        ("national", Hotline::new("National Crisis Helpline", "042-35761999")),
    ]
}

/// Outcome of the gate for one message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDecision<'a> {
    /// Reply with the fixed payload; skip the generative backend
    Crisis(&'a CrisisPayload),
    /// No crisis; a generated reply may be requested
    Proceed,
}

/// Holds the fixed payload and gates classification results
#[derive(Debug, Clone, Default)]
pub struct CrisisGate {
    payload: CrisisPayload,
}

impl CrisisGate {
    pub fn new(payload: CrisisPayload) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &CrisisPayload {
        &self.payload
    }

    /// Returns the fixed payload if the result flagged a crisis
    pub fn gate(&self, result: &ClassificationResult) -> Option<&CrisisPayload> {
        if !result.crisis_detected {
            return None;
        }
        warn!(
            categories = %result.matched_categories.join(","),
            "Crisis language detected, bypassing generated reply"
        );
        Some(&self.payload)
    }

    pub fn decide(&self, result: &ClassificationResult) -> GateDecision<'_> {
        match self.gate(result) {
            Some(payload) => GateDecision::Crisis(payload),
            None => GateDecision::Proceed,
        }
    }
}

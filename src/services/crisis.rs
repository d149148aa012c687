//! Distress screening for chat input.
//!
//! A plain case-insensitive phrase scan. A hit does not block the message;
//! the reply carries the crisis lines alongside it.

use serde::Serialize;

use crate::services::content::{CrisisRegion, CRISIS_REGIONS, EMERGENCY_NOTICE};

pub const CRISIS_KEYWORDS: [&str; 9] = [
    "suicide",
    "kill myself",
    "harm myself",
    "want to die",
    "end it all",
    "no point",
    "self harm",
    "cut myself",
    "hurt myself",
];

/// Whether `text` contains any distress phrase.
pub fn detect(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Support lines attached to a reply whose message tripped [`detect`].
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisSupport {
    pub emergency_notice: &'static str,
    pub regions: &'static [CrisisRegion],
}

/// `Some` only when the message needs the crisis lines.
pub fn screen(text: &str) -> Option<CrisisSupport> {
    if !detect(text) {
        return None;
    }
    tracing::warn!("Crisis language detected in chat message");
    Some(CrisisSupport {
        emergency_notice: EMERGENCY_NOTICE,
        regions: &CRISIS_REGIONS,
    })
}

use bytes::Bytes;
use serde_json::Value;

use super::DEFAULT_USER_ID;

pub const DEFAULT_LEVEL: u32 = 1;

/// Reads a zone level the way loosely typed clients send it: a JSON number,
/// a numeric string with optional trailing text ("3rd"), or nothing.
pub fn parse_level(raw: Option<&Value>) -> u32 {
    match raw {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(DEFAULT_LEVEL),
        Some(Value::String(s)) => parse_level_text(s),
        _ => DEFAULT_LEVEL,
    }
}

pub fn parse_level_text(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(DEFAULT_LEVEL)
}

fn user_or_default(user_id: Option<String>) -> String {
    user_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

/// Opens a tutor session for one zone and level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorSessionStart {
    pub user_id: String,
    pub zone_id: String,
    pub level: u32,
}

impl TutorSessionStart {
    pub fn new(user_id: Option<String>, zone_id: impl Into<String>, level: u32) -> Self {
        Self {
            user_id: user_or_default(user_id),
            zone_id: zone_id.into(),
            level,
        }
    }
}

/// A learner's answer within a tutor session, optionally spoken.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorSubmission {
    pub user_id: String,
    pub zone_id: String,
    pub level: u32,
    pub user_input: String,
    pub audio: Option<Bytes>,
}

impl TutorSubmission {
    pub fn new(
        user_id: Option<String>,
        zone_id: impl Into<String>,
        level: u32,
        user_input: Option<String>,
        audio: Option<Bytes>,
    ) -> Self {
        Self {
            user_id: user_or_default(user_id),
            zone_id: zone_id.into(),
            level,
            user_input: user_input.unwrap_or_default(),
            audio: audio.filter(|a| !a.is_empty()),
        }
    }
}

//! Data models for the assessment viewer.
//!
//! This module contains the wire-format structures returned by the
//! assessment service, plus the request/response bodies for the
//! access-code workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language of a completed assessment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[serde(rename = "EN")]
    En,
    /// Bahasa Indonesia
    #[serde(rename = "ID")]
    Id,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "EN"),
            Language::Id => write!(f, "ID"),
        }
    }
}

/// The recorded answer to a single checklist item.
///
/// Only the three exact literals `"Yes"`, `"No"` and `"N/A"` are recognized;
/// anything else is carried through as [`AnswerValue::Other`] and excluded
/// from the summary counters. The original data intentionally behaves this
/// way, so matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnswerValue {
    Yes,
    No,
    NotApplicable,
    Other(String),
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Yes" => AnswerValue::Yes,
            "No" => AnswerValue::No,
            "N/A" => AnswerValue::NotApplicable,
            _ => AnswerValue::Other(s),
        }
    }
}

impl From<AnswerValue> for String {
    fn from(value: AnswerValue) -> Self {
        match value {
            AnswerValue::Yes => "Yes".to_string(),
            AnswerValue::No => "No".to_string(),
            AnswerValue::NotApplicable => "N/A".to_string(),
            AnswerValue::Other(s) => s,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Yes => write!(f, "Yes"),
            AnswerValue::No => write!(f, "No"),
            AnswerValue::NotApplicable => write!(f, "N/A"),
            AnswerValue::Other(s) => write!(f, "{}", s),
        }
    }
}

impl AnswerValue {
    /// Whether this value is one of the three recognized literals.
    #[allow(dead_code)] // Utility predicate
    pub fn is_recognized(&self) -> bool {
        !matches!(self, AnswerValue::Other(_))
    }
}

/// A single answered checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier of the answer row, when the service assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Topical area the item belongs to. Absent or empty means ungrouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// The activity being assessed.
    pub activity: String,
    /// The success criteria for the activity.
    pub criteria: String,
    /// The recorded answer value.
    pub answer: AnswerValue,
    /// Free-form remarks entered alongside the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Metadata of a completed assessment response. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Identifier of the response record.
    pub id: String,
    /// Email address the assessment was completed under.
    pub email: String,
    /// Language the assessment was taken in.
    pub language: Language,
    /// When the assessment was completed.
    pub timestamp: DateTime<Utc>,
}

/// The full payload for one response record: metadata plus the ordered
/// answer list. This is the unit returned by the loader and is never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Response metadata.
    pub response: AssessmentResponse,
    /// Answers in their original order.
    pub answers: Vec<Answer>,
}

/// Envelope the service wraps read responses in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// The wrapped payload.
    pub data: T,
}

/// Body of an access-code request submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Email address to send the access code to.
    pub email: String,
    /// Optional free-form message.
    pub message: String,
}

/// Acknowledgement body returned by the access-request endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequestAck {
    /// Whether the request was accepted.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_value_exact_literals() {
        assert_eq!(AnswerValue::from("Yes".to_string()), AnswerValue::Yes);
        assert_eq!(AnswerValue::from("No".to_string()), AnswerValue::No);
        assert_eq!(
            AnswerValue::from("N/A".to_string()),
            AnswerValue::NotApplicable
        );
    }

    #[test]
    fn test_answer_value_case_sensitive() {
        // "yes" is not "Yes"; it must survive as an unrecognized literal.
        assert_eq!(
            AnswerValue::from("yes".to_string()),
            AnswerValue::Other("yes".to_string())
        );
        assert_eq!(
            AnswerValue::from("NA".to_string()),
            AnswerValue::Other("NA".to_string())
        );
        assert!(!AnswerValue::Other("yes".to_string()).is_recognized());
    }

    #[test]
    fn test_answer_value_roundtrip() {
        let original = "Partially".to_string();
        let value = AnswerValue::from(original.clone());
        assert_eq!(String::from(value), original);
        assert_eq!(String::from(AnswerValue::NotApplicable), "N/A");
    }

    #[test]
    fn test_language_serde() {
        let en: Language = serde_json::from_str("\"EN\"").unwrap();
        let id: Language = serde_json::from_str("\"ID\"").unwrap();
        assert_eq!(en, Language::En);
        assert_eq!(id, Language::Id);
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"EN\"");
    }

    #[test]
    fn test_response_envelope_deserialization() {
        let payload = r#"{
            "data": {
                "response": {
                    "id": "abc123",
                    "email": "user@example.com",
                    "language": "EN",
                    "timestamp": "2024-05-01T10:30:00Z"
                },
                "answers": [
                    {
                        "id": "a1",
                        "area": "Installation",
                        "activity": "Install the software",
                        "criteria": "Software starts without errors",
                        "answer": "Yes",
                        "remarks": "Worked on first try"
                    },
                    {
                        "activity": "Configure licensing",
                        "criteria": "License is active",
                        "answer": "Maybe"
                    }
                ]
            }
        }"#;

        let envelope: ApiEnvelope<ResponseData> = serde_json::from_str(payload).unwrap();
        let data = envelope.data;

        assert_eq!(data.response.id, "abc123");
        assert_eq!(data.response.language, Language::En);
        assert_eq!(data.answers.len(), 2);
        assert_eq!(data.answers[0].answer, AnswerValue::Yes);
        assert_eq!(data.answers[1].area, None);
        assert_eq!(
            data.answers[1].answer,
            AnswerValue::Other("Maybe".to_string())
        );
    }

    #[test]
    fn test_access_ack_deserialization() {
        let ack: AccessRequestAck = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!ack.success);
    }
}

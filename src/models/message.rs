use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SenderType;

/// A stored message record. `sentiment_score` stays `None` when the
/// creating request omitted it — the column is never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: Uuid,
    pub conversation_id: Uuid,
    pub sender_type: Option<SenderType>,
    pub content: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

/// Partial update for a message. `conversation_id` is immutable after
/// creation and deliberately has no slot here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePatch {
    pub sender_type: Option<SenderType>,
    pub content: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

impl MessagePatch {
    pub fn is_empty(&self) -> bool {
        self.sender_type.is_none()
            && self.content.is_none()
            && self.timestamp.is_none()
            && self.sentiment_score.is_none()
            && self.intent_label.is_none()
            && self.intent_confidence_score.is_none()
    }
}

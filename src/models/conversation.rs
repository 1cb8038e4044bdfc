use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ConversationStatus;

/// A stored conversation record as read back from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: Uuid,
    pub company_id: Option<Uuid>,
    pub bot_version: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: ConversationStatus,
    pub sentiment_score: f64,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

/// The write shape for conversation creation.
///
/// `conversation_id` and `start_time` are always server-assigned. The
/// remaining fields mirror what the client supplied; a missing required
/// field is persisted as NULL and rejected by the store's constraints.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub conversation_id: Uuid,
    pub company_id: Option<Uuid>,
    pub bot_version: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub status: Option<ConversationStatus>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

/// Partial update for a conversation. Only `Some` fields enter the SET
/// clause; `start_time` is not client-settable and has no slot here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationPatch {
    pub company_id: Option<Uuid>,
    pub bot_version: Option<String>,
    pub end_time: Option<NaiveDateTime>,
    pub status: Option<ConversationStatus>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

impl ConversationPatch {
    pub fn is_empty(&self) -> bool {
        self.company_id.is_none()
            && self.bot_version.is_none()
            && self.end_time.is_none()
            && self.status.is_none()
            && self.sentiment_score.is_none()
            && self.intent_label.is_none()
            && self.intent_confidence_score.is_none()
    }
}

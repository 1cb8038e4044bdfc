//! Message service endpoints.
//!
//! Create, list-by-conversation, and partial update. No delete is
//! exposed; messages leave the store only when their conversation does.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::enums::SenderType;
use crate::models::{Message, MessagePatch};

/// Creation payload. `conversation_id` is the one mandatory field; a
/// request without it never reaches the handler.
#[derive(Debug, Deserialize)]
pub struct MessageDraft {
    pub conversation_id: Uuid,
    pub sender_type: Option<SenderType>,
    pub content: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

/// `POST /message/` — persist and return the constructed record.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(draft): Json<MessageDraft>,
) -> Result<Json<Message>, ApiError> {
    let record = Message {
        message_id: Uuid::new_v4(),
        conversation_id: draft.conversation_id,
        sender_type: draft.sender_type,
        content: draft.content,
        timestamp: Some(draft.timestamp.unwrap_or_else(|| Utc::now().naive_utc())),
        sentiment_score: draft.sentiment_score,
        intent_label: draft.intent_label,
        intent_confidence_score: draft.intent_confidence_score,
    };

    let mut conn = ctx.open_db()?;
    let tx = conn.transaction()?;
    repository::insert_message(&tx, &record)?;
    tx.commit()?;

    tracing::debug!(message_id = %record.message_id, conversation_id = %record.conversation_id, "message created");

    Ok(Json(record))
}

/// `GET /message/conversation/:conversation_id`
///
/// An empty result set is a 404, matching the service's contract: "no
/// messages" and "no such conversation" are deliberately not told apart.
pub async fn list_by_conversation(
    State(ctx): State<ApiContext>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let conn = ctx.open_db()?;
    let messages = repository::get_messages_by_conversation(&conn, &conversation_id)?;
    if messages.is_empty() {
        return Err(ApiError::NotFound(
            "No messages found for this conversation".into(),
        ));
    }
    Ok(Json(messages))
}

/// `PUT /message/:message_id` — partial update, returns the post-update
/// record.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(message_id): Path<Uuid>,
    Json(patch): Json<MessagePatch>,
) -> Result<Json<Message>, ApiError> {
    let mut conn = ctx.open_db()?;
    let tx = conn.transaction()?;
    let updated = repository::update_message(&tx, &message_id, &patch)?
        .ok_or_else(|| ApiError::NotFound("Message not found".into()))?;
    tx.commit()?;
    Ok(Json(updated))
}

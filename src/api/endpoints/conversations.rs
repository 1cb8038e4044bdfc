//! Conversation service endpoints.
//!
//! Five operations: create, list, read, update, delete. Every mutation
//! runs inside an explicit transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository;
use crate::models::enums::ConversationStatus;
use crate::models::{Conversation, ConversationPatch, NewConversation};

/// Creation payload. Every field is optional at the type level; the
/// store's constraints decide what is actually required. A client-sent
/// `conversation_id` or `start_time` key is dropped during
/// deserialization — both are always server-assigned.
#[derive(Debug, Default, Deserialize)]
pub struct ConversationDraft {
    pub company_id: Option<Uuid>,
    pub bot_version: Option<String>,
    pub end_time: Option<NaiveDateTime>,
    pub status: Option<ConversationStatus>,
    pub sentiment_score: Option<f64>,
    pub intent_label: Option<String>,
    pub intent_confidence_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ConversationIdResponse {
    pub conversation_id: Uuid,
}

/// `POST /conversation/` — persist a new record, return its id.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(draft): Json<ConversationDraft>,
) -> Result<Json<ConversationIdResponse>, ApiError> {
    let record = NewConversation {
        conversation_id: Uuid::new_v4(),
        start_time: Utc::now().naive_utc(),
        company_id: draft.company_id,
        bot_version: draft.bot_version,
        end_time: draft.end_time,
        status: draft.status,
        sentiment_score: draft.sentiment_score,
        intent_label: draft.intent_label,
        intent_confidence_score: draft.intent_confidence_score,
    };

    let mut conn = ctx.open_db()?;
    let tx = conn.transaction()?;
    repository::insert_conversation(&tx, &record)?;
    tx.commit()?;

    tracing::debug!(conversation_id = %record.conversation_id, "conversation created");

    Ok(Json(ConversationIdResponse {
        conversation_id: record.conversation_id,
    }))
}

/// `GET /conversation/` — every record, store order.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let conn = ctx.open_db()?;
    let conversations = repository::list_conversations(&conn)?;
    Ok(Json(conversations))
}

/// `GET /conversation/:conversation_id`
pub async fn read(
    State(ctx): State<ApiContext>,
    Path(conversation_id): Path<Uuid>,
) -> Result<Json<Conversation>, ApiError> {
    let conn = ctx.open_db()?;
    let conversation = repository::get_conversation(&conn, &conversation_id)?
        .ok_or_else(|| ApiError::NotFound("Conversation not found".into()))?;
    Ok(Json(conversation))
}

/// `PUT /conversation/:conversation_id` — partial update, returns the
/// post-update record.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(conversation_id): Path<Uuid>,
    Json(patch): Json<ConversationPatch>,
) -> Result<Json<Conversation>, ApiError> {
    let mut conn = ctx.open_db()?;
    let tx = conn.transaction()?;
    let updated = repository::update_conversation(&tx, &conversation_id, &patch)?
        .ok_or_else(|| ApiError::NotFound("Conversation not found".into()))?;
    tx.commit()?;
    Ok(Json(updated))
}

/// `DELETE /conversation/:conversation_id` — 204 on success.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(conversation_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = ctx.open_db()?;
    let tx = conn.transaction()?;
    let removed = repository::delete_conversation(&tx, &conversation_id)?;
    if !removed {
        return Err(ApiError::NotFound("Conversation not found".into()));
    }
    tx.commit()?;

    tracing::debug!(%conversation_id, "conversation deleted");

    Ok(StatusCode::NO_CONTENT)
}

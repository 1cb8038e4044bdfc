use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::ConversationStatus;
use crate::models::{Conversation, ConversationPatch, NewConversation};

const CONVERSATION_COLUMNS: &str =
    "conversation_id, company_id, bot_version, start_time, end_time, status, \
     sentiment_score, intent_label, intent_confidence_score";

pub fn insert_conversation(
    conn: &Connection,
    conv: &NewConversation,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO conversations (conversation_id, company_id, bot_version, start_time,
         end_time, status, sentiment_score, intent_label, intent_confidence_score)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            conv.conversation_id.to_string(),
            conv.company_id.map(|id| id.to_string()),
            conv.bot_version,
            conv.start_time,
            conv.end_time,
            conv.status.as_ref().map(|s| s.as_str()),
            conv.sentiment_score,
            conv.intent_label,
            conv.intent_confidence_score,
        ],
    )?;
    Ok(())
}

pub fn list_conversations(conn: &Connection) -> Result<Vec<Conversation>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONVERSATION_COLUMNS} FROM conversations"
    ))?;

    let rows = stmt.query_map([], read_row)?;

    let mut conversations = Vec::new();
    for row in rows {
        conversations.push(conversation_from_row(row?)?);
    }
    Ok(conversations)
}

pub fn get_conversation(
    conn: &Connection,
    id: &Uuid,
) -> Result<Option<Conversation>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CONVERSATION_COLUMNS} FROM conversations WHERE conversation_id = ?1"
    ))?;

    let result = stmt.query_row(params![id.to_string()], read_row);

    match result {
        Ok(row) => Ok(Some(conversation_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Apply only the supplied fields as a SET clause, then read the record
/// back. Returns `None` when no row matched. An empty patch is a no-op
/// that still returns the current record.
pub fn update_conversation(
    conn: &Connection,
    id: &Uuid,
    patch: &ConversationPatch,
) -> Result<Option<Conversation>, DatabaseError> {
    if patch.is_empty() {
        return get_conversation(conn, id);
    }

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(v) = &patch.company_id {
        sets.push("company_id = ?");
        values.push(Box::new(v.to_string()));
    }
    if let Some(v) = &patch.bot_version {
        sets.push("bot_version = ?");
        values.push(Box::new(v.clone()));
    }
    if let Some(v) = &patch.end_time {
        sets.push("end_time = ?");
        values.push(Box::new(*v));
    }
    if let Some(v) = &patch.status {
        sets.push("status = ?");
        values.push(Box::new(v.as_str()));
    }
    if let Some(v) = patch.sentiment_score {
        sets.push("sentiment_score = ?");
        values.push(Box::new(v));
    }
    if let Some(v) = &patch.intent_label {
        sets.push("intent_label = ?");
        values.push(Box::new(v.clone()));
    }
    if let Some(v) = patch.intent_confidence_score {
        sets.push("intent_confidence_score = ?");
        values.push(Box::new(v));
    }
    values.push(Box::new(id.to_string()));

    let sql = format!(
        "UPDATE conversations SET {} WHERE conversation_id = ?",
        sets.join(", ")
    );
    let changed = conn.execute(&sql, params_from_iter(&values))?;
    if changed == 0 {
        return Ok(None);
    }

    get_conversation(conn, id)
}

/// Returns `true` when a row was removed. Owned messages go with it
/// (ON DELETE CASCADE).
pub fn delete_conversation(conn: &Connection, id: &Uuid) -> Result<bool, DatabaseError> {
    let removed = conn.execute(
        "DELETE FROM conversations WHERE conversation_id = ?1",
        params![id.to_string()],
    )?;
    Ok(removed > 0)
}

struct ConversationRow {
    conversation_id: String,
    company_id: Option<String>,
    bot_version: String,
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    status: String,
    sentiment_score: f64,
    intent_label: Option<String>,
    intent_confidence_score: Option<f64>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ConversationRow> {
    Ok(ConversationRow {
        conversation_id: row.get(0)?,
        company_id: row.get(1)?,
        bot_version: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        status: row.get(5)?,
        sentiment_score: row.get(6)?,
        intent_label: row.get(7)?,
        intent_confidence_score: row.get(8)?,
    })
}

fn conversation_from_row(row: ConversationRow) -> Result<Conversation, DatabaseError> {
    Ok(Conversation {
        conversation_id: Uuid::parse_str(&row.conversation_id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        company_id: row
            .company_id
            .as_deref()
            .map(Uuid::parse_str)
            .transpose()
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        bot_version: row.bot_version,
        start_time: row.start_time,
        end_time: row.end_time,
        status: ConversationStatus::from_str(&row.status)?,
        sentiment_score: row.sentiment_score,
        intent_label: row.intent_label,
        intent_confidence_score: row.intent_confidence_score,
    })
}

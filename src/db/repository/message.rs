use std::str::FromStr;

use chrono::NaiveDateTime;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::SenderType;
use crate::models::{Message, MessagePatch};

const MESSAGE_COLUMNS: &str =
    "message_id, conversation_id, sender_type, content, timestamp, \
     sentiment_score, intent_label, intent_confidence_score";

/// Insert a message. When `sentiment_score` is `None` the column is left
/// out of the INSERT entirely so the store default applies — it is never
/// written as an explicit value.
pub fn insert_message(conn: &Connection, msg: &Message) -> Result<(), DatabaseError> {
    let mut cols = vec![
        "message_id",
        "conversation_id",
        "sender_type",
        "content",
        "timestamp",
        "intent_label",
        "intent_confidence_score",
    ];
    let mut values: Vec<Box<dyn ToSql>> = vec![
        Box::new(msg.message_id.to_string()),
        Box::new(msg.conversation_id.to_string()),
        Box::new(msg.sender_type.as_ref().map(|s| s.as_str())),
        Box::new(msg.content.clone()),
        Box::new(msg.timestamp),
        Box::new(msg.intent_label.clone()),
        Box::new(msg.intent_confidence_score),
    ];
    if let Some(score) = msg.sentiment_score {
        cols.push("sentiment_score");
        values.push(Box::new(score));
    }

    let placeholders = vec!["?"; cols.len()].join(", ");
    let sql = format!(
        "INSERT INTO messages ({}) VALUES ({placeholders})",
        cols.join(", ")
    );
    conn.execute(&sql, params_from_iter(&values))?;
    Ok(())
}

pub fn get_message(conn: &Connection, id: &Uuid) -> Result<Option<Message>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MESSAGE_COLUMNS} FROM messages WHERE message_id = ?1"
    ))?;

    let result = stmt.query_row(params![id.to_string()], read_row);

    match result {
        Ok(row) => Ok(Some(message_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_messages_by_conversation(
    conn: &Connection,
    conversation_id: &Uuid,
) -> Result<Vec<Message>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {MESSAGE_COLUMNS} FROM messages WHERE conversation_id = ?1 ORDER BY timestamp ASC"
    ))?;

    let rows = stmt.query_map(params![conversation_id.to_string()], read_row)?;

    let mut messages = Vec::new();
    for row in rows {
        messages.push(message_from_row(row?)?);
    }
    Ok(messages)
}

/// Same partial-overwrite semantics as conversations: only supplied
/// fields enter the SET clause, `None` when no row matched.
pub fn update_message(
    conn: &Connection,
    id: &Uuid,
    patch: &MessagePatch,
) -> Result<Option<Message>, DatabaseError> {
    if patch.is_empty() {
        return get_message(conn, id);
    }

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(v) = &patch.sender_type {
        sets.push("sender_type = ?");
        values.push(Box::new(v.as_str()));
    }
    if let Some(v) = &patch.content {
        sets.push("content = ?");
        values.push(Box::new(v.clone()));
    }
    if let Some(v) = &patch.timestamp {
        sets.push("timestamp = ?");
        values.push(Box::new(*v));
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
        "UPDATE messages SET {} WHERE message_id = ?",
        sets.join(", ")
    );
    let changed = conn.execute(&sql, params_from_iter(&values))?;
    if changed == 0 {
        return Ok(None);
    }

    get_message(conn, id)
}

struct MessageRow {
    message_id: String,
    conversation_id: String,
    sender_type: Option<String>,
    content: Option<String>,
    timestamp: Option<NaiveDateTime>,
    sentiment_score: Option<f64>,
    intent_label: Option<String>,
    intent_confidence_score: Option<f64>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        conversation_id: row.get(1)?,
        sender_type: row.get(2)?,
        content: row.get(3)?,
        timestamp: row.get(4)?,
        sentiment_score: row.get(5)?,
        intent_label: row.get(6)?,
        intent_confidence_score: row.get(7)?,
    })
}

fn message_from_row(row: MessageRow) -> Result<Message, DatabaseError> {
    Ok(Message {
        message_id: Uuid::parse_str(&row.message_id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        conversation_id: Uuid::parse_str(&row.conversation_id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        sender_type: row
            .sender_type
            .as_deref()
            .map(SenderType::from_str)
            .transpose()?,
        content: row.content,
        timestamp: row.timestamp,
        sentiment_score: row.sentiment_score,
        intent_label: row.intent_label,
        intent_confidence_score: row.intent_confidence_score,
    })
}

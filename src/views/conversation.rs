use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::convert::From;

/// A conversation as returned by the API, with `metadata` parsed back into JSON.
#[derive(Debug, Serialize)]
pub struct Conversation {
    pub id: i64,
    pub platform: String,
    pub user_id: Option<String>,
    pub user_message: String,
    pub ai_response: String,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

// Text that is not valid JSON is handed back verbatim as a string.
fn parse_metadata(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

impl From<models::Conversation> for Conversation {
    fn from(conversation: models::Conversation) -> Self {
        Self {
            id: conversation.id,
            platform: conversation.platform,
            user_id: conversation.user_id,
            user_message: conversation.user_message,
            ai_response: conversation.ai_response,
            metadata: conversation.metadata.map(parse_metadata),
            created_at: conversation.created_at,
        }
    }
}

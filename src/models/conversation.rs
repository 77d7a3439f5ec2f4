use chrono::{DateTime, Utc};
use serde_json::Value;

/// A row of the `conversations` table as stored. `metadata` is the raw JSON text.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Conversation {
    pub id: i64,
    pub platform: String,
    pub user_id: Option<String>,
    pub user_message: String,
    pub ai_response: String,
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new row; `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConversation {
    pub platform: String,
    pub user_id: Option<String>,
    pub user_message: String,
    pub ai_response: String,
    pub metadata: Option<Value>,
}

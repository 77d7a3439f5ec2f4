use crate::db::query::{self, Filter, Pagination};
use crate::models;
use sqlx::SqlitePool;
use tracing::Instrument;

pub async fn insert(pool: &SqlitePool, conversation: models::NewConversation) -> Result<i64, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new conversation into the database");
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO conversations (platform, user_id, user_message, ai_response, metadata)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(conversation.platform)
    .bind(conversation.user_id)
    .bind(conversation.user_message)
    .bind(conversation.ai_response)
    .bind(conversation.metadata.map(|metadata| metadata.to_string()))
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|id| {
        tracing::info!("New conversation {} has been saved to database", id);
        id
    })
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<models::Conversation>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetching the conversation by ID", id);
    sqlx::query_as::<_, models::Conversation>(
        r#"
        SELECT id, platform, user_id, user_message, ai_response, metadata, created_at
        FROM conversations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

/// Returns the number of removed rows, 0 when the id was unknown.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let query_span = tracing::info_span!("Deleting the conversation by ID", id);
    let result = sqlx::query("DELETE FROM conversations WHERE id = ?")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await?;
    Ok(result.rows_affected())
}

pub async fn list(
    pool: &SqlitePool,
    filter: &Filter,
    pagination: &Pagination,
) -> Result<Vec<models::Conversation>, sqlx::Error> {
    let query_span = tracing::info_span!("Listing conversations", ?filter, ?pagination);
    query::select(filter, pagination)
        .build_query_as::<models::Conversation>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
}

pub async fn count(pool: &SqlitePool, filter: &Filter) -> Result<i64, sqlx::Error> {
    let query_span = tracing::info_span!("Counting conversations", ?filter);
    query::count(filter)
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .instrument(query_span)
        .await
}

use crate::models;
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::Instrument;

pub const DAILY_LIMIT: i64 = 30;

pub async fn total<'c, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'c>,
{
    let query_span = tracing::info_span!("Counting all conversations");
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM conversations")
        .fetch_one(executor)
        .instrument(query_span)
        .await
}

pub async fn by_platform<'c, E>(executor: E) -> Result<Vec<models::PlatformCount>, sqlx::Error>
where
    E: SqliteExecutor<'c>,
{
    let query_span = tracing::info_span!("Counting conversations by platform");
    sqlx::query_as::<_, models::PlatformCount>(
        r#"
        SELECT platform, COUNT(*) AS count
        FROM conversations
        GROUP BY platform
        ORDER BY platform
        "#,
    )
    .fetch_all(executor)
    .instrument(query_span)
    .await
}

/// Per-day counts, most recent day first, at most `limit` days.
pub async fn daily<'c, E>(executor: E, limit: i64) -> Result<Vec<models::DailyCount>, sqlx::Error>
where
    E: SqliteExecutor<'c>,
{
    let query_span = tracing::info_span!("Counting conversations per day", limit);
    sqlx::query_as::<_, models::DailyCount>(
        r#"
        SELECT DATE(created_at) AS date, COUNT(*) AS count
        FROM conversations
        GROUP BY DATE(created_at)
        ORDER BY date DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .instrument(query_span)
    .await
}

/// All three aggregates are read in one transaction, so they describe the same
/// snapshot: the shared lock keeps writers out until the last read is done.
pub async fn collect(pool: &SqlitePool) -> Result<models::Stats, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let stats = models::Stats {
        total: total(&mut *tx).await?,
        by_platform: by_platform(&mut *tx).await?,
        daily: daily(&mut *tx, DAILY_LIMIT).await?,
    };

    tx.commit().await?;
    Ok(stats)
}

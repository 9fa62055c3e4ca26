use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Audit entry joined with the actor's public fields, when an actor exists.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub result: Option<String>,
    pub timestamp: OffsetDateTime,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

pub async fn count_all(db: &PgPool) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM logs"#)
        .fetch_one(db)
        .await?;
    Ok(count)
}

pub async fn list_page(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<LogEntry>> {
    let rows = sqlx::query_as::<_, LogEntry>(
        r#"
        SELECT l.id, l.user_id, l.action, l.result, l.timestamp,
               u.name AS user_name, u.email AS user_email
        FROM logs l
        LEFT JOIN users u ON u.id = l.user_id
        ORDER BY l.timestamp DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

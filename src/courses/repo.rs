use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Course row joined with its creator's public fields.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_by: Uuid,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub creator_name: String,
    pub creator_email: String,
}

impl Course {
    pub async fn create(
        db: &PgPool,
        title: &str,
        description: Option<&str>,
        category: Option<&str>,
        created_by: Uuid,
    ) -> anyhow::Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            WITH inserted AS (
                INSERT INTO courses (title, description, category, created_by)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, description, category, created_by, created_at, updated_at
            )
            SELECT i.id, i.title, i.description, i.category, i.created_by,
                   i.created_at, i.updated_at,
                   u.name AS creator_name, u.email AS creator_email
            FROM inserted i
            JOIN users u ON u.id = i.created_by
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(created_by)
        .fetch_one(db)
        .await?;
        Ok(course)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.category, c.created_by,
                   c.created_at, c.updated_at,
                   u.name AS creator_name, u.email AS creator_email
            FROM courses c
            JOIN users u ON u.id = c.created_by
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(course)
    }

    /// All courses, newest first.
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.category, c.created_by,
                   c.created_at, c.updated_at,
                   u.name AS creator_name, u.email AS creator_email
            FROM courses c
            JOIN users u ON u.id = c.created_by
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// The most recently created courses, newest first.
    pub async fn list_recent(db: &PgPool, limit: i64) -> anyhow::Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.category, c.created_by,
                   c.created_at, c.updated_at,
                   u.name AS creator_name, u.email AS creator_email
            FROM courses c
            JOIN users u ON u.id = c.created_by
            ORDER BY c.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Partial update: absent fields keep their prior values.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
    ) -> anyhow::Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            WITH updated AS (
                UPDATE courses
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    category = COALESCE($4, category),
                    updated_at = now()
                WHERE id = $1
                RETURNING id, title, description, category, created_by, created_at, updated_at
            )
            SELECT i.id, i.title, i.description, i.category, i.created_by,
                   i.created_at, i.updated_at,
                   u.name AS creator_name, u.email AS creator_email
            FROM updated i
            JOIN users u ON u.id = i.created_by
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category)
        .fetch_one(db)
        .await?;
        Ok(course)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}

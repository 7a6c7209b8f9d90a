//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// PostgreSQL-backed post repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                content,
                user_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.user_id.as_uuid())
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, title, content, user_id, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, title, content, user_id, created_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, post_id: &PostId, title: &str, content: &str) -> PostResult<u64> {
        let affected = sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<u64> {
        let affected = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected)
    }
}

/// Database row mapping
#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    title: String,
    content: String,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            content: self.content,
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
        }
    }
}

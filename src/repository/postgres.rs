use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Comment, CommentId, CommentRecord, PostId};
use crate::repository::CommentDao;

#[derive(Clone, Debug)]
pub struct PgCommentDao {
    pool: PgPool,
}

impl PgCommentDao {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentDao for PgCommentDao {
    #[tracing::instrument(skip(self))]
    async fn get_all_comments(&self) -> Result<Vec<CommentRecord>, anyhow::Error> {
        sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, comment, published, post_id, author_id
            FROM comments
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load comments")
    }

    #[tracing::instrument(skip(self), fields(post_id=%post_id))]
    async fn get_all_comments_by_post_id(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<CommentRecord>, anyhow::Error> {
        sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, comment, published, post_id, author_id
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(post_id.as_ref())
        .fetch_all(&self.pool)
        .await
        .context("Failed to load comments for post")
    }

    #[tracing::instrument(skip(self, comment), fields(post_id=%comment.post_id))]
    async fn save_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error> {
        sqlx::query_as::<_, CommentRecord>(
            r#"
            INSERT INTO comments (id, comment, published, post_id, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, comment, published, post_id, author_id
            "#,
        )
        .bind(CommentId::generate().to_string())
        .bind(comment.comment.as_ref())
        .bind(comment.published.to_string())
        .bind(comment.post_id.as_ref())
        .bind(comment.author_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert comment")
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id=?comment.id))]
    async fn patch_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error> {
        let Some(id) = &comment.id else {
            return Ok(None);
        };

        sqlx::query_as::<_, CommentRecord>(
            r#"
            UPDATE comments
            SET comment = $2, published = $3, post_id = $4, author_id = $5
            WHERE id = $1
            RETURNING id, comment, published, post_id, author_id
            "#,
        )
        .bind(id.as_ref())
        .bind(comment.comment.as_ref())
        .bind(comment.published.to_string())
        .bind(comment.post_id.as_ref())
        .bind(comment.author_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update comment")
    }

    #[tracing::instrument(skip(self), fields(comment_id=%id))]
    async fn delete_comment_by_id(&self, id: &CommentId) -> Result<bool, anyhow::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(&self.pool)
        .await
        .context("Failed to delete comment")?;

        Ok(result.rows_affected() > 0)
    }
}

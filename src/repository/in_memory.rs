use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Comment, CommentId, CommentRecord, PostId};
use crate::repository::CommentDao;

/// Process-local comment store, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCommentDao {
    comments: RwLock<Vec<CommentRecord>>,
}

impl InMemoryCommentDao {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentDao for InMemoryCommentDao {
    #[tracing::instrument(skip(self))]
    async fn get_all_comments(&self) -> Result<Vec<CommentRecord>, anyhow::Error> {
        Ok(self.comments.read().await.clone())
    }

    #[tracing::instrument(skip(self), fields(post_id=%post_id))]
    async fn get_all_comments_by_post_id(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<CommentRecord>, anyhow::Error> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.post_id == post_id.as_ref())
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip(self, comment), fields(post_id=%comment.post_id))]
    async fn save_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error> {
        let record = CommentRecord {
            id: Some(CommentId::generate().to_string()),
            ..CommentRecord::from(comment)
        };
        self.comments.write().await.push(record.clone());
        Ok(Some(record))
    }

    #[tracing::instrument(skip(self, comment), fields(comment_id=?comment.id))]
    async fn patch_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error> {
        let patched = CommentRecord::from(comment);
        if patched.id.is_none() {
            return Ok(None);
        }

        let mut comments = self.comments.write().await;
        let Some(existing) = comments.iter_mut().find(|c| c.id == patched.id) else {
            return Ok(None);
        };
        *existing = patched.clone();

        Ok(Some(patched))
    }

    #[tracing::instrument(skip(self), fields(comment_id=%id))]
    async fn delete_comment_by_id(&self, id: &CommentId) -> Result<bool, anyhow::Error> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id.as_deref() != Some(id.as_ref()));
        Ok(comments.len() < before)
    }
}

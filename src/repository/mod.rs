mod in_memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Comment, CommentId, CommentRecord, PostId};

pub use in_memory::InMemoryCommentDao;
pub use postgres::PgCommentDao;

/// Persistence operations the comment service relies on.
///
/// `save_comment` and `patch_comment` return `None` when the store produced
/// no record; `delete_comment_by_id` reports whether anything was removed.
#[async_trait]
pub trait CommentDao: Send + Sync {
    async fn get_all_comments(&self) -> Result<Vec<CommentRecord>, anyhow::Error>;

    async fn get_all_comments_by_post_id(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<CommentRecord>, anyhow::Error>;

    async fn save_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error>;

    async fn patch_comment(
        &self,
        comment: &Comment,
    ) -> Result<Option<CommentRecord>, anyhow::Error>;

    async fn delete_comment_by_id(&self, id: &CommentId) -> Result<bool, anyhow::Error>;
}

pub type CommentDaoRef = Arc<dyn CommentDao>;

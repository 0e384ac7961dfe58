use std::fmt::{self, Debug, Formatter};

use anyhow::anyhow;

use crate::domain::{Comment, CommentId, CommentPayload, CommentRecord, PostId};
use crate::repository::CommentDaoRef;
use crate::utils;

#[derive(thiserror::Error)]
pub enum CommentError {
    #[error("{0}")]
    ValidationError(String),

    /// Raised by the HTTP layer when a delete removed nothing; the service
    /// itself passes the store's `bool` through.
    #[error("comment not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

/// Validates comment payloads and hands persistence to the injected DAO.
#[derive(Clone)]
pub struct CommentService {
    dao: CommentDaoRef,
}

impl CommentService {
    pub fn new(dao: CommentDaoRef) -> Self {
        Self { dao }
    }

    #[tracing::instrument(name = "Fetching all comments", skip(self))]
    pub async fn get_all_comments(&self) -> Result<Vec<CommentRecord>, CommentError> {
        Ok(self.dao.get_all_comments().await?)
    }

    #[tracing::instrument(name = "Fetching comments for post", skip(self), fields(post_id=%post_id))]
    pub async fn get_all_comments_by_post_id(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<CommentRecord>, CommentError> {
        Ok(self.dao.get_all_comments_by_post_id(post_id).await?)
    }

    #[tracing::instrument(name = "Saving a new comment", skip(self, payload))]
    pub async fn save_comment(&self, payload: CommentPayload) -> Result<Comment, CommentError> {
        let comment = Comment::for_create(payload).map_err(CommentError::ValidationError)?;

        let record = self.dao.save_comment(&comment).await?.ok_or_else(|| {
            CommentError::ValidationError("comment could not be saved".to_string())
        })?;

        into_entity(record)
    }

    #[tracing::instrument(name = "Patching a comment", skip(self, payload), fields(comment_id=tracing::field::Empty))]
    pub async fn patch_comment(&self, payload: CommentPayload) -> Result<Comment, CommentError> {
        let comment = Comment::for_patch(payload).map_err(CommentError::ValidationError)?;
        if let Some(id) = &comment.id {
            tracing::Span::current().record("comment_id", tracing::field::display(id));
        }

        let record = self.dao.patch_comment(&comment).await?.ok_or_else(|| {
            CommentError::ValidationError("comment could not be updated".to_string())
        })?;

        into_entity(record)
    }

    #[tracing::instrument(name = "Deleting a comment", skip(self), fields(comment_id=%id))]
    pub async fn delete_comment_by_id(&self, id: &CommentId) -> Result<bool, CommentError> {
        Ok(self.dao.delete_comment_by_id(id).await?)
    }
}

fn into_entity(record: CommentRecord) -> Result<Comment, CommentError> {
    Comment::try_from(record)
        .map_err(|e| CommentError::UnexpectedError(anyhow!("Store returned an invalid comment: {e}")))
}

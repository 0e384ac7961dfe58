mod comment_text;
mod identifiers;
mod payload;
mod published;

pub use comment_text::CommentText;
pub use identifiers::{AuthorId, CommentId, PostId};
pub use payload::{CommentPayload, RawId};
pub use published::{Published, PublishedAt};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CommentId>,
    pub comment: CommentText,
    pub published: Published,
    pub post_id: PostId,
    pub author_id: AuthorId,
}

impl Comment {
    pub fn new(
        id: Option<String>,
        comment: String,
        published: String,
        post_id: String,
        author_id: String,
    ) -> Result<Self, String> {
        Ok(Self {
            id: id.map(CommentId::parse).transpose()?,
            comment: CommentText::parse(comment)?,
            published: Published::parse(published)?,
            post_id: PostId::parse(post_id)?,
            author_id: AuthorId::parse(author_id)?,
        })
    }

    /// Builds a comment for insertion. A caller-supplied `id` is discarded.
    pub fn for_create(payload: CommentPayload) -> Result<Self, String> {
        payload.check_required()?;
        let (comment, published, post_id, author_id) = required_fields(payload)?;
        Self::new(None, comment, published, post_id, author_id)
    }

    /// Builds a comment addressing an existing record, so `id` is required.
    pub fn for_patch(payload: CommentPayload) -> Result<Self, String> {
        let id = payload.id_text()?;
        if let Err(e) = payload.check_required() {
            return Err(match id {
                None => format!("id is required; {e}"),
                Some(_) => e,
            });
        }
        let id = id.ok_or_else(|| "id is required".to_string())?;
        let (comment, published, post_id, author_id) = required_fields(payload)?;
        Self::new(Some(id), comment, published, post_id, author_id)
    }
}

type Fields = (String, String, String, String);

fn required_fields(payload: CommentPayload) -> Result<Fields, String> {
    let CommentPayload {
        comment,
        published,
        post_id,
        author_id,
        ..
    } = payload;

    match (comment, published, post_id, author_id) {
        (Some(comment), Some(published), Some(post_id), Some(author_id)) => {
            Ok((comment, published, post_id.into(), author_id.into()))
        }
        _ => Err("comment, published, postId and authorId are required".to_string()),
    }
}

/// Row shape exchanged with a comment store.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub comment: String,
    pub published: String,
    pub post_id: String,
    pub author_id: String,
}

impl From<&Comment> for CommentRecord {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.as_ref().map(|id| id.to_string()),
            comment: comment.comment.to_string(),
            published: comment.published.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
        }
    }
}

impl TryFrom<CommentRecord> for Comment {
    type Error = String;

    fn try_from(record: CommentRecord) -> Result<Self, Self::Error> {
        Comment::new(
            record.id,
            record.comment,
            record.published,
            record.post_id,
            record.author_id,
        )
    }
}

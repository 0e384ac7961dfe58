use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};
use uuid::Uuid;

const MAX_ID_LENGTH: usize = 64;

fn parse_reference(kind: &str, s: String) -> Result<String, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(format!("Invalid {kind}: cannot be empty."));
    }

    if trimmed.chars().count() > MAX_ID_LENGTH {
        return Err(format!(
            "Invalid {kind}: cannot exceed {MAX_ID_LENGTH} characters."
        ));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(format!("Invalid {kind}: contains control characters."));
    }

    Ok(trimmed.to_string())
}

/// Identifier of a stored comment, assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(String);

impl CommentId {
    pub fn parse(s: String) -> Result<Self, String> {
        parse_reference("id", s).map(Self)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn parse(s: String) -> Result<Self, String> {
        parse_reference("postId", s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn parse(s: String) -> Result<Self, String> {
        parse_reference("authorId", s).map(Self)
    }
}

macro_rules! impl_str_newtype {
    ($($ty:ty),*) => {
        $(
            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.0)
                }
            }
        )*
    };
}

impl_str_newtype!(CommentId, PostId, AuthorId);

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};
use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Trims surrounding whitespace and rejects empty or overly long text.
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid comment: cannot be empty.".to_string());
        }

        if trimmed.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(format!(
                "Invalid comment: cannot exceed {MAX_GRAPHEMES} characters."
            ));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for CommentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CommentText {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for CommentText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Identifier value as callers send it: JSON clients use strings and numbers interchangeably.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl Display for RawId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(s) => f.write_str(s),
            RawId::Number(n) => n.fmt(f),
        }
    }
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Create/update request body. Every field is optional so that a missing
/// field becomes a validation error rather than a deserialization failure;
/// unknown fields are dropped during deserialization.
#[derive(Deserialize, Validate, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    // Kept untyped: creates discard it whatever its shape
    pub id: Option<Value>,

    #[validate(required(message = "comment is required"))]
    pub comment: Option<String>,

    #[validate(required(message = "published is required"))]
    pub published: Option<String>,

    #[validate(required(message = "postId is required"))]
    pub post_id: Option<RawId>,

    #[validate(required(message = "authorId is required"))]
    pub author_id: Option<RawId>,
}

impl CommentPayload {
    /// Reports every missing required field in one message.
    pub fn check_required(&self) -> Result<(), String> {
        self.validate().map_err(|e| describe(&e))
    }

    /// `id` as text, for addressing an existing record.
    pub fn id_text(&self) -> Result<Option<String>, String> {
        match &self.id {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err("Invalid id: must be a string or a number.".to_string()),
        }
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_values()
        .flatten()
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

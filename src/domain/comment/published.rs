use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

/// Typed reading of a `published` value, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedAt {
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

/// Publication value of a comment. The caller's text is kept verbatim;
/// dates and RFC 3339 timestamps additionally get a typed reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    raw: String,
    moment: Option<PublishedAt>,
}

impl Published {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Invalid published: cannot be empty.".to_string());
        }

        let moment = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(PublishedAt::Date)
            .or_else(|_| {
                DateTime::parse_from_rfc3339(trimmed)
                    .map(|ts| PublishedAt::Timestamp(ts.with_timezone(&Utc)))
            })
            .ok();

        Ok(Self { raw: s, moment })
    }

    pub fn moment(&self) -> Option<PublishedAt> {
        self.moment
    }
}

impl AsRef<str> for Published {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Display for Published {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

impl Serialize for Published {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

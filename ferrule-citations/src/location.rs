use serde::{Deserialize, Serialize};

use crate::ContentError;

/// Where a citation points inside a document: a character span, a page, or a
/// block index, depending on `kind`.
///
/// Validation only checks the kind; `start`/`end` ordering and sign are the
/// caller's responsibility.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: i64,
    pub end: i64,
}

impl Location {
    pub const CHAR: &'static str = "char";
    pub const PAGE: &'static str = "page";
    pub const BLOCK: &'static str = "block";

    pub fn char_span(start: i64, end: i64) -> Self {
        Self {
            kind: Self::CHAR.to_string(),
            start,
            end,
        }
    }

    pub fn page_span(start: i64, end: i64) -> Self {
        Self {
            kind: Self::PAGE.to_string(),
            start,
            end,
        }
    }

    pub fn block_span(start: i64, end: i64) -> Self {
        Self {
            kind: Self::BLOCK.to_string(),
            start,
            end,
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        match self.kind.as_str() {
            Self::CHAR | Self::PAGE | Self::BLOCK => Ok(()),
            other => Err(ContentError::InvalidLocationKind {
                kind: other.to_string(),
            }),
        }
    }
}

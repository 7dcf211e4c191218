//! Reference Context - Errors

use std::fmt;

use thiserror::Error;

/// 引用的三个组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePart {
    Chapter,
    Start,
    End,
}

impl ReferencePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferencePart::Chapter => "chapter",
            ReferencePart::Start => "start verse",
            ReferencePart::End => "end verse",
        }
    }
}

impl fmt::Display for ReferencePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("invalid: only one ':' allowed")]
    DuplicateColon,

    #[error("invalid: only one '-' allowed")]
    DuplicateDash,

    #[error("invalid: can't reach end stage before start stage")]
    EndBeforeStart,

    #[error("invalid: {part} malformed: {input:?}")]
    Malformed { part: ReferencePart, input: String },
}

impl ReferenceError {
    pub(crate) fn malformed(part: ReferencePart, input: &str) -> Self {
        Self::Malformed {
            part,
            input: input.to_string(),
        }
    }
}

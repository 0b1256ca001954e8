use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairErrorKind {
    #[error("unbalanced braces/brackets (net depth {depth} over the whole input)")]
    ImbalancedDelimiters { depth: i64 },
    #[error("a line mixes quoting and colons in a way line repair cannot disambiguate")]
    AmbiguousColonSplit,
    #[error("repaired text still fails JSON parsing: {message}")]
    PostRepairParseFailure { message: String },
    #[error("document shape: {0}")]
    UnexpectedShape(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    /// 1-based line in the reassembled text, 0 when no line applies.
    pub line: usize,
    /// A small window of lines around the failure, ready for console output.
    pub context: String,
    /// Best-effort reassembled text, carried so the caller can persist it
    /// for offline inspection. Present for post-repair failures only.
    pub partial: Option<String>,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            context: String::new(),
            partial: None,
        }
    }

    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Self::new(RepairErrorKind::UnexpectedShape(msg.into()), 0)
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{} (line {})", self.kind, self.line)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl std::error::Error for RepairError {}

//! Tolerant, line-oriented recovery parsing for "JSON-shaped" word lists:
//! bareword keys and values get quoted, boolean/number/null tokens keep
//! their types, trailing commas are stripped, and the reassembled text is
//! validated as standard JSON before it is handed back as a [`Document`].
//! A stricter record-oriented fallback ([`reconstruct`]) rebuilds documents
//! the line repair cannot converge on, at the cost of stringly-typed fields.

mod classify;
pub mod cli;
mod document;
pub mod error;
mod fallback;
pub mod options;
mod repair;
mod scan;

pub use document::{Document, FieldValue, Record};
pub use error::{RepairError, RepairErrorKind};
pub use options::Options;
pub use repair::RepairLogEntry;

/// Repair a JSON-shaped input and parse it into the document model
/// (one root label naming an ordered sequence of flat records).
pub fn repair(input: &str, opts: &Options) -> Result<Document, RepairError> {
    let (_, value, _) = repair::repair_internal(input, opts)?;
    Document::from_value(value)
}

/// Repair a JSON-shaped input and return the reassembled, validated JSON
/// text without imposing the document model on it.
pub fn repair_text(input: &str, opts: &Options) -> Result<String, RepairError> {
    let (text, _, _) = repair::repair_internal(input, opts)?;
    Ok(text)
}

/// Repair a JSON-shaped input and return the document pretty-printed as
/// standard JSON (2-space indent, non-ASCII kept literal).
pub fn repair_to_string(input: &str, opts: &Options) -> Result<String, RepairError> {
    repair(input, opts)?.to_pretty_string()
}

/// Like [`repair`], but also returns the repair log. Entries are collected
/// only when `opts.logging` is set.
pub fn repair_with_log(
    input: &str,
    opts: &Options,
) -> Result<(Document, Vec<RepairLogEntry>), RepairError> {
    let (_, value, log) = repair::repair_internal(input, opts)?;
    Ok((Document::from_value(value)?, log))
}

/// Fallback reconstruction: record-oriented scan that keeps every field
/// value as a plain string. Never invoked automatically by [`repair`];
/// escalation after a `RepairError` is the caller's explicit decision.
pub fn reconstruct(input: &str, opts: &Options) -> Result<Document, RepairError> {
    fallback::reconstruct_document(input, opts)
}

#[cfg(test)]
mod tests;

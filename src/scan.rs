use crate::classify::{is_close_delim, is_open_delim};
use memchr::memchr;

/// Tracks whether a left-to-right scan sits inside a double-quoted span,
/// honoring backslash escapes. Every scanner in this module shares it so
/// quoted text is invisible to structural decisions everywhere.
#[derive(Default)]
struct QuoteState {
    in_str: bool,
    escaped: bool,
}

impl QuoteState {
    /// Advance over `c`. Returns `true` when `c` is structural, i.e. sits
    /// outside any quoted span (the quote characters themselves count as
    /// part of the span).
    #[inline]
    fn step(&mut self, c: char) -> bool {
        if self.in_str {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_str = false;
            }
            false
        } else if c == '"' {
            self.in_str = true;
            false
        } else {
            true
        }
    }
}

/// Net and minimum nesting depth over the whole input, counting `{`/`[` and
/// `}`/`]` occurrences outside double-quoted spans.
pub(crate) fn balance_of(text: &str) -> (i64, i64) {
    let mut depth = 0i64;
    let mut min = 0i64;
    let mut qs = QuoteState::default();
    for c in text.chars() {
        if !qs.step(c) {
            continue;
        }
        if is_open_delim(c) {
            depth += 1;
        } else if is_close_delim(c) {
            depth -= 1;
            if depth < min {
                min = depth;
            }
        }
    }
    (depth, min)
}

/// Occurrence counts of opening and closing delimiters on one line, outside
/// quoted spans.
pub(crate) fn count_delims(line: &str) -> (i64, i64) {
    let mut opens = 0i64;
    let mut closes = 0i64;
    let mut qs = QuoteState::default();
    for c in line.chars() {
        if !qs.step(c) {
            continue;
        }
        if is_open_delim(c) {
            opens += 1;
        } else if is_close_delim(c) {
            closes += 1;
        }
    }
    (opens, closes)
}

/// Byte offset of the first `:` outside double-quoted spans, if any.
pub(crate) fn first_colon(s: &str) -> Option<usize> {
    // cheap reject before the quote-aware walk
    memchr(b':', s.as_bytes())?;
    let mut qs = QuoteState::default();
    for (i, c) in s.char_indices() {
        if qs.step(c) && c == ':' {
            return Some(i);
        }
    }
    None
}

/// Split a line at commas that sit outside double-quoted spans. Segments keep
/// their original spacing so the caller can rejoin with plain commas.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut qs = QuoteState::default();
    for (i, c) in line.char_indices() {
        if qs.step(c) && c == ',' {
            out.push(&line[start..i]);
            start = i + 1;
        }
    }
    out.push(&line[start..]);
    out
}

/// Remove any comma that precedes a closing `}`/`]` across whitespace and
/// newlines, skipping quoted spans.
pub(crate) fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut qs = QuoteState::default();
    for c in text.chars() {
        if qs.step(c) && is_close_delim(c) {
            let kept = out.trim_end().len();
            if out[..kept].ends_with(',') {
                out.remove(kept - 1);
            }
        }
        out.push(c);
    }
    out
}

/// Lines `line - n ..= line + n` (1-based) with the failing line marked.
pub(crate) fn context_window(text: &str, line: usize, n: usize) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    for (idx, l) in text.lines().enumerate() {
        let num = idx + 1;
        if num + n < line {
            continue;
        }
        if num > line + n {
            break;
        }
        let marker = if num == line { ">>>" } else { "   " };
        let _ = writeln!(out, "{marker} {num}: {l}");
    }
    out
}

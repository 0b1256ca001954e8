use crate::classify::{is_close_delim, is_open_delim, is_word_char};
use crate::error::{RepairError, RepairErrorKind};
use crate::options::Options;
use crate::scan::{
    balance_of, context_window, count_delims, first_colon, split_fields, strip_trailing_commas,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairLogEntry {
    /// 1-based input line the entry refers to.
    pub line: usize,
    pub message: &'static str,
    /// The token or segment the repair touched.
    pub context: String,
}

#[derive(Default)]
struct Logger {
    enable: bool,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    #[inline]
    fn log(&mut self, line: usize, message: &'static str, context: &str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                line,
                message,
                context: context.to_string(),
            });
        }
    }
}

/// Short-lived state for one repair invocation.
struct ParseState {
    depth: i64,
    logger: Logger,
    /// Input lines whose colon structure could not be disambiguated and were
    /// passed through unrepaired. Line numbers survive reassembly unchanged,
    /// so a validation failure landing on one of these becomes
    /// `AmbiguousColonSplit` instead of a generic parse failure.
    ambiguous: Vec<usize>,
}

/// Tier-1 repair: line-oriented single pass, then full-document validation.
/// Returns the repaired text, the parsed value and the repair log.
pub(crate) fn repair_internal(
    input: &str,
    opts: &Options,
) -> Result<(String, serde_json::Value, Vec<RepairLogEntry>), RepairError> {
    let (depth, min) = balance_of(input);
    if depth != 0 || min < 0 {
        let depth = if depth != 0 { depth } else { min };
        return Err(RepairError::new(
            RepairErrorKind::ImbalancedDelimiters { depth },
            0,
        ));
    }

    let mut state = ParseState {
        depth: 0,
        logger: Logger {
            enable: opts.logging,
            ..Logger::default()
        },
        ambiguous: Vec::new(),
    };
    let repaired = strip_trailing_commas(&repair_lines(input, &mut state));

    match serde_json::from_str::<serde_json::Value>(&repaired) {
        Ok(value) => Ok((repaired, value, state.logger.entries)),
        Err(e) => {
            let line = e.line();
            let kind = if state.ambiguous.contains(&line) {
                RepairErrorKind::AmbiguousColonSplit
            } else {
                RepairErrorKind::PostRepairParseFailure {
                    message: e.to_string(),
                }
            };
            Err(RepairError {
                kind,
                line,
                context: context_window(&repaired, line, opts.context_lines),
                partial: Some(repaired),
            })
        }
    }
}

fn repair_lines(input: &str, state: &mut ParseState) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for (idx, line) in input.lines().enumerate() {
        let lineno = idx + 1;
        if idx > 0 {
            out.push('\n');
        }
        let (opens, closes) = count_delims(line);
        // Token repair only applies inside a container (or on the line that
        // opens one); everything else passes through untouched.
        let inside = state.depth > 0 || opens > 0;
        state.depth += opens - closes;
        if !inside || first_colon(line).is_none() {
            out.push_str(line);
            continue;
        }
        let mut first = true;
        for segment in split_fields(line) {
            if !first {
                out.push(',');
            }
            first = false;
            repair_segment(segment, lineno, state, &mut out);
        }
    }
    out
}

/// Repair one comma-delimited segment: quote a bareword key, then classify
/// and repair the value after the first colon outside quotes.
fn repair_segment(segment: &str, lineno: usize, state: &mut ParseState, out: &mut String) {
    let Some(colon) = first_colon(segment) else {
        out.push_str(segment);
        return;
    };
    let key_side = &segment[..colon];
    let value_side = &segment[colon + 1..];

    // Indentation and any `{`/`[` run before the key stay as they are.
    let trimmed = key_side.trim_end();
    let core_start = trimmed.len()
        - trimmed
            .trim_start_matches(|c: char| c.is_whitespace() || is_open_delim(c))
            .len();
    let (prefix, key) = trimmed.split_at(core_start);

    if !key.is_empty() && is_quoted(key) {
        out.push_str(prefix);
        out.push_str(key);
    } else if !key.is_empty() && key.chars().all(is_word_char) {
        state.logger.log(lineno, "quoted bareword key", key);
        out.push_str(prefix);
        out.push('"');
        out.push_str(key);
        out.push('"');
    } else {
        state.logger.log(lineno, "ambiguous colon split, segment left unrepaired", segment.trim());
        if state.ambiguous.last() != Some(&lineno) {
            state.ambiguous.push(lineno);
        }
        out.push_str(segment);
        return;
    }
    out.push_str(": ");
    repair_value(value_side, lineno, state, out);
}

fn repair_value(value_side: &str, lineno: usize, state: &mut ParseState, out: &mut String) {
    let trimmed = value_side.trim();

    // A value beginning with `{`/`[` opens a nested container on this line;
    // whatever follows the opener run is itself a field or a value.
    let open_len = trimmed.len()
        - trimmed
            .trim_start_matches(|c: char| c.is_whitespace() || is_open_delim(c))
            .len();
    if trimmed.starts_with(|c: char| is_open_delim(c)) {
        let (openers, rest) = trimmed.split_at(open_len);
        out.push_str(openers);
        if !rest.is_empty() {
            repair_segment(rest, lineno, state, out);
        }
        return;
    }

    // Closing delimiters at the end of the segment belong to the line, not
    // the value.
    let core_end = trimmed
        .trim_end_matches(|c: char| c.is_whitespace() || is_close_delim(c))
        .len();
    let (core, suffix) = trimmed.split_at(core_end);

    if core.is_empty() {
        out.push_str(trimmed);
        return;
    }
    if core.starts_with('"') {
        out.push_str(core);
    } else if core.eq_ignore_ascii_case("true") {
        if core != "true" {
            state.logger.log(lineno, "normalized literal keyword", core);
        }
        out.push_str("true");
    } else if core.eq_ignore_ascii_case("false") {
        if core != "false" {
            state.logger.log(lineno, "normalized literal keyword", core);
        }
        out.push_str("false");
    } else if core.eq_ignore_ascii_case("null") {
        if core != "null" {
            state.logger.log(lineno, "normalized literal keyword", core);
        }
        out.push_str("null");
    } else if is_decimal_numeral(core) {
        out.push_str(core);
    } else {
        state.logger.log(lineno, "quoted bareword value", core);
        push_quoted(core, out);
    }
    out.push_str(suffix);
}

/// Wrap a bareword value in quotes, escaping embedded quotes and backslashes
/// so the result survives re-parsing.
fn push_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn is_quoted(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('"') && s.ends_with('"')
}

/// Strict-JSON decimal numeral: optional `-`, digits, at most one `.` with
/// digits on both sides, no leading zeros. Anything looser (007, 1., .5) is
/// quoted as a string so the validated output stays standard JSON.
fn is_decimal_numeral(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let no_leading_zero = |part: &str| part.len() == 1 || !part.starts_with('0');
    match body.split_once('.') {
        None => all_digits(body) && no_leading_zero(body),
        Some((int, frac)) => all_digits(int) && all_digits(frac) && no_leading_zero(int),
    }
}

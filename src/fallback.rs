use crate::document::{Document, FieldValue, Record};
use crate::error::RepairError;
use crate::options::Options;
use crate::scan::first_colon;

/// Tier-2 reconstruction for inputs the line repair cannot converge on.
///
/// A line opening a brace starts a record, a line ending the record's
/// container appends it, and any remaining line with a colon contributes one
/// `field: raw-value` pair. Values are stripped of one trailing comma and one
/// trailing closing brace but are otherwise kept as plain strings: numeric
/// and boolean typing is deliberately given up in exchange for resilience
/// against pathological input.
pub(crate) fn reconstruct_document(input: &str, opts: &Options) -> Result<Document, RepairError> {
    let mut label: Option<String> = opts.root_label.clone();
    let mut records: Vec<Record> = Vec::new();
    let mut current: Option<Record> = None;

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let starts_record = line.starts_with('{');

        let Some(colon) = first_colon(line) else {
            if current.is_some() {
                if line.starts_with('}') {
                    close(&mut current, &mut records);
                }
            } else if starts_record && label.is_some() {
                current = Some(Record::default());
            }
            // other structural lines (`[`, `]`, the document brace) are noise
            continue;
        };

        let value_raw = line[colon + 1..].trim();
        if value_raw.is_empty() || value_raw == "[" {
            // The root-sequence opener (`label: [`), not a field.
            if label.is_none() {
                let key = key_of(&line[..colon]);
                if !key.is_empty() {
                    label = Some(key.to_string());
                }
            }
            // A record opened by the document's own brace is an artifact.
            if current.as_ref().is_some_and(|r| r.is_empty()) {
                current = None;
            }
            continue;
        }

        if current.is_none() {
            if starts_record && label.is_some() {
                current = Some(Record::default());
            } else {
                continue;
            }
        }

        let key = key_of(&line[..colon]).to_string();
        let mut value = value_raw.to_string();
        if let Some(v) = value.strip_suffix(',') {
            value = v.trim_end().to_string();
        }
        let closes = value.ends_with('}');
        if closes {
            value.truncate(value.len() - 1);
            value = value.trim_end().to_string();
        }
        if !key.is_empty()
            && let Some(rec) = current.as_mut()
        {
            rec.insert(key, FieldValue::Str(value));
        }
        if closes {
            close(&mut current, &mut records);
        }
    }

    // an unterminated final record still counts
    close(&mut current, &mut records);

    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return Err(RepairError::shape(
            "no root label found; set Options::root_label",
        ));
    };
    Ok(Document { label, records })
}

fn close(current: &mut Option<Record>, records: &mut Vec<Record>) {
    if let Some(rec) = current.take()
        && !rec.is_empty()
    {
        records.push(rec);
    }
}

/// Key text of a colon line: structural prefix dropped, surrounding quotes
/// (one pair) removed.
fn key_of(key_side: &str) -> &str {
    let key = key_side
        .trim_start_matches(|c: char| c.is_whitespace() || c == '{' || c == '[')
        .trim();
    key.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(key)
}

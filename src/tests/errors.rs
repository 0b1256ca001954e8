use super::*;

fn opts() -> Options {
    Options::default()
}

#[test]
fn imbalanced_input_fails_fast() {
    let err = crate::repair("{\n  a: [\n", &opts()).unwrap_err();
    assert!(matches!(
        err.kind,
        RepairErrorKind::ImbalancedDelimiters { .. }
    ));
    assert!(err.partial.is_none());
}

#[test]
fn early_close_is_imbalanced() {
    let err = crate::repair("} {", &opts()).unwrap_err();
    assert!(matches!(
        err.kind,
        RepairErrorKind::ImbalancedDelimiters { .. }
    ));
}

#[test]
fn ambiguous_key_surfaces_as_ambiguous_colon_split() {
    let s = "{\n  列表: [\n    {\n      \"a\"x: 1\n    },\n  ]\n}";
    let err = crate::repair(s, &opts()).unwrap_err();
    assert!(matches!(err.kind, RepairErrorKind::AmbiguousColonSplit));
    assert!(err.line > 0);
    let partial = err.partial.as_deref().unwrap();
    assert!(partial.contains("\"a\"x: 1"));
    assert!(err.context.contains(">>>"));
}

#[test]
fn post_repair_failure_carries_partial_and_context() {
    // a line with no colon at all is passed through and trips validation
    let err = crate::repair("{\n  \"a\"\n}", &opts()).unwrap_err();
    assert!(matches!(
        err.kind,
        RepairErrorKind::PostRepairParseFailure { .. }
    ));
    assert!(err.line > 0);
    assert!(err.partial.is_some());
}

#[test]
fn error_display_names_the_line() {
    let err = crate::repair("{\n  \"a\"\n}", &opts()).unwrap_err();
    assert!(err.to_string().contains("line"));
}

#[test]
fn repair_log_reports_changes() {
    let mut o = opts();
    o.logging = true;
    let (doc, log) = crate::repair_with_log(vocab_sample(), &o).unwrap();
    assert_eq!(doc.records.len(), 2);
    assert!(log.iter().any(|e| e.message.contains("key")));
    assert!(log.iter().any(|e| e.message.contains("value")));
    assert!(log.iter().all(|e| e.line > 0));
}

#[test]
fn log_is_empty_when_disabled() {
    let (_, log) = crate::repair_with_log(vocab_sample(), &opts()).unwrap();
    assert!(log.is_empty());
}

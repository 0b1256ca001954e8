use super::*;

#[test]
fn field_order_is_first_seen() {
    let doc = crate::repair(vocab_sample(), &Options::default()).unwrap();
    let keys: Vec<&str> = doc.records[0].iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["word", "meaning", "level", "active"]);
    let text = doc.to_pretty_string().unwrap();
    let w = text.find("\"word\"").unwrap();
    let m = text.find("\"meaning\"").unwrap();
    let l = text.find("\"level\"").unwrap();
    assert!(w < m && m < l);
}

#[test]
fn duplicate_fields_are_last_wins() {
    let s = "{ list: [ { a: 1, a: 2 }, ] }";
    let doc = crate::repair(s, &Options::default()).unwrap();
    assert_eq!(doc.records[0].len(), 1);
    assert_eq!(doc.records[0].get("a"), Some(&FieldValue::Num(2.into())));
}

#[test]
fn shape_errors() {
    let cases = [
        serde_json::json!(["not", "an", "object"]),
        serde_json::json!({"a": [], "b": []}),
        serde_json::json!({"a": {"not": "array"}}),
        serde_json::json!({"a": ["not an object"]}),
        serde_json::json!({"a": [{"nested": {"x": 1}}]}),
        serde_json::json!({"": []}),
    ];
    for v in cases {
        let err = Document::from_value(v).unwrap_err();
        assert!(matches!(err.kind, RepairErrorKind::UnexpectedShape(_)));
    }
}

#[test]
fn empty_sequence_is_fine() {
    let doc = Document::from_value(serde_json::json!({"列表": []})).unwrap();
    assert_eq!(doc.label, "列表");
    assert!(doc.records.is_empty());
}

#[test]
fn pretty_uses_two_space_indent() {
    let mut doc = Document::new("列表");
    let mut rec = Record::default();
    rec.insert("word", FieldValue::Str("abandon".into()));
    doc.records.push(rec);
    let text = doc.to_pretty_string().unwrap();
    assert!(text.starts_with("{\n  \"列表\""));
    assert!(text.contains("\n      \"word\": \"abandon\"\n"));
}

use super::*;

fn field(body: &str, key: &str) -> FieldValue {
    let input = format!("{{\n  list: [\n    {{\n      {body}\n    }},\n  ]\n}}");
    let doc = crate::repair(&input, &Options::default()).unwrap();
    doc.records[0].get(key).cloned().unwrap()
}

#[test]
fn booleans_and_null() {
    assert_eq!(field("active: true", "active"), FieldValue::Bool(true));
    assert_eq!(field("active: FALSE", "active"), FieldValue::Bool(false));
    assert_eq!(field("active: True", "active"), FieldValue::Bool(true));
    assert_eq!(field("name: null", "name"), FieldValue::Null);
    assert_eq!(field("name: NULL", "name"), FieldValue::Null);
}

#[test]
fn numbers_stay_numbers() {
    assert_eq!(field("count: 42", "count"), FieldValue::Num(42.into()));
    assert_eq!(field("count: 0", "count"), FieldValue::Num(0.into()));
    assert_eq!(
        field("count: -3.5", "count"),
        FieldValue::Num(serde_json::Number::from_f64(-3.5).unwrap())
    );
}

#[test]
fn barewords_become_strings() {
    assert_eq!(field("word: hello", "word"), FieldValue::Str("hello".into()));
    assert_eq!(
        field("word: hello world", "word"),
        FieldValue::Str("hello world".into())
    );
    assert_eq!(field("meaning: 放弃", "meaning"), FieldValue::Str("放弃".into()));
}

#[test]
fn number_like_strings_are_quoted() {
    // not valid JSON numbers, so they must come back as strings
    assert_eq!(field("code: 007", "code"), FieldValue::Str("007".into()));
    assert_eq!(field("code: 1.", "code"), FieldValue::Str("1.".into()));
    assert_eq!(field("code: .5", "code"), FieldValue::Str(".5".into()));
    assert_eq!(field("code: 1.2.3", "code"), FieldValue::Str("1.2.3".into()));
    assert_eq!(field("code: -", "code"), FieldValue::Str("-".into()));
}

#[test]
fn quoted_values_pass_through() {
    assert_eq!(
        field(r#"word: "already quoted""#, "word"),
        FieldValue::Str("already quoted".into())
    );
}

#[test]
fn embedded_quotes_are_escaped() {
    let v = field(r#"say: he said "hi" loudly"#, "say");
    assert_eq!(v, FieldValue::Str(r#"he said "hi" loudly"#.into()));
}

#[test]
fn embedded_backslash_is_escaped() {
    let v = field(r"path: C:\words", "path");
    assert_eq!(v, FieldValue::Str(r"C:\words".into()));
}

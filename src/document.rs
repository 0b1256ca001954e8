use crate::error::RepairError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Scalar field value of a record. The recovery grammar supports exactly one
/// level of nesting, so containers never appear here.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
    Null,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    fn from_json(value: serde_json::Value) -> Result<Self, &'static str> {
        match value {
            serde_json::Value::Null => Ok(FieldValue::Null),
            serde_json::Value::Bool(b) => Ok(FieldValue::Bool(b)),
            serde_json::Value::Number(n) => Ok(FieldValue::Num(n)),
            serde_json::Value::String(s) => Ok(FieldValue::Str(s)),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Err("nested containers are not part of the record grammar")
            }
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(s) => serializer.serialize_str(s),
            FieldValue::Num(n) => n.serialize(serializer),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_unit(),
        }
    }
}

/// One flat key/value record, insertion-ordered. Duplicate field names are
/// last-wins, matching JSON object semantics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The terminal output: one root label naming an ordered sequence of records.
/// Serializes as `{ label: [record, ...] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub label: String,
    pub records: Vec<Record>,
}

impl Document {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            records: Vec::new(),
        }
    }

    /// Convert a parsed JSON value into the document model: a single root key
    /// whose value is an array of flat records. Anything else is a shape error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RepairError> {
        let serde_json::Value::Object(root) = value else {
            return Err(RepairError::shape("root must be an object"));
        };
        if root.len() != 1 {
            return Err(RepairError::shape(format!(
                "root object must have exactly one key, found {}",
                root.len()
            )));
        }
        let Some((label, body)) = root.into_iter().next() else {
            return Err(RepairError::shape("root object is empty"));
        };
        if label.is_empty() {
            return Err(RepairError::shape("root label is empty"));
        }
        let serde_json::Value::Array(items) = body else {
            return Err(RepairError::shape(format!(
                "value under {label:?} must be an array of records"
            )));
        };
        let mut records = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            let serde_json::Value::Object(fields) = item else {
                return Err(RepairError::shape(format!("record {idx} is not an object")));
            };
            let mut record = Record::default();
            for (key, v) in fields {
                let fv = FieldValue::from_json(v).map_err(|why| {
                    RepairError::shape(format!("record {idx}, field {key:?}: {why}"))
                })?;
                record.insert(key, fv);
            }
            records.push(record);
        }
        Ok(Self { label, records })
    }

    /// Pretty-printed JSON with 2-space indentation; non-ASCII characters are
    /// emitted literally.
    pub fn to_pretty_string(&self) -> Result<String, RepairError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RepairError::shape(format!("serialize: {e}")))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.records)?;
        map.end()
    }
}

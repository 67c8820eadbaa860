//! Record and collection types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};
use crate::types::EntityKind;

/// One catalog item as delivered by a snapshot or the remote service.
///
/// Schema-agnostic: the field set depends on the kind and is interpreted
/// through that kind's [`EntityDescriptor`](super::EntityDescriptor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(Map<String, Value>);

impl EntityRecord {
    /// Wrap a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is a JSON object.
    pub fn from_value(kind: EntityKind, value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(InvalidInputError::Record {
                kind,
                reason: format!("expected a JSON object, got {}", json_type(&other)),
            }
            .into()),
        }
    }

    /// Returns a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Resolve an RFC 6901 JSON pointer against this record.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let path = pointer.strip_prefix('/')?;
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let head = head.replace("~1", "/").replace("~0", "~");
        let value = self.0.get(&head)?;
        match rest {
            Some(rest) => value.pointer(&format!("/{}", rest)),
            None => Some(value),
        }
    }

    /// Human-readable label for logs: the `name` field when present.
    pub fn label(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for EntityRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// An ordered batch of records of one kind.
///
/// No uniqueness is enforced; duplicates from the source are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<EntityRecord>);

impl Collection {
    /// Create a collection from records.
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self(records)
    }

    /// Create an empty collection.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityRecord> {
        self.0.iter()
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[EntityRecord] {
        &self.0
    }

    /// Consume the collection into its records.
    pub fn into_records(self) -> Vec<EntityRecord> {
        self.0
    }
}

impl From<Vec<EntityRecord>> for Collection {
    fn from(records: Vec<EntityRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<EntityRecord> for Collection {
    fn from_iter<I: IntoIterator<Item = EntityRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = EntityRecord;
    type IntoIter = std::vec::IntoIter<EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a EntityRecord;
    type IntoIter = std::slice::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

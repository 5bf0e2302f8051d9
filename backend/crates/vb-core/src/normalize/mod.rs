//! Translation between storage rows (snake_case columns) and the
//! application shape (camelCase fields) that the models deserialize from.
//!
//! Every row read from either backend passes through
//! [`to_application_shape`] before it reaches a model, and every write
//! payload is built with [`to_storage_shape`].

pub mod field_mapping;
pub mod shapes;

pub use field_mapping::{EntityShape, FieldMapping, NestedShape};

use crate::{CoreError, Result};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A single record as a JSON object.
pub type Row = Map<String, Value>;

/// Storage row to application shape.
///
/// For each mapped field the first non-null value among the storage column,
/// its legacy aliases and the application key is kept, so storage wins when
/// a row carries both spellings. Null or missing fields are left out rather
/// than emitted as `null`. Unmapped keys pass through; joined entities listed
/// in `shape.nested` are normalized recursively (arrays element-wise).
pub fn to_application_shape(shape: &EntityShape, row: Option<Row>) -> Option<Row> {
    let mut row = row?;
    let mut out = Row::new();

    for mapping in shape.fields {
        let mut chosen: Option<Value> = None;
        for key in mapping.read_keys() {
            let Some(value) = row.remove(key) else {
                continue;
            };
            if chosen.is_none() && !value.is_null() {
                chosen = Some(value);
            }
        }
        if let Some(value) = chosen {
            out.insert(mapping.application.to_string(), value);
        }
    }

    for nested in shape.nested {
        if let Some(value) = row.remove(nested.key).and_then(|v| normalize_nested(nested.shape, v)) {
            out.insert(nested.key.to_string(), value);
        }
    }

    for (key, value) in row {
        out.entry(key).or_insert(value);
    }

    Some(out)
}

fn normalize_nested(shape: &EntityShape, value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(inner) => to_application_shape(shape, Some(inner)).map(Value::Object),
        Value::Array(items) => Some(Value::Array(
            items
                .into_iter()
                .filter_map(|item| normalize_nested(shape, item))
                .collect(),
        )),
        other => Some(other),
    }
}

/// Application record to storage write payload.
///
/// Only mapped columns that are present on `record` are emitted, so a
/// partial update never nulls out columns it did not mention. When both
/// spellings are present the application key wins. Joined entities and
/// unmapped keys are dropped.
pub fn to_storage_shape(shape: &EntityShape, record: &Row) -> Row {
    let mut out = Row::new();

    for mapping in shape.fields {
        let value = record
            .get(mapping.application)
            .or_else(|| record.get(mapping.storage));
        if let Some(value) = value {
            out.insert(mapping.storage.to_string(), value.clone());
        }
    }

    out
}

/// Normalizes `row` and deserializes it into a model.
#[track_caller]
pub fn decode<T: DeserializeOwned>(shape: &EntityShape, row: Row) -> Result<T> {
    let normalized = to_application_shape(shape, Some(row)).unwrap_or_default();
    serde_json::from_value(Value::Object(normalized)).map_err(|e| CoreError::decode(shape.entity, e))
}

/// Serializes a model (or partial update) into a storage write payload.
#[track_caller]
pub fn encode<T: Serialize>(shape: &EntityShape, value: &T) -> Result<Row> {
    match serde_json::to_value(value) {
        Ok(Value::Object(record)) => Ok(to_storage_shape(shape, &record)),
        Ok(other) => Err(CoreError::encode(
            shape.entity,
            format!("expected an object, got {other}"),
        )),
        Err(e) => Err(CoreError::encode(shape.entity, e.to_string())),
    }
}

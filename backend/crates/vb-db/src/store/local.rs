//! Local fallback store: one JSON array per named collection.
//!
//! Every operation is a whole-collection read-modify-write. That is only
//! safe with a single writer per collection; concurrent processes sharing
//! the same directory overwrite each other (last write wins).

use crate::store::key_value::KeyValueStore;
use crate::{Filter, Join, Order, Query, Result, RowStore, Table};

use vb_core::Row;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

const BACKEND: &str = "local";

#[derive(Clone)]
pub struct LocalRecordStore {
    kv: Arc<dyn KeyValueStore>,
}

impl LocalRecordStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Never fails: a missing, unreadable or corrupted collection reads as
    /// empty so the application can always start.
    pub fn read_collection(&self, name: &str) -> Vec<Row> {
        let Some(text) = self.read_text(name) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Value>>(&text) {
            Ok(values) => values
                .into_iter()
                .filter_map(|value| match value {
                    Value::Object(row) => Some(row),
                    other => {
                        warn!("Skipping non-object entry in collection '{name}': {other}");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                warn!("Collection '{name}' is corrupted, reading as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Replaces the whole collection.
    pub fn write_collection(&self, name: &str, rows: &[Row]) -> Result<()> {
        let text = serde_json::to_string_pretty(rows)?;
        self.kv.set(name, &text)
    }

    /// Typed variant of [`Self::read_collection`] for bookkeeping records
    /// that are stored in their own serde shape.
    pub fn read_typed<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let Some(text) = self.read_text(name) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<T>>(&text) {
            Ok(records) => records,
            Err(e) => {
                warn!("Collection '{name}' is corrupted, reading as empty: {e}");
                Vec::new()
            }
        }
    }

    pub fn write_typed<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let text = serde_json::to_string_pretty(records)?;
        self.kv.set(name, &text)
    }

    fn read_text(&self, name: &str) -> Option<String> {
        match self.kv.get(name) {
            Ok(text) => text.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!("Failed to read collection '{name}', reading as empty: {e}");
                None
            }
        }
    }

    fn attach_joins(&self, rows: &mut [Row], joins: &[Join]) {
        for join in joins {
            let by_id: HashMap<String, Row> = self
                .read_collection(join.table.local_collection())
                .into_iter()
                .filter_map(|row| id_of(&row).map(|id| (id, row)))
                .collect();

            for row in rows.iter_mut() {
                let joined = row
                    .get(join.foreign_key)
                    .and_then(value_as_key)
                    .and_then(|fk| by_id.get(&fk))
                    .cloned()
                    .map(Value::Object)
                    .unwrap_or(Value::Null);
                row.insert(join.key.to_string(), joined);
            }
        }
    }
}

#[async_trait]
impl RowStore for LocalRecordStore {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        let mut rows: Vec<Row> = self
            .read_collection(table.local_collection())
            .into_iter()
            .filter(|row| matches_all(row, &query.filters))
            .collect();

        if let Some(order) = &query.order {
            sort_rows(&mut rows, order);
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        self.attach_joins(&mut rows, &query.joins);
        Ok(rows)
    }

    async fn insert(&self, table: Table, mut row: Row) -> Result<Row> {
        let collection = table.local_collection();
        let now = Value::String(Utc::now().to_rfc3339());

        if row.get("id").and_then(value_as_key).is_none() {
            row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
        if table_has_updated_at(table) {
            row.entry("updated_at").or_insert_with(|| now.clone());
        }
        row.entry("created_at").or_insert(now);

        let mut rows = self.read_collection(collection);
        rows.push(row.clone());
        self.write_collection(collection, &rows)?;

        Ok(row)
    }

    async fn update(&self, table: Table, filters: &[Filter], patch: Row) -> Result<Vec<Row>> {
        let collection = table.local_collection();
        let now = Value::String(Utc::now().to_rfc3339());
        let mut rows = self.read_collection(collection);
        let mut updated = Vec::new();

        for row in rows.iter_mut().filter(|row| matches_all(row, filters)) {
            for (key, value) in &patch {
                if key != "id" {
                    row.insert(key.clone(), value.clone());
                }
            }
            if table_has_updated_at(table) {
                row.insert("updated_at".to_string(), now.clone());
            }
            updated.push(row.clone());
        }

        if !updated.is_empty() {
            self.write_collection(collection, &rows)?;
        }
        Ok(updated)
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> Result<usize> {
        let collection = table.local_collection();
        let mut rows = self.read_collection(collection);
        let before = rows.len();

        rows.retain(|row| !matches_all(row, filters));
        let removed = before - rows.len();

        if removed > 0 {
            self.write_collection(collection, &rows)?;
        }
        Ok(removed)
    }
}

fn table_has_updated_at(table: Table) -> bool {
    matches!(table, Table::Profiles | Table::Pets | Table::Appointments)
}

fn id_of(row: &Row) -> Option<String> {
    row.get("id").and_then(value_as_key)
}

/// Scalar value as the string a filter compares against.
fn value_as_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn matches_all(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| {
        row.get(&filter.column)
            .and_then(value_as_key)
            .is_some_and(|value| value == filter.value)
    })
}

fn sort_rows(rows: &mut [Row], order: &Order) {
    rows.sort_by(|a, b| {
        let ordering = compare_values(a.get(&order.column), b.get(&order.column));
        if order.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Missing and null sort before any value.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

//! Loading card documents from a JSON export of the card collection.
//!
//! Two shapes are accepted: an object keyed by document id, or an array of
//! documents that each carry an `id` field.

use log::{debug, warn};
use serde_json::{Map, Value};
use tarot_core::model::{CardId, RawRecord};

use crate::repository::{InMemoryRepository, Storage, StorageError};

/// Parses an export into `(id, record)` pairs.
///
/// Entries that are not objects, or array entries without a usable id, are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not JSON or the top
/// level is neither an object nor an array.
pub fn parse_export(json: &str) -> Result<Vec<(CardId, RawRecord)>, StorageError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let records = match value {
        Value::Object(map) => from_keyed(map),
        Value::Array(items) => from_list(items),
        other => {
            return Err(StorageError::Serialization(format!(
                "expected object or array at top level, found {}",
                kind(&other)
            )));
        }
    };
    debug!("parsed {} card records from export", records.len());
    Ok(records)
}

fn from_keyed(map: Map<String, Value>) -> Vec<(CardId, RawRecord)> {
    map.into_iter()
        .filter_map(|(id, doc)| {
            if !doc.is_object() {
                warn!("skipping export entry {id}: expected object, found {}", kind(&doc));
                return None;
            }
            Some((CardId::new(id), RawRecord::from_json_value(doc)))
        })
        .collect()
}

fn from_list(items: Vec<Value>) -> Vec<(CardId, RawRecord)> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, mut doc)| {
            if !doc.is_object() {
                warn!("skipping export entry #{idx}: expected object, found {}", kind(&doc));
                return None;
            }
            let fields = doc.as_object_mut()?;
            let id = match fields.remove("id") {
                Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
                Some(Value::Number(n)) => n.to_string(),
                _ => {
                    warn!("skipping export entry #{idx}: missing id");
                    return None;
                }
            };
            Some((CardId::new(id), RawRecord::from_json_value(doc)))
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl InMemoryRepository {
    /// Repository seeded from a JSON export.
    ///
    /// # Errors
    ///
    /// See [`parse_export`].
    pub fn from_json_export(json: &str) -> Result<Self, StorageError> {
        Ok(Self::with_records(parse_export(json)?))
    }
}

impl Storage {
    /// In-memory `Storage` seeded from a JSON export.
    ///
    /// # Errors
    ///
    /// See [`parse_export`].
    pub fn from_json_export(json: &str) -> Result<Self, StorageError> {
        Ok(Self::from_repository(InMemoryRepository::from_json_export(
            json,
        )?))
    }
}

//! # Serialization Boundary
//!
//! `Document` ⇄ the flat JSON config record. Loading is a shallow merge of
//! the record over a defaults document: a top-level key present in the
//! record replaces the default value. `fontSize` is the one nested value
//! that merges key by key.

use crate::document::{Document, MenuLink};
use crate::error::{ModelError, ModelResult};
use crate::lenient::{decode_lenient, to_fields};
use crate::section::Section;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info, warn};

/// Structural copy of `document` as a config record.
/// Section, menu and item order is preserved.
pub fn to_config(document: &Document) -> ModelResult<Value> {
    Ok(serde_json::to_value(document)?)
}

/// Pretty JSON (2-space indent) for the `config.json` artifact
pub fn to_config_string(document: &Document) -> ModelResult<String> {
    Ok(serde_json::to_string_pretty(&to_config(document)?)?)
}

/// Shallow-merge `record` over `defaults` and build a normalized document.
///
/// Merging is per field: a value that does not decode keeps the default
/// instead of failing the load. `fontSize` merges key by key, and each
/// section or menu record decodes on its own.
pub fn from_config(record: &Value, defaults: &Document) -> ModelResult<Document> {
    let Value::Object(overrides) = record else {
        return Err(ModelError::InvalidConfig(format!(
            "config record must be an object, found {}",
            json_kind(record)
        )));
    };

    let mut settings = overrides.clone();
    let sections = settings.remove("sections");
    let menu_items = settings.remove("menuItems");
    let font_size = settings.remove("fontSize");
    debug!(keys = overrides.len(), "merging config record over defaults");

    let mut document: Document = decode_lenient(to_fields(defaults), settings, "setting");
    document.font_size = match font_size {
        Some(Value::Object(sizes)) => {
            decode_lenient(to_fields(&defaults.font_size), sizes, "fontSize")
        }
        Some(other) => {
            warn!(value = %other, "ignoring fontSize that is not an object");
            defaults.font_size
        }
        None => defaults.font_size,
    };
    document.sections = match sections {
        Some(value) => records(value, "sections")
            .filter_map(|fields| match Section::from_record(fields) {
                Ok(section) => Some(section),
                Err(err) => {
                    warn!(error = %err, "dropping unreadable section");
                    None
                }
            })
            .collect(),
        None => defaults.sections.clone(),
    };
    document.menu_items = match menu_items {
        Some(value) => records(value, "menuItems")
            .map(|fields| decode_lenient::<MenuLink>(Map::new(), fields, "menu item"))
            .collect(),
        None => defaults.menu_items.clone(),
    };

    document.normalize();
    Ok(document)
}

/// Object entries of a record list. A non-list reads as empty.
fn records(value: Value, key: &str) -> impl Iterator<Item = Map<String, Value>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            warn!(key, found = json_kind(&other), "expected a list");
            Vec::new()
        }
    };
    entries.into_iter().filter_map(|entry| match entry {
        Value::Object(fields) => Some(fields),
        _ => None,
    })
}

/// Parse config text and merge it over the default document
pub fn parse_config(text: &str) -> ModelResult<Document> {
    let record: Value = serde_json::from_str(text)?;
    from_config(&record, &Document::default())
}

/// Outcome of a best-effort config load
#[derive(Debug, Clone)]
pub struct Loaded {
    pub document: Document,
    /// Set when loading failed and the default document was substituted
    pub diagnostic: Option<String>,
}

/// Read a config file, falling back to the default document on any failure.
pub fn load_document(path: impl AsRef<Path>) -> Loaded {
    let path = path.as_ref();
    match std::fs::read_to_string(path)
        .map_err(ModelError::from)
        .and_then(|text| parse_config(&text))
    {
        Ok(document) => {
            info!(path = %path.display(), sections = document.sections.len(), "loaded config");
            Loaded {
                document,
                diagnostic: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to default document");
            Loaded {
                document: Document::default(),
                diagnostic: Some(format!("Config load error: {}. Using default data.", err)),
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

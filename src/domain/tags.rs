// src/domain/tags.rs
use crate::constants::FLAG_PREFIX;
use serde_json::{Map, Value};

/// Turn every `is<Name>: true` field into the tag `<name>`, in field order.
pub fn derive_tags(fields: &Map<String, Value>) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.as_bool() == Some(true))
        .filter_map(|(key, _)| key.strip_prefix(FLAG_PREFIX))
        .filter(|name| !name.is_empty())
        .map(str::to_lowercase)
        .collect()
}

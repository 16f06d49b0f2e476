//! Portfolio data model.
//!
//! # Responsibility
//! - Define the passive records handed over by the external data source.
//! - Own the static section registry and the loose-value interpretation rules.
//!
//! # Invariants
//! - Records are immutable after loading; nothing in this crate mutates them.
//! - `Project::tags` is never null at the type level.

pub mod media;
pub mod project;
pub mod section;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes optional strings, folding `""` into `None`.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.is_empty()))
}

/// Decodes a sequence entry by entry, dropping entries that do not decode.
///
/// Fails only when the input is not a sequence.
pub(crate) fn each_decodable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(decode_each(Vec::<Value>::deserialize(deserializer)?))
}

/// Like [`each_decodable`], but any non-sequence decodes as empty.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => decode_each(items),
        _ => Vec::new(),
    })
}

fn decode_each<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if decoded.len() < total {
        log::debug!(
            "event=entries_decode module=model status=partial dropped={}",
            total - decoded.len()
        );
    }
    decoded
}

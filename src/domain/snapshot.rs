//! Stored Entries
//!
//! Line items as the remote store returns them. Each entry decodes on its
//! own, so one malformed record does not fail the whole detail payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One stored line item, decoded independently of its neighbours
#[derive(Debug, Clone, PartialEq)]
pub enum StoredEntry<T> {
    Decoded(T),
    /// The record did not decode; `raw` is kept so it can be re-emitted
    Malformed { raw: Value, reason: String },
}

impl<T> StoredEntry<T> {
    pub fn decoded(&self) -> Option<&T> {
        match self {
            StoredEntry::Decoded(value) => Some(value),
            StoredEntry::Malformed { .. } => None,
        }
    }
}

impl<T> From<T> for StoredEntry<T> {
    fn from(value: T) -> Self {
        StoredEntry::Decoded(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for StoredEntry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(match T::deserialize(&raw) {
            Ok(value) => StoredEntry::Decoded(value),
            Err(e) => StoredEntry::Malformed {
                reason: e.to_string(),
                raw,
            },
        })
    }
}

impl<T: Serialize> Serialize for StoredEntry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StoredEntry::Decoded(value) => value.serialize(serializer),
            StoredEntry::Malformed { raw, .. } => raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentLine;
    use serde_json::json;

    #[test]
    fn test_bad_entry_does_not_fail_the_list() {
        let entries: Vec<StoredEntry<ComponentLine>> = serde_json::from_value(json!([
            { "productoId": "P1", "cantidad": 2 },
            { "productoId": "P2", "cantidad": 0 }
        ]))
        .unwrap();

        assert_eq!(entries[0].decoded().map(|l| l.quantity.get()), Some(2));
        assert!(matches!(&entries[1], StoredEntry::Malformed { reason, .. } if reason.contains("0")));
    }

    #[test]
    fn test_malformed_entry_serializes_as_received() {
        let raw = json!({ "productoId": "P2", "cantidad": 0 });
        let entry: StoredEntry<ComponentLine> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }
}

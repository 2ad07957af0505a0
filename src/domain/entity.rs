//! Domain Layer - Identifiers and Entity Trait
//!
//! Typed identifiers for catalog references and stored entities, and the
//! contract every stored entity satisfies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Core trait for entities kept by a remote store
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Stable identifier of a catalog record (a product id)
///
/// Always trimmed and never empty once constructed through [`ReferenceId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceId(String);

impl ReferenceId {
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyReference);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` characters, used for compact labels
    pub fn preview(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl TryFrom<String> for ReferenceId {
    type Error = CatalogError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ReferenceId> for String {
    fn from(id: ReferenceId) -> Self {
        id.0
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a composite entity (a bundle or a product) in the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_id_trims() {
        let id = ReferenceId::parse("  P1 ").unwrap();
        assert_eq!(id.as_str(), "P1");
    }

    #[test]
    fn test_reference_id_rejects_blank() {
        assert!(matches!(ReferenceId::parse("   "), Err(CatalogError::EmptyReference)));
    }

    #[test]
    fn test_reference_id_serde_rejects_blank() {
        assert!(serde_json::from_str::<ReferenceId>("\"\"").is_err());
        let id: ReferenceId = serde_json::from_str("\"P1\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"P1\"");
    }

    #[test]
    fn test_preview_is_char_bounded() {
        let id = ReferenceId::parse("3f2a9c41-77aa-4d10").unwrap();
        assert_eq!(id.preview(8), "3f2a9c41");
        let short = ReferenceId::parse("ñu").unwrap();
        assert_eq!(short.preview(8), "ñu");
    }
}

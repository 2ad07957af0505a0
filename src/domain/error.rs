//! Domain Layer - Errors
//!
//! One error enum per concern. Editor errors are validation refusals: the
//! rejected operation leaves the collection untouched and the session goes on.

use thiserror::Error;

use super::entity::{EntityId, ReferenceId};

/// Common result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Rejections raised by the line-item editor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("item {0} is already in the list")]
    DuplicateItem(ReferenceId),

    #[error("invalid quantity '{0}': expected a positive integer")]
    InvalidQuantity(String),

    #[error("reference {0} is not in the catalog")]
    UnknownReference(String),

    #[error("required field '{0}' is empty")]
    MissingRequiredField(&'static str),

    #[error("position {position} is out of range (list has {len} items)")]
    IndexOutOfRange { position: usize, len: usize },
}

/// Failures while building a reference catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog entry has an empty reference id")]
    EmptyReference,

    #[error("reference {0} appears more than once in the catalog")]
    DuplicateReference(ReferenceId),

    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures reported by a remote store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entity {0} not found")]
    NotFound(EntityId),

    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

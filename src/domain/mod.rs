//! Domain Layer
//!
//! Identifiers, line-item shapes, bundles, the reference catalog and errors.
//! This layer has NO external dependencies (except serde, serde_json and thiserror).

mod bundle;
mod catalog;
mod entity;
mod error;
mod line_item;
mod quantity;
mod snapshot;

pub use bundle::{BundleDetails, BundlePayload};
pub use catalog::{display_name_from_label, CatalogEntry, ReferenceCatalog, SelectOption};
pub use entity::{Entity, EntityId, ReferenceId};
pub use error::{CatalogError, EditorError, EditorResult, StoreError};
pub use line_item::{ApplicationItem, ComponentLine, LineItemKind, QuantityItem};
pub use quantity::Quantity;
pub use snapshot::StoredEntry;

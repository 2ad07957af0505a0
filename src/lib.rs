//! Inventario Editor
//!
//! Session-scoped editing of composite inventory entities: the component
//! list of a product bundle and the vehicle-application lists of bundles and
//! products.
//!
//! Layered architecture:
//! - domain: Identifiers, line items, catalog and errors
//! - editor: Line-item editors and whole-form edit sessions
//! - store: Contract with the remote system of record
//! - config: Display settings

pub mod config;
pub mod domain;
pub mod editor;
pub mod store;

pub use config::EditorConfig;
pub use domain::{
    ApplicationItem, CatalogEntry, CatalogError, ComponentLine, EditorError, EditorResult,
    EntityId, Quantity, QuantityItem, ReferenceCatalog, ReferenceId, StoreError, StoredEntry,
};
pub use editor::{
    ApplicationDraft, ApplicationEditor, BundleSession, ComponentCandidate, ComponentEditor,
    EditorMode, LineItemEditor, ProductSession, SnapshotReport,
};
pub use store::{InMemoryStore, RemoteStore};

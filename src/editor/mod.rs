//! Line-Item Editor
//!
//! Session-scoped owner of a composite entity's line items. One editor holds
//! one shape of item ([`QuantityItem`] or [`ApplicationItem`]); the
//! shape-specific operations live in `components` and `applications`.
//!
//! Every operation is synchronous and either applies fully or returns an
//! [`EditorError`] with the list untouched.

mod applications;
mod components;
pub mod display;
mod session;

use log::{debug, warn};

use crate::domain::{
    ApplicationItem, EditorError, EditorResult, EntityId, LineItemKind, QuantityItem, ReferenceId,
};

pub use applications::ApplicationDraft;
pub use components::ComponentCandidate;
pub use session::{BundleSession, BundleSubmission, ProductSession, SubmitTarget};

/// Whether the session creates a new entity or edits a stored one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(EntityId),
}

impl EditorMode {
    pub fn entity_id(&self) -> Option<&EntityId> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }
}

/// Why a remote snapshot entry was left out of the rebuilt list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DroppedEntry {
    /// The reference id is not in the session's catalog
    UnknownReference(ReferenceId),
    /// The reference id already appeared earlier in the snapshot
    DuplicateReference(ReferenceId),
    /// An application record failed validation
    InvalidApplication { position: usize, reason: EditorError },
    /// The stored record did not decode into a line item
    MalformedEntry { position: usize, reason: String },
}

/// Outcome of rebuilding the list from a remote snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotReport {
    pub loaded: usize,
    pub dropped: Vec<DroppedEntry>,
}

impl SnapshotReport {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LineItemEditor<I: LineItemKind> {
    items: Vec<I>,
    mode: EditorMode,
}

/// Editor for a bundle's components
pub type ComponentEditor = LineItemEditor<QuantityItem>;

/// Editor for vehicle applications
pub type ApplicationEditor = LineItemEditor<ApplicationItem>;

impl<I: LineItemKind> Default for LineItemEditor<I> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mode: EditorMode::Create,
        }
    }
}

impl<I: LineItemKind> LineItemEditor<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the list for a new session.
    ///
    /// A seed that breaks a collection invariant is discarded and the list
    /// starts empty.
    pub fn initialize(&mut self, mode: EditorMode, seed: Option<Vec<I>>) {
        self.mode = mode;
        self.items = match seed {
            None => Vec::new(),
            Some(items) => {
                let count = items.len();
                I::normalize_collection(items).unwrap_or_else(|e| {
                    warn!("Discarding malformed seed of {} items: {}", count, e);
                    Vec::new()
                })
            }
        };
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&I> {
        self.items.get(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the item at `position`; later items shift up by one
    pub fn remove_item(&mut self, position: usize) -> EditorResult<I> {
        self.check_position(position)?;
        let removed = self.items.remove(position);
        debug!("Removed line item at position {}", position);
        Ok(removed)
    }

    /// Minimal form of the list for submission, in display order
    pub fn to_transport_payload(&self) -> Vec<I::Transport> {
        self.items.iter().map(LineItemKind::to_transport).collect()
    }

    fn check_position(&self, position: usize) -> EditorResult<()> {
        if position < self.items.len() {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange {
                position,
                len: self.items.len(),
            })
        }
    }
}

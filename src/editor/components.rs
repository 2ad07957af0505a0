//! Component (quantity item) operations and the derived total.

use std::collections::HashSet;

use log::{debug, warn};

use super::{ComponentEditor, DroppedEntry, SnapshotReport};
use crate::domain::{
    ComponentLine, EditorError, EditorResult, Quantity, QuantityItem, ReferenceCatalog,
    ReferenceId, StoredEntry,
};

/// A component the user picked, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentCandidate<'a> {
    pub reference_id: &'a str,
    pub quantity: i64,
}

impl<'a> ComponentCandidate<'a> {
    pub fn new(reference_id: &'a str, quantity: i64) -> Self {
        Self {
            reference_id,
            quantity,
        }
    }
}

impl ComponentEditor {
    /// Appends a component joined with its catalog record.
    ///
    /// Checked in order: quantity, duplicate, catalog membership.
    /// Returns the new item's position.
    pub fn add_quantity_item(
        &mut self,
        candidate: ComponentCandidate<'_>,
        catalog: &ReferenceCatalog,
    ) -> EditorResult<usize> {
        let quantity = Quantity::try_from(candidate.quantity)?;
        let reference_id = ReferenceId::parse(candidate.reference_id)
            .map_err(|_| EditorError::UnknownReference(candidate.reference_id.to_string()))?;
        if self.contains(&reference_id) {
            return Err(EditorError::DuplicateItem(reference_id));
        }
        let entry = catalog
            .get(&reference_id)
            .ok_or_else(|| EditorError::UnknownReference(reference_id.to_string()))?;

        self.items.push(QuantityItem::from_catalog(entry, quantity));
        debug!("Added component {} x{}", reference_id, quantity);
        Ok(self.items.len() - 1)
    }

    /// Replaces the quantity at `position`; a rejected value keeps the old one
    pub fn update_quantity(&mut self, position: usize, new_quantity: i64) -> EditorResult<()> {
        self.check_position(position)?;
        let quantity = Quantity::try_from(new_quantity)?;
        self.items[position].quantity = quantity;
        debug!("Set quantity at position {} to {}", position, quantity);
        Ok(())
    }

    /// [`ComponentEditor::update_quantity`] for raw form input
    pub fn update_quantity_input(&mut self, position: usize, input: &str) -> EditorResult<()> {
        self.check_position(position)?;
        let quantity: Quantity = input.parse()?;
        self.items[position].quantity = quantity;
        Ok(())
    }

    pub fn contains(&self, reference_id: &ReferenceId) -> bool {
        self.items.iter().any(|item| &item.reference_id == reference_id)
    }

    /// Sum of `unit_cost * quantity` over the current list
    pub fn current_total(&self) -> f64 {
        // fold from +0.0: an empty f64 sum is -0.0
        self.items
            .iter()
            .map(QuantityItem::line_total)
            .fold(0.0, |total, line| total + line)
    }

    pub fn line_total(&self, position: usize) -> Option<f64> {
        self.items.get(position).map(QuantityItem::line_total)
    }

    /// Rebuilds the list from stored `(reference id, quantity)` pairs.
    ///
    /// Entries that did not decode, entries missing from the catalog, and
    /// repeats of an id already loaded are dropped and reported; the rest
    /// keep their stored order.
    pub fn from_remote_snapshot(
        &mut self,
        remote: &[StoredEntry<ComponentLine>],
        catalog: &ReferenceCatalog,
    ) -> SnapshotReport {
        let mut report = SnapshotReport::default();
        let mut seen = HashSet::with_capacity(remote.len());
        let mut items = Vec::with_capacity(remote.len());

        for (position, entry) in remote.iter().enumerate() {
            let line = match entry {
                StoredEntry::Decoded(line) => line,
                StoredEntry::Malformed { reason, .. } => {
                    warn!("Dropping stored component at {}: {}", position, reason);
                    report.dropped.push(DroppedEntry::MalformedEntry {
                        position,
                        reason: reason.clone(),
                    });
                    continue;
                }
            };
            if !seen.insert(line.reference_id.clone()) {
                warn!("Snapshot repeats component {}, keeping the first", line.reference_id);
                report
                    .dropped
                    .push(DroppedEntry::DuplicateReference(line.reference_id.clone()));
                continue;
            }
            match catalog.get(&line.reference_id) {
                Some(entry) => items.push(QuantityItem::from_catalog(entry, line.quantity)),
                None => {
                    warn!(
                        "Component {} is missing from the catalog, dropping it",
                        line.reference_id
                    );
                    report
                        .dropped
                        .push(DroppedEntry::UnknownReference(line.reference_id.clone()));
                }
            }
        }

        report.loaded = items.len();
        self.items = items;
        report
    }
}

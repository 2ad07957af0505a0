//! Vehicle application operations.

use log::{debug, warn};

use super::{ApplicationEditor, DroppedEntry, EditorMode, SnapshotReport};
use crate::domain::{ApplicationItem, EditorResult, StoredEntry};

/// Application fields as entered in the form, before trimming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationDraft<'a> {
    pub vehicle: &'a str,
    pub vehicle_brand: &'a str,
    pub secondary_code: Option<&'a str>,
    pub secondary_name: Option<&'a str>,
}

impl<'a> ApplicationDraft<'a> {
    pub fn new(vehicle: &'a str, vehicle_brand: &'a str) -> Self {
        Self {
            vehicle,
            vehicle_brand,
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, code: &'a str, name: &'a str) -> Self {
        self.secondary_code = Some(code);
        self.secondary_name = Some(name);
        self
    }
}

impl ApplicationEditor {
    /// Appends a trimmed application; vehicle and brand are required.
    /// Returns the new item's position.
    pub fn add_application_item(&mut self, draft: ApplicationDraft<'_>) -> EditorResult<usize> {
        let item = ApplicationItem::new(
            draft.vehicle,
            draft.vehicle_brand,
            draft.secondary_code,
            draft.secondary_name,
        )?;
        debug!("Added application {} / {}", item.vehicle_brand, item.vehicle);
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    pub fn remove_application_item(&mut self, position: usize) -> EditorResult<ApplicationItem> {
        self.remove_item(position)
    }

    /// Rebuilds the list from stored application records, dropping any that
    /// did not decode or fail validation
    pub fn from_remote_snapshot(
        &mut self,
        remote: &[StoredEntry<ApplicationItem>],
    ) -> SnapshotReport {
        let mut report = SnapshotReport::default();
        let mut items = Vec::with_capacity(remote.len());

        for (position, entry) in remote.iter().enumerate() {
            let app = match entry {
                StoredEntry::Decoded(app) => app,
                StoredEntry::Malformed { reason, .. } => {
                    warn!("Dropping undecodable application at {}: {}", position, reason);
                    report.dropped.push(DroppedEntry::MalformedEntry {
                        position,
                        reason: reason.clone(),
                    });
                    continue;
                }
            };
            match app.normalized() {
                Ok(item) => items.push(item),
                Err(reason) => {
                    warn!("Dropping stored application at {}: {}", position, reason);
                    report
                        .dropped
                        .push(DroppedEntry::InvalidApplication { position, reason });
                }
            }
        }

        report.loaded = items.len();
        self.items = items;
        report
    }

    /// Seeds from an untyped JSON list (as embedded in a details response).
    ///
    /// Anything that does not decode into valid applications leaves the
    /// editor empty.
    pub fn initialize_from_json(&mut self, mode: EditorMode, seed: Option<&serde_json::Value>) {
        let items = match seed {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => match serde_json::from_value::<Vec<ApplicationItem>>(value.clone()) {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!("Application seed is not a list of applications: {}", e);
                    Some(Vec::new())
                }
            },
        };
        self.initialize(mode, items);
    }
}

//! Bundle Entity
//!
//! A product bundle ("juego") as the remote store returns and accepts it.
//! Only the transport forms of its line items travel over the wire.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};
use super::line_item::{ApplicationItem, ComponentLine};
use super::snapshot::StoredEntry;

/// Detail payload returned when a bundle is opened for editing
///
/// Line items decode one by one; a bad record is kept as
/// [`StoredEntry::Malformed`] and left for the editor to drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleDetails {
    pub id: EntityId,
    #[serde(rename = "codigo", default)]
    pub code: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "aplicaciones", default)]
    pub applications: Vec<StoredEntry<ApplicationItem>>,
    #[serde(rename = "componentes", default)]
    pub components: Vec<StoredEntry<ComponentLine>>,
    /// Unix seconds of the last accepted write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Entity for BundleDetails {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Body submitted when a bundle form is saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlePayload {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "aplicaciones")]
    pub applications: Vec<ApplicationItem>,
    #[serde(rename = "componentes")]
    pub components: Vec<ComponentLine>,
}

impl BundlePayload {
    /// Stored form of this payload under `id`
    pub fn into_details(self, id: EntityId, updated_at: i64) -> BundleDetails {
        BundleDetails {
            id,
            code: self.code,
            name: self.name,
            applications: self.applications.into_iter().map(StoredEntry::from).collect(),
            components: self.components.into_iter().map(StoredEntry::from).collect(),
            updated_at: Some(updated_at),
        }
    }
}

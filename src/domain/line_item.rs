//! Line Items
//!
//! The two shapes a composite entity's list can hold: quantity-bearing
//! components joined from the catalog, and vehicle-application records.
//! An editor holds exactly one shape, chosen through [`LineItemKind`].

use std::collections::HashSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;
use super::entity::ReferenceId;
use super::error::{EditorError, EditorResult};
use super::quantity::Quantity;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::QuantityItem {}
    impl Sealed for super::ApplicationItem {}
}

/// A line-item shape an editor can own
///
/// Sealed: the set of shapes is closed.
pub trait LineItemKind: Clone + fmt::Debug + Send + sealed::Sealed {
    /// Minimal form sent to and received from the remote store
    type Transport: Serialize + DeserializeOwned + Clone + fmt::Debug;

    fn to_transport(&self) -> Self::Transport;

    /// Checks the collection invariants for a whole seed list, returning
    /// the list in canonical form
    fn normalize_collection(items: Vec<Self>) -> EditorResult<Vec<Self>>;
}

/// A component of a bundle, with the catalog data needed for display
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityItem {
    pub reference_id: ReferenceId,
    pub display_name: String,
    pub available_stock: i64,
    pub unit_cost: f64,
    pub quantity: Quantity,
}

impl QuantityItem {
    pub fn from_catalog(entry: &CatalogEntry, quantity: Quantity) -> Self {
        Self {
            reference_id: entry.reference_id.clone(),
            display_name: entry.display_name.clone(),
            available_stock: entry.available_stock,
            unit_cost: entry.unit_cost,
            quantity,
        }
    }

    /// `unit_cost * quantity`
    pub fn line_total(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity.get())
    }
}

/// Transport form of a [`QuantityItem`]: reference id and quantity only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentLine {
    #[serde(rename = "productoId")]
    pub reference_id: ReferenceId,
    #[serde(rename = "cantidad")]
    pub quantity: Quantity,
}

impl LineItemKind for QuantityItem {
    type Transport = ComponentLine;

    fn to_transport(&self) -> ComponentLine {
        ComponentLine {
            reference_id: self.reference_id.clone(),
            quantity: self.quantity,
        }
    }

    fn normalize_collection(items: Vec<Self>) -> EditorResult<Vec<Self>> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.reference_id) {
                return Err(EditorError::DuplicateItem(item.reference_id.clone()));
            }
        }
        Ok(items)
    }
}

/// A vehicle a part or bundle applies to
///
/// The secondary code/name (a bundle code and name on the product form) are
/// carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationItem {
    #[serde(rename = "vehiculo")]
    pub vehicle: String,
    #[serde(rename = "marcaVehiculo", alias = "marca")]
    pub vehicle_brand: String,
    #[serde(rename = "codigoJuego", default, skip_serializing_if = "Option::is_none")]
    pub secondary_code: Option<String>,
    #[serde(rename = "nombreJuego", default, skip_serializing_if = "Option::is_none")]
    pub secondary_name: Option<String>,
}

impl ApplicationItem {
    /// Builds a trimmed record; blank optional fields become `None`
    pub fn new(
        vehicle: &str,
        vehicle_brand: &str,
        secondary_code: Option<&str>,
        secondary_name: Option<&str>,
    ) -> EditorResult<Self> {
        let vehicle = vehicle.trim();
        if vehicle.is_empty() {
            return Err(EditorError::MissingRequiredField("vehicle"));
        }
        let vehicle_brand = vehicle_brand.trim();
        if vehicle_brand.is_empty() {
            return Err(EditorError::MissingRequiredField("vehicleBrand"));
        }
        Ok(Self {
            vehicle: vehicle.to_string(),
            vehicle_brand: vehicle_brand.to_string(),
            secondary_code: non_blank(secondary_code),
            secondary_name: non_blank(secondary_name),
        })
    }

    /// Re-runs [`ApplicationItem::new`] over an already-built record
    pub fn normalized(&self) -> EditorResult<Self> {
        Self::new(
            &self.vehicle,
            &self.vehicle_brand,
            self.secondary_code.as_deref(),
            self.secondary_name.as_deref(),
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl LineItemKind for ApplicationItem {
    type Transport = ApplicationItem;

    fn to_transport(&self) -> ApplicationItem {
        self.clone()
    }

    fn normalize_collection(items: Vec<Self>) -> EditorResult<Vec<Self>> {
        items.iter().map(ApplicationItem::normalized).collect()
    }
}

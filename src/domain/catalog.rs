//! Reference Catalog
//!
//! Read-only lookup of product records keyed by [`ReferenceId`], supplied
//! once when an edit session opens. Ids are validated here, so lookups never
//! deal with blank or ambiguous keys.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, ReferenceId};
use super::error::CatalogError;

/// Full record data for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub reference_id: ReferenceId,
    pub display_name: String,
    pub available_stock: i64,
    pub unit_cost: f64,
}

impl CatalogEntry {
    pub fn new(
        reference_id: ReferenceId,
        display_name: impl Into<String>,
        available_stock: i64,
        unit_cost: f64,
    ) -> Self {
        Self {
            reference_id,
            display_name: display_name.into(),
            available_stock,
            unit_cost,
        }
    }
}

impl Entity for CatalogEntry {
    type Id = ReferenceId;

    fn id(&self) -> Self::Id {
        self.reference_id.clone()
    }
}

/// Product option as embedded in the bundle list page for the product picker
///
/// `text` reads `"Name (CODE)"`.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl TryFrom<SelectOption> for CatalogEntry {
    type Error = CatalogError;

    fn try_from(option: SelectOption) -> Result<Self, Self::Error> {
        Ok(CatalogEntry {
            reference_id: ReferenceId::parse(&option.id)?,
            display_name: display_name_from_label(&option.text).to_string(),
            available_stock: option.stock.unwrap_or(0),
            unit_cost: option.cost.unwrap_or(0.0),
        })
    }
}

/// Strips the trailing `" (CODE)"` from a picker label
pub fn display_name_from_label(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label)
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    entries: HashMap<ReferenceId, CatalogEntry>,
}

impl ReferenceCatalog {
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for entry in entries {
            let id = entry.id();
            if map.insert(id.clone(), entry).is_some() {
                return Err(CatalogError::DuplicateReference(id));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn from_select_options(options: Vec<SelectOption>) -> Result<Self, CatalogError> {
        let entries = options
            .into_iter()
            .map(CatalogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Parses the picker's JSON array
    pub fn from_select_options_json(json: &str) -> Result<Self, CatalogError> {
        let options: Vec<SelectOption> = serde_json::from_str(json)?;
        Self::from_select_options(options)
    }

    pub fn get(&self, id: &ReferenceId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Lookup by raw id, as typed or picked in a form
    pub fn lookup(&self, raw: &str) -> Option<&CatalogEntry> {
        ReferenceId::parse(raw).ok().and_then(|id| self.entries.get(&id))
    }

    pub fn contains(&self, id: &ReferenceId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Edit Sessions
//!
//! Whole-form state for the bundle and product modals: header fields plus
//! the line-item editors, built fresh each time a modal opens and dropped
//! when it closes.

use serde::Serialize;

use super::{ApplicationEditor, ComponentEditor, EditorMode, SnapshotReport};
use crate::domain::{
    BundleDetails, BundlePayload, EditorError, EditorResult, EntityId, ReferenceCatalog,
};

/// Where a save goes: a new entity or an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(EntityId),
}

impl SubmitTarget {
    fn from_mode(mode: &EditorMode) -> Self {
        match mode {
            EditorMode::Create => SubmitTarget::Create,
            EditorMode::Edit(id) => SubmitTarget::Update(id.clone()),
        }
    }

    pub fn bundle_path(&self) -> String {
        match self {
            SubmitTarget::Create => "/products/juegos/add".to_string(),
            SubmitTarget::Update(id) => format!("/products/juegos/edit/{}", id),
        }
    }

    pub fn product_path(&self) -> String {
        match self {
            SubmitTarget::Create => "/products/add/".to_string(),
            SubmitTarget::Update(id) => format!("/products/edit/{}/", id),
        }
    }
}

/// A validated bundle save
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSubmission {
    pub target: SubmitTarget,
    pub payload: BundlePayload,
}

impl BundleSubmission {
    pub fn path(&self) -> String {
        self.target.bundle_path()
    }
}

/// State of the bundle ("juego") modal for one open/close cycle
#[derive(Debug, Clone, Default)]
pub struct BundleSession {
    pub code: String,
    pub name: String,
    mode: EditorMode,
    applications: ApplicationEditor,
    components: ComponentEditor,
}

impl BundleSession {
    pub fn open_create() -> Self {
        Self::default()
    }

    /// Seeds the form from a fetched bundle.
    ///
    /// Components are re-joined against `catalog`; the report lists those
    /// that could not be.
    pub fn open_edit(details: &BundleDetails, catalog: &ReferenceCatalog) -> (Self, SnapshotReport) {
        let mode = EditorMode::Edit(details.id.clone());
        let mut session = Self {
            code: details.code.clone(),
            name: details.name.clone(),
            mode: mode.clone(),
            ..Self::default()
        };

        session.applications.initialize(mode.clone(), None);
        let app_report = session.applications.from_remote_snapshot(&details.applications);
        session.components.initialize(mode, None);
        let mut report = session.components.from_remote_snapshot(&details.components, catalog);

        report.dropped.extend(app_report.dropped);
        (session, report)
    }

    /// Decides the submit target; re-initializing an inner editor does not
    /// change it
    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn applications(&self) -> &ApplicationEditor {
        &self.applications
    }

    pub fn applications_mut(&mut self) -> &mut ApplicationEditor {
        &mut self.applications
    }

    pub fn components(&self) -> &ComponentEditor {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentEditor {
        &mut self.components
    }

    pub fn estimated_cost(&self) -> f64 {
        self.components.current_total()
    }

    /// Builds the save request; code and name must not be blank
    pub fn submission(&self) -> EditorResult<BundleSubmission> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(EditorError::MissingRequiredField("code"));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EditorError::MissingRequiredField("name"));
        }

        Ok(BundleSubmission {
            target: SubmitTarget::from_mode(self.mode()),
            payload: BundlePayload {
                code: code.to_string(),
                name: name.to_string(),
                applications: self.applications.to_transport_payload(),
                components: self.components.to_transport_payload(),
            },
        })
    }
}

/// Application row as the product form posts it
#[derive(Serialize)]
struct ProductApplicationRow<'a> {
    vehiculo: &'a str,
    marca: &'a str,
    #[serde(rename = "codigoJuego")]
    codigo_juego: &'a str,
    #[serde(rename = "nombreJuego")]
    nombre_juego: &'a str,
}

/// Application list of the product modal for one open/close cycle
#[derive(Debug, Clone, Default)]
pub struct ProductSession {
    applications: ApplicationEditor,
}

impl ProductSession {
    pub fn open_create() -> Self {
        Self::default()
    }

    /// Seeds from the `aplicaciones` value of a product details response
    pub fn open_edit(id: EntityId, applications: Option<&serde_json::Value>) -> Self {
        let mut session = Self::default();
        session
            .applications
            .initialize_from_json(EditorMode::Edit(id), applications);
        session
    }

    pub fn mode(&self) -> &EditorMode {
        self.applications.mode()
    }

    pub fn target(&self) -> SubmitTarget {
        SubmitTarget::from_mode(self.mode())
    }

    pub fn applications(&self) -> &ApplicationEditor {
        &self.applications
    }

    pub fn applications_mut(&mut self) -> &mut ApplicationEditor {
        &mut self.applications
    }

    /// JSON text for the `aplicaciones_data` form field
    pub fn applications_data(&self) -> Result<String, serde_json::Error> {
        let rows: Vec<ProductApplicationRow<'_>> = self
            .applications
            .items()
            .iter()
            .map(|app| ProductApplicationRow {
                vehiculo: &app.vehicle,
                marca: &app.vehicle_brand,
                codigo_juego: app.secondary_code.as_deref().unwrap_or_default(),
                nombre_juego: app.secondary_name.as_deref().unwrap_or_default(),
            })
            .collect();
        serde_json::to_string(&rows)
    }
}

//! Store Layer - Core Traits
//!
//! The remote store is the system of record for bundles. Editors never talk
//! to it; sessions hand their submissions to whatever implements this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BundleDetails, EntityId, StoreError};
use crate::editor::BundleSubmission;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Acknowledgement of an accepted write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Id of the entity the write created, when it created one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
}

impl StoreResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    pub fn created(id: EntityId, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id),
        }
    }

    /// Decodes a `{success, message}` body; `success: false` becomes
    /// [`StoreError::Rejected`]
    pub fn from_json(body: &str) -> StoreResult<Self> {
        let response: StoreResponse = serde_json::from_str(body)?;
        if response.success {
            Ok(response)
        } else if response.message.is_empty() {
            Err(StoreError::Rejected("the store refused the request".to_string()))
        } else {
            Err(StoreError::Rejected(response.message))
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decodes a details body, which is either the bundle or `{"error": ...}`
pub fn details_from_json(body: &str) -> StoreResult<BundleDetails> {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return Err(StoreError::Rejected(error));
    }
    Ok(serde_json::from_str(body)?)
}

/// Remote system of record for bundles
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Detail payload for an edit session
    async fn fetch_details(&self, id: &EntityId) -> StoreResult<BundleDetails>;

    /// Create or update, depending on the submission target
    async fn submit(&self, submission: &BundleSubmission) -> StoreResult<StoreResponse>;

    async fn delete(&self, id: &EntityId) -> StoreResult<StoreResponse>;

    /// Copies a bundle under a new id
    async fn duplicate(&self, id: &EntityId) -> StoreResult<StoreResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success() {
        let response = StoreResponse::from_json(r#"{"success": true, "message": "Guardado"}"#).unwrap();
        assert_eq!(response, StoreResponse::ok("Guardado"));
    }

    #[test]
    fn test_response_failure_becomes_rejected() {
        let err = StoreResponse::from_json(r#"{"success": false, "message": "Código duplicado"}"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected(msg) if msg == "Código duplicado"));

        let err = StoreResponse::from_json(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }

    #[test]
    fn test_details_error_body() {
        let err = details_from_json(r#"{"error": "Juego no encontrado"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Rejected(msg) if msg == "Juego no encontrado"));
    }

    #[test]
    fn test_details_body() {
        let details = details_from_json(
            r#"{"id": "J1", "codigo": "K-1", "nombre": "Kit",
                "componentes": [{"productoId": "P1", "cantidad": 2}]}"#,
        )
        .unwrap();
        assert_eq!(details.components.len(), 1);
        assert!(matches!(
            details_from_json("[]"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_details_body_with_bad_entries_still_decodes() {
        let details = details_from_json(
            r#"{"id": "J1", "codigo": "K-1", "nombre": "Kit",
                "aplicaciones": [{"vehiculo": "Hilux"}],
                "componentes": [{"productoId": "P1", "cantidad": 2},
                                {"productoId": "P2", "cantidad": 0}]}"#,
        )
        .unwrap();
        assert_eq!(details.components.len(), 2);
        assert!(details.components[0].decoded().is_some());
        assert!(details.components[1].decoded().is_none());
        assert!(details.applications[0].decoded().is_none());
    }
}

//! In-Memory Store
//!
//! A [`RemoteStore`] backed by a map, for tests and offline demos. It applies
//! the same acceptance rules the bundle endpoints do: codes are unique and
//! updates need an existing bundle.

use std::collections::HashMap;

use async_trait::async_trait;
use log::info;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::traits::{RemoteStore, StoreResponse, StoreResult};
use crate::domain::{BundleDetails, BundlePayload, Entity, EntityId, StoreError};
use crate::editor::{BundleSubmission, SubmitTarget};

const COPY_SUFFIX: &str = "-COPIA";

#[derive(Debug, Default)]
pub struct InMemoryStore {
    bundles: Mutex<HashMap<EntityId, BundleDetails>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `bundles`
    pub fn with_bundles(bundles: impl IntoIterator<Item = BundleDetails>) -> Self {
        let map = bundles.into_iter().map(|b| (b.id(), b)).collect();
        Self {
            bundles: Mutex::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.bundles.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bundles.lock().await.is_empty()
    }

    fn ensure_unique_code(
        bundles: &HashMap<EntityId, BundleDetails>,
        code: &str,
        except: Option<&EntityId>,
    ) -> StoreResult<()> {
        let taken = bundles
            .values()
            .any(|b| b.code == code && Some(&b.id) != except);
        if taken {
            return Err(StoreError::Rejected(format!("code {} is already in use", code)));
        }
        Ok(())
    }

    fn insert_new(
        bundles: &mut HashMap<EntityId, BundleDetails>,
        payload: BundlePayload,
    ) -> EntityId {
        let id = EntityId::new(Uuid::new_v4().to_string());
        let details = payload.into_details(id.clone(), chrono::Utc::now().timestamp());
        bundles.insert(id.clone(), details);
        id
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn fetch_details(&self, id: &EntityId) -> StoreResult<BundleDetails> {
        let bundles = self.bundles.lock().await;
        bundles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn submit(&self, submission: &BundleSubmission) -> StoreResult<StoreResponse> {
        let mut bundles = self.bundles.lock().await;
        let payload = submission.payload.clone();

        match &submission.target {
            SubmitTarget::Create => {
                Self::ensure_unique_code(&bundles, &payload.code, None)?;
                let id = Self::insert_new(&mut bundles, payload);
                info!("Created bundle {}", id);
                Ok(StoreResponse::created(id, "Juego creado"))
            }
            SubmitTarget::Update(id) => {
                if !bundles.contains_key(id) {
                    return Err(StoreError::NotFound(id.clone()));
                }
                Self::ensure_unique_code(&bundles, &payload.code, Some(id))?;
                let details = payload.into_details(id.clone(), chrono::Utc::now().timestamp());
                bundles.insert(id.clone(), details);
                info!("Updated bundle {}", id);
                Ok(StoreResponse::ok("Juego actualizado"))
            }
        }
    }

    async fn delete(&self, id: &EntityId) -> StoreResult<StoreResponse> {
        let mut bundles = self.bundles.lock().await;
        bundles
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        info!("Deleted bundle {}", id);
        Ok(StoreResponse::ok("Juego eliminado"))
    }

    /// Copies under a new id. The `-COPIA` / ` (copia)` naming is this
    /// store's own convention.
    async fn duplicate(&self, id: &EntityId) -> StoreResult<StoreResponse> {
        let mut bundles = self.bundles.lock().await;
        let source = bundles
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let code = format!("{}{}", source.code, COPY_SUFFIX);
        Self::ensure_unique_code(&bundles, &code, None)?;
        let new_id = EntityId::new(Uuid::new_v4().to_string());
        let copy = BundleDetails {
            id: new_id.clone(),
            code,
            name: format!("{} (copia)", source.name),
            updated_at: Some(chrono::Utc::now().timestamp()),
            ..source
        };
        bundles.insert(new_id.clone(), copy);
        info!("Duplicated bundle {} as {}", id, new_id);
        Ok(StoreResponse::created(new_id, "Juego clonado"))
    }
}

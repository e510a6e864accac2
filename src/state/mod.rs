//! Shared application state holding the installed storage backend.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{dao::storage::ClubStore, error::ServiceError};

/// Cheaply cloneable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Central application state owning the storage handle.
///
/// The store is an injected dependency with an explicit lifecycle: the
/// supervisor installs it once connected and clears it when the backend goes
/// away, rather than the handlers reaching for an ambient global client.
/// Degraded mode is exactly the absence of an installed store.
pub struct AppState {
    store: RwLock<Option<Arc<dyn ClubStore>>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a storage backend is installed.
    pub fn new() -> SharedState {
        Arc::new(Self {
            store: RwLock::new(None),
        })
    }

    /// Obtain a handle to the current store, if one is installed.
    pub async fn store(&self) -> Option<Arc<dyn ClubStore>> {
        let guard = self.store.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the current store or fail with a degraded-mode error.
    pub async fn require_store(&self) -> Result<Arc<dyn ClubStore>, ServiceError> {
        self.store().await.ok_or(ServiceError::Degraded)
    }

    /// Install a storage backend and leave degraded mode.
    pub async fn install_store(&self, store: Arc<dyn ClubStore>) {
        let mut guard = self.store.write().await;
        *guard = Some(store);
    }

    /// Remove the current storage backend and enter degraded mode.
    pub async fn clear_store(&self) {
        let mut guard = self.store.write().await;
        guard.take();
    }

    /// Current degraded flag.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.store.read().await;
        guard.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::memory::MemoryClubStore;

    #[tokio::test]
    async fn degraded_mode_tracks_store_presence() {
        let state = AppState::new();
        assert!(state.is_degraded().await);
        assert!(matches!(
            state.require_store().await,
            Err(ServiceError::Degraded)
        ));

        state.install_store(Arc::new(MemoryClubStore::new())).await;
        assert!(!state.is_degraded().await);
        assert!(state.require_store().await.is_ok());

        state.clear_store().await;
        assert!(state.is_degraded().await);
        assert!(matches!(
            state.require_store().await,
            Err(ServiceError::Degraded)
        ));
    }
}

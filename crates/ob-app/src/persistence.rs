//! Persistence bridge
//!
//! Mirrors the session and the onboarding progress into the key-value store
//! and restores them at startup. Storage failures never fail an action: a
//! broken read rehydrates the default, a broken write is logged and dropped.

use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use ob_core::auth::Session;
use ob_core::onboarding::OnboardingProgress;
use ob_core::ports::KeyValueStorePort;
use ob_core::store::{AppState, PersistEffect};

/// Storage key of the session record.
pub const AUTH_STATE_KEY: &str = "authState";
/// Storage key of the onboarding progress record.
pub const ONBOARDING_STATE_KEY: &str = "onboardingDataState";

pub struct PersistenceBridge {
    storage: Arc<dyn KeyValueStorePort>,
}

impl PersistenceBridge {
    pub fn new(storage: Arc<dyn KeyValueStorePort>) -> Self {
        Self { storage }
    }

    /// Restores the persisted state, falling back to defaults per key.
    pub async fn rehydrate(&self) -> AppState {
        let session: Session = self.load_or_default(AUTH_STATE_KEY).await;
        let progress: OnboardingProgress = self.load_or_default(ONBOARDING_STATE_KEY).await;
        AppState::new(session, progress)
    }

    async fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.storage.load(key).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(restored) => restored,
                Err(err) => {
                    warn!(key, error = %err, "stored state is unreadable, using default");
                    T::default()
                }
            },
            Ok(None) => {
                debug!(key, "no stored state, using default");
                T::default()
            }
            Err(err) => {
                warn!(key, error = %err, "failed to load stored state, using default");
                T::default()
            }
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("failed to serialize state for key {key}"))?;
        self.storage
            .save(key, &value)
            .await
            .with_context(|| format!("failed to persist state for key {key}"))
    }

    pub async fn save_session(&self, session: &Session) -> anyhow::Result<()> {
        self.save(AUTH_STATE_KEY, session).await
    }

    pub async fn save_progress(&self, progress: &OnboardingProgress) -> anyhow::Result<()> {
        self.save(ONBOARDING_STATE_KEY, progress).await
    }

    /// Carries out the persistence effects of one dispatch.
    pub async fn apply(&self, state: &AppState, effects: &[PersistEffect]) {
        for effect in effects {
            let result = match effect {
                PersistEffect::PersistSession => self.save_session(&state.session).await,
                PersistEffect::PersistProgress => self.save_progress(&state.progress).await,
            };
            if let Err(err) = result {
                warn!(?effect, error = %format!("{err:#}"), "state write failed, keeping in-memory state");
            }
        }
    }
}

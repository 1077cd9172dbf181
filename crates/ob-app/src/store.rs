//! Runtime state container.
//!
//! Holds the current [`AppState`] and applies [`StateAction`]s through the
//! pure reducer, then runs the persistence effects it produced.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info_span, Instrument};

use ob_core::auth::Session;
use ob_core::onboarding::OnboardingProgress;
use ob_core::store::{AppState, StateAction, StateReducer};

use crate::persistence::PersistenceBridge;

/// Shared application store.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole reduce + persist cycle.
/// - `state`: held only to read or swap the state record.
#[derive(Clone)]
pub struct AppStore {
    state: Arc<Mutex<AppState>>,
    dispatch_lock: Arc<Mutex<()>>,
    persistence: Arc<PersistenceBridge>,
}

impl AppStore {
    pub fn new(initial_state: AppState, persistence: Arc<PersistenceBridge>) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
            persistence,
        }
    }

    /// Builds a store from whatever the persistence bridge can restore.
    pub async fn rehydrate(persistence: Arc<PersistenceBridge>) -> Self {
        let restored = persistence.rehydrate().await;
        let store = Self::new(AppState::default(), persistence);
        store
            .dispatch(StateAction::InitializeAuth(restored.session))
            .await;
        store
            .dispatch(StateAction::HydrateProgress(restored.progress))
            .await;
        store
    }

    /// Snapshot of the current state. Does not wait for a running dispatch.
    pub async fn get_state(&self) -> AppState {
        self.state.lock().await.clone()
    }

    pub async fn session(&self) -> Session {
        self.state.lock().await.session.clone()
    }

    pub async fn progress(&self) -> OnboardingProgress {
        self.state.lock().await.progress.clone()
    }

    /// Applies one action and returns the resulting state.
    pub async fn dispatch(&self, action: StateAction) -> AppState {
        let _dispatch_guard = self.dispatch_lock.lock().await;
        self.apply(action).await
    }

    /// Applies `action` only if `check` accepts the current state.
    ///
    /// The check and the write happen under one dispatch lock, so no other
    /// dispatch can change the state in between.
    pub async fn dispatch_if<E, C>(&self, action: StateAction, check: C) -> Result<AppState, E>
    where
        C: FnOnce(&AppState) -> Result<(), E>,
    {
        let _dispatch_guard = self.dispatch_lock.lock().await;
        check(&self.get_state().await)?;
        Ok(self.apply(action).await)
    }

    // Caller holds `dispatch_lock`.
    async fn apply(&self, action: StateAction) -> AppState {
        let span = info_span!("usecase.store.dispatch", action = action.name());
        async {
            let current = self.get_state().await;
            let (next, effects) = StateReducer::reduce(current, action);
            *self.state.lock().await = next.clone();
            debug!(?effects, "state replaced");
            self.persistence.apply(&next, &effects).await;
            next
        }
        .instrument(span)
        .await
    }
}

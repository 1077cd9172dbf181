use ob_core::routing::{resolve, Resolution, RoutingError, HOME_PATH};
use ob_core::store::StateAction;
use tracing::{info, info_span, Instrument};

use crate::store::AppStore;

/// Use case for ending the session. Onboarding progress is kept.
pub struct Logout {
    store: AppStore,
}

impl Logout {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Resolution, RoutingError> {
        let span = info_span!("usecase.auth.logout");
        async {
            let state = self.store.dispatch(StateAction::Logout).await;
            info!("session cleared");
            resolve(&state.session, &state.progress, HOME_PATH)
        }
        .instrument(span)
        .await
    }
}

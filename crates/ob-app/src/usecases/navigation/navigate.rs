use ob_core::routing::{resolve, Resolution, RoutingError};
use tracing::{debug, info_span, Instrument};

use crate::store::AppStore;

/// Use case for resolving a requested path against the current state.
///
/// Navigation never changes state; it only reports where the guards send the
/// user and which view ends up rendered.
pub struct NavigateTo {
    store: AppStore,
}

impl NavigateTo {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, path: &str) -> Result<Resolution, RoutingError> {
        let span = info_span!("usecase.navigation.navigate", path = %path);
        async {
            let state = self.store.get_state().await;
            let resolution = resolve(&state.session, &state.progress, path)?;
            if resolution.was_redirected() {
                debug!(redirects = ?resolution.redirects, location = %resolution.location, "redirected");
            }
            Ok(resolution)
        }
        .instrument(span)
        .await
    }
}

//! # Application Runtime / 应用运行时
//!
//! Owns the wired dependencies and the rehydrated store. Commands reach the
//! use cases through [`AppRuntime::usecases`].

use std::sync::Arc;

use ob_app::usecases::{
    CompleteOnboarding, GetOnboardingState, Login, Logout, NavigateTo, SaveDraft, SubmitStep,
};
use ob_app::{AppDeps, AppStore, PersistenceBridge};
use ob_core::auth::CredentialValidator;

pub struct AppRuntime {
    pub deps: AppDeps,
    store: AppStore,
}

impl AppRuntime {
    /// Rehydrates the persisted state and builds the runtime.
    pub async fn new(deps: AppDeps) -> Self {
        let persistence = Arc::new(PersistenceBridge::new(deps.storage.clone()));
        let store = AppStore::rehydrate(persistence).await;
        Self { deps, store }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor
/// 用例访问器
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn navigate(&self) -> NavigateTo {
        NavigateTo::new(self.runtime.store.clone())
    }

    pub fn login(&self) -> Login {
        Login::new(
            self.runtime.store.clone(),
            CredentialValidator::new(self.runtime.deps.credentials.clone()),
        )
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.runtime.store.clone())
    }

    pub fn get_onboarding_state(&self) -> GetOnboardingState {
        GetOnboardingState::new(self.runtime.store.clone())
    }

    pub fn submit_step(&self) -> SubmitStep {
        SubmitStep::from_ports(self.runtime.store.clone(), self.runtime.deps.clock.clone())
    }

    pub fn save_draft(&self) -> SaveDraft {
        SaveDraft::new(self.runtime.store.clone())
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.runtime.store.clone())
    }
}

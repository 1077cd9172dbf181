//! Onboarding wizard application layer
//!
//! Use cases, the runtime state container and the persistence bridge. Every
//! state change goes through [`store::AppStore::dispatch`].

pub mod deps;
pub mod persistence;
pub mod store;
pub mod usecases;

pub use deps::AppDeps;
pub use persistence::PersistenceBridge;
pub use store::AppStore;

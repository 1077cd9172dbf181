//! Application state container.
//!
//! State changes are expressed as [`StateAction`]s and applied by the pure
//! [`StateReducer`]. Persistence is requested through [`PersistEffect`]s and
//! carried out by the application layer.

mod action;
mod reducer;
mod state;

pub use action::{PersistEffect, StateAction};
pub use reducer::StateReducer;
pub use state::AppState;

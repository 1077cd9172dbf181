//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations. Use cases only see these traits, so storage and time can
//! be swapped in tests and at wiring time.

mod clock;
pub mod storage;

pub use clock::*;
pub use storage::KeyValueStorePort;

pub mod storage;
pub mod time;

pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
pub use time::SystemClock;

//! Bounded, persisted analysis history.
//!
//! One snapshot file holds the whole serialized sequence; every mutation is a
//! full read-modify-write through the [`SnapshotStorage`] port.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, SnapshotStorage};
pub use store::{HistoryStore, MAX_HISTORY_ITEMS};

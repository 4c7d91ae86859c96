pub mod analysis;

pub use analysis::{DeviceType, EntryMeta, RepairAnalysis, StoredAnalysis};

//! Repair Advisor - AI-assisted device repair diagnostics
//!
//! This library takes a user-described problem with a phone or tablet and
//! asks a hosted generation model for a repair analysis: the likely fault, a
//! whole-CZK cost estimate, and the pros and cons of repairing. It supports:
//!
//! - Requesting and validating structured repair analyses
//! - Resolving a model number (e.g. `SM-G998B`) to a full device name
//! - A bounded, persisted, most-recent-first history of past analyses
//!
//! The generation backend is behind the [`gemini::GenerateText`] trait, and
//! history persistence behind [`history::SnapshotStorage`], so both can be
//! faked in tests.
//!
//! # Example
//!
//! ```no_run
//! use repair_advisor::{Advisor, DeviceType};
//! use repair_advisor::gemini::GeminiClient;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let advisor = Advisor::new(GeminiClient::from_env()?);
//! let analysis = advisor.analyze_problem("won't charge", DeviceType::Phone, "").await?;
//! println!("Estimated cost: {} Kč", analysis.estimated_cost_czk);
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod cli;
pub mod error;
pub mod gemini;
pub mod history;
pub mod models;
pub mod parsers;

// Re-export commonly used types
pub use advisor::{Advisor, LookupHeuristics};
pub use error::AdvisorError;
pub use history::{FileStorage, HistoryStore, MAX_HISTORY_ITEMS, SnapshotStorage};
pub use models::{DeviceType, EntryMeta, RepairAnalysis, StoredAnalysis};
pub use parsers::parse_analysis;

//! Bounded, most-recent-first analysis history.

use chrono::Utc;
use uuid::Uuid;

use super::storage::SnapshotStorage;
use crate::models::{EntryMeta, RepairAnalysis, StoredAnalysis};

/// Inserting past this bound evicts the oldest entries.
pub const MAX_HISTORY_ITEMS: usize = 20;

/// In-memory history mirrored to one persisted snapshot on every mutation.
///
/// Persistence is best-effort throughout: a corrupt snapshot is discarded at
/// load, and a failed save or delete is logged without interrupting the
/// session, which simply continues with an in-memory-only history.
pub struct HistoryStore<S: SnapshotStorage> {
    storage: S,
    entries: Vec<StoredAnalysis>,
}

impl<S: SnapshotStorage> HistoryStore<S> {
    /// Load the persisted snapshot, starting empty if it is missing,
    /// unreadable, or corrupt. A corrupt snapshot is deleted so the next
    /// start does not trip over it again. Never fails.
    pub fn load(storage: S) -> Self {
        let entries = match storage.load() {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<StoredAnalysis>>(&snapshot) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!("Warning: discarding corrupt history snapshot: {e}");
                    if let Err(e) = storage.delete() {
                        eprintln!("Warning: failed to delete corrupt history snapshot: {e}");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Warning: failed to read history snapshot: {e}");
                Vec::new()
            }
        };
        Self { storage, entries }
    }

    /// Entries ordered most recent first.
    pub fn entries(&self) -> &[StoredAnalysis] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend a new entry, evicting past [`MAX_HISTORY_ITEMS`], and rewrite
    /// the snapshot. A persistence failure is logged, not rolled back: the
    /// in-memory insert stands either way.
    pub fn insert(&mut self, analysis: RepairAnalysis, meta: EntryMeta) -> &StoredAnalysis {
        let entry = StoredAnalysis {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            analysis,
            device_type: meta.device_type,
            device_model: meta.device_model,
            problem_description: meta.problem_description,
        };

        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ITEMS);
        self.persist();
        &self.entries[0]
    }

    /// Empty the history and delete the snapshot. Deletion failure is logged,
    /// not raised.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.delete() {
            eprintln!("Warning: failed to delete history snapshot: {e}");
        }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(snapshot) => {
                if let Err(e) = self.storage.save(&snapshot) {
                    eprintln!("Warning: failed to persist history snapshot: {e}");
                }
            }
            Err(e) => eprintln!("Warning: failed to serialize history snapshot: {e}"),
        }
    }
}

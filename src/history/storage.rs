//! Snapshot storage port and the file-backed implementation.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SNAPSHOT_FILENAME: &str = "history.json";

/// Durable storage for the one history snapshot.
///
/// The whole serialized sequence is rewritten on every mutation; there are no
/// partial or append writes. Implementations are injectable so the store can
/// run against an in-memory fake in tests.
pub trait SnapshotStorage {
    /// Read the persisted snapshot, `None` if nothing has been written yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the persisted snapshot.
    fn save(&self, snapshot: &str) -> Result<()>;

    /// Remove the persisted snapshot, a no-op if absent.
    fn delete(&self) -> Result<()>;
}

/// File-backed snapshot storage with atomic writes (temp file + rename).
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default location: `<data dir>/repair-advisor/history.json`.
    ///
    /// `REPAIR_ADVISOR_DATA_DIR` overrides the data directory when set, which
    /// is how integration tests point the binary at a temp directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_data_dir()?.join(SNAPSHOT_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("REPAIR_ADVISOR_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_base.join("repair-advisor"))
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let snapshot = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read history snapshot: {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        // Temp file + rename so a crash mid-write never corrupts the snapshot.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, snapshot).context("Failed to write history temp file")?;
        fs::rename(&temp_path, &self.path).context("Failed to rename history temp file")?;
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to delete history snapshot: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

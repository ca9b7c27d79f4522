//! Disk persistence of the breed cache between CLI invocations.
//!
//! The catalog's TTL outlives a CLI process by design, so the cache is
//! written to `snapshot.json` after each run and used to seed the next
//! one. The catalog decides how much freshness the snapshot has left.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use felis_catalog::BreedSnapshot;
use felis_core::Breed;

/// On-disk form of a breed cache snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSnapshot {
    /// Wall-clock time of the fetch that produced `breeds`.
    pub fetched_at: DateTime<Utc>,
    pub breeds: Vec<Breed>,
}

/// Read a previously saved snapshot.
///
/// Any read or parse failure counts as no snapshot; the catalog simply
/// refetches on the next read.
pub fn load(path: &Path) -> Option<SavedSnapshot> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(saved) => Some(saved),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable breed snapshot");
            None
        }
    }
}

/// Write the snapshot atomically (write-then-rename).
pub fn save(path: &Path, snapshot: &BreedSnapshot) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct SavedSnapshotRef<'a> {
        fetched_at: DateTime<Utc>,
        breeds: &'a [Breed],
    }

    let payload = serde_json::to_vec_pretty(&SavedSnapshotRef {
        fetched_at: snapshot.fetched_at,
        breeds: &snapshot.breeds,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload)
        .with_context(|| format!("failed to write breed snapshot to {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move breed snapshot into {}", path.display()))?;
    Ok(())
}

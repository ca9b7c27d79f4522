//! Favorites and viewing history, persisted as one JSON file.
//!
//! Breeds are referenced by slug only. Slugs stay valid across catalog
//! refreshes because slug derivation is deterministic, so nothing here
//! ever needs to touch the network.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many viewed slugs the history keeps.
const HISTORY_LIMIT: usize = 10;

/// One favorited breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub slug: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    favorites: Vec<FavoriteItem>,
    /// Most-recent-first, deduplicated, at most [`HISTORY_LIMIT`] entries.
    #[serde(default)]
    history: Vec<String>,
}

/// File-backed favorites and history. Every mutation writes through.
pub struct StateStore {
    path: PathBuf,
    data: StoreData,
}

impl StateStore {
    /// Open the store at `path`, creating empty state when the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed. A corrupt
    /// store is surfaced rather than silently replaced, since overwriting
    /// it would discard the user's favorites.
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let data = if path.exists() {
            let bytes = fs::read(&path)
                .with_context(|| format!("failed to read state store {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("state store {} is corrupted", path.display()))?
        } else {
            StoreData::default()
        };
        Ok(Self { path, data })
    }

    /// Add a favorite. Returns `false` when the slug is already present.
    pub fn add_favorite(&mut self, slug: &str) -> anyhow::Result<bool> {
        if self.data.favorites.iter().any(|item| item.slug == slug) {
            return Ok(false);
        }
        self.data.favorites.push(FavoriteItem {
            slug: slug.to_string(),
            added_at: Utc::now(),
        });
        self.save()?;
        Ok(true)
    }

    /// Remove a favorite. Returns `false` when the slug was not present.
    pub fn remove_favorite(&mut self, slug: &str) -> anyhow::Result<bool> {
        let before = self.data.favorites.len();
        self.data.favorites.retain(|item| item.slug != slug);
        if self.data.favorites.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Favorites in the order they were added.
    #[must_use]
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.data.favorites
    }

    /// Record a viewed breed at the front of the history, deduplicating
    /// and keeping at most [`HISTORY_LIMIT`] entries.
    pub fn record_view(&mut self, slug: &str) -> anyhow::Result<()> {
        self.data.history.retain(|seen| seen != slug);
        self.data.history.insert(0, slug.to_string());
        self.data.history.truncate(HISTORY_LIMIT);
        self.save()
    }

    /// Viewed slugs, most recent first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.data.history
    }

    fn save(&self) -> anyhow::Result<()> {
        let payload = serde_json::to_vec_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)
            .with_context(|| format!("failed to write state store to {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to move state store into {}", self.path.display()))?;
        Ok(())
    }
}

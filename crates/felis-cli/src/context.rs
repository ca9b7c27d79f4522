//! Shared per-invocation state for command handlers.

use std::path::PathBuf;

use anyhow::Context as _;

use felis_api::CatApiClient;
use felis_catalog::BreedCatalog;
use felis_config::FelisConfig;

use crate::snapshot;
use crate::store::StateStore;

/// Everything a command handler needs: the catalog, the favorites/history
/// store, and the location of the on-disk breed snapshot.
pub struct AppContext {
    pub catalog: BreedCatalog<CatApiClient>,
    pub store: StateStore,
    snapshot_path: PathBuf,
}

impl AppContext {
    /// Build the catalog and open the state store.
    ///
    /// Seeds the catalog from the snapshot left by a previous invocation,
    /// if one exists, so fresh data is served without a refetch. No
    /// network traffic happens here.
    pub async fn init(config: &FelisConfig) -> anyhow::Result<Self> {
        let client = CatApiClient::new(&config.catapi, &config.images);
        let catalog = BreedCatalog::new(client, config.cache.ttl());

        let data_dir = data_dir()?;
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let store = StateStore::open(data_dir.join("store.json"))?;
        let snapshot_path = data_dir.join("snapshot.json");

        if let Some(saved) = snapshot::load(&snapshot_path) {
            catalog.seed_cache(saved.breeds, saved.fetched_at).await;
        }

        Ok(Self {
            catalog,
            store,
            snapshot_path,
        })
    }

    /// Write the current cache contents to disk for the next invocation.
    pub async fn persist_snapshot(&self) -> anyhow::Result<()> {
        if let Some(snap) = self.catalog.snapshot().await {
            snapshot::save(&self.snapshot_path, &snap)?;
        }
        Ok(())
    }
}

fn data_dir() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("felis"))
        .context("could not determine a data directory for this platform")
}

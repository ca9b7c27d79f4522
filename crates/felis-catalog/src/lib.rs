//! # felis-catalog
//!
//! The cached breed repository: one upstream fetch serves every read until
//! the TTL lapses.
//!
//! - Reads never fail. Refresh errors fall back to the previous snapshot
//!   when one exists, else an empty list, and are observed via `tracing`.
//! - The cache is a single slot holding an immutable `Arc<[Breed]>`.
//!   Refreshes replace it wholesale, so readers always see a complete list.
//! - Time is injected through [`Clock`] and the network through
//!   [`BreedSource`], keeping every cache transition testable.

mod clock;

pub use clock::{Clock, SystemClock};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinSet;

use felis_api::{ApiError, BreedSource};
use felis_core::{Breed, CatImage, CoatType};
use felis_transform::transform_breeds;

// ── Cache state ────────────────────────────────────────────────────

/// A read-only view of the cached breed list, for collaborators that
/// persist the cache between processes.
#[derive(Debug, Clone)]
pub struct BreedSnapshot {
    pub breeds: Arc<[Breed]>,
    /// Wall-clock time of the fetch that produced `breeds`.
    pub fetched_at: DateTime<Utc>,
}

struct CacheSlot {
    breeds: Arc<[Breed]>,
    fetched_at: DateTime<Utc>,
    expires_at: Instant,
}

// ── Catalog ────────────────────────────────────────────────────────

/// Cached repository over a [`BreedSource`].
pub struct BreedCatalog<S> {
    source: S,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CacheSlot>>,
}

impl<S: BreedSource> BreedCatalog<S> {
    /// Catalog over `source` with the given cache lifetime.
    pub fn new(source: S, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, Arc::new(SystemClock))
    }

    /// Catalog with an injected time source.
    pub fn with_clock(source: S, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    /// Every cached breed, sorted by display name.
    ///
    /// Serves the cached snapshot while it is fresh and refetches
    /// otherwise. A failed refetch falls back to the previous snapshot
    /// when one exists, and to an empty list on a cold start; neither
    /// case surfaces an error. Overlapping calls on an expired cache may
    /// both refetch; the last successful write wins.
    pub async fn all_breeds(&self) -> Arc<[Breed]> {
        if let Some(breeds) = self.fresh_breeds().await {
            return breeds;
        }
        match self.refresh().await {
            Ok(breeds) => breeds,
            Err(e) => {
                if let Some(breeds) = self.cached_breeds().await {
                    tracing::warn!(%e, "breed refresh failed; serving stale cache");
                    breeds
                } else {
                    tracing::error!(%e, "breed refresh failed with no cached fallback");
                    Vec::new().into()
                }
            }
        }
    }

    /// Fetch, transform, sort, and atomically install a new snapshot.
    ///
    /// Malformed upstream records are dropped and logged, never failing
    /// the batch. The previous snapshot stays in place when the fetch
    /// itself fails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the upstream fetch fails.
    pub async fn refresh(&self) -> Result<Arc<[Breed]>, ApiError> {
        let raw = self.source.fetch_breeds().await?;
        let outcome = transform_breeds(raw);
        for reject in &outcome.rejected {
            tracing::warn!(
                index = reject.index,
                id = reject.id.as_deref().unwrap_or("<unknown>"),
                error = %reject.error,
                "dropping malformed breed record"
            );
        }

        let mut breeds = outcome.breeds;
        sort_breeds(&mut breeds);
        let breeds: Arc<[Breed]> = breeds.into();

        let slot = CacheSlot {
            breeds: Arc::clone(&breeds),
            fetched_at: Utc::now(),
            expires_at: self.clock.now() + self.ttl,
        };
        *self.slot.write().await = Some(slot);
        tracing::debug!(count = breeds.len(), "breed cache replaced");
        Ok(breeds)
    }

    /// Look up a single breed by slug or upstream id.
    pub async fn breed(&self, identifier: &str) -> Option<Breed> {
        self.all_breeds()
            .await
            .iter()
            .find(|b| b.slug == identifier || b.id == identifier)
            .cloned()
    }

    /// Case-insensitive substring search over display name, temperament
    /// tags, and origin. An empty query matches everything.
    pub async fn search(&self, query: &str) -> Vec<Breed> {
        let needle = query.to_lowercase();
        self.all_breeds()
            .await
            .iter()
            .filter(|b| {
                b.display_name.to_lowercase().contains(&needle)
                    || b.origin.to_lowercase().contains(&needle)
                    || b.temperament
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Breeds with exactly the given coat type.
    pub async fn breeds_by_coat(&self, coat: CoatType) -> Vec<Breed> {
        self.all_breeds()
            .await
            .iter()
            .filter(|b| b.coat == coat)
            .cloned()
            .collect()
    }

    /// Up to `limit` photos for a breed, fetched fresh on every call.
    ///
    /// The identifier is resolved to the upstream id when the breed is
    /// cached and passed through untouched otherwise. Any failure is
    /// absorbed into an empty list and logged.
    pub async fn breed_images(&self, identifier: &str, limit: usize) -> Vec<CatImage> {
        let breed_id = self
            .breed(identifier)
            .await
            .map_or_else(|| identifier.to_string(), |b| b.id);
        match self.source.fetch_breed_images(&breed_id, limit).await {
            Ok(images) => images,
            Err(e) => {
                tracing::warn!(%e, breed = identifier, "breed image fetch failed");
                Vec::new()
            }
        }
    }

    /// A random cat image URL. Construction only; nothing is fetched.
    #[must_use]
    pub fn random_cat_url(&self) -> String {
        self.source.random_cat_url()
    }

    /// Drop the cached snapshot; the next read refetches.
    pub async fn clear_cache(&self) {
        *self.slot.write().await = None;
        tracing::debug!("breed cache cleared");
    }

    /// Install a previously obtained snapshot without hitting the network.
    ///
    /// The remaining lifetime is `ttl - age`. An over-age snapshot is
    /// installed already expired, serving only as the stale fallback for
    /// a failed refetch.
    pub async fn seed_cache(&self, mut breeds: Vec<Breed>, fetched_at: DateTime<Utc>) {
        sort_breeds(&mut breeds);
        let age = Utc::now()
            .signed_duration_since(fetched_at)
            .to_std()
            .unwrap_or_default();
        let remaining = self.ttl.saturating_sub(age);
        let slot = CacheSlot {
            breeds: breeds.into(),
            fetched_at,
            expires_at: self.clock.now() + remaining,
        };
        *self.slot.write().await = Some(slot);
        tracing::debug!(remaining_secs = remaining.as_secs(), "breed cache seeded");
    }

    /// The current cache contents, fresh or stale, if any.
    pub async fn snapshot(&self) -> Option<BreedSnapshot> {
        self.slot.read().await.as_ref().map(|slot| BreedSnapshot {
            breeds: Arc::clone(&slot.breeds),
            fetched_at: slot.fetched_at,
        })
    }

    async fn fresh_breeds(&self) -> Option<Arc<[Breed]>> {
        let now = self.clock.now();
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|slot| now < slot.expires_at)
            .map(|slot| Arc::clone(&slot.breeds))
    }

    async fn cached_breeds(&self) -> Option<Arc<[Breed]>> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|slot| Arc::clone(&slot.breeds))
    }
}

impl<S: BreedSource + Clone + 'static> BreedCatalog<S> {
    /// One thumbnail URL per requested breed, keyed by slug.
    ///
    /// Image lookups fan out concurrently; a slow or failing lookup never
    /// blocks the others. Identifiers that cannot be resolved or whose
    /// fetch fails are simply absent from the map.
    pub async fn breed_thumbnails(&self, identifiers: &[String]) -> HashMap<String, String> {
        let breeds = self.all_breeds().await;
        let mut set = JoinSet::new();
        for identifier in identifiers {
            let Some(breed) = breeds
                .iter()
                .find(|b| b.slug == *identifier || b.id == *identifier)
            else {
                tracing::warn!(breed = %identifier, "unknown breed in thumbnail request");
                continue;
            };
            let source = self.source.clone();
            let slug = breed.slug.clone();
            let id = breed.id.clone();
            set.spawn(async move {
                match source.fetch_breed_images(&id, 1).await {
                    Ok(images) => images.into_iter().next().map(|image| (slug, image.url)),
                    Err(e) => {
                        tracing::warn!(%e, breed = %slug, "thumbnail fetch failed");
                        None
                    }
                }
            });
        }

        let mut thumbnails = HashMap::with_capacity(identifiers.len());
        while let Some(res) = set.join_next().await {
            match res {
                Ok(Some((slug, url))) => {
                    thumbnails.insert(slug, url);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(%e, "thumbnail task failed"),
            }
        }
        thumbnails
    }
}

/// Case-insensitive name sort with a deterministic tiebreak for names
/// that differ only in case.
fn sort_breeds(breeds: &mut [Breed]) {
    breeds.sort_by_cached_key(|b| (b.display_name.to_lowercase(), b.display_name.clone()));
}

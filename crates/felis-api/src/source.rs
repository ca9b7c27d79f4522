//! The seam between the catalog and the network.

use std::future::Future;

use felis_core::CatImage;
use felis_transform::RawBreed;

use crate::{ApiError, CatApiClient};

/// Upstream breed data provider.
///
/// [`CatApiClient`] is the production implementation; catalog tests
/// substitute scripted sources to exercise cache behavior without a
/// network connection.
pub trait BreedSource: Send + Sync {
    /// Fetch the full upstream breed list.
    fn fetch_breeds(&self) -> impl Future<Output = Result<Vec<RawBreed>, ApiError>> + Send;

    /// Fetch up to `limit` photos for an upstream breed id.
    fn fetch_breed_images(
        &self,
        breed_id: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<CatImage>, ApiError>> + Send;

    /// Build a random cat image URL.
    fn random_cat_url(&self) -> String;
}

impl BreedSource for CatApiClient {
    async fn fetch_breeds(&self) -> Result<Vec<RawBreed>, ApiError> {
        Self::fetch_breeds(self).await
    }

    async fn fetch_breed_images(
        &self,
        breed_id: &str,
        limit: usize,
    ) -> Result<Vec<CatImage>, ApiError> {
        Self::fetch_breed_images(self, breed_id, limit).await
    }

    fn random_cat_url(&self) -> String {
        Self::random_cat_url(self)
    }
}

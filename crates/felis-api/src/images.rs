//! Breed photo search and random image URLs.

use felis_core::CatImage;

use crate::{ApiError, CatApiClient};

impl CatApiClient {
    /// Fetch up to `limit` photos for an upstream breed id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the upstream returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn fetch_breed_images(
        &self,
        breed_id: &str,
        limit: usize,
    ) -> Result<Vec<CatImage>, ApiError> {
        let url = images_search_url(&self.breeds_base, breed_id, limit);
        self.get_json(&url).await
    }

    /// Build a cache-busted random cat image URL.
    ///
    /// URL construction only; the image host is never contacted here, so
    /// this cannot fail and needs no network.
    #[must_use]
    pub fn random_cat_url(&self) -> String {
        format!(
            "{}/cat?t={}",
            self.images_base,
            chrono::Utc::now().timestamp_millis()
        )
    }
}

fn images_search_url(base: &str, breed_id: &str, limit: usize) -> String {
    format!(
        "{base}/images/search?breed_ids={}&limit={limit}",
        urlencoding::encode(breed_id)
    )
}

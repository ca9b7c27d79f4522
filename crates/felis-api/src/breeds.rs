//! Breed list endpoint.

use felis_transform::RawBreed;

use crate::{ApiError, CatApiClient};

impl CatApiClient {
    /// Fetch the full upstream breed list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the upstream returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn fetch_breeds(&self) -> Result<Vec<RawBreed>, ApiError> {
        let url = format!("{}/breeds", self.breeds_base);
        self.get_json(&url).await
    }
}

//! # felis-api
//!
//! HTTP clients for the upstream cat data services:
//!
//! - `TheCatAPI` — breed records and breed photos
//! - cataas.com — random cat image URLs (constructed, never fetched here)
//!
//! [`CatApiClient`] owns a pooled [`reqwest::Client`]; endpoint methods live
//! in [`breeds`] and [`images`]. The [`BreedSource`] trait is the seam the
//! catalog consumes, letting its tests substitute a scripted source.

pub mod breeds;
pub mod images;

mod error;
mod source;

pub use error::ApiError;
pub use source::BreedSource;

use std::time::Duration;

use felis_config::{CatApiConfig, ImagesConfig};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for `TheCatAPI` and cataas.com.
///
/// Cheap to clone: all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    breeds_base: String,
    images_base: String,
}

impl CatApiClient {
    /// Build a client from configuration.
    ///
    /// The `x-api-key` default header is attached only when a key is
    /// configured, and every request is bounded by the configured timeout.
    ///
    /// # Panics
    ///
    /// Panics if the configured API key is not a valid header value or the
    /// underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(api: &CatApiConfig, images: &ImagesConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent("felis/0.1")
            .timeout(Duration::from_secs(api.request_timeout_secs));
        if api.has_api_key() {
            let mut key = reqwest::header::HeaderValue::from_str(&api.api_key)
                .expect("API key should be a valid header value");
            key.set_sensitive(true);
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key);
            builder = builder.default_headers(headers);
        }
        Self {
            http: builder.build().expect("reqwest client should build"),
            breeds_base: api.base_url.trim_end_matches('/').to_string(),
            images_base: images.random_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        decode_json(self.http.get(url).send().await?).await
    }
}

// ── Response handling ──────────────────────────────────────────────

/// Decode a JSON response, surfacing rate limits and non-success statuses
/// as dedicated errors.
async fn decode_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    if resp.status() == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp.json().await?)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

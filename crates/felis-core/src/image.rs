//! Photo records from the upstream image API.

use serde::{Deserialize, Serialize};

/// A single cat photo.
///
/// Ephemeral: fetched on demand when a detail view opens and never cached —
/// the image endpoint returns a fresh selection per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    /// Pixel dimensions as reported upstream; 0 when not reported.
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

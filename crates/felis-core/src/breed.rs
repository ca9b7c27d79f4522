//! The canonical breed record and its derived sub-types.

use serde::{Deserialize, Serialize};

use crate::coat::CoatType;

/// Canonical cat breed record used throughout the application.
///
/// Produced by `felis-transform` from raw upstream records; immutable once
/// constructed. `slug` is the only key other components use to reference a
/// breed — favorites and viewing history store slugs, never breed values, so
/// the slug derivation must stay stable across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    /// Upstream identifier, stable across fetches (e.g. `siam`).
    pub id: String,
    /// URL-safe identifier derived from `display_name` (e.g. `maine-coon`).
    /// Unique within one fetched set.
    pub slug: String,
    /// Human-readable breed name (e.g. `Maine Coon`).
    pub display_name: String,
    /// Country or region of origin; `Unknown` when the upstream omits it.
    pub origin: String,
    /// Display label such as `12 - 15 years`; `Unknown` when unavailable.
    pub life_span: String,
    /// Coat length, inferred when the upstream record has no explicit flag.
    pub coat: CoatType,
    /// Temperament tags in upstream order. Deduplication is not guaranteed.
    pub temperament: Vec<String>,
    /// First sentence of the description, at most 150 characters.
    pub summary: String,
    /// Verbatim upstream description.
    pub description: String,
    /// Derived care guidance.
    pub care: CareAdvice,
    /// Normalized 0-5 trait scores; every field is always populated.
    pub traits: TraitScores,
}

/// Generated care guidance, one short paragraph per topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareAdvice {
    pub feeding: String,
    pub grooming: String,
    pub exercise: String,
    pub health: String,
}

/// Behavioral and physical tendency ratings on a 0-5 scale.
///
/// The transformer guarantees every field is populated even when the upstream
/// record omits a score (default 3, vocalization 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub energy: u8,
    pub shedding: u8,
    pub affection: u8,
    pub friendliness: u8,
    pub vocalization: u8,
    pub intelligence: u8,
}

//! # felis-transform
//!
//! Pure transformation from raw upstream breed records into canonical
//! [`Breed`](felis_core::Breed) values:
//!
//! - [`transform_breed`] maps a single record, validating identity fields.
//! - [`transform_breeds`] maps a batch, collecting per-record rejects
//!   instead of aborting.
//! - Heuristic modules ([`slug`], [`coat`], [`summary`], [`temperament`],
//!   [`advice`]) each own one derivation rule.
//!
//! Everything here is synchronous and deterministic. Fetching and caching
//! live in `felis-catalog`.

pub mod advice;
pub mod coat;
pub mod error;
pub mod raw;
pub mod slug;
pub mod summary;
pub mod temperament;

use felis_core::{Breed, TraitScores};

pub use error::TransformError;
pub use raw::RawBreed;

/// Fallback for absent trait scores, mid-scale on the upstream 1-5 range.
pub const DEFAULT_TRAIT: u8 = 3;

/// Fallback for absent vocalization, kept below mid-scale since most
/// breeds without the score are quiet ones.
pub const DEFAULT_VOCALIZATION: u8 = 2;

/// Map one raw record to a canonical [`Breed`].
///
/// Pure and total: the same input always yields the same output, and the
/// only failure mode is a missing identity field.
///
/// # Errors
///
/// Returns [`TransformError::MissingField`] when `id` or `name` is absent
/// or blank.
pub fn transform_breed(raw: &RawBreed) -> Result<Breed, TransformError> {
    let id = required_field(raw.id.as_deref(), "id")?;
    let name = required_field(raw.name.as_deref(), "name")?;
    let description = raw.description.clone().unwrap_or_default();

    Ok(Breed {
        id: id.to_string(),
        slug: slug::derive_slug(name),
        display_name: name.to_string(),
        origin: label_or_unknown(raw.origin.as_deref()),
        life_span: raw
            .life_span
            .as_deref()
            .filter(|value| !value.is_empty())
            .map_or_else(|| "Unknown".to_string(), |value| format!("{value} years")),
        coat: coat::infer_coat(raw),
        temperament: temperament::parse_temperament(raw.temperament.as_deref()),
        summary: summary::summarize(&description),
        description,
        care: advice::care_advice(raw),
        traits: trait_scores(raw),
    })
}

/// Outcome of a batch transformation.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Records that mapped cleanly, in input order.
    pub breeds: Vec<Breed>,
    /// Records that were dropped, with enough context to log them.
    pub rejected: Vec<RejectedRecord>,
}

/// One record dropped during a batch transformation.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    /// Position in the upstream payload.
    pub index: usize,
    /// Upstream identifier when the record carried one.
    pub id: Option<String>,
    pub error: TransformError,
}

/// Map a whole upstream payload, never aborting on a bad record.
#[must_use]
pub fn transform_breeds(raw: Vec<RawBreed>) -> BatchOutcome {
    let mut breeds = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for (index, record) in raw.into_iter().enumerate() {
        match transform_breed(&record) {
            Ok(breed) => breeds.push(breed),
            Err(error) => rejected.push(RejectedRecord {
                index,
                id: record.id,
                error,
            }),
        }
    }
    BatchOutcome { breeds, rejected }
}

fn required_field<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, TransformError> {
    match value {
        Some(found) if !found.trim().is_empty() => Ok(found),
        _ => Err(TransformError::MissingField(field)),
    }
}

fn label_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(found) if !found.is_empty() => found.to_string(),
        _ => "Unknown".to_string(),
    }
}

fn trait_scores(raw: &RawBreed) -> TraitScores {
    TraitScores {
        energy: raw.energy_level.unwrap_or(DEFAULT_TRAIT),
        shedding: raw.shedding_level.unwrap_or(DEFAULT_TRAIT),
        affection: raw.affection_level.unwrap_or(DEFAULT_TRAIT),
        friendliness: raw.stranger_friendly.unwrap_or(DEFAULT_TRAIT),
        vocalization: raw.vocalisation.unwrap_or(DEFAULT_VOCALIZATION),
        intelligence: raw.intelligence.unwrap_or(DEFAULT_TRAIT),
    }
}

//! Coat type inference.
//!
//! Upstream records carry an explicit flag only for hairless breeds. For
//! everything else the coat length is inferred from substring cues in the
//! name and description, evaluated against an ordered rule table. The order
//! is policy, not semantics: long-hair cues are checked before the textual
//! hairless cues, which are checked before medium cues. Reordering the table
//! re-buckets real breeds, so it must stay exactly as written.

use felis_core::CoatType;

use crate::raw::RawBreed;

/// Substring cues checked top-down; the first row with any match wins.
const COAT_RULES: &[(&[&str], CoatType)] = &[
    (&["long", "longhair", "semi-long"], CoatType::Long),
    (&["hairless", "naked"], CoatType::Hairless),
    (&["semi", "medium"], CoatType::Medium),
];

/// Infer the coat type for a raw record.
///
/// An explicit hairless flag short-circuits the text scan entirely; the
/// scan itself runs over the lower-cased name and description together.
/// Records matching no rule default to [`CoatType::Short`].
#[must_use]
pub fn infer_coat(raw: &RawBreed) -> CoatType {
    if raw.is_hairless() {
        return CoatType::Hairless;
    }

    let haystack = format!(
        "{} {}",
        raw.name.as_deref().unwrap_or_default(),
        raw.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    for (cues, coat) in COAT_RULES {
        if cues.iter().any(|cue| haystack.contains(cue)) {
            return *coat;
        }
    }
    CoatType::Short
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record(name: &str, description: &str, hairless: Option<u8>) -> RawBreed {
        RawBreed {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            hairless,
            ..RawBreed::default()
        }
    }

    #[rstest]
    #[case("Ragdoll", "Large cats with semi-long, silky hair.", CoatType::Long)]
    #[case("Oriental Longhair", "Elegant and slender.", CoatType::Long)]
    #[case("Peterbald", "A naked or flocked coat.", CoatType::Hairless)]
    #[case("LaPerm", "A semi soft curly coat.", CoatType::Medium)]
    #[case("Munchkin", "Coat of medium density.", CoatType::Medium)]
    #[case("Siamese", "Sleek and talkative companions.", CoatType::Short)]
    fn infers_from_text_cues(
        #[case] name: &str,
        #[case] description: &str,
        #[case] expected: CoatType,
    ) {
        assert_eq!(infer_coat(&record(name, description, None)), expected);
    }

    #[test]
    fn explicit_flag_beats_any_text() {
        let raw = record("Sphynx", "Famous for its long whiskers.", Some(1));
        assert_eq!(infer_coat(&raw), CoatType::Hairless);
    }

    #[test]
    fn long_cue_outranks_hairless_cue() {
        // Rule order is load-bearing: both cues present, first row wins.
        let raw = record("Hypothetical", "long fur over naked skin patches", None);
        assert_eq!(infer_coat(&raw), CoatType::Long);
    }

    #[test]
    fn empty_record_defaults_to_short() {
        assert_eq!(infer_coat(&RawBreed::default()), CoatType::Short);
    }
}

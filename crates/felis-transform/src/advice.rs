//! Care-advice decision trees.
//!
//! Each tree reads one or two upstream scores (0 to 5) and emits fixed
//! guidance text. Absent scores count as zero, so sparse records land on
//! the mildest branch rather than a mid-scale default.

use felis_core::CareAdvice;

use crate::raw::RawBreed;

/// Derive all four advice fields for one raw record.
#[must_use]
pub fn care_advice(raw: &RawBreed) -> CareAdvice {
    CareAdvice {
        feeding: feeding_advice(raw),
        grooming: grooming_advice(raw),
        exercise: exercise_advice(raw),
        health: health_advice(raw),
    }
}

fn score(value: Option<u8>) -> u8 {
    value.unwrap_or(0)
}

fn feeding_advice(raw: &RawBreed) -> String {
    let mut parts = Vec::with_capacity(2);
    if score(raw.energy_level) >= 4 {
        parts.push("High-energy breed requires high-protein diet");
    } else {
        parts.push("Moderate calorie diet recommended");
    }
    if score(raw.health_issues) >= 3 {
        parts.push("Monitor diet carefully and consult veterinarian");
    }
    format!("{}.", parts.join(". "))
}

fn grooming_advice(raw: &RawBreed) -> String {
    if raw.is_hairless() {
        return "High maintenance; weekly baths required. Regular ear and skin care essential."
            .to_string();
    }
    match score(raw.grooming) {
        4.. => "High maintenance; daily or frequent brushing required to prevent matting.",
        2..=3 => "Moderate maintenance; brush 2-3 times per week.",
        _ => "Low maintenance; occasional brushing is sufficient.",
    }
    .to_string()
}

fn exercise_advice(raw: &RawBreed) -> String {
    match score(raw.energy_level) {
        4.. => {
            "Very high energy; needs extensive playtime, climbing structures, and mental stimulation."
        }
        3 => "Moderate energy; enjoys interactive play and environmental enrichment.",
        _ => "Low energy; prefers calm environment with light activity.",
    }
    .to_string()
}

fn health_advice(raw: &RawBreed) -> String {
    if score(raw.health_issues) >= 3 {
        "Breed has known health predispositions. Regular veterinary check-ups recommended."
    } else {
        "Generally healthy breed. Maintain regular wellness care."
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn raw_with(
        energy: Option<u8>,
        grooming: Option<u8>,
        health: Option<u8>,
        hairless: Option<u8>,
    ) -> RawBreed {
        RawBreed {
            energy_level: energy,
            grooming,
            health_issues: health,
            hairless,
            ..RawBreed::default()
        }
    }

    #[rstest]
    #[case(Some(4), None, "High-energy breed requires high-protein diet.")]
    #[case(Some(5), None, "High-energy breed requires high-protein diet.")]
    #[case(Some(3), None, "Moderate calorie diet recommended.")]
    #[case(None, None, "Moderate calorie diet recommended.")]
    #[case(Some(2), Some(2), "Moderate calorie diet recommended.")]
    #[case(
        Some(1),
        Some(3),
        "Moderate calorie diet recommended. Monitor diet carefully and consult veterinarian."
    )]
    #[case(
        Some(4),
        Some(5),
        "High-energy breed requires high-protein diet. Monitor diet carefully and consult veterinarian."
    )]
    fn feeding_branches(
        #[case] energy: Option<u8>,
        #[case] health: Option<u8>,
        #[case] expected: &str,
    ) {
        let raw = raw_with(energy, None, health, None);
        assert_eq!(feeding_advice(&raw), expected);
    }

    #[rstest]
    #[case(Some(5), "High maintenance; daily or frequent brushing required to prevent matting.")]
    #[case(Some(4), "High maintenance; daily or frequent brushing required to prevent matting.")]
    #[case(Some(3), "Moderate maintenance; brush 2-3 times per week.")]
    #[case(Some(2), "Moderate maintenance; brush 2-3 times per week.")]
    #[case(Some(1), "Low maintenance; occasional brushing is sufficient.")]
    #[case(None, "Low maintenance; occasional brushing is sufficient.")]
    fn grooming_branches(#[case] grooming: Option<u8>, #[case] expected: &str) {
        let raw = raw_with(None, grooming, None, Some(0));
        assert_eq!(grooming_advice(&raw), expected);
    }

    #[test]
    fn hairless_overrides_grooming_score() {
        let raw = raw_with(None, Some(1), None, Some(1));
        assert_eq!(
            grooming_advice(&raw),
            "High maintenance; weekly baths required. Regular ear and skin care essential."
        );
    }

    #[rstest]
    #[case(
        Some(5),
        "Very high energy; needs extensive playtime, climbing structures, and mental stimulation."
    )]
    #[case(
        Some(4),
        "Very high energy; needs extensive playtime, climbing structures, and mental stimulation."
    )]
    #[case(Some(3), "Moderate energy; enjoys interactive play and environmental enrichment.")]
    #[case(Some(2), "Low energy; prefers calm environment with light activity.")]
    #[case(None, "Low energy; prefers calm environment with light activity.")]
    fn exercise_branches(#[case] energy: Option<u8>, #[case] expected: &str) {
        let raw = raw_with(energy, None, None, None);
        assert_eq!(exercise_advice(&raw), expected);
    }

    #[rstest]
    #[case(
        Some(4),
        "Breed has known health predispositions. Regular veterinary check-ups recommended."
    )]
    #[case(
        Some(3),
        "Breed has known health predispositions. Regular veterinary check-ups recommended."
    )]
    #[case(Some(2), "Generally healthy breed. Maintain regular wellness care.")]
    #[case(None, "Generally healthy breed. Maintain regular wellness care.")]
    fn health_branches(#[case] health: Option<u8>, #[case] expected: &str) {
        let raw = raw_with(None, None, health, None);
        assert_eq!(health_advice(&raw), expected);
    }

    #[test]
    fn assembles_all_four_fields() {
        let raw = raw_with(Some(5), Some(5), Some(5), Some(0));
        let advice = care_advice(&raw);
        assert_eq!(
            advice.feeding,
            "High-energy breed requires high-protein diet. Monitor diet carefully and consult veterinarian."
        );
        assert_eq!(
            advice.grooming,
            "High maintenance; daily or frequent brushing required to prevent matting."
        );
        assert_eq!(
            advice.exercise,
            "Very high energy; needs extensive playtime, climbing structures, and mental stimulation."
        );
        assert_eq!(
            advice.health,
            "Breed has known health predispositions. Regular veterinary check-ups recommended."
        );
    }
}

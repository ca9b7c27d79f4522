//! Temperament tag parsing.

/// Split a comma-separated temperament string into trimmed tags.
///
/// Empty segments are dropped, so stray commas and an absent field both
/// produce an empty list. Tag order follows the source string.
#[must_use]
pub fn parse_temperament(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_temperament(Some("Active, Affectionate,  Intelligent")),
            vec!["Active", "Affectionate", "Intelligent"]
        );
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(
            parse_temperament(Some("Playful,, Calm,")),
            vec!["Playful", "Calm"]
        );
        assert_eq!(parse_temperament(Some(" , ,")), Vec::<String>::new());
    }

    #[test]
    fn absent_and_empty_yield_no_tags() {
        assert_eq!(parse_temperament(None), Vec::<String>::new());
        assert_eq!(parse_temperament(Some("")), Vec::<String>::new());
    }

    #[test]
    fn preserves_source_order() {
        assert_eq!(
            parse_temperament(Some("Calm, Active")),
            vec!["Calm", "Active"]
        );
    }
}

//! Slug derivation.

/// Derive the URL-safe identifier for a breed from its display name.
///
/// Lower-cases the name and replaces each run of whitespace with a single
/// hyphen. Nothing else is altered: punctuation passes through literally, and
/// leading or trailing whitespace runs also become hyphens. Persisted
/// favorites and history reference slugs by exact string, so this rule must
/// not change.
#[must_use]
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            slug.extend(c.to_lowercase());
        }
    }
    slug
}

//! URL slug derivation for display names.

/// Generate a URL-safe slug from a display name.
///
/// Lowercases, turns every run of non-alphanumeric characters into a single
/// hyphen and trims leading/trailing hyphens. Returns an empty string when
/// the name contains no ASCII alphanumerics at all.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

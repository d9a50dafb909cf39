//! Slug generation for exported file names.
//!
//! ## Summary
//! Turns a contact's display name into a lowercase, hyphenated stem that is
//! safe to use as a download file name on every platform.

/// Stem used when a name yields no usable characters.
pub const FALLBACK_STEM: &str = "contact";

/// Generate a file-name-safe slug from a name.
///
/// Converts to lowercase, replaces anything that is not an ASCII letter or
/// digit with hyphens, collapses runs of hyphens, and trims edge hyphens.
///
/// Examples:
/// - "Jane Doe" -> "jane-doe"
/// - "O'Brien, Pat" -> "o-brien-pat"
/// - "Émile" -> "mile"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Builds `<slug>.<extension>`, falling back to [`FALLBACK_STEM`].
#[must_use]
pub fn file_name(name: Option<&str>, extension: &str) -> String {
    let stem = name.map(generate_slug).unwrap_or_default();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem.as_str() };
    format!("{stem}.{extension}")
}

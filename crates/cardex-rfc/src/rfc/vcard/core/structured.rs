//! Structured value types.

/// Structured name (N property).
///
/// Components are positional: `family;given;additional;prefixes;suffixes`.
/// A component missing from the source is `None`; a component present but
/// empty is `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructuredName {
    pub family: Option<String>,
    pub given: Option<String>,
    /// Additional (middle) names, still comma-joined.
    pub additional: Option<String>,
    pub prefixes: Option<String>,
    pub suffixes: Option<String>,
}

impl StructuredName {
    /// Builds a name from already-unescaped positional components.
    #[must_use]
    pub fn from_components(components: Vec<String>) -> Self {
        let mut parts = components.into_iter();
        Self {
            family: parts.next(),
            given: parts.next(),
            additional: parts.next(),
            prefixes: parts.next(),
            suffixes: parts.next(),
        }
    }

    /// Returns whether no component carries any non-whitespace text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
        .into_iter()
        .all(|c| c.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    /// Joins given and family names with a space, skipping empty parts.
    #[must_use]
    pub fn given_family(&self) -> Option<String> {
        join_name_parts([self.given.as_deref(), self.family.as_deref()])
    }
}

/// Joins the non-blank parts with single spaces.
#[must_use]
pub fn join_name_parts<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let joined = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

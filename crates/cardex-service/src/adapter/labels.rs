//! Label and preference extraction for contact points.

use cardex_core::constants::DEFAULT_LABEL;
use cardex_rfc::rfc::vcard::core::{ParsedDocument, PropertyRecord, names, params};

/// vCard 2.1 type flags written as bare parameters (`TEL;CELL;VOICE:`).
const BARE_TYPE_FLAGS: &[&str] = &[
    "HOME", "WORK", "CELL", "VOICE", "FAX", "PAGER", "MSG", "VIDEO", "BBS", "MODEM", "CAR",
    "ISDN", "PCS", "INTERNET", "X400", "DOM", "INTL", "POSTAL", "PARCEL", "IPHONE", "MAIN",
    "OTHER",
];

/// Labels and preference read from one occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Marks {
    pub labels: Vec<String>,
    /// Whether the occurrence said anything about preference at all.
    pub declares_pref: bool,
    pub primary: bool,
}

/// Returns whether a `PREF` value means "preferred".
pub(super) fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no"
    )
}

/// Strips Apple's `_$!<Label>!$_` wrapper.
fn strip_apple_wrapper(label: &str) -> &str {
    label
        .strip_prefix("_$!<")
        .and_then(|l| l.strip_suffix(">!$_"))
        .unwrap_or(label)
}

fn push_label(labels: &mut Vec<String>, label: &str) {
    let label = label.trim().to_lowercase();
    if !label.is_empty() && !labels.contains(&label) {
        labels.push(label);
    }
}

/// ## Summary
/// Reads labels and preference from an occurrence.
///
/// `TYPE` entries are lower-cased labels, except `pref` / `pref=N` which
/// mark preference. Bare 2.1 flags count as labels. An `X-ABLABEL` in the
/// same group contributes its label. With no labels at all the occurrence
/// is labelled `other`.
pub(super) fn marks(document: &ParsedDocument, property: &PropertyRecord) -> Marks {
    let mut labels = Vec::new();
    let mut declares_pref = false;
    let mut primary = false;

    for entry in property.type_values() {
        let lower = entry.to_ascii_lowercase();
        if lower == "pref" {
            declares_pref = true;
            primary = true;
        } else if let Some(level) = lower.strip_prefix("pref=") {
            declares_pref = true;
            primary |= is_truthy(level);
        } else {
            push_label(&mut labels, &lower);
        }
    }

    for (name, value) in &property.params {
        if value == "true" && BARE_TYPE_FLAGS.contains(&name.as_str()) {
            push_label(&mut labels, name);
        }
    }

    if let Some(pref) = property.param(params::PREF) {
        declares_pref = true;
        primary |= is_truthy(pref);
    }

    if let Some(group) = property.group.as_deref() {
        for label in document
            .group(group)
            .into_iter()
            .filter(|p| p.name == names::X_ABLABEL)
        {
            push_label(&mut labels, strip_apple_wrapper(label.value.trim()));
        }
    }

    if labels.is_empty() {
        labels.push(DEFAULT_LABEL.to_string());
    }

    Marks {
        labels,
        declares_pref,
        primary,
    }
}

/// Makes the first occurrence primary when none of them declares a
/// preference. Several declared primaries are left as they are.
pub(super) fn settle_primary(marks: &mut [Marks]) {
    if marks.iter().any(|m| m.declares_pref) {
        return;
    }
    if let Some(first) = marks.first_mut() {
        first.primary = true;
    }
}

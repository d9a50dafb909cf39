//! Shared label vocabulary.

use cardex_core::constants::DEFAULT_LABEL;

/// Maps a lower-cased, trimmed label onto its canonical form.
#[must_use]
pub fn canonical_label(label: &str) -> String {
    let label = label.trim().to_lowercase();
    let canonical = match label.as_str() {
        "internet" => "work",
        "cell" | "iphone" | "x-mobile" => "mobile",
        "pref" => "primary",
        "voice" | "tel" => "phone",
        "personal" => "home",
        _ => return label,
    };
    canonical.to_string()
}

/// ## Summary
/// Canonicalizes a label list.
///
/// Applies [`canonical_label`], drops empty entries and duplicates (first
/// occurrence wins) and falls back to `other` when nothing remains.
#[must_use]
pub fn canonical_labels(labels: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels.iter().map(|l| canonical_label(l)) {
        if !label.is_empty() && !out.contains(&label) {
            out.push(label);
        }
    }
    if out.is_empty() {
        out.push(DEFAULT_LABEL.to_string());
    }
    out
}

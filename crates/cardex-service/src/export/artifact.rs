//! Downloadable export artifact.

use cardex_core::constants::{VCARD_CONTENT_TYPE, VCARD_EXTENSION, VCARD_MEDIA_TYPE};
use cardex_core::util::slug;
use serde::Serialize;

use super::{ExportOptions, group_by_person, to_vcard_batch};
use crate::envelope::{CardData, CardEnvelope};

/// Exported text plus what a sink needs to offer it as a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VcfArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    /// Value for a `Content-Type` header.
    pub content_type: &'static str,
    pub body: String,
}

/// ## Summary
/// Exports envelopes as one `.vcf` artifact.
///
/// A single person's file is named after their display name; several
/// people share one `contacts.vcf`.
#[must_use]
pub fn to_artifact(envelopes: &[CardEnvelope], options: &ExportOptions) -> VcfArtifact {
    let groups = group_by_person(envelopes);

    let file_name = if groups.len() > 1 {
        format!("contacts.{VCARD_EXTENSION}")
    } else {
        let name = envelopes.iter().find_map(|e| match &e.data {
            CardData::PersonalIdentity(identity) => identity.best_name(),
            _ => None,
        });
        slug::file_name(name.as_deref(), VCARD_EXTENSION)
    };

    VcfArtifact {
        file_name,
        media_type: VCARD_MEDIA_TYPE,
        content_type: VCARD_CONTENT_TYPE,
        body: to_vcard_batch(envelopes, options),
    }
}

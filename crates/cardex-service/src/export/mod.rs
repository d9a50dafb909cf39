//! Card envelopes to interchange text.
//!
//! Envelopes are grouped by `person_id`; each person becomes one block with
//! identity lines first, then emails, phones and addresses in input order.

mod artifact;
mod lines;

use cardex_core::constants::DEFAULT_VCARD_VERSION;
use cardex_core::types::CardType;
use cardex_rfc::rfc::vcard::build::{PropertyLine, serialize_block};
use cardex_rfc::rfc::vcard::core::names;
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub use artifact::{VcfArtifact, to_artifact};

use crate::envelope::{CardData, CardEnvelope, IdentityData};

/// Output switches for the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Value of the `VERSION` line.
    pub version: String,
    pub include_photo: bool,
    /// Fold lines longer than 75 characters.
    pub fold_lines: bool,
    /// `REV` timestamp; the current time when unset.
    pub revision: Option<DateTime<Utc>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VCARD_VERSION.to_string(),
            include_photo: true,
            fold_lines: true,
            revision: None,
        }
    }
}

/// Groups envelopes by person, people and envelopes in first-seen order.
#[must_use]
pub fn group_by_person(envelopes: &[CardEnvelope]) -> Vec<(&str, Vec<&CardEnvelope>)> {
    let mut groups: Vec<(&str, Vec<&CardEnvelope>)> = Vec::new();
    for envelope in envelopes {
        let person = envelope.person_id.as_str();
        match groups.iter().position(|(id, _)| *id == person) {
            Some(i) => groups[i].1.push(envelope),
            None => groups.push((person, vec![envelope])),
        }
    }
    groups
}

/// Whether any envelope of the given kind is marked primary.
fn kind_has_primary(envelopes: &[&CardEnvelope], card_type: CardType) -> bool {
    envelopes
        .iter()
        .any(|e| e.card_type() == card_type && e.data.is_primary())
}

fn write_person(person_id: &str, envelopes: &[&CardEnvelope], options: &ExportOptions) -> String {
    let mut identities = envelopes.iter().filter_map(|e| match &e.data {
        CardData::PersonalIdentity(identity) => Some(identity),
        _ => None,
    });
    let identity = identities.next();
    if identities.next().is_some() {
        tracing::debug!(person_id, "Several identity cards; exporting the first");
    }

    // Blank when the person has no identity card.
    let formatted_name = identity
        .and_then(IdentityData::best_name)
        .unwrap_or_default();
    let mut lines = vec![PropertyLine::text(names::FN, &formatted_name)];

    if let Some(identity) = identity {
        lines.extend(lines::identity(identity, options.include_photo));
    }

    let primary_email = kind_has_primary(envelopes, CardType::Email);
    for envelope in envelopes {
        if let CardData::Email(email) = &envelope.data {
            lines.push(lines::email(email, primary_email));
        }
    }
    let primary_phone = kind_has_primary(envelopes, CardType::Phone);
    for envelope in envelopes {
        if let CardData::Phone(phone) = &envelope.data {
            lines.push(lines::phone(phone, primary_phone));
        }
    }
    let primary_address = kind_has_primary(envelopes, CardType::Address);
    for envelope in envelopes {
        if let CardData::Address(address) = &envelope.data {
            lines.push(lines::address(address, primary_address));
        }
    }

    lines.push(PropertyLine::text(names::UID, person_id));

    let revision = options.revision.unwrap_or_else(Utc::now);
    lines.push(PropertyLine::raw(
        names::REV,
        revision.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    ));

    let version = options.version.trim();
    let version = if version.is_empty() {
        DEFAULT_VCARD_VERSION
    } else {
        version
    };

    serialize_block(version, &lines, options.fold_lines)
}

/// ## Summary
/// Exports one person's envelopes as a single block.
///
/// Only the first `person_id` group in the input is written; use
/// [`to_vcard_batch`] for several people. Empty input gives empty text.
#[tracing::instrument(skip(envelopes, options), fields(count = envelopes.len()))]
#[must_use]
pub fn to_vcard(envelopes: &[CardEnvelope], options: &ExportOptions) -> String {
    let Some((person_id, group)) = group_by_person(envelopes).into_iter().next() else {
        tracing::debug!("Nothing to export");
        return String::new();
    };
    write_person(person_id, &group, options)
}

/// ## Summary
/// Exports every person in the input, one block each, in first-seen order.
#[tracing::instrument(skip(envelopes, options), fields(count = envelopes.len()))]
#[must_use]
pub fn to_vcard_batch(envelopes: &[CardEnvelope], options: &ExportOptions) -> String {
    let groups = group_by_person(envelopes);
    tracing::debug!(people = groups.len(), "Exporting batch");

    groups
        .into_iter()
        .map(|(person_id, group)| write_person(person_id, &group, options))
        .collect()
}

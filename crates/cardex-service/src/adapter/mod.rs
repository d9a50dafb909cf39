//! Parsed document to card envelopes.
//!
//! One identity envelope when the block names the person, then one envelope
//! per valid email, phone and address occurrence, indexed from 0 within
//! each facet in input order.

mod contact;
mod identity;
mod labels;

use cardex_core::constants::{DEFAULT_CONFIDENCE, DEFAULT_SOURCE};
use cardex_core::types::Precedence;
use cardex_rfc::rfc::vcard::core::{ParsedDocument, PropertyRecord, names};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use contact::ContactPoint;
use labels::Marks;

use crate::envelope::{CardData, CardEnvelope, Provenance};

pub(crate) use contact::split_extension;

/// Caller-supplied context for one adaptation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdapterOptions {
    /// Person id to use instead of deriving one.
    pub person_id: Option<String>,
    pub owner_id: Option<String>,
    /// Free-text origin tag for provenance.
    pub source: String,
    /// Clamped to 0.0..=1.0; non-finite values fall back to the default.
    pub confidence: f64,
    pub precedence: Precedence,
    /// Import timestamp; the current time when unset.
    pub imported_at: Option<DateTime<Utc>>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            person_id: None,
            owner_id: None,
            source: DEFAULT_SOURCE.to_string(),
            confidence: DEFAULT_CONFIDENCE,
            precedence: Precedence::default(),
            imported_at: None,
        }
    }
}

impl AdapterOptions {
    fn provenance(&self, source_id: Option<&str>) -> Provenance {
        let confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            DEFAULT_CONFIDENCE
        };
        let source = self.source.trim();

        Provenance {
            source: if source.is_empty() {
                DEFAULT_SOURCE.to_string()
            } else {
                source.to_string()
            },
            confidence,
            precedence: self.precedence,
            imported_at: Some(self.imported_at.unwrap_or_else(Utc::now)),
            source_id: source_id.map(String::from),
        }
    }
}

/// Hex SHA-256 of a trimmed name.
fn name_hash(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.trim().as_bytes());
    hex::encode(hasher.finalize())
}

/// ## Summary
/// Picks the person id for a document.
///
/// Explicit option, then `UID`, then a hash of `FN` (or of the name built
/// from `N`), then a random UUID. Only the last step varies between runs.
#[must_use]
pub fn derive_person_id(document: &ParsedDocument, options: &AdapterOptions) -> String {
    if let Some(id) = options
        .person_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        return id.to_string();
    }

    if let Some(uid) = document.uid() {
        return uid.to_string();
    }

    let name = document.formatted_name().map(String::from).or_else(|| {
        document
            .structured_name()
            .and_then(|n| n.given_family())
    });
    if let Some(name) = name {
        return name_hash(&name);
    }

    tracing::debug!("No identifier or name in document; using a random person id");
    uuid::Uuid::new_v4().to_string()
}

/// Collects the occurrences of a multi-valued property that pass the shape
/// check, with labels and primary flags settled across the facet.
fn contact_points<T: ContactPoint>(
    document: &ParsedDocument,
    name: &str,
    extract: impl Fn(&PropertyRecord) -> Option<T>,
) -> Vec<T> {
    let mut points = Vec::new();
    let mut marks: Vec<Marks> = Vec::new();

    for property in document.properties(name) {
        if let Some(point) = extract(property) {
            points.push(point);
            marks.push(labels::marks(document, property));
        } else {
            tracing::debug!(
                line = property.line,
                property = name,
                "Skipping occurrence that fails the shape check"
            );
        }
    }

    labels::settle_primary(&mut marks);

    points
        .into_iter()
        .zip(marks)
        .map(|(mut point, m)| {
            point.apply(m);
            point
        })
        .collect()
}

/// ## Summary
/// Turns one parsed document into card envelopes.
///
/// Emits the identity envelope first (only when `N` or a non-blank `FN`
/// exists), then emails, phones and addresses. Occurrences failing their
/// facet's shape check are skipped; nothing here fails.
#[tracing::instrument(skip(document, options), fields(
    version = %document.version,
    properties = document.properties.len(),
    explicit_person = options.person_id.is_some()
))]
#[must_use]
pub fn to_envelopes(document: &ParsedDocument, options: &AdapterOptions) -> Vec<CardEnvelope> {
    let person_id = derive_person_id(document, options);
    let provenance = options.provenance(document.uid());

    let make = |index: usize, data: CardData| {
        let mut envelope = CardEnvelope::new(&person_id, index, data, provenance.clone());
        envelope.owner_id.clone_from(&options.owner_id);
        envelope
    };

    let mut envelopes = Vec::new();

    if let Some(identity) = identity::identity(document) {
        envelopes.push(make(0, CardData::PersonalIdentity(identity)));
    }

    envelopes.extend(
        contact_points(document, names::EMAIL, contact::email)
            .into_iter()
            .enumerate()
            .map(|(i, email)| make(i, CardData::Email(email))),
    );
    envelopes.extend(
        contact_points(document, names::TEL, contact::phone)
            .into_iter()
            .enumerate()
            .map(|(i, phone)| make(i, CardData::Phone(phone))),
    );
    envelopes.extend(
        contact_points(document, names::ADR, contact::address)
            .into_iter()
            .enumerate()
            .map(|(i, address)| make(i, CardData::Address(address))),
    );

    tracing::debug!(person_id = %person_id, count = envelopes.len(), "Adapted document");

    envelopes
}

//! Card envelope model.
//!
//! An envelope holds exactly one facet of one person: the identity record,
//! or a single email, phone or postal address. Envelopes are plain values;
//! every transformation returns a new one.

mod data;

use cardex_core::constants::ENVELOPE_SCHEMA_VERSION;
use cardex_core::types::{CardType, Precedence};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use data::{
    AddressData, BirthDate, CardData, EmailData, IdentityData, Organization, PhoneData, Photo,
};

/// Where a fact came from and how far it is trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub source: String,
    /// Trust in the fact, 0.0 to 1.0.
    pub confidence: f64,
    pub precedence: Precedence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// One facet of one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardEnvelope {
    pub card_id: String,
    pub person_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(flatten)]
    pub data: CardData,
    pub provenance: Provenance,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<serde_json::Value>,
    #[serde(
        rename = "fieldPolicies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub field_policies: Option<serde_json::Value>,
}

impl CardEnvelope {
    /// Builds an envelope whose `card_id` is derived from the person, facet
    /// and index.
    #[must_use]
    pub fn new(person_id: &str, index: usize, data: CardData, provenance: Provenance) -> Self {
        Self {
            card_id: derive_card_id(person_id, data.card_type(), index),
            person_id: person_id.to_string(),
            owner_id: None,
            data,
            provenance,
            version: ENVELOPE_SCHEMA_VERSION.to_string(),
            verification: None,
            consent: None,
            field_policies: None,
        }
    }

    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.data.card_type()
    }

    /// Returns a copy carrying different facet data; ids and metadata are kept.
    #[must_use]
    pub fn with_data(&self, data: CardData) -> Self {
        Self {
            data,
            ..self.clone()
        }
    }
}

/// ## Summary
/// Derives a stable card id from person, facet and ordinal index.
///
/// UUID v5 in the URL namespace over `"{person_id}/{facet}/{index}"`, so the
/// same input always yields the same id.
#[must_use]
pub fn derive_card_id(person_id: &str, card_type: CardType, index: usize) -> String {
    let name = format!("{person_id}/{card_type}/{index}");
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
}

//! Envelope validation.
//!
//! Validation only reports. Issues are collected into a
//! [`ValidationReport`]; nothing here returns `Err` or changes an envelope.

mod completeness;

use std::collections::{HashMap, HashSet};

use cardex_core::types::CardType;
use thiserror::Error;

pub use completeness::completeness;

use crate::envelope::{AddressData, CardData, CardEnvelope, EmailData, IdentityData, PhoneData};

/// A defect found in one envelope or across a set of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Confidence must be a number between 0 and 1, got {0}")]
    InvalidConfidence(f64),

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("Phone number has no display value")]
    MissingPhoneNumber,

    #[error("Phone {field} is not numeric: {value:?}")]
    NonNumericPhonePart { field: &'static str, value: String },

    #[error("Address has no street, locality, region, postal code or country")]
    EmptyAddress,

    #[error("Identity has no given, family or display name")]
    EmptyIdentity,

    #[error("{count} primary {card_type} cards for person {person_id}")]
    ConflictingPrimary {
        person_id: String,
        card_type: CardType,
        count: usize,
    },

    #[error("{count} {card_type} cards for person {person_id}, expected one")]
    RepeatedFacet {
        person_id: String,
        card_type: CardType,
        count: usize,
    },

    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),

    #[error("{card_id}: {issue}")]
    InEnvelope {
        card_id: String,
        issue: Box<ValidationIssue>,
    },
}

/// Outcome of validating one envelope or a set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Basic `local@domain.tld` shape check.
fn is_email_shape(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !address.chars().any(char::is_whitespace)
}

fn check_structure(envelope: &CardEnvelope, issues: &mut Vec<ValidationIssue>) {
    if blank(&envelope.card_id) {
        issues.push(ValidationIssue::MissingField("card_id"));
    }
    if blank(&envelope.person_id) {
        issues.push(ValidationIssue::MissingField("person_id"));
    }
    if blank(&envelope.version) {
        issues.push(ValidationIssue::MissingField("version"));
    }
    if blank(&envelope.provenance.source) {
        issues.push(ValidationIssue::MissingField("provenance.source"));
    }
    let confidence = envelope.provenance.confidence;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        issues.push(ValidationIssue::InvalidConfidence(confidence));
    }
}

fn check_identity(identity: &IdentityData, issues: &mut Vec<ValidationIssue>) {
    let named = [
        &identity.given_name,
        &identity.family_name,
        &identity.display_name,
    ]
    .into_iter()
    .any(|name| name.as_deref().is_some_and(|n| !blank(n)));

    if !named {
        issues.push(ValidationIssue::EmptyIdentity);
    }
}

fn check_email(email: &EmailData, issues: &mut Vec<ValidationIssue>) {
    if !is_email_shape(email.full_address.trim()) {
        issues.push(ValidationIssue::InvalidEmail(email.full_address.clone()));
    }
    if blank(&email.username) {
        issues.push(ValidationIssue::MissingField("username"));
    }
    if blank(&email.domain) {
        issues.push(ValidationIssue::MissingField("domain"));
    }
}

fn check_phone(phone: &PhoneData, issues: &mut Vec<ValidationIssue>) {
    if blank(&phone.full_number) {
        issues.push(ValidationIssue::MissingPhoneNumber);
    }

    let parts = [
        ("countryCode", &phone.country_code),
        ("areaCode", &phone.area_code),
        ("exchange", &phone.exchange),
        ("lineNumber", &phone.line_number),
        ("extension", &phone.extension),
    ];
    for (field, value) in parts {
        if let Some(value) = value
            && !value.chars().all(|c| c.is_ascii_digit())
        {
            issues.push(ValidationIssue::NonNumericPhonePart {
                field,
                value: value.clone(),
            });
        }
    }
}

fn check_address(address: &AddressData, issues: &mut Vec<ValidationIssue>) {
    if address
        .locational()
        .into_iter()
        .all(|part| part.is_none_or(blank))
    {
        issues.push(ValidationIssue::EmptyAddress);
    }
}

fn envelope_issues(envelope: &CardEnvelope) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_structure(envelope, &mut issues);

    match &envelope.data {
        CardData::PersonalIdentity(identity) => check_identity(identity, &mut issues),
        CardData::Email(email) => check_email(email, &mut issues),
        CardData::Phone(phone) => check_phone(phone, &mut issues),
        CardData::Address(address) => check_address(address, &mut issues),
    }

    issues
}

/// ## Summary
/// Checks one envelope's structure and facet content.
///
/// Card type and precedence are closed enums, so only the free-form fields
/// need checking here.
#[must_use]
pub fn validate(envelope: &CardEnvelope) -> ValidationReport {
    let report = ValidationReport::from_issues(envelope_issues(envelope));
    if !report.valid {
        tracing::debug!(
            card_id = %envelope.card_id,
            issues = report.errors.len(),
            "Envelope failed validation"
        );
    }
    report
}

/// Counts envelopes per person and facet, in first-seen order.
fn count_by_person<'a>(
    envelopes: impl Iterator<Item = &'a CardEnvelope>,
) -> Vec<((&'a str, CardType), usize)> {
    let mut counts: Vec<((&str, CardType), usize)> = Vec::new();
    let mut index: HashMap<(&str, CardType), usize> = HashMap::new();
    for envelope in envelopes {
        let key = (envelope.person_id.as_str(), envelope.card_type());
        let slot = *index.entry(key).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts
}

/// ## Summary
/// Validates every envelope, then checks the set as a whole.
///
/// Per-envelope issues are wrapped with their card id. Cross-envelope
/// checks flag more than one primary per person and facet, more than one
/// identity card per person, and card ids used twice.
#[tracing::instrument(skip(envelopes), fields(count = envelopes.len()))]
#[must_use]
pub fn validate_set(envelopes: &[CardEnvelope]) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = envelopes
        .iter()
        .flat_map(|envelope| {
            envelope_issues(envelope)
                .into_iter()
                .map(|issue| ValidationIssue::InEnvelope {
                    card_id: envelope.card_id.clone(),
                    issue: Box::new(issue),
                })
        })
        .collect();

    let primaries = count_by_person(envelopes.iter().filter(|e| e.data.is_primary()));
    for ((person_id, card_type), count) in primaries {
        if count > 1 {
            issues.push(ValidationIssue::ConflictingPrimary {
                person_id: person_id.to_string(),
                card_type,
                count,
            });
        }
    }

    let single = count_by_person(envelopes.iter().filter(|e| !e.card_type().is_multi_valued()));
    for ((person_id, card_type), count) in single {
        if count > 1 {
            issues.push(ValidationIssue::RepeatedFacet {
                person_id: person_id.to_string(),
                card_type,
                count,
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for envelope in envelopes {
        let id = envelope.card_id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            issues.push(ValidationIssue::DuplicateCardId(id.to_string()));
        }
    }

    let report = ValidationReport::from_issues(issues);
    tracing::debug!(valid = report.valid, issues = report.errors.len(), "Validated set");
    report
}

//! Envelope canonicalization.
//!
//! Pure: every function takes an envelope by reference and returns a new
//! one. Ids, provenance and pass-through metadata are kept as they are.

mod labels;
mod postal;

pub use labels::{canonical_label, canonical_labels};
pub use postal::{canonical_country, canonical_us_postal_code, is_united_states};

use crate::envelope::{AddressData, CardData, CardEnvelope, EmailData, IdentityData, PhoneData};

fn trimmed(value: Option<&String>) -> Option<String> {
    value
        .map(String::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn trimmed_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

fn digits_only(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.chars().filter(char::is_ascii_digit).collect::<String>())
        .filter(|v| !v.is_empty())
}

fn normalize_identity(identity: &IdentityData) -> IdentityData {
    IdentityData {
        given_name: trimmed(identity.given_name.as_ref()),
        family_name: trimmed(identity.family_name.as_ref()),
        middle_names: trimmed_list(&identity.middle_names),
        prefix: trimmed(identity.prefix.as_ref()),
        suffix: trimmed(identity.suffix.as_ref()),
        display_name: trimmed(identity.display_name.as_ref()),
        nicknames: trimmed_list(&identity.nicknames),
        date_of_birth: identity.date_of_birth,
        photo: identity.photo.clone(),
        organization: identity.organization.clone(),
        job_title: trimmed(identity.job_title.as_ref()),
    }
}

fn normalize_email(email: &EmailData) -> EmailData {
    EmailData {
        full_address: email.full_address.trim().to_lowercase(),
        username: email.username.trim().to_lowercase(),
        domain: email.domain.trim().to_lowercase(),
        labels: canonical_labels(&email.labels),
        is_primary: email.is_primary,
    }
}

fn normalize_phone(phone: &PhoneData) -> PhoneData {
    PhoneData {
        full_number: phone.full_number.clone(),
        country_code: digits_only(phone.country_code.as_ref()),
        area_code: digits_only(phone.area_code.as_ref()),
        exchange: digits_only(phone.exchange.as_ref()),
        line_number: digits_only(phone.line_number.as_ref()),
        extension: digits_only(phone.extension.as_ref()),
        labels: canonical_labels(&phone.labels),
        is_primary: phone.is_primary,
    }
}

fn normalize_address(address: &AddressData) -> AddressData {
    let country = trimmed(address.country.as_ref()).map(|c| canonical_country(&c));
    let postal_code = trimmed(address.postal_code.as_ref()).map(|code| {
        if is_united_states(country.as_deref()) {
            canonical_us_postal_code(&code)
        } else {
            code
        }
    });

    AddressData {
        po_box: trimmed(address.po_box.as_ref()),
        extended_address: trimmed(address.extended_address.as_ref()),
        street_address: trimmed(address.street_address.as_ref()),
        locality: trimmed(address.locality.as_ref()),
        region: trimmed(address.region.as_ref()),
        postal_code,
        country,
        labels: canonical_labels(&address.labels),
        is_primary: address.is_primary,
    }
}

/// ## Summary
/// Returns a canonicalized copy of an envelope.
///
/// - Identity: strings trimmed, empty list entries dropped.
/// - Email: trimmed and lower-cased, labels canonicalized.
/// - Phone: digit groups reduced to digits, display number untouched.
/// - Address: trimmed, US ZIP and country names canonicalized.
#[tracing::instrument(level = "trace", skip(envelope), fields(
    card_id = %envelope.card_id,
    card_type = %envelope.card_type()
))]
#[must_use]
pub fn normalize(envelope: &CardEnvelope) -> CardEnvelope {
    let data = match &envelope.data {
        CardData::PersonalIdentity(identity) => {
            CardData::PersonalIdentity(normalize_identity(identity))
        }
        CardData::Email(email) => CardData::Email(normalize_email(email)),
        CardData::Phone(phone) => CardData::Phone(normalize_phone(phone)),
        CardData::Address(address) => CardData::Address(normalize_address(address)),
    };
    envelope.with_data(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{Organization, Provenance};
    use cardex_core::types::Precedence;

    fn wrap(data: CardData) -> CardEnvelope {
        CardEnvelope::new(
            "person-1",
            0,
            data,
            Provenance {
                source: "test".into(),
                confidence: 0.5,
                precedence: Precedence::Imported,
                imported_at: None,
                source_id: None,
            },
        )
    }

    #[test]
    fn identity_is_trimmed() {
        let envelope = wrap(CardData::PersonalIdentity(IdentityData {
            given_name: Some("  Jane ".into()),
            family_name: Some("   ".into()),
            nicknames: vec![" JD ".into(), String::new()],
            job_title: Some(" Engineer ".into()),
            organization: Some(Organization {
                name: Some(" Acme ".into()),
                ..Organization::default()
            }),
            ..IdentityData::default()
        }));

        let CardData::PersonalIdentity(identity) = normalize(&envelope).data else {
            panic!("facet changed");
        };
        assert_eq!(identity.given_name.as_deref(), Some("Jane"));
        assert_eq!(identity.family_name, None);
        assert_eq!(identity.nicknames, vec!["JD"]);
        assert_eq!(identity.job_title.as_deref(), Some("Engineer"));
        assert_eq!(
            identity.organization.and_then(|o| o.name).as_deref(),
            Some(" Acme ")
        );
    }

    #[test]
    fn email_is_lowercased() {
        let envelope = wrap(CardData::Email(EmailData {
            full_address: " Jane@Example.COM ".into(),
            username: "Jane".into(),
            domain: "Example.COM".into(),
            labels: vec!["INTERNET".into()],
            is_primary: true,
        }));

        let CardData::Email(email) = normalize(&envelope).data else {
            panic!("facet changed");
        };
        assert_eq!(email.full_address, "jane@example.com");
        assert_eq!(email.username, "jane");
        assert_eq!(email.domain, "example.com");
        assert_eq!(email.labels, vec!["work"]);
        assert!(email.is_primary);
    }

    #[test]
    fn phone_groups_are_digits() {
        let envelope = wrap(CardData::Phone(PhoneData {
            full_number: "(415) 555-0100".into(),
            country_code: Some("+1".into()),
            area_code: Some("(415)".into()),
            exchange: Some("555".into()),
            line_number: Some("0100".into()),
            labels: vec!["CELL".into()],
            ..PhoneData::default()
        }));

        let CardData::Phone(phone) = normalize(&envelope).data else {
            panic!("facet changed");
        };
        assert_eq!(phone.full_number, "(415) 555-0100");
        assert_eq!(phone.country_code.as_deref(), Some("1"));
        assert_eq!(phone.area_code.as_deref(), Some("415"));
        assert_eq!(phone.labels, vec!["mobile"]);
    }

    #[test]
    fn address_country_and_zip() {
        let envelope = wrap(CardData::Address(AddressData {
            street_address: Some(" 123 Main St ".into()),
            locality: Some("Springfield".into()),
            region: Some("IL".into()),
            postal_code: Some("627041234".into()),
            country: Some("usa".into()),
            labels: vec!["home".into()],
            ..AddressData::default()
        }));

        let CardData::Address(address) = normalize(&envelope).data else {
            panic!("facet changed");
        };
        assert_eq!(address.street_address.as_deref(), Some("123 Main St"));
        assert_eq!(address.postal_code.as_deref(), Some("62704-1234"));
        assert_eq!(address.country.as_deref(), Some("US"));
    }

    #[test]
    fn foreign_postal_code_untouched() {
        let envelope = wrap(CardData::Address(AddressData {
            postal_code: Some("123456789".into()),
            country: Some("Narnia".into()),
            labels: vec!["other".into()],
            ..AddressData::default()
        }));

        let CardData::Address(address) = normalize(&envelope).data else {
            panic!("facet changed");
        };
        assert_eq!(address.postal_code.as_deref(), Some("123456789"));
        assert_eq!(address.country.as_deref(), Some("Narnia"));
    }

    #[test]
    fn ids_and_metadata_are_kept() {
        let mut envelope = wrap(CardData::Email(EmailData {
            full_address: "A@B.C".into(),
            username: "A".into(),
            domain: "B.C".into(),
            labels: vec![],
            is_primary: false,
        }));
        envelope.consent = Some(serde_json::json!({"share": false}));

        let normalized = normalize(&envelope);
        assert_eq!(normalized.card_id, envelope.card_id);
        assert_eq!(normalized.person_id, envelope.person_id);
        assert_eq!(normalized.consent, envelope.consent);
        assert_eq!(normalized.data.labels(), ["other".to_string()]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let envelope = wrap(CardData::Address(AddressData {
            postal_code: Some("62704 1234".into()),
            country: Some("United States".into()),
            labels: vec!["Personal".into()],
            ..AddressData::default()
        }));
        let once = normalize(&envelope);
        assert_eq!(normalize(&once), once);
    }
}

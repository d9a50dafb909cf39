//! Informational completeness score.

use cardex_core::constants::DEFAULT_LABEL;

use crate::envelope::{AddressData, CardData, CardEnvelope, EmailData, IdentityData, PhoneData};

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn weigh(parts: &[(bool, u8)]) -> u8 {
    parts
        .iter()
        .filter(|(has, _)| *has)
        .map(|(_, weight)| *weight)
        .sum::<u8>()
        .min(100)
}

/// Labels beyond the synthetic default.
fn has_real_labels(labels: &[String]) -> bool {
    labels.iter().any(|l| !l.trim().is_empty() && l != DEFAULT_LABEL)
}

fn identity_score(identity: &IdentityData) -> u8 {
    weigh(&[
        (present(identity.display_name.as_deref()), 20),
        (present(identity.given_name.as_deref()), 15),
        (present(identity.family_name.as_deref()), 15),
        (identity.date_of_birth.is_some_and(|d| !d.is_empty()), 10),
        (identity.photo.is_some(), 10),
        (identity.organization.as_ref().is_some_and(|o| !o.is_empty()), 10),
        (present(identity.job_title.as_deref()), 10),
        (!identity.nicknames.is_empty(), 5),
        (!identity.middle_names.is_empty(), 5),
    ])
}

fn email_score(email: &EmailData) -> u8 {
    weigh(&[
        (present(Some(email.full_address.as_str())), 50),
        (present(Some(email.username.as_str())), 15),
        (present(Some(email.domain.as_str())), 15),
        (has_real_labels(&email.labels), 20),
    ])
}

fn phone_score(phone: &PhoneData) -> u8 {
    weigh(&[
        (present(Some(phone.full_number.as_str())), 40),
        (present(phone.country_code.as_deref()), 10),
        (present(phone.area_code.as_deref()), 15),
        (present(phone.exchange.as_deref()), 10),
        (present(phone.line_number.as_deref()), 10),
        (has_real_labels(&phone.labels), 15),
    ])
}

fn address_score(address: &AddressData) -> u8 {
    weigh(&[
        (present(address.street_address.as_deref()), 25),
        (present(address.locality.as_deref()), 20),
        (present(address.region.as_deref()), 15),
        (present(address.postal_code.as_deref()), 20),
        (present(address.country.as_deref()), 15),
        (has_real_labels(&address.labels), 5),
    ])
}

/// Scores how many optional fields an envelope fills, 0 to 100.
///
/// Informational only; a low score never makes an envelope invalid.
#[must_use]
pub fn completeness(envelope: &CardEnvelope) -> u8 {
    match &envelope.data {
        CardData::PersonalIdentity(identity) => identity_score(identity),
        CardData::Email(email) => email_score(email),
        CardData::Phone(phone) => phone_score(phone),
        CardData::Address(address) => address_score(address),
    }
}

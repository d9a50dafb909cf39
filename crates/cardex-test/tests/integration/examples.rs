//! Worked examples from the import contract.

use cardex_rfc::rfc::vcard::parse;
use cardex_service::envelope::{CardData, CardEnvelope};
use cardex_service::interchange::import_vcards;
use cardex_test::{fixed_import_options, fixtures};

fn import(text: &str) -> Vec<CardEnvelope> {
    import_vcards(text, &fixed_import_options()).unwrap()
}

#[test_log::test]
fn work_email_with_pref() {
    let envelopes = import(fixtures::JANE_WORK_EMAIL);
    assert_eq!(envelopes.len(), 2);

    let CardData::PersonalIdentity(identity) = &envelopes[0].data else {
        panic!("expected identity first");
    };
    assert_eq!(identity.display_name.as_deref(), Some("Jane Doe"));

    let CardData::Email(email) = &envelopes[1].data else {
        panic!("expected email second");
    };
    assert_eq!(email.username, "jane");
    assert_eq!(email.domain, "example.com");
    assert_eq!(email.labels, vec!["work"]);
    assert!(email.is_primary);

    let json = serde_json::to_value(&envelopes[1]).unwrap();
    assert_eq!(json["card_type"], "email");
    assert_eq!(json["data"]["isPrimary"], true);
    assert_eq!(json["data"]["labels"], serde_json::json!(["work"]));
}

#[test]
fn folded_note_unfolds_without_extra_space() {
    let doc = parse(fixtures::FOLDED_NOTE).unwrap();
    assert_eq!(
        doc.first("NOTE").unwrap().value,
        "This note is long enough that the exporter had to fold it onto a second line."
    );
}

#[test]
fn cell_phone_decomposes() {
    let envelopes = import(fixtures::CELL_PHONE);
    let CardData::Phone(phone) = &envelopes[1].data else {
        panic!("expected phone");
    };
    assert_eq!(phone.country_code.as_deref(), Some("1"));
    assert_eq!(phone.area_code.as_deref(), Some("415"));
    assert_eq!(phone.exchange.as_deref(), Some("555"));
    assert_eq!(phone.line_number.as_deref(), Some("0100"));
    assert_eq!(phone.labels, vec!["mobile"]);
}

#[test]
fn home_address_positions() {
    let envelopes = import(fixtures::HOME_ADDRESS);
    let CardData::Address(address) = &envelopes[1].data else {
        panic!("expected address");
    };
    assert_eq!(address.street_address.as_deref(), Some("123 Main St"));
    assert_eq!(address.locality.as_deref(), Some("Springfield"));
    assert_eq!(address.region.as_deref(), Some("IL"));
    assert_eq!(address.postal_code.as_deref(), Some("62704"));
    assert_eq!(address.country.as_deref(), Some("US"));
    assert_eq!(address.labels, vec!["home"]);
}

#[test]
fn first_email_is_primary_without_pref() {
    let envelopes = import(fixtures::TWO_PLAIN_EMAILS);
    let emails: Vec<_> = envelopes
        .iter()
        .filter_map(|e| match &e.data {
            CardData::Email(email) => Some(email),
            _ => None,
        })
        .collect();
    assert_eq!(emails.len(), 2);
    assert_eq!(emails[0].full_address, "first@example.com");
    assert!(emails[0].is_primary);
    assert!(!emails[1].is_primary);
}

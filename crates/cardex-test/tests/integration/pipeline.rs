//! Import behavior across the whole pipeline.

use cardex_core::constants::DEFAULT_LABEL;
use cardex_core::types::CardType;
use cardex_rfc::rfc::vcard::parse::parse_many;
use cardex_service::envelope::{CardData, CardEnvelope};
use cardex_service::error::ServiceError;
use cardex_service::interchange::{ImportOptions, import_vcards};
use cardex_service::validate::{ValidationIssue, validate, validate_set};
use cardex_test::{fixed_import_options, fixtures};

fn import(text: &str) -> Vec<CardEnvelope> {
    import_vcards(text, &fixed_import_options()).unwrap()
}

#[test]
fn contact_points_always_have_labels() {
    let envelopes = import(fixtures::UNLABELED);
    let contact_points: Vec<_> = envelopes
        .iter()
        .filter(|e| e.card_type() != CardType::PersonalIdentity)
        .collect();
    assert_eq!(contact_points.len(), 3);
    for envelope in contact_points {
        assert_eq!(envelope.data.labels(), [DEFAULT_LABEL.to_string()]);
    }
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(
        parse_many(fixtures::FULL_PERSON).unwrap(),
        parse_many(fixtures::FULL_PERSON).unwrap()
    );
}

#[test]
fn import_is_deterministic() {
    let first = import(fixtures::FULL_PERSON);
    let second = import(fixtures::FULL_PERSON);
    assert_eq!(first, second);

    let ids: Vec<_> = first.iter().map(|e| e.card_id.as_str()).collect();
    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn imported_envelopes_validate() {
    let envelopes = import(fixtures::FULL_PERSON);
    for envelope in &envelopes {
        let report = validate(envelope);
        assert!(report.valid, "{:?}", report.errors);
    }
    assert!(validate_set(&envelopes).valid);
}

#[test_log::test]
fn apple_grouped_labels() {
    let envelopes = import(fixtures::APPLE_GROUPED);

    let CardData::Email(email) = &envelopes[1].data else {
        panic!("expected email");
    };
    assert_eq!(email.labels, vec!["work", "home"]);
    assert!(email.is_primary);

    let CardData::Phone(phone) = &envelopes[2].data else {
        panic!("expected phone");
    };
    assert_eq!(phone.labels, vec!["mobile"]);
    assert!(phone.is_primary);
}

#[test]
fn unterminated_block_is_skipped_unless_strict() {
    let envelopes = import(fixtures::UNTERMINATED);
    assert_eq!(envelopes.len(), 1);

    let strict = ImportOptions {
        strict: true,
        ..fixed_import_options()
    };
    assert!(matches!(
        import_vcards(fixtures::UNTERMINATED, &strict),
        Err(ServiceError::ParseError(_))
    ));
}

#[test]
fn conflicting_primaries_are_flagged() {
    let text = "BEGIN:VCARD\r\nFN:Two Prefs\r\nEMAIL;PREF=1:a@x.com\r\nEMAIL;PREF=1:b@x.com\r\nEND:VCARD\r\n";
    let envelopes = import(text);
    let primaries = envelopes.iter().filter(|e| e.data.is_primary()).count();
    assert_eq!(primaries, 2);

    let report = validate_set(&envelopes);
    assert!(!report.valid);
    assert!(report.errors.iter().any(|issue| matches!(
        issue,
        ValidationIssue::ConflictingPrimary { count: 2, .. }
    )));
}

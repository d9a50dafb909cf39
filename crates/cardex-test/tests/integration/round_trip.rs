//! Export followed by re-import.

use cardex_core::types::CardType;
use cardex_service::envelope::{CardData, CardEnvelope, Photo};
use cardex_service::export::{to_artifact, to_vcard};
use cardex_service::interchange::{export_vcards, import_vcards};
use cardex_test::{fixed_export_options, fixed_import_options, fixtures};
use proptest::prelude::*;

fn import(text: &str) -> Vec<CardEnvelope> {
    import_vcards(text, &fixed_import_options()).unwrap()
}

fn facets(envelopes: &[CardEnvelope]) -> Vec<(CardType, CardData)> {
    envelopes
        .iter()
        .map(|e| (e.card_type(), e.data.clone()))
        .collect()
}

#[test_log::test]
fn full_person_survives_round_trip() {
    let first = import(fixtures::FULL_PERSON);
    let text = to_vcard(&first, &fixed_export_options());
    tracing::debug!(%text, "Exported");
    let second = import(&text);

    assert_eq!(facets(&first), facets(&second));
    assert_eq!(first[0].person_id, second[0].person_id);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.card_id, b.card_id);
    }
}

#[test]
fn export_is_stable_after_one_pass() {
    let first = to_vcard(&import(fixtures::FULL_PERSON), &fixed_export_options());
    let second = to_vcard(&import(&first), &fixed_export_options());
    assert_eq!(first, second);
}

#[test]
fn batch_keeps_people_apart() {
    let mut envelopes = import(fixtures::JANE_WORK_EMAIL);
    envelopes.extend(import(fixtures::CELL_PHONE));

    let text = export_vcards(&envelopes, &fixed_export_options());
    let again = import(&text);
    assert_eq!(facets(&envelopes), facets(&again));

    let people: Vec<_> = again.iter().map(|e| e.person_id.as_str()).collect();
    assert_eq!(people[0], people[1]);
    assert_ne!(people[0], people[2]);
}

#[test]
fn artifact_is_named_after_person() {
    let artifact = to_artifact(&import(fixtures::FULL_PERSON), &fixed_export_options());
    assert_eq!(artifact.file_name, "dr-jane-q-doe.vcf");
    assert!(artifact.body.starts_with("BEGIN:VCARD\r\n"));
}

fn round_trip(text: &str) -> (Vec<CardEnvelope>, Vec<CardEnvelope>) {
    let first = import(text);
    let exported = to_vcard(&first, &fixed_export_options());
    tracing::debug!(%exported, "Exported");
    (first, import(&exported))
}

#[test_log::test]
fn nameless_person_gains_no_identity() {
    let (first, second) = round_trip(fixtures::EMAIL_ONLY);
    let types: Vec<_> = second.iter().map(CardEnvelope::card_type).collect();
    assert_eq!(types, vec![CardType::Email]);
    assert_eq!(facets(&first), facets(&second));
    assert_eq!(second[0].person_id, first[0].person_id);
}

#[test_log::test]
fn unpreferred_emails_stay_unpreferred() {
    let (first, second) = round_trip(fixtures::NO_PRIMARY_EMAILS);
    let primaries = |envelopes: &[CardEnvelope]| -> Vec<bool> {
        envelopes
            .iter()
            .filter(|e| e.card_type() == CardType::Email)
            .map(|e| e.data.is_primary())
            .collect()
    };
    assert_eq!(primaries(&first), vec![false, false, false]);
    assert_eq!(primaries(&second), vec![false, false, false]);
}

#[test]
fn linked_photo_keeps_media_type() {
    let (first, second) = round_trip(fixtures::URI_PHOTO);
    let CardData::PersonalIdentity(identity) = &second[0].data else {
        panic!("expected identity");
    };
    assert_eq!(
        identity.photo,
        Some(Photo::Uri {
            url: "https://example.com/jane.jpg".into(),
            media_type: Some("image/jpeg".into()),
        })
    );
    assert_eq!(facets(&first), facets(&second));
}

#[test]
fn fold_landing_on_end_marker_keeps_block_whole() {
    // "FN:" plus 72 characters fills the first physical line exactly.
    let name = format!("{}END:VCARD", "x".repeat(72));
    let text = format!(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:{name}\r\nUID:marker-fold\r\nEND:VCARD\r\n"
    );
    let (first, second) = round_trip(&text);

    let exported = to_vcard(&first, &fixed_export_options());
    assert!(exported.contains("\r\n END:VCARD\r\n"));

    let CardData::PersonalIdentity(identity) = &second[0].data else {
        panic!("expected identity");
    };
    assert_eq!(identity.display_name.as_deref(), Some(name.as_str()));
    assert_eq!(second[0].person_id, first[0].person_id);
    assert_eq!(facets(&first), facets(&second));
}

proptest! {
    #[test]
    fn display_name_survives_round_trip(name in "[A-Za-z][A-Za-z ,;.\\\\]{0,100}[A-Za-z]") {
        let text = format!(
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:{}\r\nEND:VCARD\r\n",
            cardex_rfc::rfc::vcard::escape_text(&name)
        );
        let first = import(&text);
        let exported = to_vcard(&first, &fixed_export_options());
        let second = import(&exported);

        let CardData::PersonalIdentity(identity) = &second[0].data else {
            panic!("expected identity");
        };
        prop_assert_eq!(identity.display_name.as_deref(), Some(name.as_str()));
    }
}

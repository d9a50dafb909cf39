//! Import and export entry points.

use cardex_rfc::rfc::vcard::parse::{ParseOptions, parse_many_with};
use serde::Deserialize;

use crate::adapter::{AdapterOptions, to_envelopes};
use crate::envelope::CardEnvelope;
use crate::error::ServiceResult;
use crate::export::{ExportOptions, to_vcard_batch};
use crate::normalize::normalize;

/// Options for one import run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub adapter: AdapterOptions,
    /// Fail on the first malformed line or unterminated block.
    pub strict: bool,
    /// Run the normalizer over adapted envelopes.
    pub normalize: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            adapter: AdapterOptions::default(),
            strict: false,
            normalize: true,
        }
    }
}

/// ## Summary
/// Parses interchange text and adapts every block into envelopes.
///
/// Envelopes come out block by block, each block in adapter order. An
/// explicit `person_id` in the adapter options applies to every block.
///
/// ## Errors
/// Only in strict mode: the first malformed line or unterminated block.
#[tracing::instrument(skip(text, options), fields(
    input_len = text.len(),
    strict = options.strict,
    normalize = options.normalize
))]
pub fn import_vcards(text: &str, options: &ImportOptions) -> ServiceResult<Vec<CardEnvelope>> {
    let documents = parse_many_with(
        text,
        ParseOptions {
            strict: options.strict,
        },
    )?;

    let mut envelopes = Vec::new();
    for document in &documents {
        if !document.diagnostics.is_empty() {
            tracing::debug!(
                skipped = document.diagnostics.len(),
                "Block had malformed lines"
            );
        }

        let adapted = to_envelopes(document, &options.adapter);
        if options.normalize {
            envelopes.extend(adapted.iter().map(normalize));
        } else {
            envelopes.extend(adapted);
        }
    }

    tracing::debug!(
        blocks = documents.len(),
        count = envelopes.len(),
        "Imported vCards"
    );

    Ok(envelopes)
}

/// Exports envelopes for any number of people.
#[must_use]
pub fn export_vcards(envelopes: &[CardEnvelope], options: &ExportOptions) -> String {
    to_vcard_batch(envelopes, options)
}

/// Reads envelopes from a JSON array.
///
/// ## Errors
/// Returns an error if the text is not a JSON array of envelopes.
pub fn envelopes_from_json(json: &str) -> ServiceResult<Vec<CardEnvelope>> {
    Ok(serde_json::from_str(json)?)
}

/// Writes envelopes as a pretty-printed JSON array.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn envelopes_to_json(envelopes: &[CardEnvelope]) -> ServiceResult<String> {
    Ok(serde_json::to_string_pretty(envelopes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::CardData;
    use crate::error::ServiceError;
    use cardex_core::types::CardType;
    use chrono::{DateTime, Utc};

    const TWO_PEOPLE: &str = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEMAIL:Jane@Example.com\r\nEND:VCARD\r\n\
        BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Roe\r\nTEL;TYPE=CELL:555-0100\r\nEND:VCARD\r\n";

    fn fixed() -> ImportOptions {
        ImportOptions {
            adapter: AdapterOptions {
                imported_at: Some(DateTime::<Utc>::UNIX_EPOCH),
                ..AdapterOptions::default()
            },
            ..ImportOptions::default()
        }
    }

    #[test_log::test]
    fn imports_every_block() {
        let envelopes = import_vcards(TWO_PEOPLE, &fixed()).unwrap();
        assert_eq!(envelopes.len(), 4);
        assert_ne!(envelopes[0].person_id, envelopes[2].person_id);

        let CardData::Email(email) = &envelopes[1].data else {
            panic!("expected email");
        };
        assert_eq!(email.full_address, "jane@example.com");

        let CardData::Phone(phone) = &envelopes[3].data else {
            panic!("expected phone");
        };
        assert_eq!(phone.labels, vec!["mobile"]);
    }

    #[test]
    fn normalization_can_be_skipped() {
        let options = ImportOptions {
            normalize: false,
            ..fixed()
        };
        let envelopes = import_vcards(TWO_PEOPLE, &options).unwrap();
        let CardData::Email(email) = &envelopes[1].data else {
            panic!("expected email");
        };
        assert_eq!(email.full_address, "Jane@Example.com");
    }

    #[test]
    fn strict_mode_surfaces_parse_errors() {
        let text = "BEGIN:VCARD\r\nFN:A\r\nno colon here\r\nEND:VCARD\r\n";
        assert_eq!(import_vcards(text, &fixed()).unwrap().len(), 1);

        let strict = ImportOptions {
            strict: true,
            ..fixed()
        };
        assert!(matches!(
            import_vcards(text, &strict),
            Err(ServiceError::ParseError(_))
        ));
    }

    #[test]
    fn empty_input_imports_nothing() {
        assert!(import_vcards("", &fixed()).unwrap().is_empty());
    }

    #[test]
    fn explicit_person_id_applies_to_all_blocks() {
        let mut options = fixed();
        options.adapter.person_id = Some("p-1".into());
        let envelopes = import_vcards(TWO_PEOPLE, &options).unwrap();
        assert!(envelopes.iter().all(|e| e.person_id == "p-1"));
        let identities = envelopes
            .iter()
            .filter(|e| e.card_type() == CardType::PersonalIdentity)
            .count();
        assert_eq!(identities, 2);
    }

    #[test]
    fn export_writes_one_block_per_person() {
        let envelopes = import_vcards(TWO_PEOPLE, &fixed()).unwrap();
        let text = export_vcards(&envelopes, &ExportOptions::default());
        assert_eq!(text.matches("BEGIN:VCARD\r\n").count(), 2);
        assert_eq!(text.matches("END:VCARD\r\n").count(), 2);
    }

    #[test]
    fn json_round_trip() {
        let envelopes = import_vcards(TWO_PEOPLE, &fixed()).unwrap();
        let json = envelopes_to_json(&envelopes).unwrap();
        assert_eq!(envelopes_from_json(&json).unwrap(), envelopes);
    }

    #[test]
    fn bad_json_is_a_serialization_error() {
        assert!(matches!(
            envelopes_from_json("{"),
            Err(ServiceError::SerializationError(_))
        ));
    }
}

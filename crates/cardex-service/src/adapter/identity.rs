//! Identity facet extraction.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cardex_rfc::rfc::vcard::core::{ParsedDocument, PropertyRecord, ValueEncoding, names, params};

use crate::envelope::{BirthDate, IdentityData, Organization, Photo};

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Builds the identity record when the block has `N` or a non-blank `FN`.
pub(super) fn identity(document: &ParsedDocument) -> Option<IdentityData> {
    if document.first(names::N).is_none() && document.formatted_name().is_none() {
        return None;
    }

    let name = document.structured_name().unwrap_or_default();

    let nicknames = document
        .properties(names::NICKNAME)
        .into_iter()
        .flat_map(PropertyRecord::list)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    Some(IdentityData {
        given_name: non_empty(name.given.as_deref()),
        family_name: non_empty(name.family.as_deref()),
        middle_names: name
            .additional
            .as_deref()
            .map(|a| split_list(a).collect())
            .unwrap_or_default(),
        prefix: non_empty(name.prefixes.as_deref()),
        suffix: non_empty(name.suffixes.as_deref()),
        display_name: document.formatted_name().map(String::from),
        nicknames,
        date_of_birth: document
            .first(names::BDAY)
            .and_then(|p| parse_birth_date(&p.value)),
        photo: document.first(names::PHOTO).and_then(photo),
        organization: document.first(names::ORG).and_then(organization),
        job_title: non_empty(document.first(names::TITLE).map(|p| p.value.as_str())),
    })
}

fn parse_number<T: std::str::FromStr>(digits: &str, len: usize) -> Option<T> {
    (digits.len() == len && digits.chars().all(|c| c.is_ascii_digit()))
        .then(|| digits.parse().ok())
        .flatten()
}

/// ## Summary
/// Reads a best-effort birth date.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYYMMDD`, `--MMDD` and
/// `--MM-DD`; anything after a `T` is ignored. Full dates must exist on
/// the calendar.
pub(crate) fn parse_birth_date(value: &str) -> Option<BirthDate> {
    let date = value.trim().split('T').next().unwrap_or_default().trim();
    if !date.is_ascii() {
        return None;
    }

    let (year, month, day) = if let Some(rest) = date.strip_prefix("--") {
        let digits = rest.replace('-', "");
        if digits.len() != 4 {
            return None;
        }
        (None, parse_number(&digits[..2], 2), parse_number(&digits[2..], 2))
    } else if date.contains('-') {
        let mut parts = date.split('-');
        let year = Some(parse_number(parts.next()?, 4)?);
        let month = match parts.next() {
            Some(m) => Some(parse_number(m, 2)?),
            None => None,
        };
        (year, month, parts.next().and_then(|d| parse_number(d, 2)))
    } else {
        match date.len() {
            4 => (parse_number(date, 4), None, None),
            8 => (
                parse_number(&date[..4], 4),
                parse_number(&date[4..6], 2),
                parse_number(&date[6..], 2),
            ),
            _ => return None,
        }
    };

    let birth = BirthDate { year, month, day };
    if birth.year.is_none() && birth.month.is_none() {
        return None;
    }
    if birth.month.is_some_and(|m| !(1..=12).contains(&m))
        || birth.day.is_some_and(|d| !(1..=31).contains(&d))
    {
        return None;
    }
    if let (Some(y), Some(m), Some(d)) = (birth.year, birth.month, birth.day)
        && chrono::NaiveDate::from_ymd_opt(y, m, d).is_none()
    {
        return None;
    }

    Some(birth)
}

/// Maps a `TYPE=PNG` style image type to a media type.
fn media_type(property: &PropertyRecord) -> Option<String> {
    if let Some(media) = property.param(params::MEDIATYPE) {
        return non_empty(Some(media)).map(|m| m.to_ascii_lowercase());
    }
    let kind = property.type_values().into_iter().next()?.to_ascii_lowercase();
    Some(match kind.as_str() {
        k if k.contains('/') => kind,
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        other => format!("image/{other}"),
    })
}

fn embedded(media_type: Option<String>, payload: &str, line: usize) -> Option<Photo> {
    let data: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if let Err(err) = STANDARD.decode(data.as_bytes()) {
        tracing::warn!(line, error = %err, "Skipping undecodable photo payload");
        return None;
    }
    Some(Photo::Embedded { media_type, data })
}

/// Reads a photo as an inline payload, a `data:` URI or a plain URI.
pub(super) fn photo(property: &PropertyRecord) -> Option<Photo> {
    let value = property.value.trim();
    if value.is_empty() {
        return None;
    }

    if property.encoding() == Some(ValueEncoding::Base64) {
        return embedded(media_type(property), value, property.line);
    }

    if let Some(rest) = value.strip_prefix("data:")
        && let Some((header, payload)) = rest.split_once(',')
        && let Some(media) = header.strip_suffix(";base64")
    {
        return embedded(non_empty(Some(media)), payload, property.line);
    }

    Some(Photo::Uri {
        url: value.to_string(),
        media_type: media_type(property),
    })
}

fn organization(property: &PropertyRecord) -> Option<Organization> {
    let mut segments = property.components().into_iter();
    let org = Organization {
        name: non_empty(segments.next().as_deref()),
        department: non_empty(segments.next().as_deref()),
        division: non_empty(segments.next().as_deref()),
    };
    (!org.is_empty()).then_some(org)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_rfc::rfc::vcard::parse;

    const PNG_PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn date(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<BirthDate> {
        Some(BirthDate { year, month, day })
    }

    #[test]
    fn birth_date_shapes() {
        assert_eq!(parse_birth_date("1985"), date(Some(1985), None, None));
        assert_eq!(parse_birth_date("1985-04"), date(Some(1985), Some(4), None));
        assert_eq!(parse_birth_date("1985-04-12"), date(Some(1985), Some(4), Some(12)));
        assert_eq!(parse_birth_date("19850412"), date(Some(1985), Some(4), Some(12)));
        assert_eq!(
            parse_birth_date("1985-04-12T00:00:00Z"),
            date(Some(1985), Some(4), Some(12))
        );
        assert_eq!(parse_birth_date("--0412"), date(None, Some(4), Some(12)));
        assert_eq!(parse_birth_date("--04-12"), date(None, Some(4), Some(12)));
    }

    #[test]
    fn birth_date_rejects_garbage() {
        assert_eq!(parse_birth_date("April 12"), None);
        assert_eq!(parse_birth_date("1985-13-01"), None);
        assert_eq!(parse_birth_date("1985-02-30"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn identity_requires_a_name() {
        let doc = parse("BEGIN:VCARD\r\nEMAIL:a@b.c\r\nEND:VCARD\r\n").unwrap();
        assert!(identity(&doc).is_none());
    }

    #[test]
    fn blank_fn_without_n_is_not_a_name() {
        let doc = parse("BEGIN:VCARD\r\nFN:\r\nEMAIL:a@b.c\r\nEND:VCARD\r\n").unwrap();
        assert!(identity(&doc).is_none());

        let doc = parse("BEGIN:VCARD\r\nFN: \r\nN:Doe;;;;\r\nEND:VCARD\r\n").unwrap();
        assert_eq!(identity(&doc).unwrap().family_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn identity_maps_fields() {
        let doc = parse(
            "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;Jane;Ann,Marie;Dr.;PhD\r\nFN:Dr. Jane Doe\r\nNICKNAME:JD, Janie\r\nBDAY:1990-01-31\r\nORG:Acme\\, Inc.;R&D;Labs;Extra\r\nTITLE: Engineer \r\nEND:VCARD\r\n",
        )
        .unwrap();
        let data = identity(&doc).unwrap();

        assert_eq!(data.given_name.as_deref(), Some("Jane"));
        assert_eq!(data.family_name.as_deref(), Some("Doe"));
        assert_eq!(data.middle_names, vec!["Ann", "Marie"]);
        assert_eq!(data.prefix.as_deref(), Some("Dr."));
        assert_eq!(data.suffix.as_deref(), Some("PhD"));
        assert_eq!(data.display_name.as_deref(), Some("Dr. Jane Doe"));
        assert_eq!(data.nicknames, vec!["JD", "Janie"]);
        assert_eq!(data.date_of_birth, date(Some(1990), Some(1), Some(31)));
        assert_eq!(
            data.organization,
            Some(Organization {
                name: Some("Acme, Inc.".into()),
                department: Some("R&D".into()),
                division: Some("Labs".into()),
            })
        );
        assert_eq!(data.job_title.as_deref(), Some("Engineer"));
    }

    #[test]
    fn inline_photo() {
        let doc = parse(&format!(
            "BEGIN:VCARD\r\nFN:P\r\nPHOTO;ENCODING=b;TYPE=PNG:{PNG_PIXEL}\r\nEND:VCARD\r\n"
        ))
        .unwrap();
        let photo = identity(&doc).unwrap().photo.unwrap();
        assert_eq!(photo.media_type(), Some("image/png"));
        assert!(photo.decode().is_some_and(|bytes| bytes.starts_with(b"\x89PNG")));
    }

    #[test]
    fn data_uri_photo() {
        let prop = PropertyRecord::text("PHOTO", format!("data:image/png;base64,{PNG_PIXEL}"));
        let photo = photo(&prop).unwrap();
        assert!(matches!(photo, Photo::Embedded { .. }));
        assert_eq!(photo.media_type(), Some("image/png"));
    }

    #[test]
    fn uri_photo() {
        let prop = PropertyRecord::text("PHOTO", "https://example.com/me.jpg")
            .with_param("VALUE", "uri")
            .with_param("TYPE", "JPEG");
        assert_eq!(
            photo(&prop),
            Some(Photo::Uri {
                url: "https://example.com/me.jpg".into(),
                media_type: Some("image/jpeg".into()),
            })
        );
    }

    #[test]
    fn undecodable_photo_is_skipped() {
        let prop = PropertyRecord::text("PHOTO", "!!not base64!!").with_param("ENCODING", "b");
        assert_eq!(photo(&prop), None);
    }
}

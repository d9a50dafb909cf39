//! Property lines for each facet.

use cardex_core::constants::DEFAULT_LABEL;
use cardex_rfc::rfc::vcard::build::PropertyLine;
use cardex_rfc::rfc::vcard::core::{names, params};

use crate::adapter::split_extension;
use crate::envelope::{
    AddressData, BirthDate, EmailData, IdentityData, Organization, PhoneData, Photo,
};

/// Maps a canonical label back to vCard type vocabulary.
fn vcard_type(label: &str) -> &str {
    match label {
        "mobile" => "cell",
        "phone" => "voice",
        other => other,
    }
}

/// Builds `TYPE` values from labels, leaving out the synthetic `other` when
/// it stands alone and the `primary` marker.
fn type_values(labels: &[String]) -> Vec<String> {
    if matches!(labels, [only] if only == DEFAULT_LABEL) {
        return Vec::new();
    }
    labels
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != "primary")
        .map(|l| vcard_type(l).to_string())
        .collect()
}

/// `PREF=1` on a primary entry. When no entry of its kind is primary, every
/// entry carries `PREF=0` so a reader does not promote the first one.
fn contact_line(
    line: PropertyLine,
    labels: &[String],
    primary: bool,
    kind_has_primary: bool,
) -> PropertyLine {
    let line = line.param(params::TYPE, type_values(labels));
    if primary {
        line.param(params::PREF, vec!["1".to_string()])
    } else if kind_has_primary {
        line
    } else {
        line.param(params::PREF, vec!["0".to_string()])
    }
}

pub(super) fn email(email: &EmailData, kind_has_primary: bool) -> PropertyLine {
    contact_line(
        PropertyLine::text(names::EMAIL, &email.full_address),
        &email.labels,
        email.is_primary,
        kind_has_primary,
    )
}

/// Display number, with the extension appended unless it already carries one.
fn phone_value(phone: &PhoneData) -> String {
    match phone.extension.as_deref() {
        Some(ext) if split_extension(&phone.full_number).1.is_none() => {
            format!("{} x{ext}", phone.full_number)
        }
        _ => phone.full_number.clone(),
    }
}

pub(super) fn phone(phone: &PhoneData, kind_has_primary: bool) -> PropertyLine {
    contact_line(
        PropertyLine::text(names::TEL, &phone_value(phone)),
        &phone.labels,
        phone.is_primary,
        kind_has_primary,
    )
}

pub(super) fn address(address: &AddressData, kind_has_primary: bool) -> PropertyLine {
    let components = [
        &address.po_box,
        &address.extended_address,
        &address.street_address,
        &address.locality,
        &address.region,
        &address.postal_code,
        &address.country,
    ]
    .map(|c| c.as_deref().unwrap_or_default());

    contact_line(
        PropertyLine::structured(names::ADR, components),
        &address.labels,
        address.is_primary,
        kind_has_primary,
    )
}

/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY` or `--MM-DD`, absent trailing parts left off.
pub(super) fn birth_date(date: &BirthDate) -> Option<String> {
    match (date.year, date.month, date.day) {
        (Some(y), Some(m), Some(d)) => Some(format!("{y:04}-{m:02}-{d:02}")),
        (Some(y), Some(m), None) => Some(format!("{y:04}-{m:02}")),
        (Some(y), None, _) => Some(format!("{y:04}")),
        (None, Some(m), Some(d)) => Some(format!("--{m:02}-{d:02}")),
        (None, _, _) => None,
    }
}

/// `TYPE` value for a media type: its upper-cased subtype.
fn photo_type(media_type: Option<&str>) -> Vec<String> {
    media_type
        .map(|m| m.rsplit('/').next().unwrap_or(m).to_ascii_uppercase())
        .into_iter()
        .collect()
}

fn photo(photo: &Photo) -> PropertyLine {
    match photo {
        Photo::Uri { url, media_type } => PropertyLine::raw(names::PHOTO, url.clone())
            .param(params::VALUE, vec!["uri".into()])
            .param(params::TYPE, photo_type(media_type.as_deref())),
        Photo::Embedded { media_type, data } => PropertyLine::raw(names::PHOTO, data.clone())
            .param(params::ENCODING, vec!["b".into()])
            .param(params::TYPE, photo_type(media_type.as_deref())),
    }
}

fn organization(org: &Organization) -> Option<PropertyLine> {
    let mut segments: Vec<&str> = [&org.name, &org.department, &org.division]
        .into_iter()
        .map(|s| s.as_deref().unwrap_or_default())
        .collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    (!segments.is_empty()).then(|| PropertyLine::structured(names::ORG, segments))
}

fn single(part: Option<&str>) -> Vec<&str> {
    vec![part.unwrap_or_default()]
}

/// Identity lines after `FN`: `N`, `NICKNAME`, `BDAY`, `PHOTO`, `ORG`, `TITLE`.
pub(super) fn identity(identity: &IdentityData, include_photo: bool) -> Vec<PropertyLine> {
    let mut lines = Vec::new();

    lines.push(PropertyLine::structured_lists(
        names::N,
        [
            single(identity.family_name.as_deref()),
            single(identity.given_name.as_deref()),
            identity.middle_names.iter().map(String::as_str).collect(),
            single(identity.prefix.as_deref()),
            single(identity.suffix.as_deref()),
        ],
    ));

    if !identity.nicknames.is_empty() {
        lines.push(PropertyLine::list(
            names::NICKNAME,
            identity.nicknames.iter().map(String::as_str),
        ));
    }

    if let Some(bday) = identity.date_of_birth.as_ref().and_then(birth_date) {
        lines.push(PropertyLine::raw(names::BDAY, bday));
    }

    if include_photo && let Some(p) = &identity.photo {
        lines.push(photo(p));
    }

    if let Some(org) = identity.organization.as_ref().and_then(organization) {
        lines.push(org);
    }

    if let Some(title) = identity.job_title.as_deref().filter(|t| !t.trim().is_empty()) {
        lines.push(PropertyLine::text(names::TITLE, title));
    }

    lines
}

//! Email, phone and address extraction.
//!
//! Each extractor applies the facet's minimal shape check and returns
//! `None` for occurrences that fail it.

use cardex_rfc::rfc::vcard::core::PropertyRecord;

use super::labels::Marks;
use crate::envelope::{AddressData, EmailData, PhoneData};

/// Contact points that carry labels and a primary flag.
pub(super) trait ContactPoint {
    fn apply(&mut self, marks: Marks);
}

impl ContactPoint for EmailData {
    fn apply(&mut self, marks: Marks) {
        self.labels = marks.labels;
        self.is_primary = marks.primary;
    }
}

impl ContactPoint for PhoneData {
    fn apply(&mut self, marks: Marks) {
        self.labels = marks.labels;
        self.is_primary = marks.primary;
    }
}

impl ContactPoint for AddressData {
    fn apply(&mut self, marks: Marks) {
        self.labels = marks.labels;
        self.is_primary = marks.primary;
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &value[prefix.len()..])
}

pub(super) fn email(property: &PropertyRecord) -> Option<EmailData> {
    let value = property.value.trim();
    let address = strip_prefix_ignore_case(value, "mailto:").unwrap_or(value).trim();

    let (username, domain) = address.rsplit_once('@')?;

    Some(EmailData {
        full_address: address.to_string(),
        username: username.to_string(),
        domain: domain.to_string(),
        ..EmailData::default()
    })
}

/// Splits a trailing extension (`x123`, `ext. 123`, `;ext=123`) off a number.
pub(crate) fn split_extension(number: &str) -> (&str, Option<String>) {
    let lower = number.to_ascii_lowercase();

    for marker in [";ext=", "ext.", "ext", "x"] {
        let Some(pos) = lower.rfind(marker) else {
            continue;
        };
        let tail = number[pos + marker.len()..].trim();
        let head = number[..pos].trim_end();
        if !head.is_empty() && !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            return (head, Some(tail.to_string()));
        }
    }

    (number, None)
}

/// NANP digit groups: country code, area code, exchange, line number.
fn decompose_nanp(digits: &str) -> Option<[&str; 4]> {
    let national = match digits.len() {
        10 => digits,
        11 if digits.starts_with('1') => &digits[1..],
        _ => return None,
    };
    Some(["1", &national[..3], &national[3..6], &national[6..]])
}

pub(super) fn phone(property: &PropertyRecord) -> Option<PhoneData> {
    let value = property.value.trim();
    let number = strip_prefix_ignore_case(value, "tel:").unwrap_or(value).trim();

    let (main, extension) = split_extension(number);
    let digits: String = main.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let mut data = PhoneData {
        full_number: number.to_string(),
        extension,
        ..PhoneData::default()
    };

    if let Some([country, area, exchange, line]) = decompose_nanp(&digits) {
        data.country_code = Some(country.to_string());
        data.area_code = Some(area.to_string());
        data.exchange = Some(exchange.to_string());
        data.line_number = Some(line.to_string());
    } else {
        tracing::trace!(line = property.line, "Phone number left undecomposed");
    }

    Some(data)
}

pub(super) fn address(property: &PropertyRecord) -> Option<AddressData> {
    let mut components = property
        .components()
        .into_iter()
        .map(|c| (!c.trim().is_empty()).then_some(c));
    let mut next = || components.next().flatten();

    let data = AddressData {
        po_box: next(),
        extended_address: next(),
        street_address: next(),
        locality: next(),
        region: next(),
        postal_code: next(),
        country: next(),
        ..AddressData::default()
    };

    let any = [
        &data.po_box,
        &data.extended_address,
        &data.street_address,
        &data.locality,
        &data.region,
        &data.postal_code,
        &data.country,
    ]
    .into_iter()
    .any(Option::is_some);

    any.then_some(data)
}

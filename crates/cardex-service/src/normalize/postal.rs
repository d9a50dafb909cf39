//! Country names and US postal codes.

/// Known country spellings, lower-cased, with their ISO 3166 alpha-2 code.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("usa", "US"),
    ("us", "US"),
    ("u.s.", "US"),
    ("u.s.a.", "US"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("canada", "CA"),
    ("uk", "GB"),
    ("u.k.", "GB"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("germany", "DE"),
    ("deutschland", "DE"),
    ("france", "FR"),
    ("spain", "ES"),
    ("españa", "ES"),
    ("italy", "IT"),
    ("italia", "IT"),
    ("mexico", "MX"),
    ("méxico", "MX"),
    ("australia", "AU"),
    ("japan", "JP"),
    ("china", "CN"),
    ("india", "IN"),
    ("brazil", "BR"),
    ("brasil", "BR"),
    ("netherlands", "NL"),
    ("the netherlands", "NL"),
    ("ireland", "IE"),
    ("new zealand", "NZ"),
];

/// Maps a known country name to its two-letter code; anything else is
/// returned trimmed but otherwise unchanged.
#[must_use]
pub fn canonical_country(country: &str) -> String {
    let trimmed = country.trim();
    let lower = trimmed.to_lowercase();
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == lower)
        .map_or_else(|| trimmed.to_string(), |(_, code)| (*code).to_string())
}

/// Returns whether a country value denotes the United States.
#[must_use]
pub fn is_united_states(country: Option<&str>) -> bool {
    country.is_none_or(|c| canonical_country(c) == "US")
}

/// Canonicalizes US ZIP shapes to `NNNNN` or `NNNNN-NNNN`.
///
/// Accepts five digits, nine bare digits, or five plus four separated by a
/// hyphen or space. Other values come back trimmed.
#[must_use]
pub fn canonical_us_postal_code(code: &str) -> String {
    let trimmed = code.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let only_zip_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');

    match digits.len() {
        5 if only_zip_chars => digits,
        9 if only_zip_chars => format!("{}-{}", &digits[..5], &digits[5..]),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries_map_case_insensitively() {
        assert_eq!(canonical_country("USA"), "US");
        assert_eq!(canonical_country(" United States "), "US");
        assert_eq!(canonical_country("Deutschland"), "DE");
        assert_eq!(canonical_country("great britain"), "GB");
    }

    #[test]
    fn unknown_country_passes_through() {
        assert_eq!(canonical_country("Narnia"), "Narnia");
        assert_eq!(canonical_country("US"), "US");
    }

    #[test]
    fn united_states_detection() {
        assert!(is_united_states(None));
        assert!(is_united_states(Some("usa")));
        assert!(!is_united_states(Some("Canada")));
    }

    #[test]
    fn zip_shapes() {
        assert_eq!(canonical_us_postal_code("62704"), "62704");
        assert_eq!(canonical_us_postal_code(" 62704 "), "62704");
        assert_eq!(canonical_us_postal_code("627041234"), "62704-1234");
        assert_eq!(canonical_us_postal_code("62704 1234"), "62704-1234");
        assert_eq!(canonical_us_postal_code("62704-1234"), "62704-1234");
    }

    #[test]
    fn non_zip_values_pass_through() {
        assert_eq!(canonical_us_postal_code("SW1A 1AA"), "SW1A 1AA");
        assert_eq!(canonical_us_postal_code("1234"), "1234");
    }
}

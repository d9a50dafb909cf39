//! Property records produced by the parser.

use std::collections::BTreeMap;

use crate::rfc::vcard::parse::{split_component, split_structured, unescape_text};

/// Parameters keyed by uppercase name. Repeated names are joined with `,`.
pub type Params = BTreeMap<String, String>;

/// Transfer encoding declared by a property's `ENCODING` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueEncoding {
    QuotedPrintable,
    /// `ENCODING=BASE64` or `ENCODING=b`; the value is left undecoded.
    Base64,
}

impl ValueEncoding {
    /// Parses an `ENCODING` parameter value (case-insensitive).
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("QUOTED-PRINTABLE") {
            Some(Self::QuotedPrintable)
        } else if value.eq_ignore_ascii_case("BASE64") || value.eq_ignore_ascii_case("B") {
            Some(Self::Base64)
        } else {
            None
        }
    }
}

/// One logical `NAME;PARAMS:VALUE` line after unfolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Decoded value.
    pub value: String,
    /// Parameters by uppercase name.
    pub params: Params,
    /// Value text exactly as it appeared after unfolding.
    pub raw_value: String,
    /// Physical line the property started on (1-based).
    pub line: usize,
}

impl PropertyRecord {
    /// Creates an ungrouped property whose raw and decoded values match.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            raw_value: value.clone(),
            value,
            params: Params::new(),
            line: 0,
        }
    }

    /// Adds a parameter, joining with any existing value of the same name.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        insert_param(&mut self.params, name, value.into());
        self
    }

    /// Returns the value of a parameter (name is case-insensitive).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(&name.to_ascii_uppercase())
    }

    /// Returns the transfer encoding declared on this property, if any.
    #[must_use]
    pub fn encoding(&self) -> Option<ValueEncoding> {
        self.param("ENCODING").and_then(ValueEncoding::from_param)
    }

    /// Returns the `TYPE` values split on commas, in order, case preserved.
    #[must_use]
    pub fn type_values(&self) -> Vec<&str> {
        self.param("TYPE")
            .map(|types| {
                types
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Splits a structured value on `;` into unescaped components.
    ///
    /// Escaped semicolons inside a component survive because the split runs
    /// over the raw text. Encoded values carry no backslash escapes, so their
    /// decoded text is split directly.
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        if self.encoding().is_some() {
            self.value.split(';').map(String::from).collect()
        } else {
            split_structured(&self.raw_value)
                .into_iter()
                .map(unescape_text)
                .collect()
        }
    }

    /// Splits a multi-valued text value on unescaped `,`.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        if self.encoding().is_some() {
            self.value.split(',').map(String::from).collect()
        } else {
            split_component(&self.raw_value)
        }
    }
}

/// Inserts a parameter under its uppercase name, joining repeats with `,`.
pub(crate) fn insert_param(params: &mut Params, name: &str, value: String) {
    params
        .entry(name.trim().to_ascii_uppercase())
        .and_modify(|existing| {
            existing.push(',');
            existing.push_str(&value);
        })
        .or_insert(value);
}

/// Property names this workspace reads or writes.
pub mod names {
    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const UID: &str = "UID";
    pub const REV: &str = "REV";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";

    // Communications and addressing
    pub const EMAIL: &str = "EMAIL";
    pub const TEL: &str = "TEL";
    pub const ADR: &str = "ADR";

    // Organizational
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";

    // Apple extension naming a grouped property's label
    pub const X_ABLABEL: &str = "X-ABLABEL";
}

/// Parameter names this workspace reads or writes.
pub mod params {
    pub const TYPE: &str = "TYPE";
    pub const PREF: &str = "PREF";
    pub const ENCODING: &str = "ENCODING";
    pub const CHARSET: &str = "CHARSET";
    pub const VALUE: &str = "VALUE";
    pub const MEDIATYPE: &str = "MEDIATYPE";
}

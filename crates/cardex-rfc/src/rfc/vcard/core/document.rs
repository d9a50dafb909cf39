//! Parsed interchange block.

use super::property::{PropertyRecord, names};
use super::structured::StructuredName;
use crate::rfc::vcard::parse::ParseError;

/// One `BEGIN:VCARD`…`END:VCARD` block, parsed but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Value of the `VERSION` line, or the default version when absent.
    pub version: String,
    /// All properties in order of appearance, `VERSION` included.
    pub properties: Vec<PropertyRecord>,
    /// The block's original text, `BEGIN` and `END` lines included.
    pub raw: String,
    /// Recovered errors for lines that were skipped.
    pub diagnostics: Vec<ParseError>,
}

impl ParsedDocument {
    /// Returns all properties with the given name, in order.
    #[must_use]
    pub fn properties(&self, name: &str) -> Vec<&PropertyRecord> {
        let name_upper = name.to_ascii_uppercase();
        self.properties
            .iter()
            .filter(|p| p.name == name_upper)
            .collect()
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&PropertyRecord> {
        let name_upper = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name_upper)
    }

    /// Returns the properties sharing a group prefix (case-insensitive).
    #[must_use]
    pub fn group(&self, group: &str) -> Vec<&PropertyRecord> {
        self.properties
            .iter()
            .filter(|p| {
                p.group
                    .as_deref()
                    .is_some_and(|g| g.eq_ignore_ascii_case(group))
            })
            .collect()
    }

    /// Returns the N value split into its five positional components.
    #[must_use]
    pub fn structured_name(&self) -> Option<StructuredName> {
        self.first(names::N)
            .map(|p| StructuredName::from_components(p.components()))
    }

    /// Returns the FN value when it carries non-whitespace text.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first(names::FN)
            .map(|p| p.value.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the UID value when it carries non-whitespace text.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.first(names::UID)
            .map(|p| p.value.trim())
            .filter(|v| !v.is_empty())
    }
}

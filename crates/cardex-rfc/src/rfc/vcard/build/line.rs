//! Content line writer.

use cardex_core::constants::CRLF;

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::vcard::core::names;

/// One output content line: name, parameters and an already-encoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
    pub name: String,
    pub params: Vec<(String, Vec<String>)>,
    pub value: String,
}

impl PropertyLine {
    /// Line whose value is written verbatim (URIs, base64 payloads).
    #[must_use]
    pub fn raw(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Line with an escaped text value.
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self::raw(name, escape_text(value))
    }

    /// Line with a structured value; each component is escaped, then joined
    /// with `;`.
    #[must_use]
    pub fn structured<'a>(name: &str, components: impl IntoIterator<Item = &'a str>) -> Self {
        let value = components
            .into_iter()
            .map(escape_text)
            .collect::<Vec<_>>()
            .join(";");
        Self::raw(name, value)
    }

    /// Structured value whose components are themselves lists, as in `N`.
    /// Items are escaped, joined with a bare `,`, then components with `;`.
    #[must_use]
    pub fn structured_lists<'a, I, C>(name: &str, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'a str>,
    {
        let value = components
            .into_iter()
            .map(|items| items.into_iter().map(escape_text).collect::<Vec<_>>().join(","))
            .collect::<Vec<_>>()
            .join(";");
        Self::raw(name, value)
    }

    /// Line with a comma separated list; each item is escaped.
    #[must_use]
    pub fn list<'a>(name: &str, items: impl IntoIterator<Item = &'a str>) -> Self {
        let value = items
            .into_iter()
            .map(escape_text)
            .collect::<Vec<_>>()
            .join(",");
        Self::raw(name, value)
    }

    /// Adds a parameter. Parameters without values are not written.
    #[must_use]
    pub fn param(mut self, name: &str, values: Vec<String>) -> Self {
        if !values.is_empty() {
            self.params.push((name.to_ascii_uppercase(), values));
        }
        self
    }

    /// Renders the line with its CRLF terminator, folded when asked.
    #[must_use]
    pub fn render(&self, fold: bool) -> String {
        let mut line = String::with_capacity(self.name.len() + self.value.len() + 16);
        line.push_str(&self.name);

        for (name, values) in &self.params {
            line.push(';');
            line.push_str(name);
            line.push('=');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    line.push(',');
                }
                let (escaped, needs_quotes) = escape_param_value(value);
                if needs_quotes {
                    line.push('"');
                    line.push_str(&escaped);
                    line.push('"');
                } else {
                    line.push_str(&escaped);
                }
            }
        }

        line.push(':');
        line.push_str(&self.value);

        let mut out = if fold { fold_line(&line) } else { line };
        out.push_str(CRLF);
        out
    }
}

/// Writes one `BEGIN`..`END` block around the given lines.
#[must_use]
pub fn serialize_block(version: &str, lines: &[PropertyLine], fold: bool) -> String {
    let mut output = String::new();

    output.push_str(&PropertyLine::raw(names::BEGIN, "VCARD").render(false));
    output.push_str(&PropertyLine::raw(names::VERSION, version).render(false));
    for line in lines {
        output.push_str(&line.render(fold));
    }
    output.push_str(&PropertyLine::raw(names::END, "VCARD").render(false));

    output
}

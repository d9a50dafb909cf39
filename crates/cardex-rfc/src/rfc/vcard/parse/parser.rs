//! vCard document parser.

use cardex_core::constants::DEFAULT_VCARD_VERSION;
use serde::Deserialize;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, RawBlock, parse_content_line, split_blocks, unfold_lines};
use super::quoted_printable::{decode_charset, qp_decode};
use super::values::unescape_text;
use crate::rfc::vcard::core::{
    ParsedDocument, PropertyRecord, ValueEncoding, names, params as param_names,
};

/// Parser behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fail on the first malformed line or unterminated block instead of
    /// skipping it with a diagnostic.
    pub strict: bool,
}

impl ParseOptions {
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/// Parses the first complete vCard in the input.
///
/// ## Errors
/// Returns an error if the input contains no complete vCard.
pub fn parse(input: &str) -> ParseResult<ParsedDocument> {
    parse_with(input, ParseOptions::default())
}

/// Parses the first complete vCard in the input with explicit options.
///
/// ## Errors
/// Returns an error if the input contains no complete vCard, or, in strict
/// mode, if any line or block is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len(), strict = options.strict))]
pub fn parse_with(input: &str, options: ParseOptions) -> ParseResult<ParsedDocument> {
    parse_many_with(input, options)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            tracing::warn!("No vCard found in document");
            ParseError::new(ParseErrorKind::UnexpectedEof, 1, "no vCard found in document")
        })
}

/// Parses every complete vCard in the input.
///
/// Malformed lines are skipped and recorded on the owning document;
/// unterminated blocks are skipped and logged.
///
/// ## Errors
/// Never fails with default options; the `Result` mirrors [`parse_many_with`].
pub fn parse_many(input: &str) -> ParseResult<Vec<ParsedDocument>> {
    parse_many_with(input, ParseOptions::default())
}

/// Parses every complete vCard in the input with explicit options.
///
/// ## Errors
/// In strict mode, returns the first malformed line or unterminated block.
#[tracing::instrument(skip(input), fields(input_len = input.len(), strict = options.strict))]
pub fn parse_many_with(input: &str, options: ParseOptions) -> ParseResult<Vec<ParsedDocument>> {
    tracing::debug!("Parsing vCard document");

    let scan = split_blocks(input);

    for err in &scan.unterminated {
        if options.strict {
            return Err(err.clone());
        }
        tracing::warn!(line = err.line, "Skipping unterminated vCard block");
    }

    let documents = scan
        .blocks
        .iter()
        .map(|block| parse_block(block, options))
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(count = documents.len(), "Parsed vCards");

    Ok(documents)
}

fn parse_block(block: &RawBlock<'_>, options: ParseOptions) -> ParseResult<ParsedDocument> {
    let lines = unfold_lines(&block.lines);
    tracing::trace!(begin = block.begin_line, count = lines.len(), "Unfolded block");

    let mut version: Option<String> = None;
    let mut properties = Vec::with_capacity(lines.len());
    let mut diagnostics = Vec::new();

    for logical in lines {
        let content = match parse_content_line(&logical.text, logical.line) {
            Ok(content) => content,
            Err(err) if options.strict => return Err(err),
            Err(err) => {
                tracing::warn!(line = err.line, error = %err, "Skipping malformed content line");
                diagnostics.push(err);
                continue;
            }
        };

        if content.name == names::BEGIN || content.name == names::END {
            continue;
        }

        let property = into_record(content, logical.line);
        if property.name == names::VERSION && version.is_none() {
            version = Some(property.value.trim().to_string());
        }
        properties.push(property);
    }

    Ok(ParsedDocument {
        version: version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VCARD_VERSION.to_string()),
        properties,
        raw: block.raw.to_string(),
        diagnostics,
    })
}

fn into_record(content: ContentLine, line: usize) -> PropertyRecord {
    let encoding = content
        .params
        .get(param_names::ENCODING)
        .and_then(|e| ValueEncoding::from_param(e));

    let value = match encoding {
        Some(ValueEncoding::QuotedPrintable) => {
            let bytes = qp_decode(content.value.as_bytes());
            decode_charset(
                content.params.get(param_names::CHARSET).map(String::as_str),
                &bytes,
            )
        }
        // Binary payloads are interpreted by whoever knows the target field.
        Some(ValueEncoding::Base64) => content.value.clone(),
        None => unescape_text(&content.value),
    };

    PropertyRecord {
        group: content.group,
        name: content.name,
        value,
        params: content.params,
        raw_value: content.value,
        line,
    }
}

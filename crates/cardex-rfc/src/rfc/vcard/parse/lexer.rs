//! vCard lexer: block splitting, line unfolding and content line parsing.
//!
//! vCard uses the same folding/unfolding rules as iCalendar (RFC 5545 §3.1).

use super::error::{ParseError, ParseResult};
use super::values::decode_param_value;
use crate::rfc::vcard::core::{Params, insert_param};

/// A physical input line with its terminator removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalLine<'a> {
    /// 1-based line number in the whole input.
    pub number: usize,
    pub text: &'a str,
    /// Byte offset of the line start in the input.
    pub start: usize,
    /// Byte offset just past the line terminator.
    pub end: usize,
}

/// Splits input into physical lines, accepting CRLF and bare LF.
#[must_use]
pub fn physical_lines(input: &str) -> Vec<PhysicalLine<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (idx, chunk) in input.split_inclusive('\n').enumerate() {
        let end = start + chunk.len();
        let text = chunk.strip_suffix('\n').unwrap_or(chunk);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(PhysicalLine {
            number: idx + 1,
            text,
            start,
            end,
        });
        start = end;
    }

    lines
}

/// The lines of one `BEGIN:VCARD`…`END:VCARD` block.
#[derive(Debug, Clone)]
pub struct RawBlock<'a> {
    /// Line number of the `BEGIN:VCARD` line.
    pub begin_line: usize,
    /// Block text from `BEGIN` through the `END` line terminator.
    pub raw: &'a str,
    /// Lines strictly between `BEGIN` and `END`.
    pub lines: Vec<PhysicalLine<'a>>,
}

/// Result of scanning input for blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockScan<'a> {
    pub blocks: Vec<RawBlock<'a>>,
    /// One error per `BEGIN:VCARD` that never reached `END:VCARD`.
    pub unterminated: Vec<ParseError>,
}

/// Continuation lines never delimit a block, whatever their text.
fn is_marker(text: &str, marker: &str) -> bool {
    !text.starts_with([' ', '\t']) && text.trim_end().eq_ignore_ascii_case(marker)
}

/// Splits input into blocks delimited by `BEGIN:VCARD` / `END:VCARD`.
///
/// Lines outside any block are discarded. A `BEGIN:VCARD` seen while a
/// block is open abandons the open block as unterminated.
#[must_use]
pub fn split_blocks(input: &str) -> BlockScan<'_> {
    let mut scan = BlockScan::default();
    let mut open: Option<(PhysicalLine<'_>, Vec<PhysicalLine<'_>>)> = None;

    for line in physical_lines(input) {
        if is_marker(line.text, "BEGIN:VCARD") {
            if let Some((begin, _)) = open.take() {
                scan.unterminated.push(ParseError::unterminated(begin.number));
            }
            open = Some((line, Vec::new()));
        } else if is_marker(line.text, "END:VCARD") {
            if let Some((begin, lines)) = open.take() {
                scan.blocks.push(RawBlock {
                    begin_line: begin.number,
                    raw: &input[begin.start..line.end],
                    lines,
                });
            }
        } else if let Some((_, lines)) = open.as_mut() {
            lines.push(line);
        }
    }

    if let Some((begin, _)) = open {
        scan.unterminated.push(ParseError::unterminated(begin.number));
    }

    scan
}

/// A logical line after unfolding, tagged with its first physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub line: usize,
    pub text: String,
}

/// Returns whether a logical line declares quoted-printable encoding.
fn declares_quoted_printable(text: &str) -> bool {
    let head = text.split(':').next().unwrap_or_default();
    head.to_ascii_uppercase().contains("QUOTED-PRINTABLE")
}

/// Merges continuation lines into logical lines.
///
/// A line starting with a single space or tab continues the previous line;
/// only that one character is removed. A quoted-printable line ending in
/// `=` continues onto the next physical line with the terminator kept, so
/// the value decoder can drop the soft break.
#[must_use]
pub fn unfold_lines(lines: &[PhysicalLine<'_>]) -> Vec<LogicalLine> {
    let mut logical: Vec<LogicalLine> = Vec::new();
    let mut soft_break = false;

    for line in lines {
        if let Some(rest) = line.text.strip_prefix([' ', '\t']) {
            if let Some(prev) = logical.last_mut() {
                prev.text.push_str(rest);
                soft_break = declares_quoted_printable(&prev.text) && prev.text.ends_with('=');
                continue;
            }
        } else if soft_break {
            if let Some(prev) = logical.last_mut() {
                prev.text.push('\n');
                prev.text.push_str(line.text);
                soft_break = prev.text.ends_with('=');
                continue;
            }
        }

        if line.text.trim().is_empty() {
            soft_break = false;
            continue;
        }

        let text = line.text.to_string();
        soft_break = declares_quoted_printable(&text) && text.ends_with('=');
        logical.push(LogicalLine {
            line: line.number,
            text,
        });
    }

    logical
}

/// Unfolds folded text by removing CRLF (or LF) followed by one space/tab.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            } else {
                result.push(c);
            }
        } else if c == '\n' {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                result.push('\n');
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// A content line split into its parts, value still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters by uppercase name.
    pub params: Params,
    /// Raw value string.
    pub value: String,
}

/// Parses a single logical line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line has no `:` separator or the property name
/// is empty or not made of letters, digits and hyphens.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos =
        find_value_separator(line).ok_or_else(|| ParseError::missing_separator(line_num))?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let mut tokens = split_params(name_params).into_iter();
    let name = tokens.next().unwrap_or_default().trim();

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::invalid_name(line_num, name));
    }

    let mut params = Params::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.split_once('=') {
            Some((key, raw)) if !key.trim().is_empty() => {
                insert_param(&mut params, key, decode_param_value(raw));
            }
            Some(_) => {
                tracing::trace!(line = line_num, token, "Skipping parameter without a name");
            }
            None => insert_param(&mut params, token, "true".to_string()),
        }
    }

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the first `:` outside quotes that is not backslash-escaped.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        // Group must be alphanumeric + hyphen
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Splits the name/parameter segment on `;` outside double quotes.
fn split_params(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                tokens.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    tokens.push(&s[start..]);
    tokens
}

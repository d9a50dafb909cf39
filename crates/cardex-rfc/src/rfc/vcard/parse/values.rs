//! vCard value text helpers.

/// Unescapes a vCard text value.
///
/// vCard escapes: `\n`, `\N` (newline), `\,` (comma), `\;` (semicolon),
/// `\\` (backslash). The scan runs once, left to right, so an escaped
/// backslash is never re-read as the start of another escape. Unknown
/// escapes are kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(',') => {
                    chars.next();
                    result.push(',');
                }
                Some(';') => {
                    chars.next();
                    result.push(';');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// Components are returned still escaped.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas and unescapes each part.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                match next {
                    ',' => {
                        chars.next();
                        current.push(',');
                    }
                    ';' => {
                        chars.next();
                        current.push(';');
                    }
                    'n' | 'N' => {
                        chars.next();
                        current.push('\n');
                    }
                    '\\' => {
                        chars.next();
                        current.push('\\');
                    }
                    _ => current.push(c),
                }
            } else {
                current.push(c);
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Decodes a raw parameter value: strips surrounding double quotes and
/// resolves RFC 6868 caret escapes (`^n`, `^'`, `^^`).
#[must_use]
pub fn decode_param_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);

    let mut result = String::with_capacity(unquoted.len());
    let mut chars = unquoted.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '^' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                result.push('\n');
            }
            Some('\'') => {
                chars.next();
                result.push('"');
            }
            Some('^') => {
                chars.next();
                result.push('^');
            }
            _ => result.push('^'),
        }
    }

    result
}

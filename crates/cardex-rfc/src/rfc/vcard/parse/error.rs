//! vCard parse error types.

use std::fmt;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
///
/// Outside strict mode the same value is kept as a diagnostic on the parsed
/// document instead of being returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Physical line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an error for a `BEGIN:VCARD` that never reached `END:VCARD`.
    #[must_use]
    pub fn unterminated(line: usize) -> Self {
        Self::new(
            ParseErrorKind::UnterminatedBlock,
            line,
            "vCard not closed with END:VCARD",
        )
    }

    /// Creates an error for a content line without a name/value separator.
    #[must_use]
    pub fn missing_separator(line: usize) -> Self {
        Self::new(
            ParseErrorKind::MissingSeparator,
            line,
            "missing colon separator",
        )
    }

    /// Creates an invalid property name error.
    #[must_use]
    pub fn invalid_name(line: usize, name: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidPropertyName,
            line,
            format!("invalid property name: {name}"),
        )
    }

    /// Returns whether this error describes a whole block rather than a line.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::UnterminatedBlock | ParseErrorKind::UnexpectedEof
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input held no complete vCard.
    UnexpectedEof,
    /// `BEGIN:VCARD` without a matching `END:VCARD`.
    UnterminatedBlock,
    /// Content line without a `:` between name and value.
    MissingSeparator,
    /// Invalid property name.
    InvalidPropertyName,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnterminatedBlock => write!(f, "unterminated block"),
            Self::MissingSeparator => write!(f, "missing separator"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
        }
    }
}

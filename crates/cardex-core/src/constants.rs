//! Interchange format constants.
//!
//! The vCard version, line terminator and fold width form the wire contract
//! of the exporter. Changing any of them requires bumping
//! [`DEFAULT_VCARD_VERSION`].

/// vCard version emitted when the caller does not ask for another one.
pub const DEFAULT_VCARD_VERSION: &str = "3.0";

/// Line terminator for every emitted logical and physical line.
pub const CRLF: &str = "\r\n";

/// Maximum characters on the first physical line of a folded logical line.
pub const FOLD_WIDTH: usize = 75;

/// Schema version of the card envelope shape itself.
pub const ENVELOPE_SCHEMA_VERSION: &str = "1.0.0";

/// Media type offered for exported interchange text.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";

/// File extension for exported interchange text.
pub const VCARD_EXTENSION: &str = "vcf";

/// Media type with charset, as sent in a `Content-Type` header.
pub const VCARD_CONTENT_TYPE: &str = const_str::concat!(VCARD_MEDIA_TYPE, "; charset=utf-8");

/// Label assigned to a contact point whose source carried no `TYPE`.
pub const DEFAULT_LABEL: &str = "other";

/// Source tag used when the caller does not name one.
pub const DEFAULT_SOURCE: &str = "vcard";

/// Confidence assigned to imported facts when the caller does not set one.
pub const DEFAULT_CONFIDENCE: f64 = 0.9;

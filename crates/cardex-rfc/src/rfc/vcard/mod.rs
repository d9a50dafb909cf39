//! vCard 3.0 grammar (RFC 2426), tolerant of vCard 2.1 input.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::parse_many;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=WORK:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let docs = parse_many(input).unwrap();
//! assert_eq!(docs[0].formatted_name(), Some("John Doe"));
//! assert_eq!(docs[0].first("EMAIL").unwrap().type_values(), vec!["WORK"]);
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::{PropertyLine, serialize_block};
//!
//! let out = serialize_block("3.0", &[PropertyLine::text("FN", "Jane Doe")], true);
//! assert!(out.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Parsed document and property records
//! - [`parse`] - Block splitting, unfolding, lexing and value decoding
//! - [`build`] - Escaping, folding and line writing

pub mod build;
pub mod core;
pub mod parse;


pub use build::{PropertyLine, escape_text, fold_line, serialize_block};
pub use core::{ParsedDocument, PropertyRecord, StructuredName, ValueEncoding};
pub use parse::{
    ParseError, ParseErrorKind, ParseOptions, ParseResult, parse, parse_many, parse_many_with,
    parse_with, unescape_text, unfold,
};

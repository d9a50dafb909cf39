//! vCard parsing.
//!
//! Input flows through block splitting, unfolding, content line lexing and
//! value decoding before landing in a [`ParsedDocument`](super::core::ParsedDocument).

mod error;
mod lexer;
mod parser;
mod quoted_printable;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{
    BlockScan, ContentLine, LogicalLine, PhysicalLine, RawBlock, parse_content_line,
    physical_lines, split_blocks, unfold, unfold_lines,
};
pub use parser::{ParseOptions, parse, parse_many, parse_many_with, parse_with};
pub use quoted_printable::{decode_charset, qp_decode};
pub use values::{decode_param_value, split_component, split_structured, unescape_text};

//! vCard core types.
//!
//! - [`ParsedDocument`] - One parsed block with its property stream
//! - [`PropertyRecord`] - Individual property with parameters and value
//! - [`StructuredName`] - N property split positionally
//!
//! ## Example
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::core::PropertyRecord;
//!
//! let tel = PropertyRecord::text("tel", "+1 415 555 0100").with_param("TYPE", "CELL");
//! assert_eq!(tel.name, "TEL");
//! assert_eq!(tel.type_values(), vec!["CELL"]);
//! ```

mod document;
mod property;
mod structured;

pub use document::ParsedDocument;
pub(crate) use property::insert_param;
pub use property::{Params, PropertyRecord, ValueEncoding, names, params};
pub use structured::{StructuredName, join_name_parts};

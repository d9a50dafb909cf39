//! Contact interchange services.
//!
//! Turns parsed vCard documents into card envelopes, canonicalizes and
//! validates them, and writes envelopes back out as vCard text.
//!
//! ```
//! use cardex_service::interchange::{ImportOptions, export_vcards, import_vcards};
//! use cardex_service::export::ExportOptions;
//!
//! let text = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n";
//! let envelopes = import_vcards(text, &ImportOptions::default()).unwrap();
//! let out = export_vcards(&envelopes, &ExportOptions::default());
//! assert!(out.contains("FN:Jane Doe\r\n"));
//! ```

pub mod adapter;
pub mod envelope;
pub mod error;
pub mod export;
pub mod interchange;
pub mod normalize;
pub mod validate;

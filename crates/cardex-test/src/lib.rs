//! cardex integration test support.
//!
//! Sample documents and option presets shared by the tests under `tests/`.

use cardex_service::adapter::AdapterOptions;
use cardex_service::export::ExportOptions;
use cardex_service::interchange::ImportOptions;
use chrono::{DateTime, Utc};

pub mod fixtures;

/// Import options with a fixed import timestamp.
#[must_use]
pub fn fixed_import_options() -> ImportOptions {
    ImportOptions {
        adapter: AdapterOptions {
            imported_at: Some(DateTime::<Utc>::UNIX_EPOCH),
            ..AdapterOptions::default()
        },
        ..ImportOptions::default()
    }
}

/// Export options with a fixed `REV`.
#[must_use]
pub fn fixed_export_options() -> ExportOptions {
    ExportOptions {
        revision: Some(DateTime::<Utc>::UNIX_EPOCH),
        ..ExportOptions::default()
    }
}

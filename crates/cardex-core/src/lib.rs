//! Shared building blocks for the cardex workspace.
//!
//! Holds the pieces every other crate leans on: the core error type,
//! interchange constants, the closed card-type and precedence vocabularies,
//! and the settings loader used by the `cardex` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;

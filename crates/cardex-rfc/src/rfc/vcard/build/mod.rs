//! vCard serialization.
//!
//! Escaping, folding and content line assembly. What goes on each line is
//! decided by the exporter.

mod escape;
mod fold;
mod line;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use line::{PropertyLine, serialize_block};

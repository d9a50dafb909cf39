//! vCard grammar support for cardex.
//!
//! Turns interchange text into ordered property records and writes escaped,
//! folded content lines back out. Field meaning is left to the callers.

pub mod rfc;

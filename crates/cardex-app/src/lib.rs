//! Command-line harness for the cardex services.

pub mod command;

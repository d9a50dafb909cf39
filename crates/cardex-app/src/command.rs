//! Argument parsing and command execution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardex_core::config::{ExportConfig, ImportConfig, Settings};
use cardex_service::adapter::AdapterOptions;
use cardex_service::export::ExportOptions;
use cardex_service::interchange::{
    ImportOptions, envelopes_from_json, envelopes_to_json, export_vcards, import_vcards,
};
use clap::{Parser, Subcommand};

/// Converts between vCard text and card envelope JSON
#[derive(Parser, Debug)]
#[command(name = "cardex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// vCard text in, envelope JSON out
    Import {
        /// Path to a .vcf file
        path: PathBuf,
    },
    /// Envelope JSON in, vCard text out
    Export {
        /// Path to a JSON array of envelopes
        path: PathBuf,
    },
}

/// ## Errors
/// Returns an error if the configured precedence is unknown.
pub fn import_options(config: &ImportConfig) -> Result<ImportOptions> {
    Ok(ImportOptions {
        adapter: AdapterOptions {
            owner_id: config.owner_id.clone(),
            source: config.source.clone(),
            confidence: config.confidence,
            precedence: config.precedence()?,
            ..AdapterOptions::default()
        },
        strict: config.strict,
        normalize: config.normalize,
    })
}

#[must_use]
pub fn export_options(config: &ExportConfig) -> ExportOptions {
    ExportOptions {
        version: config.version.clone(),
        include_photo: config.include_photo,
        fold_lines: config.fold_lines,
        revision: None,
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// ## Summary
/// Runs a command and returns what should be printed.
///
/// ## Errors
/// Returns an error if the input cannot be read, parsed or converted.
#[tracing::instrument(skip(settings))]
pub fn run(command: &Command, settings: &Settings) -> Result<String> {
    match command {
        Command::Import { path } => {
            let options = import_options(&settings.import)?;
            let text = read(path)?;
            let envelopes = import_vcards(&text, &options)
                .with_context(|| format!("failed to import {}", path.display()))?;
            tracing::info!(count = envelopes.len(), "Imported envelopes");
            Ok(envelopes_to_json(&envelopes)?)
        }
        Command::Export { path } => {
            let json = read(path)?;
            let envelopes = envelopes_from_json(&json)
                .with_context(|| format!("failed to read envelopes from {}", path.display()))?;
            tracing::info!(count = envelopes.len(), "Exporting envelopes");
            Ok(export_vcards(&envelopes, &export_options(&settings.export)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_core::types::Precedence;

    fn import_config() -> ImportConfig {
        ImportConfig {
            source: "upload".into(),
            confidence: 0.5,
            precedence: "user_input".into(),
            strict: true,
            normalize: false,
            owner_id: Some("o".into()),
        }
    }

    #[test]
    fn parses_commands() {
        let cli = Cli::try_parse_from(["cardex", "import", "a.vcf"]).unwrap();
        assert_eq!(cli.command, Command::Import { path: "a.vcf".into() });

        let cli = Cli::try_parse_from(["cardex", "export", "a.json"]).unwrap();
        assert_eq!(cli.command, Command::Export { path: "a.json".into() });
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["cardex"]).is_err());
        assert!(Cli::try_parse_from(["cardex", "import"]).is_err());
        assert!(Cli::try_parse_from(["cardex", "import", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["cardex", "convert", "a"]).is_err());
    }

    #[test]
    fn help_lists_subcommands() {
        let err = Cli::try_parse_from(["cardex", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let help = err.to_string();
        assert!(help.contains("import"));
        assert!(help.contains("export"));
    }

    #[test]
    fn settings_become_options() {
        let import = import_options(&import_config()).unwrap();
        assert!(import.strict);
        assert!(!import.normalize);
        assert_eq!(import.adapter.source, "upload");
        assert_eq!(import.adapter.owner_id.as_deref(), Some("o"));
        assert_eq!(import.adapter.precedence, Precedence::UserInput);

        let export = export_options(&ExportConfig {
            version: "3.0".into(),
            include_photo: false,
            fold_lines: true,
        });
        assert!(!export.include_photo);
        assert_eq!(export.revision, None);
    }

    #[test]
    fn unknown_precedence_is_reported() {
        let config = ImportConfig {
            precedence: "guess".into(),
            ..import_config()
        };
        let err = import_options(&config).unwrap_err();
        assert!(err.to_string().contains("guess"));
    }

    #[test_log::test]
    fn missing_file_is_reported() {
        let settings = Settings::load().unwrap();
        let command = Command::Import {
            path: "/nonexistent/cardex.vcf".into(),
        };
        let err = run(&command, &settings).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}

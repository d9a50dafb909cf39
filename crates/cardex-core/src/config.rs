use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_CONFIDENCE, DEFAULT_SOURCE, DEFAULT_VCARD_VERSION};
use crate::error::{CoreError, CoreResult};
use crate::types::Precedence;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub import: ImportConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied to every import run by the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// Free-text origin tag written to envelope provenance.
    pub source: String,
    pub confidence: f64,
    /// Provenance precedence name, e.g. `imported` or `user_input`.
    pub precedence: String,
    /// Abort on the first structural error instead of skipping it.
    pub strict: bool,
    /// Run the normalizer over adapted envelopes.
    pub normalize: bool,
    pub owner_id: Option<String>,
}

impl ImportConfig {
    /// ## Errors
    /// Returns [`CoreError::UnknownPrecedence`] for an unrecognized name.
    pub fn precedence(&self) -> CoreResult<Precedence> {
        self.precedence.trim().parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub version: String,
    pub include_photo: bool,
    pub fold_lines: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, an optional `cardex.toml`, and
    /// `CARDEX_*` environment variables, in increasing order of precedence.
    ///
    /// Nested keys use a double underscore, e.g. `CARDEX_EXPORT__FOLD_LINES`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails, or if the loaded values are out of range.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("import.source", DEFAULT_SOURCE)?
            .set_default("import.confidence", DEFAULT_CONFIDENCE)?
            .set_default("import.precedence", Precedence::Imported.as_str())?
            .set_default("import.strict", false)?
            .set_default("import.normalize", true)?
            .set_default("export.version", DEFAULT_VCARD_VERSION)?
            .set_default("export.include_photo", true)?
            .set_default("export.fold_lines", true)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("cardex.toml").required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix("CARDEX")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Errors
    /// Returns [`CoreError::ConfigError`] for a confidence outside `0..=1`
    /// or a blank export version, and [`CoreError::UnknownPrecedence`] for
    /// an unrecognized precedence.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.import.confidence) {
            return Err(CoreError::ConfigError(format!(
                "import.confidence must be within 0..=1, got {}",
                self.import.confidence
            )));
        }
        if self.export.version.trim().is_empty() {
            return Err(CoreError::ConfigError("export.version is blank".to_string()));
        }
        self.import.precedence()?;
        Ok(())
    }
}

/// ## Summary
/// Loads settings after reading a `.env` file, if one exists.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "Settings loaded");
    Ok(settings)
}

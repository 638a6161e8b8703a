//! mldev_options: mldev.json parsing.
//!
//! The configuration file names the source files to scan and how severe a
//! character literal left open is.

use mldev_diagnostics::DiagnosticCategory;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "mldev.json";

/// How a diagnostic is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Off,
}

impl Severity {
    /// The category diagnostics are raised with, or `None` when switched off.
    pub fn category(self) -> Option<DiagnosticCategory> {
        match self {
            Severity::Error => Some(DiagnosticCategory::Error),
            Severity::Warning => Some(DiagnosticCategory::Warning),
            Severity::Off => None,
        }
    }
}

/// The mldev.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlConfig {
    pub unterminated_char_literal: Option<Severity>,
    /// Source files, relative to the directory holding the config file.
    pub files: Option<Vec<String>>,
}

impl MlConfig {
    pub fn unterminated_char_literal(&self) -> Severity {
        self.unterminated_char_literal.unwrap_or_default()
    }

    /// The configured files joined onto `config_path`'s directory.
    pub fn resolve_files(&self, config_path: &Path) -> Vec<PathBuf> {
        let root_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.files
            .iter()
            .flatten()
            .map(|f| root_dir.join(f))
            .collect()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse an mldev.json file from a string.
pub fn parse_config(content: &str) -> Result<MlConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse an mldev.json file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<MlConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}

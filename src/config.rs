//! Run configuration: target directory, keyword list, replacement token.
//!
//! Values come from built-in defaults, optionally overridden by a TOML file
//! (an explicit `--config` path, or `docscrub/config.toml` in the platform
//! config directory), with command-line flags applied on top by the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned by both stages (non-recursive).
    pub directory: PathBuf,
    /// Sensitive substrings, replaced in order in file names and text.
    pub keywords: Vec<String>,
    /// The placeholder every keyword occurrence is replaced with.
    pub replacement: String,
    /// Path or command name of the LibreOffice executable.
    pub soffice: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./docs"),
            keywords: vec!["特朗普".to_string(), "川普".to_string()],
            replacement: "XX公司".to_string(),
            soffice: None,
        }
    }
}

impl Config {
    /// Load configuration from `explicit` if given, otherwise from the
    /// default config location if present, otherwise built-in defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("docscrub").join("config.toml");
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file '{}'", path.display()))
    }

    /// The command used to invoke LibreOffice, falling back to `soffice`
    /// on the PATH when no explicit path is configured.
    pub fn soffice_command(&self) -> &str {
        self.soffice.as_deref().unwrap_or("soffice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_values() {
        let config = Config::default();
        assert_eq!(config.directory, PathBuf::from("./docs"));
        assert_eq!(config.keywords, vec!["特朗普", "川普"]);
        assert_eq!(config.replacement, "XX公司");
        assert_eq!(config.soffice_command(), "soffice");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let config: Config = toml::from_str(
            r#"
            keywords = ["acme", "Acme Corp"]
            replacement = "[redacted]"
            "#,
        )
        .unwrap();
        assert_eq!(config.keywords, vec!["acme", "Acme Corp"]);
        assert_eq!(config.replacement, "[redacted]");
        assert_eq!(config.directory, PathBuf::from("./docs"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = toml::from_str("keyword = [\"typo\"]");
        assert!(result.is_err());
    }

    #[test]
    fn configured_soffice_path_wins() {
        let config: Config = toml::from_str("soffice = \"/opt/libreoffice/soffice\"").unwrap();
        assert_eq!(config.soffice_command(), "/opt/libreoffice/soffice");
    }
}

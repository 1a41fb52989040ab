//! Description style configuration.
//!
//! The rendered descriptions are a compatibility contract, including two
//! wording quirks of the legacy output. This module lets a caller opt into
//! corrected wording, either in code or from a TOML file:
//!
//! ```toml
//! [description]
//! legacy_unspecified_elevation = false
//! trailing_authority_separator = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading a style configuration.
#[derive(Debug, thiserror::Error)]
pub enum StyleConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No zmanim.toml found in standard locations")]
    NotFound,
}

/// Wording switches for the description formatter.
///
/// The default is the legacy, byte-compatible style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionStyle {
    /// Render unspecified elevation as `affect by elevation unspecified`.
    #[serde(default = "default_true")]
    pub legacy_unspecified_elevation: bool,
    /// Write `", "` after the last supporting authority as well.
    #[serde(default = "default_true")]
    pub trailing_authority_separator: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DescriptionStyle {
    fn default() -> Self {
        Self::legacy()
    }
}

impl DescriptionStyle {
    pub fn legacy() -> Self {
        Self {
            legacy_unspecified_elevation: true,
            trailing_authority_separator: true,
        }
    }

    pub fn corrected() -> Self {
        Self {
            legacy_unspecified_elevation: false,
            trailing_authority_separator: false,
        }
    }
}

/// Top-level layout of a style configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub description: DescriptionStyle,
}

impl StyleConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Arguments
    /// * `content` - TOML document with an optional `[description]` table
    ///
    /// # Returns
    /// * `Ok(StyleConfig)` with legacy values for any missing key
    /// * `Err(StyleConfigError::Parse)` if the TOML is invalid
    pub fn from_toml_str(content: &str) -> Result<Self, StyleConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(StyleConfig)` if successful
    /// * `Err(StyleConfigError::Read)` if the file cannot be read
    /// * `Err(StyleConfigError::Parse)` if the file cannot be parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StyleConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded description style from {}", path.display());
        Ok(config)
    }

    /// Load the configuration from the default location.
    ///
    /// Searches for `zmanim.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(StyleConfig)` if found and parsed successfully
    /// * `Err(StyleConfigError::NotFound)` if no config file exists
    /// * `Err(StyleConfigError)` if the file found cannot be read or parsed
    pub fn from_default_location() -> Result<Self, StyleConfigError> {
        Self::from_search_paths(&[PathBuf::from("zmanim.toml"), PathBuf::from("../zmanim.toml")])
    }

    /// Load the first existing file among `search_paths`.
    ///
    /// # Arguments
    /// * `search_paths` - Candidate files, in priority order
    ///
    /// # Returns
    /// * `Ok(StyleConfig)` from the first path that exists
    /// * `Err(StyleConfigError::NotFound)` if none exists
    pub fn from_search_paths(search_paths: &[PathBuf]) -> Result<Self, StyleConfigError> {
        for path in search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(StyleConfigError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(DescriptionStyle::default(), DescriptionStyle::legacy());
        assert_eq!(StyleConfig::default().description, DescriptionStyle::legacy());
    }

    #[test]
    fn test_parse_corrected_config() {
        let toml = r#"
[description]
legacy_unspecified_elevation = false
trailing_authority_separator = false
"#;

        let config = StyleConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.description, DescriptionStyle::corrected());
    }

    #[test]
    fn test_missing_keys_fall_back_to_legacy() {
        let toml = r#"
[description]
trailing_authority_separator = false
"#;

        let config = StyleConfig::from_toml_str(toml).unwrap();
        assert!(config.description.legacy_unspecified_elevation);
        assert!(!config.description.trailing_authority_separator);

        let empty = StyleConfig::from_toml_str("").unwrap();
        assert_eq!(empty.description, DescriptionStyle::legacy());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = StyleConfig::from_toml_str("[description]\nlegacy_unspecified_elevation = 3");
        assert!(matches!(result, Err(StyleConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[description]").unwrap();
        writeln!(file, "legacy_unspecified_elevation = false").unwrap();

        let config = StyleConfig::from_file(file.path()).unwrap();
        assert!(!config.description.legacy_unspecified_elevation);
        assert!(config.description.trailing_authority_separator);
    }

    #[test]
    fn test_search_paths_use_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "[description]\ntrailing_authority_separator = false\n").unwrap();
        std::fs::write(&second, "[description]\nlegacy_unspecified_elevation = false\n").unwrap();

        let config = StyleConfig::from_search_paths(&[missing, first, second]).unwrap();
        assert!(!config.description.trailing_authority_separator);
        assert!(config.description.legacy_unspecified_elevation);
    }

    #[test]
    fn test_search_paths_none_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = StyleConfig::from_search_paths(&[dir.path().join("zmanim.toml")]);
        assert!(matches!(result, Err(StyleConfigError::NotFound)));
    }

    #[test]
    fn test_default_location_without_config() {
        // Neither the crate directory nor the workspace root ships a zmanim.toml.
        let result = StyleConfig::from_default_location();
        assert!(matches!(result, Err(StyleConfigError::NotFound)));
    }

    #[test]
    fn test_from_missing_file() {
        let result = StyleConfig::from_file("/nonexistent/zmanim.toml");
        assert!(matches!(result, Err(StyleConfigError::Read { .. })));
    }
}

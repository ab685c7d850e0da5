use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::codec::CodecKind;
use crate::features::compression::CompressionAlgorithm;

/// Line width used when no configuration layer sets one.
pub const DEFAULT_WRAP: usize = 76;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a compression algorithm.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CompressionConfig {
    /// Default compression level
    pub default_level: u32,
}

/// Global settings for basex.
///
/// Every field is optional so that a later layer only overrides what it
/// actually sets.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Codec used when the command line names none
    #[serde(default)]
    pub default_codec: Option<CodecKind>,
    /// Encoded line width; 0 disables wrapping
    #[serde(default)]
    pub wrap: Option<usize>,
    /// Algorithm picked by a bare `--compress`
    #[serde(default)]
    pub compression: Option<CompressionAlgorithm>,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    fn merge(&mut self, other: Settings) {
        if other.default_codec.is_some() {
            self.default_codec = other.default_codec;
        }
        if other.wrap.is_some() {
            self.wrap = other.wrap;
        }
        if other.compression.is_some() {
            self.compression = other.compression;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }
}

/// Settings loaded from `basex.toml` files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct BasexConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
    /// Per-algorithm compression settings, keyed by algorithm name
    #[serde(default)]
    pub compression: HashMap<String, CompressionConfig>,
}

impl BasexConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_toml(include_str!("../../basex.toml"))
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Layers, lowest priority first:
    /// 1. Built-in `basex.toml`
    /// 2. `~/.config/basex/basex.toml`
    /// 3. `./basex.toml`
    pub fn load_with_overrides() -> Result<Self, ConfigError> {
        let mut paths = Vec::with_capacity(2);
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("basex").join("basex.toml"));
        }
        paths.push(PathBuf::from("basex.toml"));

        Self::load_layered(&paths)
    }

    /// Loads the built-in configuration and merges each existing file in
    /// `paths` over it. A file that fails to load is skipped with a warning.
    pub fn load_layered<P: AsRef<Path>>(paths: &[P]) -> Result<Self, ConfigError> {
        let mut config = Self::load_default()?;

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }

            match Self::load_from_file(path) {
                Ok(layer) => {
                    log::debug!("merged configuration from {}", path.display());
                    config.merge(layer);
                }
                Err(e) => log::warn!("ignoring configuration {}: {e}", path.display()),
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one, field by field.
    pub fn merge(&mut self, other: BasexConfig) {
        self.settings.merge(other.settings);
        self.compression.extend(other.compression);
    }

    pub fn wrap(&self) -> usize {
        self.settings.wrap.unwrap_or(DEFAULT_WRAP)
    }

    /// Configured level for `algorithm`, falling back to its built-in default.
    pub fn compression_level(&self, algorithm: CompressionAlgorithm) -> u32 {
        self.compression
            .get(algorithm.as_str())
            .map(|c| c.default_level)
            .unwrap_or_else(|| algorithm.default_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_default_config() {
        let config = BasexConfig::load_default().unwrap();
        assert_eq!(config.wrap(), 76);
        assert_eq!(config.settings.compression, Some(CompressionAlgorithm::Zstd));
        assert_eq!(config.settings.log_level.as_deref(), Some("warn"));
        assert_eq!(config.settings.default_codec, None);
        assert_eq!(config.compression_level(CompressionAlgorithm::Zstd), 9);
        assert_eq!(config.compression_level(CompressionAlgorithm::Gzip), 6);
    }

    #[test]
    fn test_merge_is_field_wise() {
        let mut config = BasexConfig::load_default().unwrap();
        let layer = BasexConfig::from_toml(
            r#"
[settings]
default_codec = "base91"

[compression.gzip]
default_level = 9
"#,
        )
        .unwrap();

        config.merge(layer);

        assert_eq!(config.settings.default_codec, Some(CodecKind::Base91));
        assert_eq!(config.wrap(), 76);
        assert_eq!(config.compression_level(CompressionAlgorithm::Gzip), 9);
        assert_eq!(config.compression_level(CompressionAlgorithm::Zstd), 9);
    }

    #[test]
    fn test_empty_config_falls_back() {
        let config = BasexConfig::from_toml("").unwrap();
        assert_eq!(config.wrap(), DEFAULT_WRAP);
        assert_eq!(config.compression_level(CompressionAlgorithm::Lz4), 0);
    }

    #[test]
    fn test_unknown_codec_is_rejected() {
        let err = BasexConfig::from_toml("[settings]\ndefault_codec = \"base7\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_layered_later_wins() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("user.toml");
        let local = dir.path().join("local.toml");
        fs::write(&user, "[settings]\nwrap = 64\ndefault_codec = \"b32\"").unwrap();
        fs::write(&local, "[settings]\nwrap = 0").unwrap();

        let config = BasexConfig::load_layered(&[&user, &local]).unwrap();
        assert_eq!(config.wrap(), 0);
        assert_eq!(config.settings.default_codec, Some(CodecKind::Base32));
    }

    #[test]
    fn test_load_layered_skips_broken_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[settings\nwrap = ").unwrap();
        let missing = dir.path().join("missing.toml");

        let config = BasexConfig::load_layered(&[broken, missing]).unwrap();
        assert_eq!(config, BasexConfig::load_default().unwrap());
    }

    #[test]
    fn test_load_from_missing_file_reports_path() {
        let err = BasexConfig::load_from_file(Path::new("/nonexistent/basex.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/basex.toml"));
    }
}

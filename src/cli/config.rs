use basex::{BasexConfig, CodecKind, CompressionAlgorithm};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Picks the codec and input file from the positional arguments.
///
/// With a `default_codec` configured, a single positional that is not a
/// codec name but names an existing file (or `-`) is taken as the input.
pub fn resolve_codec(
    config: &BasexConfig,
    codec: Option<&str>,
    file: Option<PathBuf>,
) -> Result<(CodecKind, Option<PathBuf>), Box<dyn std::error::Error>> {
    let Some(name) = codec else {
        let kind = config.settings.default_codec.ok_or(
            "no codec given and no default_codec configured (run `basex codecs` to list codecs)",
        )?;
        return Ok((kind, file));
    };

    match name.parse::<CodecKind>() {
        Ok(kind) => Ok((kind, file)),
        Err(err) => match config.settings.default_codec {
            Some(kind) if file.is_none() && (name == "-" || Path::new(name).exists()) => {
                Ok((kind, Some(PathBuf::from(name))))
            }
            _ => Err(err.into()),
        },
    }
}

/// Algorithm for `--compress`, falling back to the configured one for a bare flag.
pub fn resolve_compression(
    config: &BasexConfig,
    flag: Option<Option<CompressionAlgorithm>>,
) -> Option<CompressionAlgorithm> {
    flag.map(|algo| {
        algo.or(config.settings.compression)
            .unwrap_or(CompressionAlgorithm::Zstd)
    })
}

/// Level from the command line, then the configuration, then the algorithm default.
pub fn get_compression_level(
    config: &BasexConfig,
    cli_level: Option<u32>,
    algo: CompressionAlgorithm,
) -> u32 {
    cli_level.unwrap_or_else(|| config.compression_level(algo))
}

/// Installs the logger.
///
/// Returns whether the level is still open to the configuration, i.e. neither
/// `--log-level` nor `RUST_LOG` chose one.
pub fn init_logger(flag: Option<LevelFilter>) -> bool {
    let env_set = std::env::var_os("RUST_LOG").is_some();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"));
    builder.format_timestamp(None);
    if let Some(level) = flag {
        builder.filter_level(level);
    }
    let _ = builder.try_init();

    let configurable = flag.is_none() && !env_set;
    if configurable {
        log::set_max_level(LevelFilter::Warn);
    }
    configurable
}

/// Applies `settings.log_level` once the configuration is loaded.
pub fn apply_config_log_level(config: &BasexConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(level) = &config.settings.log_level {
        let level: LevelFilter = level
            .parse()
            .map_err(|_| format!("invalid log_level '{level}' in configuration"))?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_default(codec: Option<CodecKind>) -> BasexConfig {
        let mut config = BasexConfig::load_default().unwrap();
        config.settings.default_codec = codec;
        config
    }

    #[test]
    fn test_explicit_codec_wins() {
        let config = config_with_default(Some(CodecKind::Base91));
        let (kind, file) = resolve_codec(&config, Some("b64"), None).unwrap();
        assert_eq!(kind, CodecKind::Base64);
        assert_eq!(file, None);
    }

    #[test]
    fn test_missing_codec_uses_default() {
        let config = config_with_default(Some(CodecKind::Base85));
        let (kind, _) = resolve_codec(&config, None, None).unwrap();
        assert_eq!(kind, CodecKind::Base85);

        let config = config_with_default(None);
        assert!(resolve_codec(&config, None, None).is_err());
    }

    #[test]
    fn test_lone_positional_file_with_default() {
        let config = config_with_default(Some(CodecKind::Base32));
        let (kind, file) = resolve_codec(&config, Some("-"), None).unwrap();
        assert_eq!(kind, CodecKind::Base32);
        assert_eq!(file, Some(PathBuf::from("-")));
    }

    #[test]
    fn test_typo_still_reports_codec_error() {
        let config = config_with_default(Some(CodecKind::Base32));
        let err = resolve_codec(&config, Some("bas64"), None).unwrap_err();
        assert!(err.to_string().contains("did you mean 'base64'"));
    }

    #[test]
    fn test_compression_resolution() {
        let config = BasexConfig::load_default().unwrap();
        assert_eq!(resolve_compression(&config, None), None);
        assert_eq!(
            resolve_compression(&config, Some(None)),
            Some(CompressionAlgorithm::Zstd)
        );
        assert_eq!(
            resolve_compression(&config, Some(Some(CompressionAlgorithm::Gzip))),
            Some(CompressionAlgorithm::Gzip)
        );
        assert_eq!(get_compression_level(&config, Some(3), CompressionAlgorithm::Zstd), 3);
        assert_eq!(get_compression_level(&config, None, CompressionAlgorithm::Zstd), 9);
    }
}

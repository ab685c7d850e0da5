use serde::Deserialize;
use std::fmt;
use std::io::{Read, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CompressionAlgorithm {
    Zstd,
    Gzip,
    Lz4,
}

/// Errors from the compression collaborator.
#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unknown compression algorithm '{0}' (expected zstd, gzip or lz4)")]
    UnknownAlgorithm(String),
    #[error("{algorithm} level {level} is outside {}..={}", .range.start(), .range.end())]
    InvalidLevel {
        algorithm: CompressionAlgorithm,
        level: u32,
        range: RangeInclusive<u32>,
    },
    #[error("{0} support is not compiled in (enable the `native-compression` feature)")]
    Unavailable(CompressionAlgorithm),
    #[error("{algorithm} stream error: {source}")]
    Stream {
        algorithm: CompressionAlgorithm,
        #[source]
        source: std::io::Error,
    },
}

impl CompressionAlgorithm {
    pub const ALL: [CompressionAlgorithm; 3] = [
        CompressionAlgorithm::Zstd,
        CompressionAlgorithm::Gzip,
        CompressionAlgorithm::Lz4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionAlgorithm::Zstd => "zstd",
            CompressionAlgorithm::Gzip => "gzip",
            CompressionAlgorithm::Lz4 => "lz4",
        }
    }

    /// Level used when neither the command line nor the configuration sets one.
    pub fn default_level(&self) -> u32 {
        match self {
            CompressionAlgorithm::Zstd => 9,
            CompressionAlgorithm::Gzip => 6,
            CompressionAlgorithm::Lz4 => 0,
        }
    }

    /// Accepted levels. For lz4, 0 selects the fast mode and 1-12 the
    /// high-compression mode.
    pub fn level_range(&self) -> RangeInclusive<u32> {
        match self {
            CompressionAlgorithm::Zstd => 1..=19,
            CompressionAlgorithm::Gzip => 0..=9,
            CompressionAlgorithm::Lz4 => 0..=12,
        }
    }

    /// Whether this build can run the algorithm.
    pub fn is_available(&self) -> bool {
        match self {
            CompressionAlgorithm::Gzip => true,
            CompressionAlgorithm::Zstd | CompressionAlgorithm::Lz4 => {
                cfg!(feature = "native-compression")
            }
        }
    }
}

impl fmt::Display for CompressionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zstd" | "zst" => Ok(CompressionAlgorithm::Zstd),
            "gzip" | "gz" => Ok(CompressionAlgorithm::Gzip),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            _ => Err(CompressionError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for CompressionAlgorithm {
    type Error = CompressionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Compress data using the specified algorithm and level.
pub fn compress(
    data: &[u8],
    algorithm: CompressionAlgorithm,
    level: u32,
) -> Result<Vec<u8>, CompressionError> {
    let range = algorithm.level_range();
    if !range.contains(&level) {
        return Err(CompressionError::InvalidLevel {
            algorithm,
            level,
            range,
        });
    }

    let compressed = match algorithm {
        CompressionAlgorithm::Zstd => compress_zstd(data, level),
        CompressionAlgorithm::Gzip => compress_gzip(data, level),
        CompressionAlgorithm::Lz4 => compress_lz4(data, level),
    }?;

    log::debug!(
        "{algorithm} level {level}: {} -> {} bytes",
        data.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Decompress data using the specified algorithm.
///
/// `size_hint` only pre-sizes the output buffer; output longer than the hint
/// is still returned in full.
pub fn decompress(
    data: &[u8],
    algorithm: CompressionAlgorithm,
    size_hint: usize,
) -> Result<Vec<u8>, CompressionError> {
    let decompressed = match algorithm {
        CompressionAlgorithm::Zstd => decompress_zstd(data, size_hint),
        CompressionAlgorithm::Gzip => decompress_gzip(data, size_hint),
        CompressionAlgorithm::Lz4 => decompress_lz4(data),
    }?;

    log::debug!(
        "{algorithm}: {} -> {} bytes (hint {size_hint})",
        data.len(),
        decompressed.len()
    );
    Ok(decompressed)
}

fn stream_error(algorithm: CompressionAlgorithm) -> impl FnOnce(std::io::Error) -> CompressionError {
    move |source| CompressionError::Stream { algorithm, source }
}

fn compress_gzip(data: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(stream_error(CompressionAlgorithm::Gzip))?;
    encoder.finish().map_err(stream_error(CompressionAlgorithm::Gzip))
}

fn decompress_gzip(data: &[u8], size_hint: usize) -> Result<Vec<u8>, CompressionError> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut result = Vec::with_capacity(size_hint);
    decoder
        .read_to_end(&mut result)
        .map_err(stream_error(CompressionAlgorithm::Gzip))?;
    Ok(result)
}

#[cfg(feature = "native-compression")]
fn compress_zstd(data: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    zstd::encode_all(data, level as i32).map_err(stream_error(CompressionAlgorithm::Zstd))
}

#[cfg(feature = "native-compression")]
fn decompress_zstd(data: &[u8], size_hint: usize) -> Result<Vec<u8>, CompressionError> {
    let mut result = Vec::with_capacity(size_hint);
    zstd::stream::copy_decode(data, &mut result)
        .map_err(stream_error(CompressionAlgorithm::Zstd))?;
    Ok(result)
}

#[cfg(feature = "native-compression")]
fn compress_lz4(data: &[u8], level: u32) -> Result<Vec<u8>, CompressionError> {
    use lz4::block::CompressionMode;

    let mode = match level {
        0 => None,
        level => Some(CompressionMode::HIGHCOMPRESSION(level as i32)),
    };
    // Size-prefixed so decompression needs no external length.
    lz4::block::compress(data, mode, true).map_err(stream_error(CompressionAlgorithm::Lz4))
}

#[cfg(feature = "native-compression")]
fn decompress_lz4(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    lz4::block::decompress(data, None).map_err(stream_error(CompressionAlgorithm::Lz4))
}

#[cfg(not(feature = "native-compression"))]
fn compress_zstd(_data: &[u8], _level: u32) -> Result<Vec<u8>, CompressionError> {
    Err(CompressionError::Unavailable(CompressionAlgorithm::Zstd))
}

#[cfg(not(feature = "native-compression"))]
fn decompress_zstd(_data: &[u8], _size_hint: usize) -> Result<Vec<u8>, CompressionError> {
    Err(CompressionError::Unavailable(CompressionAlgorithm::Zstd))
}

#[cfg(not(feature = "native-compression"))]
fn compress_lz4(_data: &[u8], _level: u32) -> Result<Vec<u8>, CompressionError> {
    Err(CompressionError::Unavailable(CompressionAlgorithm::Lz4))
}

#[cfg(not(feature = "native-compression"))]
fn decompress_lz4(_data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    Err(CompressionError::Unavailable(CompressionAlgorithm::Lz4))
}

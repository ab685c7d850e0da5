use basex::CompressionAlgorithm;
use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Codec to encode with; may be omitted when `default_codec` is configured
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided or `-`)
    pub file: Option<PathBuf>,

    /// Wrap encoded lines after COLS symbols (0 disables wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Compress before encoding (zstd, gzip, lz4); bare flag uses the configured algorithm
    #[arg(short = 'c', long, value_name = "ALG")]
    pub compress: Option<Option<CompressionAlgorithm>>,

    /// Compression level
    #[arg(long)]
    pub level: Option<u32>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codec to decode from; may be omitted when `default_codec` is configured
    pub codec: Option<String>,

    /// Input file (reads from stdin if not provided or `-`)
    pub file: Option<PathBuf>,

    /// Drop every byte the codec could not have produced before decoding
    #[arg(short = 'i', long)]
    pub ignore_garbage: bool,

    /// Decompress after decoding
    #[arg(long, value_name = "ALG")]
    pub decompress: Option<CompressionAlgorithm>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

//! Binary-to-text codecs: Base32, Base64, Base85, Base91 and Base122.
//!
//! Every codec is a zero-sized type implementing [`Codec`]. Encoding always
//! succeeds; decoding reports bytes a strict codec does not accept.
//!
//! ```
//! use basex::{Base91, Codec};
//!
//! let encoded = Base91.encode(b"hello");
//! assert_eq!(Base91.decode(&encoded).unwrap(), b"hello");
//! ```
//!
//! To pick a codec at runtime, parse a [`CodecKind`]:
//!
//! ```
//! use basex::CodecKind;
//!
//! let codec = "b85".parse::<CodecKind>().unwrap().codec();
//! assert_eq!(codec.encode(&[0, 0, 0, 0]), b"00000");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::accumulator::BitAccumulator;
pub use crate::core::alphabet::{Alphabet, INVALID};
pub use crate::core::codec::{Codec, CodecKind, DecodePolicy};
pub use crate::core::config::{BasexConfig, CompressionConfig, ConfigError, DEFAULT_WRAP, Settings};
pub use crate::core::sink::{Sink, SliceSink};
pub use encoders::errors::{BufferTooSmall, CodecNotFoundError, DecodeError, find_closest_name};
pub use encoders::{Base32, Base64, Base85, Base91, Base122};
pub use features::{
    CompressionAlgorithm, CompressionError, CpuFeatures, compress, cpu_features, decompress,
};

/// Per-codec modules, for their alphabets and codec-specific constants.
pub mod codecs {
    pub use crate::encoders::{base32, base64, base85, base91, base122};
}

/// Package version, `major.minor.patch`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version() -> &'static str {
    VERSION
}

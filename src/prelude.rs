//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use basex::prelude::*;
//!
//! let encoded = Base64.encode(b"Hello");
//! assert_eq!(encoded, b"SGVsbG8=");
//! ```

pub use crate::{
    Base32, Base64, Base85, Base91, Base122, BufferTooSmall, Codec, CodecKind, CompressionAlgorithm,
    DecodeError, DecodePolicy, compress, decompress,
};

//! Optional features module.
//!
//! Compression and the CPU diagnostic report live here, apart from the
//! codecs themselves. No codec depends on anything in this module.

pub mod compression;
pub mod cpu;

pub use compression::{CompressionAlgorithm, CompressionError, compress, decompress};
pub use cpu::{CpuFeatures, cpu_features};

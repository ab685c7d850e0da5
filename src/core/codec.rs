use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::core::sink::{Sink, SliceSink};
use crate::encoders::errors::{BufferTooSmall, CodecNotFoundError, DecodeError, find_closest_name};
use crate::encoders::{Base32, Base64, Base85, Base91, Base122};

/// How a codec treats input bytes that are not part of its alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// The whole call fails with [`DecodeError::InvalidSymbol`].
    Strict,
    /// The byte is skipped and decoding continues. Tolerates line breaks and
    /// other noise in RFC 4648 text.
    Lenient,
    /// Every byte value carries data; there is nothing to reject.
    AcceptAll,
}

impl DecodePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodePolicy::Strict => "strict",
            DecodePolicy::Lenient => "lenient",
            DecodePolicy::AcceptAll => "accept-all",
        }
    }
}

/// A binary-to-text codec.
///
/// All methods are pure and reentrant: implementors are zero-sized, hold no
/// state, and keep their tables in read-only statics, so one codec value can
/// be shared freely between threads.
///
/// `encode_len`/`decode_len` are upper bounds for sizing buffers passed to
/// `encode_into`/`decode_into`. The `*_into` methods never allocate; instead of
/// writing past the end of a short buffer they return an error.
///
/// # Example
///
/// ```
/// use basex::{Base64, Codec};
///
/// let encoded = Base64.encode(b"foobar");
/// assert_eq!(encoded, b"Zm9vYmFy");
///
/// let mut buf = vec![0u8; Base64.decode_len(encoded.len())];
/// let n = Base64.decode_into(&encoded, &mut buf).unwrap();
/// assert_eq!(&buf[..n], b"foobar");
/// ```
pub trait Codec: Send + Sync {
    /// Short lowercase name, e.g. `"base91"`.
    fn name(&self) -> &'static str;

    fn policy(&self) -> DecodePolicy;

    /// Upper bound on the encoded size of `input_len` bytes.
    fn encode_len(&self, input_len: usize) -> usize;

    /// Upper bound on the decoded size of `input_len` symbols.
    fn decode_len(&self, input_len: usize) -> usize;

    /// Whether `byte` can appear in encoded text (padding included).
    fn is_symbol(&self, byte: u8) -> bool;

    fn encode(&self, input: &[u8]) -> Vec<u8>;

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError>;

    /// Encodes into `output`, returning the number of bytes written.
    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, BufferTooSmall>;

    /// Decodes into `output`, returning the number of bytes written.
    fn decode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError>;
}

/// Runs an infallible encode body against a fresh `Vec`.
pub(crate) fn collect<F>(capacity: usize, body: F) -> Vec<u8>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), Infallible>,
{
    let mut output = Vec::with_capacity(capacity);
    let Ok(()) = body(&mut output);
    output
}

/// Runs a decode body against a fresh `Vec`.
pub(crate) fn try_collect<F>(capacity: usize, body: F) -> Result<Vec<u8>, DecodeError>
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), DecodeError>,
{
    let mut output = Vec::with_capacity(capacity);
    body(&mut output)?;
    Ok(output)
}

/// Runs a codec body against a caller buffer and reports the bytes written.
pub(crate) fn fill<'a, F, E>(output: &'a mut [u8], body: F) -> Result<usize, E>
where
    F: FnOnce(&mut SliceSink<'a>) -> Result<(), E>,
{
    let mut sink = SliceSink::new(output);
    body(&mut sink)?;
    Ok(sink.len())
}

/// Emits every byte of `bytes` into `sink`.
#[inline]
pub(crate) fn put_all<S: Sink>(sink: &mut S, bytes: &[u8]) -> Result<(), S::Error> {
    bytes.iter().try_for_each(|&b| sink.put(b))
}

/// The five built-in codecs, for selecting one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CodecKind {
    Base32,
    Base64,
    Base85,
    Base91,
    Base122,
}

impl CodecKind {
    pub const ALL: [CodecKind; 5] = [
        CodecKind::Base32,
        CodecKind::Base64,
        CodecKind::Base85,
        CodecKind::Base91,
        CodecKind::Base122,
    ];

    pub fn codec(self) -> &'static dyn Codec {
        match self {
            CodecKind::Base32 => &Base32,
            CodecKind::Base64 => &Base64,
            CodecKind::Base85 => &Base85,
            CodecKind::Base91 => &Base91,
            CodecKind::Base122 => &Base122,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.codec().name()
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodecKind {
    type Err = CodecNotFoundError;

    /// Accepts `base91`, `b91`, `91` and the same spelled in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("base")
            .or_else(|| lower.strip_prefix('b'))
            .unwrap_or(&lower);

        match digits {
            "32" => Ok(CodecKind::Base32),
            "64" => Ok(CodecKind::Base64),
            "85" => Ok(CodecKind::Base85),
            "91" => Ok(CodecKind::Base91),
            "122" => Ok(CodecKind::Base122),
            _ => {
                let suggestion =
                    find_closest_name(&lower, CodecKind::ALL.iter().map(|kind| kind.as_str()));
                Err(CodecNotFoundError::new(s, suggestion))
            }
        }
    }
}

impl TryFrom<String> for CodecKind {
    type Error = CodecNotFoundError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("base32".parse::<CodecKind>().unwrap(), CodecKind::Base32);
        assert_eq!("B64".parse::<CodecKind>().unwrap(), CodecKind::Base64);
        assert_eq!("85".parse::<CodecKind>().unwrap(), CodecKind::Base85);
        assert_eq!(" Base91 ".parse::<CodecKind>().unwrap(), CodecKind::Base91);
        assert_eq!("base122".parse::<CodecKind>().unwrap(), CodecKind::Base122);
    }

    #[test]
    fn test_parse_suggests_close_name() {
        let err = "bas91".parse::<CodecKind>().unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("base91"));

        let err = "ascii85".parse::<CodecKind>().unwrap_err();
        assert_eq!(err.name, "ascii85");
    }

    #[test]
    fn test_names_round_trip() {
        for kind in CodecKind::ALL {
            assert_eq!(kind.to_string().parse::<CodecKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_policies() {
        assert_eq!(CodecKind::Base32.codec().policy(), DecodePolicy::Lenient);
        assert_eq!(CodecKind::Base64.codec().policy(), DecodePolicy::Lenient);
        assert_eq!(CodecKind::Base85.codec().policy(), DecodePolicy::Strict);
        assert_eq!(CodecKind::Base91.codec().policy(), DecodePolicy::Strict);
        assert_eq!(CodecKind::Base122.codec().policy(), DecodePolicy::AcceptAll);
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            codec: CodecKind,
        }
        let w: Wrapper = toml::from_str("codec = \"b85\"").unwrap();
        assert_eq!(w.codec, CodecKind::Base85);
        assert!(toml::from_str::<Wrapper>("codec = \"base7\"").is_err());
    }
}

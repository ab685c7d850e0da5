//! Base64 (RFC 4648): 3 bytes become 4 symbols, `=`-padded.

use crate::core::alphabet::Alphabet;
use crate::core::codec::{self, Codec, DecodePolicy};
use crate::encoders::chunked::{PADDING, decode_chunked, encode_chunked};
use crate::encoders::errors::{BufferTooSmall, DecodeError};

pub static ALPHABET: Alphabet<64> =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

const BITS: u32 = 6;
const GROUP: usize = 4;

/// RFC 4648 standard-alphabet Base64 with lenient decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64;

impl Codec for Base64 {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn policy(&self) -> DecodePolicy {
        DecodePolicy::Lenient
    }

    fn encode_len(&self, input_len: usize) -> usize {
        input_len.div_ceil(3) * 4
    }

    fn decode_len(&self, input_len: usize) -> usize {
        (input_len / 4) * 3 + 3
    }

    fn is_symbol(&self, byte: u8) -> bool {
        byte == PADDING || ALPHABET.contains(byte)
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        codec::collect(self.encode_len(input.len()), |out| {
            encode_chunked(input, &ALPHABET, BITS, GROUP, out)
        })
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        codec::try_collect(self.decode_len(input.len()), |out| {
            decode_chunked(input, &ALPHABET, BITS, out).map_err(DecodeError::from)
        })
    }

    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, BufferTooSmall> {
        codec::fill(output, |out| encode_chunked(input, &ALPHABET, BITS, GROUP, out))
    }

    fn decode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
        codec::fill(output, |out| {
            decode_chunked(input, &ALPHABET, BITS, out).map_err(DecodeError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4648 section 10
    const VECTORS: [(&str, &str); 7] = [
        ("", ""),
        ("f", "Zg=="),
        ("fo", "Zm8="),
        ("foo", "Zm9v"),
        ("foob", "Zm9vYg=="),
        ("fooba", "Zm9vYmE="),
        ("foobar", "Zm9vYmFy"),
    ];

    #[test]
    fn test_rfc4648_vectors() {
        for (plain, encoded) in VECTORS {
            assert_eq!(Base64.encode(plain.as_bytes()), encoded.as_bytes(), "encode {plain:?}");
            assert_eq!(
                Base64.decode(encoded.as_bytes()).unwrap(),
                plain.as_bytes(),
                "decode {encoded:?}"
            );
        }
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(Base64.encode(b"Hello, World!"), b"SGVsbG8sIFdvcmxkIQ==");
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = Base64.encode(&data);
        assert_eq!(encoded.len(), Base64.encode_len(data.len()));
        assert_eq!(Base64.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_size_formulas() {
        assert_eq!(Base64.encode_len(0), 0);
        assert_eq!(Base64.encode_len(2), 4);
        assert_eq!(Base64.encode_len(3), 4);
        assert_eq!(Base64.encode_len(4), 8);
        assert_eq!(Base64.decode_len(8), 9);
    }

    #[test]
    fn test_decode_skips_invalid_bytes() {
        assert_eq!(Base64.decode(b"Zm9v\nYmFy").unwrap(), b"foobar");
        assert_eq!(Base64.decode(b"Zm9v*YmFy").unwrap(), b"foobar");
        assert_eq!(Base64.decode(b"Zm9v-_YmFy").unwrap(), b"foobar");
    }

    #[test]
    fn test_decode_into_reports_short_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(
            Base64.decode_into(b"Zm9v", &mut buf),
            Err(DecodeError::BufferTooSmall(BufferTooSmall { capacity: 2 }))
        );
    }
}

//! Base32 (RFC 4648): 5 bytes become 8 symbols, `=`-padded.

use crate::core::alphabet::Alphabet;
use crate::core::codec::{self, Codec, DecodePolicy};
use crate::encoders::chunked::{PADDING, decode_chunked, encode_chunked};
use crate::encoders::errors::{BufferTooSmall, DecodeError};

pub static ALPHABET: Alphabet<32> = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

const BITS: u32 = 5;
const GROUP: usize = 8;

/// RFC 4648 Base32 with lenient decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base32;

impl Codec for Base32 {
    fn name(&self) -> &'static str {
        "base32"
    }

    fn policy(&self) -> DecodePolicy {
        DecodePolicy::Lenient
    }

    fn encode_len(&self, input_len: usize) -> usize {
        input_len.div_ceil(5) * 8
    }

    fn decode_len(&self, input_len: usize) -> usize {
        (input_len / 8) * 5 + 5
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

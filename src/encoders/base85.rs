//! Base85 with the RFC 1924 alphabet.
//!
//! Each 4-byte big-endian word becomes 5 base-85 digits, most significant
//! first. A trailing block of `r` bytes (1..=3) is left-aligned in a word and
//! written as its `r + 1` *least* significant digits; decoding a trailing
//! group of `k` digits rebuilds a k-digit value and emits its `k - 1` high
//! bytes. The two sides agree on length but not on content, so only
//! input whose length is a multiple of 4 round-trips.

use crate::core::alphabet::Alphabet;
use crate::core::codec::{self, Codec, DecodePolicy};
use crate::core::sink::Sink;
use crate::encoders::errors::{BufferTooSmall, DecodeError};

pub static ALPHABET: Alphabet<85> = Alphabet::new(
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
);

const NAME: &str = "base85";

/// RFC 1924 Base85 with strict decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base85;

fn encode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), S::Error> {
    let blocks = input.chunks_exact(4);
    let tail = blocks.remainder();

    for block in blocks {
        let mut value = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = ALPHABET.symbol((value % 85) as usize);
            value /= 85;
        }
        codec::put_all(out, &digits)?;
    }

    if !tail.is_empty() {
        let mut word = [0u8; 4];
        word[..tail.len()].copy_from_slice(tail);
        let mut value = u32::from_be_bytes(word);

        let mut digits = [0u8; 4];
        let digits = &mut digits[..tail.len() + 1];
        for digit in digits.iter_mut().rev() {
            *digit = ALPHABET.symbol((value % 85) as usize);
            value /= 85;
        }
        codec::put_all(out, digits)?;
    }

    Ok(())
}

/// Accumulates `digits` as a base-85 number, wrapping at 32 bits.
fn digits_value(digits: &[u8], offset: usize) -> Result<u32, DecodeError> {
    digits.iter().enumerate().try_fold(0u32, |value, (i, &byte)| {
        let digit = ALPHABET
            .index_of(byte)
            .ok_or_else(|| DecodeError::invalid_symbol(NAME, byte, offset + i))?;
        Ok(value.wrapping_mul(85).wrapping_add(u32::from(digit)))
    })
}

fn decode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), DecodeError>
where
    DecodeError: From<S::Error>,
{
    let groups = input.chunks_exact(5);
    let tail = groups.remainder();

    for (n, group) in groups.enumerate() {
        let value = digits_value(group, n * 5)?;
        codec::put_all(out, &value.to_be_bytes())?;
    }

    if !tail.is_empty() {
        let value = digits_value(tail, input.len() - tail.len())?;
        let bytes = value.to_be_bytes();
        codec::put_all(out, &bytes[..tail.len() - 1])?;
    }

    Ok(())
}

impl Codec for Base85 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn policy(&self) -> DecodePolicy {
        DecodePolicy::Strict
    }

    fn encode_len(&self, input_len: usize) -> usize {
        input_len.div_ceil(4) * 5
    }

    fn decode_len(&self, input_len: usize) -> usize {
        (input_len / 5) * 4 + 4
    }

    fn is_symbol(&self, byte: u8) -> bool {
        ALPHABET.contains(byte)
    }

    fn encode(&self, input: &[u8]) -> Vec<u8> {
        codec::collect(self.encode_len(input.len()), |out| encode_to(input, out))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        codec::try_collect(self.decode_len(input.len()), |out| decode_to(input, out))
    }

    fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, BufferTooSmall> {
        codec::fill(output, |out| encode_to(input, out))
    }

    fn decode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
        codec::fill(output, |out| decode_to(input, out))
    }
}

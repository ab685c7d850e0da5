//! Base91: variable-width 13/14-bit groups, each written as two symbols.
//!
//! The encoder takes 13 bits at a time unless that 13-bit value is 88 or
//! less, in which case it widens the group to 14 bits. Two base-91 digits
//! hold 8281 values, so a 13-bit group above 88 never needs the 14th bit,
//! and averaging slightly over 13 bits per symbol pair gives roughly 23%
//! expansion.

use crate::core::accumulator::BitAccumulator;
use crate::core::alphabet::Alphabet;
use crate::core::codec::{self, Codec, DecodePolicy};
use crate::core::sink::Sink;
use crate::encoders::errors::{BufferTooSmall, DecodeError};

pub static ALPHABET: Alphabet<91> = Alphabet::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~",
);

const NAME: &str = "base91";

/// 13-bit values at or below this are widened to 14 bits.
const WIDEN_LIMIT: u32 = 88;

/// Base91 with strict decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base91;

#[inline]
fn group_width(value: u32) -> u32 {
    if value & 0x1FFF > WIDEN_LIMIT { 13 } else { 14 }
}

#[inline]
fn put_pair<S: Sink>(out: &mut S, value: u32) -> Result<(), S::Error> {
    out.put(ALPHABET.symbol((value % 91) as usize))?;
    out.put(ALPHABET.symbol((value / 91) as usize))
}

fn encode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), S::Error> {
    let mut acc = BitAccumulator::new();

    for &byte in input {
        acc.push_lsb(u32::from(byte), 8);

        if acc.live() > 13 {
            let value = acc.take_lsb(group_width(acc.peek_lsb(13)));
            put_pair(out, value)?;
        }
    }

    if acc.live() > 0 {
        let live = acc.live();
        let value = acc.register() as u32;
        out.put(ALPHABET.symbol((value % 91) as usize))?;
        if live > 7 || value > 90 {
            out.put(ALPHABET.symbol((value / 91) as usize))?;
        }
    }

    Ok(())
}

fn decode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), DecodeError>
where
    DecodeError: From<S::Error>,
{
    let mut acc = BitAccumulator::new();
    let mut pending: Option<u32> = None;

    for (position, &byte) in input.iter().enumerate() {
        let digit = ALPHABET
            .index_of(byte)
            .map(u32::from)
            .ok_or_else(|| DecodeError::invalid_symbol(NAME, byte, position))?;

        let Some(low) = pending.take() else {
            pending = Some(digit);
            continue;
        };

        let value = low + digit * 91;
        acc.push_lsb(value, group_width(value));

        while acc.live() > 7 {
            out.put(acc.take_lsb(8) as u8)?;
        }
    }

    // An unpaired final digit carries the last partial byte.
    if let Some(low) = pending {
        let last = acc.register() | (u64::from(low) << acc.live());
        out.put(last as u8)?;
    }

    Ok(())
}

impl Codec for Base91 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn policy(&self) -> DecodePolicy {
        DecodePolicy::Strict
    }

    fn encode_len(&self, input_len: usize) -> usize {
        input_len + input_len / 4 + 4
    }

    fn decode_len(&self, input_len: usize) -> usize {
        input_len + 4
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(Base91.encode(b"a"), b"GB");
        assert_eq!(Base91.encode(b"ab"), b"#GD");
        assert_eq!(Base91.decode(b"GB").unwrap(), b"a");
        assert_eq!(Base91.decode(b"#GD").unwrap(), b"ab");
    }

    #[test]
    fn test_widened_groups_round_trip() {
        // Zero bytes always produce 13-bit values <= 88, forcing 14-bit groups.
        let data = [0u8; 64];
        let encoded = Base91.encode(&data);
        assert!(encoded.iter().all(|&b| b == b'A'));
        assert_eq!(Base91.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_expansion_stays_under_bound() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 24) as u8).collect();
        let encoded = Base91.encode(&data);
        assert!(encoded.len() <= Base91.encode_len(data.len()));
        assert!(encoded.len() < data.len() * 5 / 4);
        assert_eq!(Base91.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_odd_length_input() {
        for len in 1..32 {
            let data: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            assert_eq!(Base91.decode(&Base91.encode(&data)).unwrap(), data, "len {len}");
        }
    }

    #[test]
    fn test_invalid_symbol_aborts() {
        assert_eq!(
            Base91.decode(b"GB\"").unwrap_err(),
            DecodeError::InvalidSymbol {
                codec: "base91",
                byte: b'"',
                position: 2
            }
        );
        assert!(Base91.decode(b"G B").is_err());
        assert!(Base91.decode(b"\\").is_err());
    }

    #[test]
    fn test_alphabet_has_no_quote_or_backslash() {
        assert_eq!(ALPHABET.len(), 91);
        assert!(!ALPHABET.contains(b'"'));
        assert!(!ALPHABET.contains(b'\\'));
        assert!(!ALPHABET.contains(b'\''));
        assert!(ALPHABET.contains(b'-'));
    }
}

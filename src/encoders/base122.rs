//! Base122: 7-bit groups carried in the high half of the byte range.
//!
//! Every group is written as `0x80 | group`, so output bytes fall in
//! `0x80..=0xFF`. A byte that would collide with a reserved value is
//! preceded by the escape marker `0xC2`. The marker itself is the value of
//! group `0x42`, so that group is always escaped; the six control/markup
//! values in [`ILLEGAL`] are escaped too should they ever be produced.

use crate::core::accumulator::BitAccumulator;
use crate::core::codec::{self, Codec, DecodePolicy};
use crate::core::sink::Sink;
use crate::encoders::errors::{BufferTooSmall, DecodeError};

/// Output values that must never appear bare: NUL, LF, CR, `"`, `&`, `\`.
pub const ILLEGAL: [u8; 6] = [0x00, 0x0A, 0x0D, 0x22, 0x26, 0x5C];

/// Prefix announcing that the next byte is a literal group.
pub const ESCAPE: u8 = 0xC2;

const HIGH_BIT: u8 = 0x80;

/// Base122 codec. Decoding accepts any byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base122;

impl Base122 {
    /// Worst-case encoded size, when every group needs an escape.
    ///
    /// [`Codec::encode_len`] is the bound for output without escapes and is
    /// what almost all input needs; size a buffer with this instead when
    /// `encode_into` must not fail for any input.
    pub fn max_encode_len(&self, input_len: usize) -> usize {
        (input_len * 8).div_ceil(7) * 2
    }
}

#[inline]
pub fn is_illegal(byte: u8) -> bool {
    ILLEGAL.contains(&byte)
}

#[inline]
fn needs_escape(byte: u8) -> bool {
    byte == ESCAPE || is_illegal(byte)
}

#[inline]
fn put_group<S: Sink>(out: &mut S, group: u32) -> Result<(), S::Error> {
    let byte = HIGH_BIT | group as u8;
    if needs_escape(byte) {
        out.put(ESCAPE)?;
    }
    out.put(byte)
}

fn encode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), S::Error> {
    let mut acc = BitAccumulator::new();

    for &byte in input {
        acc.push_msb(u32::from(byte), 8);

        while acc.live() >= 7 {
            put_group(out, acc.take_msb(7))?;
        }
    }

    if let Some(group) = acc.flush_msb(7) {
        put_group(out, group)?;
    }

    Ok(())
}

/// Decoder state between input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    /// The previous byte was an escape marker; the next byte is data even if
    /// it is another marker.
    Escaped,
}

fn decode_to<S: Sink>(input: &[u8], out: &mut S) -> Result<(), DecodeError>
where
    DecodeError: From<S::Error>,
{
    let mut acc = BitAccumulator::new();
    let mut state = State::Normal;

    for &byte in input {
        state = match (state, byte) {
            (State::Normal, ESCAPE) => State::Escaped,
            (State::Normal | State::Escaped, _) => {
                acc.push_msb(u32::from(byte & !HIGH_BIT), 7);
                while acc.live() >= 8 {
                    out.put(acc.take_msb(8) as u8)?;
                }
                State::Normal
            }
        };
    }

    Ok(())
}

impl Codec for Base122 {
    fn name(&self) -> &'static str {
        "base122"
    }

    fn policy(&self) -> DecodePolicy {
        DecodePolicy::AcceptAll
    }

    fn encode_len(&self, input_len: usize) -> usize {
        (input_len * 8).div_ceil(7) + 2
    }

    fn decode_len(&self, input_len: usize) -> usize {
        input_len + 4
    }

    /// Encoded output only ever contains bytes with the high bit set.
    fn is_symbol(&self, byte: u8) -> bool {
        byte & HIGH_BIT != 0
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
    fn test_single_zero_byte() {
        assert_eq!(Base122.encode(&[0x00]), [0x80, 0x80]);
        assert_eq!(Base122.decode(&[0x80, 0x80]).unwrap(), [0x00]);
    }

    #[test]
    fn test_marker_group_is_escaped() {
        // 0x84 = 1000010|0: the first group is 0x42, which would read as 0xC2
        let encoded = Base122.encode(&[0x84]);
        assert_eq!(encoded, [ESCAPE, 0xC2, 0x80]);
        assert_eq!(Base122.decode(&encoded).unwrap(), [0x84]);
    }

    #[test]
    fn test_consecutive_escapes() {
        // 0x42 repeated 8 times packs into 7 bytes of 1000010 groups
        let mut acc = BitAccumulator::new();
        let mut data = Vec::new();
        for _ in 0..8 {
            acc.push_msb(0x42, 7);
            while acc.live() >= 8 {
                data.push(acc.take_msb(8) as u8);
            }
        }
        assert_eq!(data.len(), 7);

        let encoded = Base122.encode(&data);
        assert_eq!(encoded, [ESCAPE, 0xC2].repeat(8));
        assert_eq!(encoded.len(), Base122.max_encode_len(data.len()));
        assert_eq!(Base122.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_illegal_values_never_bare() {
        let data: Vec<u8> = (0..=255).chain((0..=255).rev()).collect();
        let encoded = Base122.encode(&data);
        assert!(encoded.iter().all(|&b| !is_illegal(b)));
        assert!(encoded.iter().all(|&b| Base122.is_symbol(b)));
        assert_eq!(Base122.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_escape_rules() {
        for value in ILLEGAL {
            assert!(needs_escape(value));
        }
        assert!(needs_escape(ESCAPE));
        assert!(!needs_escape(0xA2));
        assert!(!needs_escape(0x80));
    }

    #[test]
    fn test_escaped_illegal_value_decodes_as_data() {
        // An escape followed by a low byte is taken as data with the high bit cleared.
        for value in ILLEGAL {
            let decoded = Base122.decode(&[ESCAPE, value, 0x80]).unwrap();
            assert_eq!(decoded, [(value & 0x7F) << 1]);
        }
    }

    #[test]
    fn test_size_formulas() {
        assert_eq!(Base122.encode_len(0), 2);
        assert_eq!(Base122.encode_len(7), 10);
        assert_eq!(Base122.decode_len(8), 12);
        assert_eq!(Base122.max_encode_len(1), 4);
    }

    #[test]
    fn test_encode_into_short_buffer_on_escape() {
        // Fits in encode_len(1) = 4, but not in 2.
        let mut buf = [0u8; 4];
        assert_eq!(Base122.encode_into(&[0x84], &mut buf), Ok(3));
        let mut short = [0u8; 2];
        assert_eq!(
            Base122.encode_into(&[0x84], &mut short),
            Err(BufferTooSmall { capacity: 2 })
        );
    }
}

//! Power-of-two bit chunking per RFC 4648, shared by Base32 and Base64.
//!
//! A group is `lcm(bits, 8) / bits` symbols: 8 for Base32, 4 for Base64.

use crate::core::accumulator::BitAccumulator;
use crate::core::alphabet::Alphabet;
use crate::core::sink::Sink;

pub const PADDING: u8 = b'=';

/// Encodes `data` into `bits`-wide symbols, padding the output with `=` to a
/// multiple of `group` symbols.
pub(crate) fn encode_chunked<const N: usize, S: Sink>(
    data: &[u8],
    alphabet: &Alphabet<N>,
    bits: u32,
    group: usize,
    out: &mut S,
) -> Result<(), S::Error> {
    let mut acc = BitAccumulator::new();
    let mut written = 0usize;

    for &byte in data {
        acc.push_msb(u32::from(byte), 8);

        while acc.live() >= bits {
            out.put(alphabet.symbol(acc.take_msb(bits) as usize))?;
            written += 1;
        }
    }

    if let Some(index) = acc.flush_msb(bits) {
        out.put(alphabet.symbol(index as usize))?;
        written += 1;
    }

    while written % group != 0 {
        out.put(PADDING)?;
        written += 1;
    }

    Ok(())
}

/// Decodes `bits`-wide symbols, stopping at the first `=`.
///
/// Bytes outside the alphabet are skipped without error, so line breaks or
/// other noise between symbols do not disturb the surrounding data.
pub(crate) fn decode_chunked<const N: usize, S: Sink>(
    encoded: &[u8],
    alphabet: &Alphabet<N>,
    bits: u32,
    out: &mut S,
) -> Result<(), S::Error> {
    let mut acc = BitAccumulator::new();

    for &byte in encoded {
        if byte == PADDING {
            break;
        }

        let Some(index) = alphabet.index_of(byte) else {
            continue;
        };

        acc.push_msb(u32::from(index), bits);
        if acc.live() >= 8 {
            out.put(acc.take_msb(8) as u8)?;
        }
    }

    Ok(())
}

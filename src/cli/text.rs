use basex::Codec;

/// Breaks `encoded` into lines of `cols` symbols. The result always ends
/// with a newline; `cols == 0` yields a single line.
pub fn wrap(encoded: &[u8], cols: usize) -> Vec<u8> {
    if cols == 0 || encoded.is_empty() {
        let mut out = Vec::with_capacity(encoded.len() + 1);
        out.extend_from_slice(encoded);
        out.push(b'\n');
        return out;
    }

    let mut out = Vec::with_capacity(encoded.len() + encoded.len() / cols + 1);
    for line in encoded.chunks(cols) {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

/// C `isspace`: ASCII whitespace plus vertical tab.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

/// Removes every whitespace byte, wherever it sits.
pub fn strip_whitespace(input: &[u8]) -> Vec<u8> {
    input.iter().copied().filter(|&b| !is_space(b)).collect()
}

/// Keeps only bytes that `codec` can produce.
pub fn retain_symbols(input: &mut Vec<u8>, codec: &dyn Codec) {
    input.retain(|&b| codec.is_symbol(b));
}

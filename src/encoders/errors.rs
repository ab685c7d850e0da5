use std::convert::Infallible;

use thiserror::Error;

/// A caller-supplied output buffer ran out of room.
///
/// Size the buffer with the codec's `encode_len`/`decode_len` to avoid this.
/// Bytes written before the failure are left in the buffer but carry no
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("output buffer of {capacity} bytes is too small")]
pub struct BufferTooSmall {
    pub capacity: usize,
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A strict codec met a byte outside its alphabet. Nothing decoded by the
    /// aborted call should be used.
    #[error("invalid {codec} symbol {byte:#04x} at position {position}")]
    InvalidSymbol {
        codec: &'static str,
        byte: u8,
        position: usize,
    },
    #[error(transparent)]
    BufferTooSmall(#[from] BufferTooSmall),
}

impl DecodeError {
    pub(crate) fn invalid_symbol(codec: &'static str, byte: u8, position: usize) -> Self {
        log::debug!("{codec} decode aborted at position {position} on byte {byte:#04x}");
        DecodeError::InvalidSymbol {
            codec,
            byte,
            position,
        }
    }
}

impl From<Infallible> for DecodeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Error when a codec name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown codec '{name}'{}", suggestion_hint(.suggestion))]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::from(" (run `basex codecs` to list codecs)"),
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching name, if any is within a couple of edits.
pub fn find_closest_name<'a>(name: &str, available: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|&(distance, _)| distance <= threshold)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("base64", "base64"), 0);
        assert_eq!(levenshtein_distance("base64", "base32"), 2);
        assert_eq!(levenshtein_distance("bas91", "base91"), 1);
        assert_eq!(levenshtein_distance("", "base85"), 6);
    }

    #[test]
    fn test_find_closest_name() {
        let names = ["base32", "base64", "base85", "base91", "base122"];

        assert_eq!(find_closest_name("bas64", names), Some("base64".to_string()));
        assert_eq!(find_closest_name("base121", names), Some("base122".to_string()));
        assert_eq!(find_closest_name("uuencode", names), None);
    }

    #[test]
    fn test_invalid_symbol_display() {
        let err = DecodeError::invalid_symbol("base85", b'"', 12);
        assert_eq!(err.to_string(), "invalid base85 symbol 0x22 at position 12");
    }

    #[test]
    fn test_codec_not_found_display() {
        let err = CodecNotFoundError::new("bas64", Some("base64".to_string()));
        assert_eq!(err.to_string(), "unknown codec 'bas64' (did you mean 'base64'?)");

        let err = CodecNotFoundError::new("rot13", None);
        assert!(err.to_string().contains("basex codecs"));
    }

    #[test]
    fn test_buffer_too_small_converts() {
        let err: DecodeError = BufferTooSmall { capacity: 3 }.into();
        assert_eq!(err.to_string(), "output buffer of 3 bytes is too small");
    }
}

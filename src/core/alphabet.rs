/// Decode table entry for bytes that are not part of an alphabet.
pub const INVALID: u8 = 0xFF;

/// A fixed symbol alphabet together with its inverse lookup table.
///
/// Alphabets are built in `const` context, so every codec's table is
/// computed at compile time and lives in read-only memory. Construction
/// panics (at compile time, for `static` alphabets) if a symbol repeats,
/// which keeps the index/symbol mapping a bijection.
///
/// # Example
///
/// ```
/// use basex::Alphabet;
///
/// static HEX: Alphabet<16> = Alphabet::new(b"0123456789abcdef");
/// assert_eq!(HEX.symbol(10), b'a');
/// assert_eq!(HEX.index_of(b'f'), Some(15));
/// assert_eq!(HEX.index_of(b'g'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    table: [u8; 256],
}

impl<const N: usize> Alphabet<N> {
    /// Builds an alphabet and derives its decode table.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds 255 (the table sentinel must stay out of range)
    /// or if any symbol occurs twice.
    pub const fn new(symbols: &[u8; N]) -> Self {
        assert!(N < INVALID as usize, "alphabet too large for an 8-bit decode table");

        let mut table = [INVALID; 256];
        let mut i = 0;
        while i < N {
            let symbol = symbols[i] as usize;
            assert!(table[symbol] == INVALID, "duplicate symbol in alphabet");
            table[symbol] = i as u8;
            i += 1;
        }

        Alphabet {
            symbols: *symbols,
            table,
        }
    }

    /// Number of symbols.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the symbol for `index`.
    ///
    /// Callers mask or bound `index` before calling; an index of `N` or more
    /// is a bug in the codec and panics.
    #[inline]
    pub const fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// Looks up the index of `byte`, or `None` if it is not a symbol.
    #[inline]
    pub const fn index_of(&self, byte: u8) -> Option<u8> {
        match self.table[byte as usize] {
            INVALID => None,
            index => Some(index),
        }
    }

    /// Returns `true` if `byte` is one of the symbols.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize] != INVALID
    }

    /// The raw decode table: one entry per byte value, `INVALID` for non-symbols.
    pub const fn table(&self) -> &[u8; 256] {
        &self.table
    }

    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.symbols
    }

    /// The symbols as text. Every alphabet in this crate is printable ASCII.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

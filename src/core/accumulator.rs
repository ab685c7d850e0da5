/// Transient bit buffer bridging byte width and symbol width.
///
/// Every encode and decode call owns one of these on its stack and drops it
/// when the call returns. Two disciplines are supported:
///
/// - MSB-first (`push_msb` / `take_msb`): new bits enter at the bottom and
///   groups leave from the top. Used by Base32, Base64 and Base122.
/// - LSB-first (`push_lsb` / `take_lsb`): new bits enter above the live bits
///   and groups leave from the bottom. Used by Base91.
///
/// A single accumulator is only ever driven in one discipline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    register: u64,
    live: u32,
}

#[inline]
const fn mask(width: u32) -> u64 {
    (1u64 << width) - 1
}

impl BitAccumulator {
    pub const fn new() -> Self {
        BitAccumulator {
            register: 0,
            live: 0,
        }
    }

    /// Number of bits buffered and not yet emitted.
    #[inline]
    pub const fn live(&self) -> u32 {
        self.live
    }

    /// Raw register contents.
    #[inline]
    pub const fn register(&self) -> u64 {
        self.register
    }

    /// Appends the low `width` bits of `value` below the live bits.
    #[inline]
    pub fn push_msb(&mut self, value: u32, width: u32) {
        self.register = (self.register << width) | (u64::from(value) & mask(width));
        self.live += width;
    }

    /// Removes and returns the oldest `width` live bits.
    ///
    /// Requires `width <= live()`.
    #[inline]
    pub fn take_msb(&mut self, width: u32) -> u32 {
        self.live -= width;
        let group = (self.register >> self.live) & mask(width);
        self.register &= mask(self.live);
        group as u32
    }

    /// Drains the remaining bits as one final group of `width` bits,
    /// zero-filled on the right. Returns `None` when nothing is buffered.
    #[inline]
    pub fn flush_msb(&mut self, width: u32) -> Option<u32> {
        if self.live == 0 {
            return None;
        }
        let group = (self.register << (width - self.live)) & mask(width);
        self.register = 0;
        self.live = 0;
        Some(group as u32)
    }

    /// ORs `value` in above the live bits and counts `width` new live bits.
    ///
    /// `value` is not masked to `width`: a wider value leaves its excess bits
    /// above the live window, where the next push merges with them. Base91
    /// decoding depends on this for inputs that were not produced by the
    /// encoder.
    #[inline]
    pub fn push_lsb(&mut self, value: u32, width: u32) {
        self.register |= u64::from(value) << self.live;
        self.live += width;
    }

    /// Returns the lowest `width` bits without consuming them.
    #[inline]
    pub const fn peek_lsb(&self, width: u32) -> u32 {
        (self.register & mask(width)) as u32
    }

    /// Removes and returns the lowest `width` bits.
    ///
    /// Requires `width <= live()`.
    #[inline]
    pub fn take_lsb(&mut self, width: u32) -> u32 {
        let group = self.peek_lsb(width);
        self.register >>= width;
        self.live -= width;
        group
    }
}

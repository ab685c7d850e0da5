use std::convert::Infallible;

use crate::encoders::errors::BufferTooSmall;

/// Byte destination for codec output.
///
/// Each codec body is written once against this trait. Owned calls drive it
/// with a `Vec<u8>`, which cannot run out of room; `*_into` calls drive it
/// with a [`SliceSink`], which reports the first write past the end of the
/// caller's buffer.
pub trait Sink {
    type Error;

    fn put(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), Infallible> {
        self.push(byte);
        Ok(())
    }
}

/// Fixed-capacity sink over a caller-owned buffer. Never allocates.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceSink { buf, len: 0 }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Sink for SliceSink<'_> {
    type Error = BufferTooSmall;

    #[inline]
    fn put(&mut self, byte: u8) -> Result<(), BufferTooSmall> {
        match self.buf.get_mut(self.len) {
            Some(slot) => {
                *slot = byte;
                self.len += 1;
                Ok(())
            }
            None => Err(BufferTooSmall {
                capacity: self.buf.len(),
            }),
        }
    }
}

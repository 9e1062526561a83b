use thiserror::Error;

/// A read ran past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer truncated: need {need} more bytes, {have} available")]
pub struct Truncated {
    pub need: usize,
    pub have: usize,
}

/// Bounds-checked big-endian cursor over a raw record buffer.
///
/// Each read consumes a prefix of the remaining bytes and leaves the rest,
/// which is how a record codec hands the buffer from one leaf codec to the
/// next. All multi-byte integers in the format are big-endian.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, need: usize) -> Result<(), Truncated> {
        if self.remaining() < need {
            return Err(Truncated {
                need,
                have: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn u8(&mut self) -> Result<u8, Truncated> {
        self.check(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    pub fn i8(&mut self) -> Result<i8, Truncated> {
        Ok(self.u8()? as i8)
    }

    pub fn u16_be(&mut self) -> Result<u16, Truncated> {
        self.check(2)?;
        let value = u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    /// Consumes exactly `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], Truncated> {
        self.check(n)?;
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Consumes and returns everything left.
    pub fn rest(&mut self) -> &'a [u8] {
        let slice = &self.buf[self.pos..];
        self.pos = self.buf.len();
        slice
    }
}

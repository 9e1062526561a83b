use serde::{Deserialize, Serialize};

use crate::reader::Truncated;

/// The category portion of an AppInfo block, carried as opaque bytes.
///
/// Category bookkeeping (names, ids, renamed flags) belongs to the container
/// layer; record codecs only move the block around intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBlock(Vec<u8>);

impl CategoryBlock {
    pub fn new(bytes: Vec<u8>) -> Self {
        CategoryBlock(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CategoryBlock {
    fn from(bytes: Vec<u8>) -> Self {
        CategoryBlock(bytes)
    }
}

/// Splits and re-joins the category portion of an AppInfo block.
///
/// Implemented by the container layer, which knows the category layout of
/// its database version. Codecs built on this trait interpret only the
/// bytes the implementation reports as left over.
pub trait CategoryCodec {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Splits raw AppInfo bytes into the category block and the trailing
    /// format-specific bytes.
    fn split<'a>(&self, data: &'a [u8]) -> Result<(CategoryBlock, &'a [u8]), Self::Error>;

    /// Prepends the serialized category block to a format-specific tail.
    fn join(&self, block: &CategoryBlock, tail: &[u8]) -> Vec<u8>;
}

/// Reference codec treating the first `len` bytes as the category block.
///
/// Useful for testing and for containers whose category layout is one fixed
/// width.
#[derive(Debug, Clone, Copy)]
pub struct FixedSizeCategories {
    len: usize,
}

impl FixedSizeCategories {
    pub fn new(len: usize) -> Self {
        FixedSizeCategories { len }
    }
}

impl CategoryCodec for FixedSizeCategories {
    type Error = Truncated;

    fn split<'a>(&self, data: &'a [u8]) -> Result<(CategoryBlock, &'a [u8]), Truncated> {
        if data.len() < self.len {
            return Err(Truncated {
                need: self.len,
                have: data.len(),
            });
        }
        let (block, tail) = data.split_at(self.len);
        Ok((CategoryBlock::new(block.to_vec()), tail))
    }

    fn join(&self, block: &CategoryBlock, tail: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(block.len() + tail.len());
        out.extend_from_slice(block.as_bytes());
        out.extend_from_slice(tail);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_split_and_join() {
        let codec = FixedSizeCategories::new(4);
        let data = [1, 2, 3, 4, 9, 8];

        let (block, tail) = codec.split(&data).unwrap();
        assert_eq!(block.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(tail, &[9, 8]);

        assert_eq!(codec.join(&block, tail), data);
    }

    #[test]
    fn split_short_buffer() {
        let codec = FixedSizeCategories::new(4);
        assert_eq!(
            codec.split(&[1, 2]),
            Err(Truncated { need: 4, have: 2 })
        );
    }
}

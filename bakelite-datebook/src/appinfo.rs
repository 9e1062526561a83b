use bakelite_core::{CategoryBlock, CategoryCodec};
use serde::{Deserialize, Serialize};

use crate::error::{AppInfoError, CodecError};

/// First day of the week shown by the handheld's week views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartOfWeek {
    Sunday,
    Monday,
}

impl StartOfWeek {
    fn from_wire(raw: u8) -> Result<Self, CodecError> {
        match raw {
            0 => Ok(StartOfWeek::Sunday),
            1 => Ok(StartOfWeek::Monday),
            other => Err(CodecError::InvalidStartOfWeek(other)),
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            StartOfWeek::Sunday => 0,
            StartOfWeek::Monday => 1,
        }
    }
}

/// Database-wide settings: the category list (opaque at this layer) plus
/// the start-of-week preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatebookAppInfo {
    pub categories: CategoryBlock,
    pub start_of_week: StartOfWeek,
}

impl DatebookAppInfo {
    /// Decodes an AppInfo block, delegating the category portion to the
    /// container's category codec.
    ///
    /// The tail the codec reports back reads as two pad bytes then the
    /// start-of-week byte. Bytes beyond those three are not inspected.
    pub fn from_bytes<C: CategoryCodec>(
        codec: &C,
        data: &[u8],
    ) -> Result<Self, AppInfoError<C::Error>> {
        let (categories, tail) = codec.split(data).map_err(AppInfoError::Categories)?;
        if tail.len() < 3 {
            return Err(CodecError::TruncatedRecord {
                need: 3,
                have: tail.len(),
            }
            .into());
        }
        let start_of_week = StartOfWeek::from_wire(tail[2])?;
        Ok(DatebookAppInfo {
            categories,
            start_of_week,
        })
    }

    /// Re-serializes the block.
    ///
    /// The two leading pad bytes are written as zero and one extra trailing
    /// pad byte is appended; the decode path inspects neither.
    pub fn to_bytes<C: CategoryCodec>(&self, codec: &C) -> Vec<u8> {
        let tail = [0, 0, self.start_of_week.to_wire(), 0];
        codec.join(&self.categories, &tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakelite_core::FixedSizeCategories;

    #[test]
    fn decode_reads_start_of_week_after_padding() {
        let codec = FixedSizeCategories::new(4);
        let data = [9, 9, 9, 9, 0xaa, 0xbb, 1];
        let info = DatebookAppInfo::from_bytes(&codec, &data).unwrap();
        assert_eq!(info.categories.as_bytes(), &[9, 9, 9, 9]);
        assert_eq!(info.start_of_week, StartOfWeek::Monday);
    }

    #[test]
    fn encode_appends_one_extra_pad_byte() {
        let codec = FixedSizeCategories::new(2);
        let info = DatebookAppInfo {
            categories: CategoryBlock::new(vec![7, 7]),
            start_of_week: StartOfWeek::Sunday,
        };
        assert_eq!(info.to_bytes(&codec), vec![7, 7, 0, 0, 0, 0]);

        // The extra pad survives a decode unexamined.
        let again = DatebookAppInfo::from_bytes(&codec, &info.to_bytes(&codec)).unwrap();
        assert_eq!(again, info);
    }

    #[test]
    fn unknown_start_of_week_rejected() {
        let codec = FixedSizeCategories::new(0);
        let err = DatebookAppInfo::from_bytes(&codec, &[0, 0, 9]).unwrap_err();
        assert!(matches!(
            err,
            AppInfoError::Codec(CodecError::InvalidStartOfWeek(9))
        ));
    }

    #[test]
    fn short_tail_rejected() {
        let codec = FixedSizeCategories::new(0);
        let err = DatebookAppInfo::from_bytes(&codec, &[0, 0]).unwrap_err();
        assert!(matches!(
            err,
            AppInfoError::Codec(CodecError::TruncatedRecord { need: 3, have: 2 })
        ));
    }
}

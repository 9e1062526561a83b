//! Excluded-occurrence list: a u16 count followed by that many packed
//! dates.

use bakelite_core::{ByteReader, Date};

use crate::error::CodecError;

pub(crate) fn decode(r: &mut ByteReader<'_>) -> Result<Vec<Date>, CodecError> {
    let count = r.u16_be().map_err(CodecError::truncated_record)? as usize;
    let mut dates = Vec::with_capacity(count);
    for _ in 0..count {
        let raw = r.u16_be().map_err(CodecError::truncated_exceptions)?;
        dates.push(Date::from_packed(raw));
    }
    Ok(dates)
}

pub(crate) fn encode(dates: &[Date], out: &mut Vec<u8>) {
    out.extend_from_slice(&(dates.len() as u16).to_be_bytes());
    for date in dates {
        out.extend_from_slice(&date.to_packed().to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_roundtrip() {
        let dates = vec![
            Date {
                year: 2001,
                month: 3,
                day: 15,
            },
            Date {
                year: 2001,
                month: 3,
                day: 22,
            },
        ];
        let mut bytes = Vec::new();
        encode(&dates, &mut bytes);
        assert_eq!(bytes.len(), 2 + 2 * dates.len());
        assert_eq!(&bytes[..2], &[0, 2]);

        let mut r = ByteReader::new(&bytes);
        assert_eq!(decode(&mut r).unwrap(), dates);
        assert!(r.is_empty());
    }

    #[test]
    fn short_payload_is_exception_list_truncation() {
        // Claims three dates, supplies one.
        let mut r = ByteReader::new(&[0, 3, 0x79, 0xe1]);
        assert!(matches!(
            decode(&mut r),
            Err(CodecError::TruncatedExceptionList { .. })
        ));
    }

    #[test]
    fn missing_count_is_record_truncation() {
        let mut r = ByteReader::new(&[0]);
        assert!(matches!(
            decode(&mut r),
            Err(CodecError::TruncatedRecord { .. })
        ));
    }
}

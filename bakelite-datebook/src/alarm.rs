use bakelite_core::ByteReader;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Unit of the alarm advance count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmUnit {
    Minutes,
    Hours,
    Days,
}

impl AlarmUnit {
    fn from_wire(raw: u8) -> Result<Self, CodecError> {
        match raw {
            0 => Ok(AlarmUnit::Minutes),
            1 => Ok(AlarmUnit::Hours),
            2 => Ok(AlarmUnit::Days),
            other => Err(CodecError::InvalidAlarmUnit(other)),
        }
    }

    fn to_wire(self) -> u8 {
        match self {
            AlarmUnit::Minutes => 0,
            AlarmUnit::Hours => 1,
            AlarmUnit::Days => 2,
        }
    }
}

/// Reminder settings attached to a record.
///
/// Presence alone makes the handheld show a reminder indicator; an
/// `advance` of -1 means the indicator shows but nothing ever rings.
/// Producers keep the structure present in that state rather than dropping
/// it, and the flags word reflects presence, not the advance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub advance: i8,
    pub unit: AlarmUnit,
}

impl Alarm {
    /// True when the alarm actually fires, not just shows the indicator.
    pub fn will_ring(&self) -> bool {
        self.advance != -1
    }

    pub(crate) fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let advance = r.i8().map_err(CodecError::truncated_record)?;
        let unit = AlarmUnit::from_wire(r.u8().map_err(CodecError::truncated_record)?)?;
        Ok(Alarm { advance, unit })
    }

    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.advance as u8);
        out.push(self.unit.to_wire());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_byte_roundtrip() {
        let alarm = Alarm {
            advance: 10,
            unit: AlarmUnit::Minutes,
        };
        let mut bytes = Vec::new();
        alarm.encode(&mut bytes);
        assert_eq!(bytes, [10, 0]);

        let mut r = ByteReader::new(&bytes);
        assert_eq!(Alarm::decode(&mut r).unwrap(), alarm);
    }

    #[test]
    fn negative_advance_silences_the_ring() {
        let mut r = ByteReader::new(&[0xff, 0x00]);
        let alarm = Alarm::decode(&mut r).unwrap();
        assert_eq!(alarm.advance, -1);
        assert!(!alarm.will_ring());
    }

    #[test]
    fn unknown_unit_rejected() {
        let mut r = ByteReader::new(&[5, 3]);
        assert_eq!(
            Alarm::decode(&mut r),
            Err(CodecError::InvalidAlarmUnit(3))
        );
    }
}

use bakelite_core::{ByteReader, Date};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Packed end-date value meaning "repeats forever".
const OPEN_ENDED: u16 = 0xffff;

/// Highest week-of-month the monthly-by-day wire encoding can express.
const MAX_WEEK: u8 = 5;

/// Shape of a recurrence, selected by the wire type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatKind {
    /// Type 0: a repeat block present on the wire but describing no
    /// recurrence. Distinct from an absent block, which the flags word
    /// controls.
    None,
    /// Type 1: every `frequency` days.
    Daily,
    /// Type 2: on the active weekdays of every `frequency`-th week.
    /// `days[0]` is Sunday, matching bit 0 of the wire mask.
    Weekly { days: [bool; 7], start_of_week: u8 },
    /// Type 3: the `week`-th occurrence of `weekday` in every
    /// `frequency`-th month (week 0 = first, 5 = last usable slot).
    MonthlyByDay { week: u8, weekday: u8 },
    /// Type 4: the same date of every `frequency`-th month.
    MonthlyByDate,
    /// Type 5: the same date of every `frequency`-th year.
    Yearly,
}

/// Recurrence description attached to a record.
///
/// The wire block is a fixed eight bytes for every kind, so `frequency`,
/// the optional end date, and the opaque `unknown` byte live here rather
/// than per variant: they are stored even for kinds that ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    pub kind: RepeatKind,
    pub frequency: u8,
    /// Last occurrence date; `None` repeats forever (0xFFFF on the wire).
    pub end: Option<Date>,
    /// Wire byte with no known meaning upstream; carried through unchanged.
    pub unknown: u8,
}

impl Repeat {
    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    pub(crate) fn decode(r: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let ty = r.u8().map_err(CodecError::truncated_record)?;
        let _pad = r.u8().map_err(CodecError::truncated_record)?;
        let end_raw = r.u16_be().map_err(CodecError::truncated_record)?;
        let frequency = r.u8().map_err(CodecError::truncated_record)?;
        let repeat_on = r.u8().map_err(CodecError::truncated_record)?;
        let start_of_week = r.u8().map_err(CodecError::truncated_record)?;
        let unknown = r.u8().map_err(CodecError::truncated_record)?;

        let kind = match ty {
            0 => RepeatKind::None,
            1 => RepeatKind::Daily,
            2 => RepeatKind::Weekly {
                days: unpack_days(repeat_on),
                start_of_week,
            },
            3 => RepeatKind::MonthlyByDay {
                week: repeat_on / 7,
                weekday: repeat_on % 7,
            },
            4 => RepeatKind::MonthlyByDate,
            5 => RepeatKind::Yearly,
            other => return Err(CodecError::InvalidRepeatType(other)),
        };

        let end = if end_raw == OPEN_ENDED {
            None
        } else {
            Some(Date::from_packed(end_raw))
        };

        Ok(Repeat {
            kind,
            frequency,
            end,
            unknown,
        })
    }

    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        let (ty, repeat_on, start_of_week) = match self.kind {
            RepeatKind::None => (0, 0, 0),
            RepeatKind::Daily => (1, 0, 0),
            RepeatKind::Weekly {
                ref days,
                start_of_week,
            } => (2, pack_days(days), start_of_week),
            RepeatKind::MonthlyByDay { week, weekday } => {
                let week = if week > MAX_WEEK {
                    warn!("week-of-month {} beyond {}, clamping", week, MAX_WEEK);
                    MAX_WEEK
                } else {
                    week
                };
                (3, week * 7 + weekday % 7, 0)
            }
            RepeatKind::MonthlyByDate => (4, 0, 0),
            RepeatKind::Yearly => (5, 0, 0),
        };

        out.push(ty);
        out.push(0);
        let end_raw = match self.end {
            Some(date) => date.to_packed(),
            None => OPEN_ENDED,
        };
        out.extend_from_slice(&end_raw.to_be_bytes());
        out.push(self.frequency);
        out.push(repeat_on);
        out.push(start_of_week);
        out.push(self.unknown);
    }
}

fn pack_days(days: &[bool; 7]) -> u8 {
    days.iter()
        .enumerate()
        .fold(0, |mask, (i, &on)| if on { mask | 1 << i } else { mask })
}

fn unpack_days(mask: u8) -> [bool; 7] {
    let mut days = [false; 7];
    for (i, day) in days.iter_mut().enumerate() {
        *day = mask & (1 << i) != 0;
    }
    days
}

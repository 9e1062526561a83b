use bakelite_core::{ByteReader, Date, RecordCodec};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::alarm::{Alarm, AlarmUnit};
use crate::error::CodecError;
use crate::exceptions;
use crate::repeat::Repeat;
use crate::text;
use crate::time::{self, TimeRange};
use crate::timezone::Timezone;

// Flag bits of the record prefix, high bit first.
const FLAG_WHEN_CHANGED: u16 = 0x8000;
const FLAG_ALARM: u16 = 0x4000;
const FLAG_REPEAT: u16 = 0x2000;
const FLAG_NOTE: u16 = 0x1000;
const FLAG_EXCEPTIONS: u16 = 0x0800;
const FLAG_DESCRIPTION: u16 = 0x0400;
const FLAG_LOCATION: u16 = 0x0200;

/// Which datebook application owns a record.
///
/// The newer calendar application extends the classic layout with a
/// location text field gated by its own flag bit; to the classic
/// application that bit is ordinary data and belongs in `other_flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flavor {
    Classic,
    Calendar,
}

impl Flavor {
    /// Maps a database creator tag to the flavor owning its records.
    pub fn from_creator(creator: [u8; 4]) -> Option<Flavor> {
        match &creator {
            b"date" => Some(Flavor::Classic),
            b"PDat" => Some(Flavor::Calendar),
            _ => None,
        }
    }

    fn known_flags(self) -> u16 {
        let base = FLAG_WHEN_CHANGED
            | FLAG_ALARM
            | FLAG_REPEAT
            | FLAG_NOTE
            | FLAG_EXCEPTIONS
            | FLAG_DESCRIPTION;
        match self {
            Flavor::Classic => base,
            Flavor::Calendar => base | FLAG_LOCATION,
        }
    }
}

/// One datebook record in structured form.
///
/// Optional sub-structures are plain `Option`s; the wire flags word is a
/// serialization detail rebuilt from presence on encode, never stored.
/// Bits and bytes the codec does not interpret survive in `other_flags`
/// and `other_data`, so a decoded record re-encodes byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// First (or only) occurrence.
    pub date: Date,
    /// `None` for an untimed, all-day record.
    pub time: Option<TimeRange>,
    /// Wire bit with no known meaning upstream; carried through unchanged.
    pub when_changed: bool,
    pub alarm: Option<Alarm>,
    pub repeat: Option<Repeat>,
    /// Dates on which an otherwise-recurring record does not occur.
    pub exceptions: Vec<Date>,
    pub description: Option<String>,
    pub note: Option<String>,
    /// Calendar flavor only; the classic flavor neither reads nor writes
    /// it.
    pub location: Option<String>,
    pub timezone: Option<Timezone>,
    /// Flag bits outside the recognized set, preserved bit-for-bit.
    pub other_flags: u16,
    /// Trailing bytes left after every recognized field, preserved
    /// byte-for-byte.
    pub other_data: Vec<u8>,
}

impl Event {
    /// A fresh record the way the built-in application creates one: dated
    /// `today`, untimed, reminder set ten minutes ahead, everything else
    /// empty.
    ///
    /// The current date comes from the caller, keeping the codec free of
    /// clock access.
    pub fn new(today: Date) -> Event {
        Event {
            date: today,
            time: None,
            when_changed: false,
            alarm: Some(Alarm {
                advance: 10,
                unit: AlarmUnit::Minutes,
            }),
            repeat: None,
            exceptions: Vec::new(),
            description: None,
            note: None,
            location: None,
            timezone: None,
            other_flags: 0,
            other_data: Vec::new(),
        }
    }

    /// True when the record carries no start and end time.
    pub fn is_untimed(&self) -> bool {
        self.time.is_none()
    }
}

/// Decoder/encoder for datebook record buffers.
///
/// Stateless apart from the owning database's flavor, so one codec may
/// transcode any number of records, in any order or in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatebookCodec {
    flavor: Flavor,
}

impl DatebookCodec {
    pub fn new(flavor: Flavor) -> Self {
        DatebookCodec { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Decodes one raw record buffer.
    ///
    /// Reads the fixed prefix, then each flag-gated block in wire order:
    /// alarm, repeat, exceptions, description, note, location. Whatever
    /// remains is offered to the time-zone extraction; declined bytes are
    /// kept verbatim as `other_data`.
    pub fn decode(&self, data: &[u8]) -> Result<Event, CodecError> {
        let mut r = ByteReader::new(data);

        let prefix = r.take(4).map_err(CodecError::truncated_record)?;
        let time = time::decode([prefix[0], prefix[1], prefix[2], prefix[3]]);
        let date = Date::from_packed(r.u16_be().map_err(CodecError::truncated_record)?);
        let flags = r.u16_be().map_err(CodecError::truncated_record)?;

        let when_changed = flags & FLAG_WHEN_CHANGED != 0;
        let other_flags = flags & !self.flavor.known_flags();

        let alarm = if flags & FLAG_ALARM != 0 {
            Some(Alarm::decode(&mut r)?)
        } else {
            None
        };
        let repeat = if flags & FLAG_REPEAT != 0 {
            Some(Repeat::decode(&mut r)?)
        } else {
            None
        };
        let exceptions = if flags & FLAG_EXCEPTIONS != 0 {
            exceptions::decode(&mut r)?
        } else {
            Vec::new()
        };

        let mut rest = r.rest();
        let mut take_text = |present: bool| {
            if !present {
                return None;
            }
            let (field, tail) = text::take_field(rest);
            rest = tail;
            Some(field)
        };
        let description = take_text(flags & FLAG_DESCRIPTION != 0);
        let note = take_text(flags & FLAG_NOTE != 0);
        let location =
            take_text(self.flavor == Flavor::Calendar && flags & FLAG_LOCATION != 0);

        let (timezone, other_data) = match Timezone::extract(rest) {
            Some((zone, tail)) => (Some(zone), tail.to_vec()),
            None => (None, rest.to_vec()),
        };

        Ok(Event {
            date,
            time,
            when_changed,
            alarm,
            repeat,
            exceptions,
            description,
            note,
            location,
            timezone,
            other_flags,
            other_data,
        })
    }

    /// Re-serializes a record.
    ///
    /// The flags word starts from `other_flags` and ORs in one bit per
    /// populated optional field - presence, not value: an alarm that never
    /// rings still sets the alarm bit. Empty text and empty lists are
    /// absent.
    pub fn encode(&self, event: &Event) -> Vec<u8> {
        let description = populated(&event.description);
        let note = populated(&event.note);
        let location = match self.flavor {
            Flavor::Calendar => populated(&event.location),
            Flavor::Classic => {
                if event.location.is_some() {
                    debug!("location has no place in a classic-flavor record, skipping");
                }
                None
            }
        };

        let mut flags = event.other_flags;
        if event.when_changed {
            flags |= FLAG_WHEN_CHANGED;
        }
        if event.alarm.is_some() {
            flags |= FLAG_ALARM;
        }
        if event.repeat.is_some() {
            flags |= FLAG_REPEAT;
        }
        if !event.exceptions.is_empty() {
            flags |= FLAG_EXCEPTIONS;
        }
        if description.is_some() {
            flags |= FLAG_DESCRIPTION;
        }
        if note.is_some() {
            flags |= FLAG_NOTE;
        }
        if location.is_some() {
            flags |= FLAG_LOCATION;
        }

        let mut out = Vec::with_capacity(8 + event.other_data.len());
        out.extend_from_slice(&time::encode(event.time.as_ref()));
        out.extend_from_slice(&event.date.to_packed().to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());

        if let Some(alarm) = &event.alarm {
            alarm.encode(&mut out);
        }
        if let Some(repeat) = &event.repeat {
            repeat.encode(&mut out);
        }
        if !event.exceptions.is_empty() {
            exceptions::encode(&event.exceptions, &mut out);
        }
        if let Some(s) = description {
            text::push_field(s, &mut out);
        }
        if let Some(s) = note {
            text::push_field(s, &mut out);
        }
        if let Some(s) = location {
            text::push_field(s, &mut out);
        }
        if let Some(zone) = &event.timezone {
            zone.embed(&mut out);
        }
        out.extend_from_slice(&event.other_data);
        out
    }
}

impl RecordCodec for DatebookCodec {
    type Record = Event;
    type Error = CodecError;

    fn decode(&self, data: &[u8]) -> Result<Event, CodecError> {
        DatebookCodec::decode(self, data)
    }

    fn encode(&self, record: &Event) -> Vec<u8> {
        DatebookCodec::encode(self, record)
    }
}

/// Presence test for a text field: set, and not empty.
fn populated(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_tags_select_flavor() {
        assert_eq!(Flavor::from_creator(*b"date"), Some(Flavor::Classic));
        assert_eq!(Flavor::from_creator(*b"PDat"), Some(Flavor::Calendar));
        assert_eq!(Flavor::from_creator(*b"memo"), None);
    }

    #[test]
    fn fresh_record_defaults() {
        let today = Date {
            year: 2026,
            month: 8,
            day: 8,
        };
        let event = Event::new(today);
        assert!(event.is_untimed());
        assert_eq!(event.date, today);
        let alarm = event.alarm.unwrap();
        assert_eq!(alarm.advance, 10);
        assert_eq!(alarm.unit, AlarmUnit::Minutes);
        assert!(event.repeat.is_none());
        assert!(event.exceptions.is_empty());
    }

    #[test]
    fn prefix_shorter_than_eight_bytes_fails() {
        let codec = DatebookCodec::new(Flavor::Classic);
        assert!(matches!(
            codec.decode(&[0xff; 7]),
            Err(CodecError::TruncatedRecord { .. })
        ));
    }

    #[test]
    fn empty_text_does_not_set_its_flag() {
        let codec = DatebookCodec::new(Flavor::Classic);
        let mut event = Event::new(Date {
            year: 2020,
            month: 1,
            day: 1,
        });
        event.alarm = None;
        event.description = Some(String::new());
        let bytes = codec.encode(&event);
        let flags = u16::from_be_bytes([bytes[6], bytes[7]]);
        assert_eq!(flags & FLAG_DESCRIPTION, 0);
        assert_eq!(bytes.len(), 8);
    }
}

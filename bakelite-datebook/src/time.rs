use serde::{Deserialize, Serialize};

/// Wire sentinel for an untimed record: all four time bytes set to 0xFF.
pub(crate) const UNTIMED: [u8; 4] = [0xff; 4];

/// Hour and minute within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

/// Start and end of a timed appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Reads the four prefix time bytes.
///
/// Returns `None` only when all four carry the 0xFF sentinel. A mixed
/// sentinel state is never produced by the encoder but is tolerated here,
/// coming back as an ordinary (if odd) range so the bytes survive a round
/// trip.
pub(crate) fn decode(bytes: [u8; 4]) -> Option<TimeRange> {
    if bytes == UNTIMED {
        return None;
    }
    Some(TimeRange {
        start: TimeOfDay {
            hour: bytes[0],
            minute: bytes[1],
        },
        end: TimeOfDay {
            hour: bytes[2],
            minute: bytes[3],
        },
    })
}

/// Serializes the four prefix time bytes; an absent range emits the
/// sentinel.
pub(crate) fn encode(range: Option<&TimeRange>) -> [u8; 4] {
    match range {
        Some(t) => [t.start.hour, t.start.minute, t.end.hour, t.end.minute],
        None => UNTIMED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_untimed() {
        assert_eq!(decode([0xff; 4]), None);
        assert_eq!(encode(None), [0xff; 4]);
    }

    #[test]
    fn timed_roundtrip() {
        let range = TimeRange {
            start: TimeOfDay { hour: 9, minute: 30 },
            end: TimeOfDay { hour: 10, minute: 0 },
        };
        let bytes = encode(Some(&range));
        assert_eq!(bytes, [9, 30, 10, 0]);
        assert_eq!(decode(bytes), Some(range));
    }

    #[test]
    fn mixed_sentinel_is_tolerated() {
        // Not something the encoder emits, but decode must not lose it.
        let bytes = [0xff, 0xff, 0xff, 0x00];
        let range = decode(bytes).unwrap();
        assert_eq!(encode(Some(&range)), bytes);
    }
}

use log::debug;
use serde::{Deserialize, Serialize};

use crate::text;

/// Magic tag introducing an embedded time-zone block.
const TAG: &[u8; 4] = b"Bd00";

/// Fixed bytes before the name: offset, eight DST boundary bytes, the DST
/// bias, country, flags.
const FIXED_LEN: usize = 14;

/// One daylight-saving transition rule: at `hour` on the `week`-th
/// `weekday` of `month` (week 0 = first, 4 = last).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstBoundary {
    pub hour: u8,
    pub weekday: u8,
    pub week: u8,
    pub month: u8,
}

impl DstBoundary {
    fn decode(bytes: &[u8]) -> Self {
        DstBoundary {
            hour: bytes[0],
            weekday: bytes[1],
            week: bytes[2],
            month: bytes[3],
        }
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.push(self.hour);
        out.push(self.weekday);
        out.push(self.week);
        out.push(self.month);
    }
}

/// Per-record time-zone description, smuggled inside the trailing bytes of
/// a record as a tag-and-length-prefixed block.
///
/// The two minute offsets travel as unsigned 16-bit words and are
/// reinterpreted as two's-complement, so 0xFFFF reads as -1 minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    pub name: String,
    pub country: u8,
    pub utc_offset_minutes: i16,
    pub dst_extra_minutes: i16,
    pub dst_start: DstBoundary,
    pub dst_end: DstBoundary,
    pub custom: bool,
    /// Low seven bits of the wire flags byte, reserved and carried intact.
    pub reserved_flags: u8,
}

impl Timezone {
    /// Attempts to peel a time-zone block off the front of `data`,
    /// returning the zone and the bytes after the block.
    ///
    /// Anything that does not look like a complete well-formed block -
    /// wrong tag, a declared length past the end of the buffer, a name
    /// without its terminator - yields `None`, and the caller keeps every
    /// byte as opaque data. A declined block therefore stays byte-for-byte
    /// in the record's trailing data.
    pub(crate) fn extract(data: &[u8]) -> Option<(Timezone, &[u8])> {
        if data.len() < TAG.len() + 2 || &data[..TAG.len()] != TAG {
            return None;
        }
        let len = u16::from_be_bytes([data[4], data[5]]) as usize;
        let body_start = TAG.len() + 2;
        if data.len() < body_start + len {
            debug!(
                "time-zone block declares {} bytes but {} remain, leaving opaque",
                len,
                data.len() - body_start
            );
            return None;
        }
        let body = &data[body_start..body_start + len];
        if body.len() < FIXED_LEN + 1 {
            debug!("time-zone block too short ({} bytes), leaving opaque", len);
            return None;
        }

        let name_bytes = &body[FIXED_LEN..];
        // The name must fill the block exactly: text, then one terminator.
        if name_bytes[name_bytes.len() - 1] != 0
            || name_bytes[..name_bytes.len() - 1].contains(&0)
        {
            debug!("time-zone name not NUL-terminated cleanly, leaving opaque");
            return None;
        }
        let (name, _) = text::take_field(name_bytes);

        let flags = body[13];
        let zone = Timezone {
            name,
            country: body[12],
            utc_offset_minutes: u16::from_be_bytes([body[0], body[1]]) as i16,
            dst_extra_minutes: u16::from_be_bytes([body[10], body[11]]) as i16,
            dst_start: DstBoundary::decode(&body[2..6]),
            dst_end: DstBoundary::decode(&body[6..10]),
            custom: flags & 0x80 != 0,
            reserved_flags: flags & 0x7f,
        };
        Some((zone, &data[body_start + len..]))
    }

    /// Appends the tag, length, and block.
    pub(crate) fn embed(&self, out: &mut Vec<u8>) {
        let len = FIXED_LEN + self.name.len() + 1;
        out.extend_from_slice(TAG);
        out.extend_from_slice(&(len as u16).to_be_bytes());
        out.extend_from_slice(&(self.utc_offset_minutes as u16).to_be_bytes());
        self.dst_start.encode(out);
        self.dst_end.encode(out);
        out.extend_from_slice(&(self.dst_extra_minutes as u16).to_be_bytes());
        out.push(self.country);
        out.push((self.custom as u8) << 7 | (self.reserved_flags & 0x7f));
        text::push_field(&self.name, out);
    }
}

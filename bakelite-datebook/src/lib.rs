//! Bakelite Datebook - lossless codec for the handheld datebook record
//! format.
//!
//! Each record on the wire is an 8-byte fixed prefix (four time bytes, a
//! packed date, a 16-bit flags word) followed by flag-gated optional blocks:
//! alarm, repeat rule, exception dates, NUL-terminated text fields, and an
//! embedded time-zone extension. Decoding turns such a buffer into an
//! [`Event`]; encoding is the exact inverse.
//!
//! Core concepts:
//! - **Event**: one record in structured form; optional sub-structures are
//!   plain `Option`s, the flags word is a wire-only detail rebuilt on encode
//! - **Flavor**: classic datebook vs. the newer calendar application, which
//!   changes how one flag bit and one text field are read
//! - **DatebookCodec**: the per-record decoder/encoder the container layer
//!   drives; implements `bakelite_core::RecordCodec`
//! - **Lossless carry**: flag bits and trailing bytes the codec does not
//!   interpret survive in `other_flags` / `other_data`, so any decoded
//!   record re-encodes byte-for-byte
//!
//! The codec is pure and stateless; records may be transcoded in any order
//! or in parallel.

pub mod alarm;
pub mod appinfo;
pub mod error;
pub mod event;
pub mod repeat;
pub mod time;
pub mod timezone;

mod exceptions;
mod text;

pub use alarm::{Alarm, AlarmUnit};
pub use appinfo::{DatebookAppInfo, StartOfWeek};
pub use error::{AppInfoError, CodecError};
pub use event::{DatebookCodec, Event, Flavor};
pub use repeat::{Repeat, RepeatKind};
pub use time::{TimeOfDay, TimeRange};
pub use timezone::{DstBoundary, Timezone};

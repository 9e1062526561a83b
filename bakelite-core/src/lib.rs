//! Bakelite core - container-facing primitives shared by record codecs.
//!
//! Core concepts:
//! - **Date**: the packed 16-bit day/month/year value the handheld format
//!   uses everywhere a date appears on the wire
//! - **ByteReader**: a bounds-checked big-endian cursor over a raw record
//!   buffer; every read consumes a prefix and leaves the rest
//! - **RecordCodec**: the seam the container layer drives once per record,
//!   collecting one `Result` per record so a corrupt record never takes its
//!   siblings down
//! - **CategoryBlock / CategoryCodec**: the category portion of an AppInfo
//!   block, opaque at this layer and split/re-joined by the container
//!
//! The codecs built on these primitives are pure: no I/O, no shared state,
//! no clock access. Independent records may be transcoded in parallel.

mod category;
mod date;
mod reader;
mod record;

pub use category::{CategoryBlock, CategoryCodec, FixedSizeCategories};
pub use date::{Date, EPOCH_YEAR, MAX_YEAR};
pub use reader::{ByteReader, Truncated};
pub use record::RecordCodec;

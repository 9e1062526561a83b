use bakelite_core::Truncated;
use thiserror::Error;

/// Errors surfaced while decoding a single record.
///
/// A failed record is contained: the container layer collects one `Result`
/// per record, so siblings decode regardless. Encoding has no error path -
/// states the wire cannot express are unrepresentable in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("record truncated: need {need} more bytes, {have} available")]
    TruncatedRecord { need: usize, have: usize },

    #[error("exception list truncated: need {need} more bytes, {have} available")]
    TruncatedExceptionList { need: usize, have: usize },

    #[error("unrecognized repeat type {0:#04x}")]
    InvalidRepeatType(u8),

    #[error("unrecognized alarm unit {0:#04x}")]
    InvalidAlarmUnit(u8),

    #[error("unrecognized start-of-week value {0:#04x}")]
    InvalidStartOfWeek(u8),
}

impl CodecError {
    pub(crate) fn truncated_record(e: Truncated) -> Self {
        CodecError::TruncatedRecord {
            need: e.need,
            have: e.have,
        }
    }

    pub(crate) fn truncated_exceptions(e: Truncated) -> Self {
        CodecError::TruncatedExceptionList {
            need: e.need,
            have: e.have,
        }
    }
}

/// Errors surfaced while decoding an AppInfo block.
///
/// `E` is the category collaborator's own error type.
#[derive(Debug, Error)]
pub enum AppInfoError<E: std::error::Error + 'static> {
    /// The category collaborator rejected the block.
    #[error("category block: {0}")]
    Categories(#[source] E),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

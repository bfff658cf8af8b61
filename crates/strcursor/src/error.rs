use thiserror::Error;

/// Failures reported by cursor construction and build-mode operations.
///
/// Scan operations never fail with this type; a scan that does not apply at
/// the current position returns `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Read-mode construction was given empty text.
    #[error("cursor input must not be empty")]
    InvalidInput,
    /// The buffer could not be grown to hold `requested` more bytes.
    #[error("cannot grow buffer of {capacity} bytes by {requested} bytes")]
    Allocation {
        /// Bytes the growth step tried to add.
        requested: usize,
        /// Buffer length at the time of the failure.
        capacity: usize,
    },
}

/// Why a piece of text was rejected as a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    /// Nothing but whitespace (or nothing at all) was given.
    #[error("empty numeric string")]
    Empty,
    /// No numeric prefix could be read.
    #[error("malformed numeric string")]
    Malformed,
    /// The value does not fit the target type.
    #[error("numeric value out of range")]
    OutOfRange,
    /// A number was read but input remained after it.
    #[error("unexpected trailing characters at byte {offset}")]
    TrailingCharacters {
        /// Byte offset of the first unconsumed character.
        offset: usize,
    },
}

//! A cursor over a growable byte buffer, for hand-written parsers and
//! serializers that want explicit control over scanning and buffer growth.
//!
//! A [`TextCursor`] is either wrapped around existing text (read mode) or
//! allocated blank (build mode). The same `position` field means "next byte to
//! read" in the first case and "next byte to overwrite" in the second.
//!
//! ```rust
//! use strcursor::TextCursor;
//!
//! let mut cursor = TextCursor::from_text("(42) true").unwrap();
//! let inner = cursor.extract_delimited(b'(', b')').unwrap();
//! assert_eq!(inner, "42");
//! cursor.advance_past_whitespace();
//! assert_eq!(cursor.extract_boolean(), Some(true));
//! ```
//!
//! The [`numeric`] module holds the strict text/number conversions; they do
//! not depend on a cursor.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cursor;
mod error;
pub mod numeric;
mod options;

#[cfg(test)]
mod tests;

pub use cursor::TextCursor;
pub use error::{CursorError, ParseNumberError};
pub use options::CursorOptions;

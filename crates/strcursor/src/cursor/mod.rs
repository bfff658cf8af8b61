//! `TextCursor`: one owned byte buffer, one position, two modes.
//!
//! Read mode
//! - Created by [`TextCursor::from_text`]. `position` is the next unread
//!   byte. Scan operations inspect the byte at `position`; those that do not
//!   apply return `None` and leave `position` where it was.
//!
//! Build mode
//! - Created by [`TextCursor::with_capacity`] or [`TextCursor::with_options`].
//!   The buffer starts filled with `fill_byte` and `position` is the next byte
//!   to overwrite. Appends write in place and grow the buffer on demand.
//!
//! Invariants
//! - `position <= capacity`, where `capacity` is the buffer length.
//! - `growth_increment` never decreases.
//! - A NUL byte ends delimited and numeric extraction the same way the end of
//!   the buffer does.
//!
//! Scans are byte-oriented: whitespace is any byte `<= 0x20` and no UTF-8
//! decoding takes place.

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::{
    error::CursorError,
    numeric::{is_numeric_byte, leading_number},
    options::CursorOptions,
};

mod build;

/// A growable byte buffer with a scan/write cursor.
///
/// ```rust
/// use strcursor::TextCursor;
///
/// let mut out = TextCursor::with_capacity(4).unwrap();
/// out.append_quoted_text("hi").unwrap();
/// out.append_text(":").unwrap();
/// out.append_f64(2.5).unwrap();
/// assert_eq!(out.written(), "\"hi\":2.5");
/// ```
pub struct TextCursor {
    buf: Vec<u8>,
    pos: usize,
    growth: usize,
    options: CursorOptions,
}

impl fmt::Debug for TextCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCursor")
            .field("buf", &self.buf.as_bstr())
            .field("pos", &self.pos)
            .field("growth", &self.growth)
            .finish_non_exhaustive()
    }
}

impl TextCursor {
    /// Wraps `text` for scanning, taking ownership of it.
    ///
    /// Growth stays disabled (`growth_increment == 0`) until an append needs
    /// more room.
    ///
    /// # Errors
    ///
    /// [`CursorError::InvalidInput`] if `text` is empty.
    pub fn from_text(text: impl Into<Vec<u8>>) -> Result<Self, CursorError> {
        let buf = text.into();
        if buf.is_empty() {
            return Err(CursorError::InvalidInput);
        }
        Ok(Self {
            options: CursorOptions {
                initial_capacity: buf.len(),
                ..CursorOptions::default()
            },
            buf,
            pos: 0,
            growth: 0,
        })
    }

    /// Allocates `size` blank bytes for building. `size` also becomes the
    /// first growth step.
    ///
    /// # Errors
    ///
    /// [`CursorError::Allocation`] if the buffer cannot be allocated.
    pub fn with_capacity(size: usize) -> Result<Self, CursorError> {
        Self::with_options(CursorOptions {
            initial_capacity: size,
            ..CursorOptions::default()
        })
    }

    /// Allocates a build-mode buffer as described by `options`.
    ///
    /// # Errors
    ///
    /// [`CursorError::Allocation`] if the buffer cannot be allocated or the
    /// initial capacity exceeds `max_capacity`.
    pub fn with_options(options: CursorOptions) -> Result<Self, CursorError> {
        let size = options.initial_capacity;
        let refuse = CursorError::Allocation {
            requested: size,
            capacity: 0,
        };
        if options.max_capacity.is_some_and(|max| size > max) {
            return Err(refuse);
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(size).map_err(|_| refuse)?;
        buf.resize(size, options.fill_byte);
        Ok(Self {
            buf,
            pos: 0,
            growth: size,
            options,
        })
    }

    /// Ends the session and hands the whole buffer back, blank tail included.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Index of the next byte to read (read mode) or overwrite (build mode).
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current buffer length in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes between the cursor and the end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Size of the last growth step; the next growth adds at least this much.
    #[inline]
    #[must_use]
    pub fn growth_increment(&self) -> usize {
        self.growth
    }

    /// Options this cursor was created with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &CursorOptions {
        &self.options
    }

    /// The whole buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &BStr {
        self.buf.as_bstr()
    }

    /// Everything before the cursor; in build mode, the output so far.
    #[must_use]
    pub fn written(&self) -> &BStr {
        self.buf[..self.pos].as_bstr()
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    // --- Scanning ---------------------------------------------------------

    /// The byte under the cursor, or `None` at the end of the buffer.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Steps over one byte and returns it.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Steps forward once unconditionally, then keeps going while the byte
    /// under the cursor is whitespace (`<= 0x20`, control bytes included).
    ///
    /// Stops on the first other byte or at the end of the buffer.
    pub fn advance_past_whitespace(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
        while self.peek().is_some_and(|b| b <= b' ') {
            self.pos += 1;
        }
    }

    /// Copies the bytes between `start` (which must be under the cursor) and
    /// the next `end` byte.
    ///
    /// The cursor is left on the closing `end` byte, not past it. Without a
    /// closing byte the copy runs to the first NUL or the end of the buffer.
    pub fn extract_delimited(&mut self, start: u8, end: u8) -> Option<BString> {
        if self.peek()? != start {
            return None;
        }
        let from = self.pos + 1;
        let len = self.buf[from..]
            .iter()
            .position(|&b| b == end || b == 0)
            .unwrap_or(self.buf.len() - from);
        self.pos = from + len;
        Some(BString::from(&self.buf[from..self.pos]))
    }

    /// Copies exactly `len` bytes from the cursor and moves past them.
    pub fn extract_fixed(&mut self, len: usize) -> Option<BString> {
        if len > self.remaining() {
            return None;
        }
        let from = self.pos;
        self.pos += len;
        Some(BString::from(&self.buf[from..self.pos]))
    }

    /// Copies the run of numeric bytes (see
    /// [`is_numeric_byte`](crate::numeric::is_numeric_byte)) starting at the
    /// cursor.
    ///
    /// The cursor is left on the *last* byte of the run so that the next
    /// [`advance_past_whitespace`](Self::advance_past_whitespace) lands on the
    /// following token.
    pub fn extract_numeric_run(&mut self) -> Option<String> {
        let run = self.buf[self.pos..]
            .iter()
            .take_while(|&&b| is_numeric_byte(b))
            .count();
        if run == 0 {
            return None;
        }
        let text = self.buf[self.pos..self.pos + run]
            .iter()
            .copied()
            .map(char::from)
            .collect();
        self.pos += run - 1;
        Some(text)
    }

    /// Reads a numeric run and converts its longest valid prefix to `f64`.
    ///
    /// A run with no valid prefix, such as `"-"` or `"e"`, converts to `0.0`.
    pub fn extract_f64(&mut self) -> Option<f64> {
        let run = self.extract_numeric_run()?;
        Some(leading_number(run.as_bytes()).map_or(0.0, |(value, _)| value))
    }

    /// Consumes `literal` and returns `sentinel` if the buffer continues with
    /// it at the cursor.
    pub fn extract_literal<T>(&mut self, literal: impl AsRef<[u8]>, sentinel: T) -> Option<T> {
        self.starts_with(literal).then_some(sentinel)
    }

    /// [`extract_literal`](Self::extract_literal) for `true` and `false`.
    pub fn extract_boolean(&mut self) -> Option<bool> {
        self.extract_literal("true", true)
            .or_else(|| self.extract_literal("false", false))
    }

    /// Moves past `needle` and returns `true` if it is next in the buffer;
    /// otherwise returns `false` with the cursor where it was.
    pub fn starts_with(&mut self, needle: impl AsRef<[u8]>) -> bool {
        let needle = needle.as_ref();
        let end = self.pos + needle.len();
        if self.buf.get(self.pos..end) != Some(needle) {
            return false;
        }
        self.pos = end;
        true
    }
}

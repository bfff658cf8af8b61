use super::TextCursor;
use crate::{error::CursorError, numeric::format_significant};

impl TextCursor {
    /// Makes sure `additional` bytes fit between the cursor and the end of
    /// the buffer.
    ///
    /// When they do not, the buffer grows by `max(additional,
    /// growth_increment)` bytes of `fill_byte`, and that step becomes the new
    /// `growth_increment`.
    ///
    /// # Errors
    ///
    /// [`CursorError::Allocation`] if the allocator refuses or the new length
    /// would exceed `max_capacity`. The buffer is unchanged in that case.
    pub fn ensure_capacity(&mut self, additional: usize) -> Result<(), CursorError> {
        if additional <= self.remaining() {
            return Ok(());
        }
        let step = additional.max(self.growth);
        let capacity = self.buf.len();
        let refuse = CursorError::Allocation {
            requested: step,
            capacity,
        };

        let Some(new_len) = capacity.checked_add(step) else {
            return Err(refuse);
        };
        if self.options.max_capacity.is_some_and(|max| new_len > max) {
            log::debug!("cursor buffer limit reached: {new_len} bytes requested");
            return Err(refuse);
        }
        if self.buf.try_reserve_exact(step).is_err() {
            log::debug!("allocator refused {step} more bytes for cursor buffer");
            return Err(refuse);
        }

        self.buf.resize(new_len, self.options.fill_byte);
        self.growth = step;
        log::trace!("grew cursor buffer from {capacity} to {new_len} bytes");
        Ok(())
    }

    /// Overwrites the bytes at the cursor with `text` and moves past them,
    /// growing the buffer first if needed.
    ///
    /// # Errors
    ///
    /// See [`ensure_capacity`](Self::ensure_capacity).
    pub fn append_text(&mut self, text: impl AsRef<[u8]>) -> Result<(), CursorError> {
        let bytes = text.as_ref();
        self.ensure_capacity(bytes.len())?;
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Appends `text` wrapped in double quotes. No escaping is done.
    ///
    /// # Errors
    ///
    /// See [`ensure_capacity`](Self::ensure_capacity). Whatever was written
    /// before the failing step stays written.
    pub fn append_quoted_text(&mut self, text: impl AsRef<[u8]>) -> Result<(), CursorError> {
        self.append_text(b"\"")?;
        self.append_text(text)?;
        self.append_text(b"\"")
    }

    /// Appends `value` with `significant_digits` significant digits (six by
    /// default), in fixed notation unless the exponent is out of range.
    ///
    /// # Errors
    ///
    /// See [`ensure_capacity`](Self::ensure_capacity).
    pub fn append_f64(&mut self, value: f64) -> Result<(), CursorError> {
        let text = format_significant(value, self.options.significant_digits);
        self.append_text(text)
    }
}

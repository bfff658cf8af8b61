/// Configuration for a build-mode [`TextCursor`](crate::TextCursor).
///
/// Read-mode cursors created with
/// [`TextCursor::from_text`](crate::TextCursor::from_text) use the defaults
/// for everything except `initial_capacity`, which is taken from the text.
///
/// # Default
///
/// ```rust
/// # use strcursor::CursorOptions;
/// let options = CursorOptions::default();
/// assert_eq!(options.initial_capacity, 0);
/// assert_eq!(options.fill_byte, b' ');
/// assert_eq!(options.significant_digits, 6);
/// assert_eq!(options.max_capacity, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorOptions {
    /// Number of bytes allocated up front.
    ///
    /// This is also the first growth step: every later growth adds at least
    /// this many bytes.
    ///
    /// # Default
    ///
    /// `0`
    pub initial_capacity: usize,

    /// Byte written into freshly allocated space, both at construction and
    /// whenever the buffer grows.
    ///
    /// # Default
    ///
    /// `b' '`
    pub fill_byte: u8,

    /// Significant digits used by
    /// [`TextCursor::append_f64`](crate::TextCursor::append_f64).
    ///
    /// A value of `0` is treated as `1`; values above
    /// [`MAX_SIGNIFICANT_DIGITS`](crate::numeric::MAX_SIGNIFICANT_DIGITS)
    /// are clamped to it.
    ///
    /// # Default
    ///
    /// `6`
    pub significant_digits: usize,

    /// Upper bound on the buffer length. Growth past it fails with
    /// [`CursorError::Allocation`](crate::CursorError::Allocation) and leaves
    /// the buffer untouched.
    ///
    /// # Default
    ///
    /// `None` (bounded only by the allocator)
    pub max_capacity: Option<usize>,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            fill_byte: b' ',
            significant_digits: 6,
            max_capacity: None,
        }
    }
}

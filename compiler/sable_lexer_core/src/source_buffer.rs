//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a NUL sentinel after the source content, so the
//! cursor can read the byte at its position without a bounds check and
//! detect end-of-input by comparing against the recorded source length.
//! The total buffer size is rounded up to the next 64-byte boundary; every
//! byte of the padding is also NUL.
//!
//! The padded buffer is kept as a `String` (NUL is valid UTF-8), so cursors
//! can hand out `&str` slices of the source without re-validating.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes are accepted but `source_len`
    /// saturates at `u32::MAX`; content past that point is never scanned.
    pub fn new(source: &str) -> Self {
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

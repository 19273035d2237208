//! Line/column-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor reads the byte at its position directly; the sentinel (`0x00`)
//! guarantees a defined value at end-of-input. EOF is detected when the
//! position has reached the source length, which distinguishes it from
//! interior NUL characters.
//!
//! # Position Tracking
//!
//! Every consuming method keeps `line` and `column` in step with `pos`:
//! consuming a newline moves to the next line and resets the column to 1;
//! consuming any other character (including a multi-byte UTF-8 character)
//! advances the column by one.
//!
//! # Lookahead
//!
//! The cursor is [`Copy`]. Multi-character lookahead is done by copying the
//! cursor, advancing the copy, and either discarding it or committing it
//! back. [`peek()`](Cursor::peek) never moves the cursor.

/// A snapshot of a cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// 1-indexed line.
    pub line: u32,
    /// 1-indexed column, counted in characters.
    pub column: u32,
}

/// Cursor over a sentinel-terminated source buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == '\0'`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    line: u32,
    column: u32,
}

/// Size assertion: &str = 16, 4 x u32 = 16 => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior NUL characters also
    /// return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Returns the byte `offset` positions ahead of the current one.
    ///
    /// Returns `0x00` for any position at or past the end of the source.
    /// Offsets count bytes; every byte the grammar classifies is ASCII, so
    /// this agrees with a character offset wherever the answer matters.
    #[inline]
    pub fn peek(&self, offset: u32) -> u8 {
        let at = self.pos as usize + offset as usize;
        if at < self.source_len as usize {
            self.buf.as_bytes()[at]
        } else {
            0
        }
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-indexed line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-indexed column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of the current position.
    #[inline]
    pub fn location(&self) -> Location {
        Location {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Consume one full character and return it.
    ///
    /// # Contract
    ///
    /// The cursor must not be at EOF. Callers check [`is_eof()`](Self::is_eof)
    /// first; consuming past the end is a bug in the caller.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn consume(&mut self) -> char {
        debug_assert!(!self.is_eof(), "consume() called at end of input");
        let ch = self.buf[self.pos as usize..]
            .chars()
            .next()
            .unwrap_or('\0');
        self.pos += ch.len_utf8() as u32;
        self.track(ch == '\n');
        ch
    }

    /// Advance past one ASCII byte.
    ///
    /// Cheaper than [`consume()`](Self::consume) when the caller has already
    /// classified the current byte as ASCII.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii() && !self.is_eof());
        let newline = self.current() == b'\n';
        self.pos += 1;
        self.track(newline);
    }

    /// Advance past `n` ASCII bytes, none of which is a newline.
    ///
    /// Used for fixed-text tokens (operators, comment markers) whose bytes
    /// have already been matched.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.source_len);
        self.pos += n;
        self.column += n;
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred` must only accept ASCII bytes and `pred(0)` must return `false`,
    /// so the sentinel terminates the loop. All predicates in
    /// [`char_class`](crate::char_class) satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> u32 {
        let start = self.pos;
        loop {
            let b = self.current();
            if !pred(b) {
                break;
            }
            self.pos += 1;
            self.track(b == b'\n');
        }
        self.pos - start
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// The newline itself is not consumed. Used for single-line comment bodies.
    pub fn eat_until_newline_or_eof(&mut self) {
        let end = match memchr::memchr(b'\n', self.remaining().as_bytes()) {
            Some(offset) => self.pos + to_u32(offset),
            None => self.source_len,
        };
        self.advance_to(end);
    }

    /// Advance to the next occurrence of `byte`, or to EOF if there is none.
    ///
    /// The found byte is not consumed. Returns `true` if it was found.
    /// Line and column stay correct across any newlines skipped.
    pub fn skip_to_byte(&mut self, byte: u8) -> bool {
        match memchr::memchr(byte, self.remaining().as_bytes()) {
            Some(offset) => {
                self.advance_to(self.pos + to_u32(offset));
                true
            }
            None => {
                self.advance_to(self.source_len);
                false
            }
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes: the closing `quote`, `\`, and `\n`. Uses `memchr3`
    /// for SIMD-accelerated search.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        match memchr::memchr3(quote, b'\\', b'\n', self.remaining().as_bytes()) {
            Some(offset) => {
                self.advance_to(self.pos + to_u32(offset));
                self.current()
            }
            None => {
                self.advance_to(self.source_len);
                0
            }
        }
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. Token boundaries produced by the scanner always do.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Unread source content, without the sentinel.
    fn remaining(&self) -> &'a str {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Jump forward to `end`, recomputing line and column over the skipped text.
    fn advance_to(&mut self, end: u32) {
        let skipped = &self.buf[self.pos as usize..end as usize];
        let bytes = skipped.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += to_u32(memchr::memchr_iter(b'\n', bytes).count());
                self.column = 1 + to_u32(skipped[last + 1..].chars().count());
            }
            None => self.column += to_u32(skipped.chars().count()),
        }
        self.pos = end;
    }

    #[inline]
    fn track(&mut self, newline: bool) {
        if newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Lengths within the source always fit: `source_len` is a `u32`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "lengths are bounded by source_len which fits in u32"
)]
#[inline]
fn to_u32(n: usize) -> u32 {
    n as u32
}

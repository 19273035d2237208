//! Table-driven ASCII classification.
//!
//! Every byte maps to a [`CharClass`] set through one static 256-entry table,
//! so each predicate is a single indexed read plus a mask. Non-ASCII bytes
//! and the sentinel (`0x00`) have no classes, which makes every predicate
//! here safe to pass to [`Cursor::eat_while`](crate::Cursor::eat_while).
//!
//! Operators are not a class here: which bytes are operators, and of what
//! kind, is decided by [`TokenKind::single_char_operator`](crate::TokenKind::single_char_operator).

use bitflags::bitflags;

bitflags! {
    /// Lexical classes a byte can belong to.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharClass: u8 {
        /// `A-Z`.
        const UPPER = 1 << 0;
        /// `a-z`.
        const LOWER = 1 << 1;
        /// `0-9`.
        const DIGIT = 1 << 2;
        /// `_`.
        const UNDERSCORE = 1 << 3;
        /// Space, tab, carriage return, newline.
        const WHITESPACE = 1 << 4;
        /// `+` and `-`, which may open a signed numeric literal.
        const SIGN = 1 << 5;
        /// `( ) { } [ ] , ; :`.
        const PUNCTUATOR = 1 << 6;

        /// Bytes that may follow the first character of an identifier.
        const IDENT_CONTINUE = Self::LOWER.bits() | Self::DIGIT.bits() | Self::UNDERSCORE.bits();
        /// Bytes a keyword word-boundary check treats as part of a word.
        const WORD = Self::UPPER.bits() | Self::IDENT_CONTINUE.bits();
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = match i as u8 {
            b'A'..=b'Z' => CharClass::UPPER.bits(),
            b'a'..=b'z' => CharClass::LOWER.bits(),
            b'0'..=b'9' => CharClass::DIGIT.bits(),
            b'_' => CharClass::UNDERSCORE.bits(),
            b' ' | b'\t' | b'\r' | b'\n' => CharClass::WHITESPACE.bits(),
            b'+' | b'-' => CharClass::SIGN.bits(),
            b'(' | b')' | b'{' | b'}' | b'[' | b']' | b',' | b';' | b':' => {
                CharClass::PUNCTUATOR.bits()
            }
            _ => 0,
        };
        i += 1;
    }
    table
};

/// All classes of `b`.
#[inline]
pub fn class_of(b: u8) -> CharClass {
    CharClass::from_bits_retain(CLASS_TABLE[b as usize])
}

#[inline]
fn has(b: u8, class: CharClass) -> bool {
    class_of(b).intersects(class)
}

#[inline]
pub fn is_upper(b: u8) -> bool {
    has(b, CharClass::UPPER)
}

#[inline]
pub fn is_lower(b: u8) -> bool {
    has(b, CharClass::LOWER)
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    has(b, CharClass::DIGIT)
}

#[inline]
pub fn is_sign(b: u8) -> bool {
    has(b, CharClass::SIGN)
}

/// `a-z`, `0-9`, or `_`. Uppercase letters end an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    has(b, CharClass::IDENT_CONTINUE)
}

/// Any letter, digit, or `_`.
#[inline]
pub fn is_word(b: u8) -> bool {
    has(b, CharClass::WORD)
}

#[inline]
pub fn is_whitespace(b: u8) -> bool {
    has(b, CharClass::WHITESPACE)
}

#[inline]
pub fn is_punctuator(b: u8) -> bool {
    has(b, CharClass::PUNCTUATOR)
}

#[cfg(test)]
mod tests;

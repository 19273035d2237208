//! Low-level building blocks for the Sable lexer.
//!
//! This crate has no `sable_*` dependencies. It provides:
//! - [`SourceBuffer`]: NUL-sentinel terminated copy of the source text
//! - [`Cursor`]: `Copy` read position with line/column tracking
//! - [`char_class`]: table-driven ASCII classification
//! - [`TokenKind`]: the closed set of token categories
//!
//! The scanning engine that turns these into tokens, diagnostics, and a
//! symbol table lives in `sable_lexer`.

pub mod char_class;
mod cursor;
mod source_buffer;
mod tag;

pub use cursor::{Cursor, Location};
pub use source_buffer::SourceBuffer;
pub use tag::TokenKind;

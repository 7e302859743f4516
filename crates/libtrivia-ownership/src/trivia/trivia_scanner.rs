//! A lossless scanner that splits C-family trivia text into
//! [`TriviaAtom`]s.
//!
//! This is the classification half of a lexer: it is handed the text that
//! sits *between* two significant tokens and decides where each atom starts
//! and ends and what kind it is. Concatenating the text of every atom it
//! yields always reproduces the input exactly.
//!
//! # Recognized atoms
//!
//! - `\r\n`, `\n`, `\r` → [`TriviaKind::Newline`]
//! - runs of non-line-break whitespace → [`TriviaKind::Whitespace`]
//! - `//` up to (excluding) the next line break → [`TriviaKind::LineComment`]
//! - `/*` through the next `*/` → [`TriviaKind::BlockComment`] (an
//!   unterminated block comment runs to the end of the input)
//! - any other run of text → [`TriviaKind::Other`]
//!
//! # Usage
//!
//! ```rust
//! use libtrivia_ownership::trivia::scan_trivia;
//!
//! let trivia = scan_trivia(" // note\n");
//! assert_eq!(trivia.len(), 3);
//! assert!(trivia.ends_with_newline());
//! ```

use crate::trivia::TriviaAtom;
use crate::trivia::TriviaKind;
use crate::trivia::TriviaSequence;
use std::borrow::Cow;

/// An iterator of [`TriviaAtom`]s scanned from a `&str`.
///
/// Atoms borrow their text from the source (`Cow::Borrowed`), so scanning
/// never allocates per atom.
pub struct TriviaScanner<'src> {
    /// The full trivia text being scanned.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,
}

impl<'src> TriviaScanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
        }
    }

    /// Returns the remaining source text to be scanned.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Consumes `byte_len` bytes and returns them as an atom of `kind`.
    fn take(&mut self, kind: TriviaKind, byte_len: usize) -> TriviaAtom<'src> {
        let start = self.curr_byte_offset;
        self.curr_byte_offset += byte_len;
        TriviaAtom {
            kind,
            text: Cow::Borrowed(&self.source[start..self.curr_byte_offset]),
        }
    }

    fn scan_newline(&mut self, remaining: &str) -> TriviaAtom<'src> {
        let byte_len = if remaining.starts_with("\r\n") { 2 } else { 1 };
        self.take(TriviaKind::Newline, byte_len)
    }

    fn scan_whitespace(&mut self, remaining: &str) -> TriviaAtom<'src> {
        let byte_len = remaining
            .char_indices()
            .find(|&(_, ch)| !is_horizontal_whitespace(ch))
            .map_or(remaining.len(), |(offset, _)| offset);
        self.take(TriviaKind::Whitespace, byte_len)
    }

    fn scan_line_comment(&mut self, remaining: &str) -> TriviaAtom<'src> {
        let byte_len = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
            .unwrap_or(remaining.len());
        self.take(TriviaKind::LineComment, byte_len)
    }

    fn scan_block_comment(&mut self, remaining: &str) -> TriviaAtom<'src> {
        // Search past the opening `/*` so that `/*/` is not treated as closed.
        let byte_len = memchr::memmem::find(&remaining.as_bytes()[2..], b"*/")
            .map_or(remaining.len(), |offset| offset + 2 + 2);
        self.take(TriviaKind::BlockComment, byte_len)
    }

    fn scan_other(&mut self, remaining: &str) -> TriviaAtom<'src> {
        let mut byte_len = remaining.len();
        for (offset, ch) in remaining.char_indices().skip(1) {
            if ch == '\n'
                || ch == '\r'
                || is_horizontal_whitespace(ch)
                || starts_comment(&remaining[offset..])
            {
                byte_len = offset;
                break;
            }
        }
        self.take(TriviaKind::Other, byte_len)
    }
}

impl<'src> Iterator for TriviaScanner<'src> {
    type Item = TriviaAtom<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        let first = remaining.chars().next()?;

        let atom = match first {
            '\n' | '\r' => self.scan_newline(remaining),
            ch if is_horizontal_whitespace(ch) => self.scan_whitespace(remaining),
            '/' if remaining.starts_with("//") => self.scan_line_comment(remaining),
            '/' if remaining.starts_with("/*") => self.scan_block_comment(remaining),
            _ => self.scan_other(remaining),
        };
        Some(atom)
    }
}

/// Scans `source` into a [`TriviaSequence`].
pub fn scan_trivia(source: &str) -> TriviaSequence<'_> {
    TriviaScanner::new(source).collect()
}

fn is_horizontal_whitespace(ch: char) -> bool {
    ch != '\n' && ch != '\r' && (ch.is_whitespace() || ch == '\u{FEFF}')
}

fn starts_comment(text: &str) -> bool {
    text.starts_with("//") || text.starts_with("/*")
}

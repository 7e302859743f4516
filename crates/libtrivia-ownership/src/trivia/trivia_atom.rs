use crate::trivia::TriviaKind;
use std::borrow::Cow;
use std::fmt;

/// An immutable unit of inter-token text along with its classification.
///
/// Atoms produced by [`TriviaScanner`](crate::trivia::TriviaScanner) borrow
/// their text directly from the scanned source; atoms built by hand or
/// synthesized during an edit own (or statically borrow) theirs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TriviaAtom<'src> {
    /// The classification of this atom.
    pub kind: TriviaKind,

    /// The literal text of this atom, exactly as it appears in source.
    ///
    /// For comments this includes the delimiters (`//`, `/*`, `*/`).
    pub text: Cow<'src, str>,
}

impl<'src> TriviaAtom<'src> {
    pub fn new(kind: TriviaKind, text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn whitespace(text: impl Into<Cow<'src, str>>) -> Self {
        Self::new(TriviaKind::Whitespace, text)
    }

    pub fn newline(text: impl Into<Cow<'src, str>>) -> Self {
        Self::new(TriviaKind::Newline, text)
    }

    pub fn line_comment(text: impl Into<Cow<'src, str>>) -> Self {
        Self::new(TriviaKind::LineComment, text)
    }

    pub fn block_comment(text: impl Into<Cow<'src, str>>) -> Self {
        Self::new(TriviaKind::BlockComment, text)
    }

    pub fn other(text: impl Into<Cow<'src, str>>) -> Self {
        Self::new(TriviaKind::Other, text)
    }

    /// A zero-width line break.
    ///
    /// Inserted by edits that need a logical line boundary (e.g. so that a
    /// relocated `//` comment cannot swallow the code that follows it) while
    /// leaving the rendering of the surrounding text to the caller.
    pub fn synthesized_newline() -> Self {
        Self::new(TriviaKind::Newline, "")
    }

    /// Returns `true` if this atom renders as no text at all.
    pub fn is_zero_width(&self) -> bool {
        self.text.is_empty()
    }

    /// Converts into an atom that owns its text and so outlives the source
    /// it was scanned from.
    pub fn into_owned(self) -> TriviaAtom<'static> {
        TriviaAtom {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl fmt::Display for TriviaAtom<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Classification of a single [`TriviaAtom`](crate::trivia::TriviaAtom).
///
/// Ownership assignment is line-oriented, so the only distinctions that
/// matter to it are "is this a line break?", "is this pure formatting?" and
/// "is this a comment?". Everything that is none of those is `Other` (e.g.
/// skipped or disabled text that a lexer chose to preserve as trivia).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaKind {
    /// A run of horizontal whitespace (spaces, tabs, form feeds, ...).
    Whitespace,

    /// A single hard line break (`\n`, `\r\n` or `\r`).
    ///
    /// Newline atoms may also be zero-width when synthesized (see
    /// [`TriviaAtom::synthesized_newline`](crate::trivia::TriviaAtom::synthesized_newline)).
    Newline,

    /// A comment that extends to the end of its line (e.g. `// note`).
    ///
    /// The line break that terminates it is *not* part of the comment.
    LineComment,

    /// A delimited comment (e.g. `/* note */`), possibly spanning lines.
    BlockComment,

    /// Any other preserved non-significant text.
    Other,
}

impl TriviaKind {
    pub fn is_newline(self) -> bool {
        matches!(self, Self::Newline)
    }

    /// Returns `true` for pure formatting trivia: whitespace and newlines.
    pub fn is_whitespace_or_newline(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}

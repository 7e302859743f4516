use crate::syntax::SyntaxItem;
use crate::trivia::TriviaSequence;
use inherent::inherent;
use std::borrow::Cow;
use std::fmt;

/// A significant token together with the trivia physically attached to it.
///
/// By convention a token's trailing trivia runs up to and including the
/// first line break after it (or up to the next token, whichever comes
/// first). All other trivia before a token is its leading trivia.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SyntaxToken<'src> {
    /// The significant text of the token (e.g. `(`, `,`, `foo`).
    pub text: Cow<'src, str>,

    /// Trivia that precedes this token's text.
    pub leading_trivia: TriviaSequence<'src>,

    /// Trivia that follows this token's text.
    pub trailing_trivia: TriviaSequence<'src>,
}

impl<'src> SyntaxToken<'src> {
    /// Convenience constructor for a token with no trivia.
    pub fn new(text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            text: text.into(),
            leading_trivia: TriviaSequence::new(),
            trailing_trivia: TriviaSequence::new(),
        }
    }

    /// Constructs a token with the given leading and trailing trivia.
    pub fn with_trivia(
        leading_trivia: TriviaSequence<'src>,
        text: impl Into<Cow<'src, str>>,
        trailing_trivia: TriviaSequence<'src>,
    ) -> Self {
        Self {
            text: text.into(),
            leading_trivia,
            trailing_trivia,
        }
    }
}

#[inherent]
impl<'src> SyntaxItem<'src> for SyntaxToken<'src> {
    pub fn leading_trivia(&self) -> &TriviaSequence<'src> {
        &self.leading_trivia
    }

    pub fn trailing_trivia(&self) -> &TriviaSequence<'src> {
        &self.trailing_trivia
    }

    pub fn with_leading_trivia(&self, trivia: TriviaSequence<'src>) -> Self {
        Self {
            text: self.text.clone(),
            leading_trivia: trivia,
            trailing_trivia: self.trailing_trivia.clone(),
        }
    }

    pub fn with_trailing_trivia(&self, trivia: TriviaSequence<'src>) -> Self {
        Self {
            text: self.text.clone(),
            leading_trivia: self.leading_trivia.clone(),
            trailing_trivia: trivia,
        }
    }

    pub fn with_appended_trailing_trivia(&self, trivia: &TriviaSequence<'src>) -> Self;
}

impl fmt::Display for SyntaxToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading_trivia, self.text, self.trailing_trivia)
    }
}

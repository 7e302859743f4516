use crate::syntax::SyntaxItem;
use crate::syntax::SyntaxToken;
use crate::trivia::TriviaSequence;
use inherent::inherent;
use std::fmt;

/// A non-empty run of [`SyntaxToken`]s treated as one list item (e.g. the
/// tokens of `x = 1` in a declarator list).
///
/// The node's leading trivia is its first token's leading trivia and its
/// trailing trivia is its last token's trailing trivia. Trivia between the
/// node's own tokens is interior and never reassigned.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SyntaxNode<'src> {
    /// Always non-empty.
    tokens: Vec<SyntaxToken<'src>>,
}

impl<'src> SyntaxNode<'src> {
    /// Creates a single-token node.
    pub fn new(token: SyntaxToken<'src>) -> Self {
        Self {
            tokens: vec![token],
        }
    }

    /// Creates a node from `tokens`, or returns `None` if `tokens` is empty.
    pub fn from_tokens(tokens: Vec<SyntaxToken<'src>>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// Returns a copy of this node with `token` appended as its new last
    /// token.
    pub fn with_token(&self, token: SyntaxToken<'src>) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Self { tokens }
    }

    pub fn tokens(&self) -> &[SyntaxToken<'src>] {
        &self.tokens
    }

    pub fn first_token(&self) -> &SyntaxToken<'src> {
        &self.tokens[0]
    }

    pub fn last_token(&self) -> &SyntaxToken<'src> {
        &self.tokens[self.tokens.len() - 1]
    }

    /// The node's significant text with interior trivia but without its
    /// outer leading and trailing trivia (e.g. `x = 1`).
    pub fn text(&self) -> String {
        let mut text = String::new();
        let last_index = self.tokens.len() - 1;
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                text.push_str(&token.leading_trivia.to_string());
            }
            text.push_str(&token.text);
            if index < last_index {
                text.push_str(&token.trailing_trivia.to_string());
            }
        }
        text
    }
}

impl<'src> From<SyntaxToken<'src>> for SyntaxNode<'src> {
    fn from(token: SyntaxToken<'src>) -> Self {
        Self::new(token)
    }
}

#[inherent]
impl<'src> SyntaxItem<'src> for SyntaxNode<'src> {
    pub fn leading_trivia(&self) -> &TriviaSequence<'src> {
        &self.first_token().leading_trivia
    }

    pub fn trailing_trivia(&self) -> &TriviaSequence<'src> {
        &self.last_token().trailing_trivia
    }

    pub fn with_leading_trivia(&self, trivia: TriviaSequence<'src>) -> Self {
        let mut tokens = self.tokens.clone();
        tokens[0] = tokens[0].with_leading_trivia(trivia);
        Self { tokens }
    }

    pub fn with_trailing_trivia(&self, trivia: TriviaSequence<'src>) -> Self {
        let mut tokens = self.tokens.clone();
        let last_index = tokens.len() - 1;
        tokens[last_index] = tokens[last_index].with_trailing_trivia(trivia);
        Self { tokens }
    }

    pub fn with_appended_trailing_trivia(&self, trivia: &TriviaSequence<'src>) -> Self;
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

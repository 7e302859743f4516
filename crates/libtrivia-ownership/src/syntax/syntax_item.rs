use crate::trivia::TriviaSequence;

/// An element of a [`SeparatedList`](crate::syntax::SeparatedList), viewed
/// only through the trivia physically attached to its outer edges.
///
/// Ownership assignment never inspects node-specific structure (whether an
/// item is an argument, a parameter, a declarator, ...). All it needs is the
/// trivia at the item's edges and a way to produce a copy of the item with
/// different edge trivia.
pub trait SyntaxItem<'src>: Clone {
    /// The trivia physically attached before this item's first token.
    fn leading_trivia(&self) -> &TriviaSequence<'src>;

    /// The trivia physically attached after this item's last token.
    fn trailing_trivia(&self) -> &TriviaSequence<'src>;

    /// Returns a copy of this item with its leading trivia replaced.
    fn with_leading_trivia(&self, trivia: TriviaSequence<'src>) -> Self;

    /// Returns a copy of this item with its trailing trivia replaced.
    fn with_trailing_trivia(&self, trivia: TriviaSequence<'src>) -> Self;

    /// Returns a copy of this item with `trivia` appended after its existing
    /// trailing trivia.
    fn with_appended_trailing_trivia(&self, trivia: &TriviaSequence<'src>) -> Self {
        self.with_trailing_trivia(self.trailing_trivia().concat(trivia))
    }
}

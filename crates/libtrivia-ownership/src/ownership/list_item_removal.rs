use crate::ownership::TriviaOwnership;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxToken;

/// The result of removing one item from a separated list.
///
/// The boundary tokens are returned alongside the rebuilt list because
/// removal may move trivia off of them (removing the first item clears the
/// previous token's trailing trivia, which the removed item owned).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListItemRemoval<'src, T> {
    pub previous_token: SyntaxToken<'src>,
    pub list: SeparatedList<'src, T>,
    pub next_token: SyntaxToken<'src>,

    /// Comments the removed item owned, prepared for reinsertion elsewhere.
    ///
    /// Empty when the removed item owned only whitespace and line breaks.
    /// With the default
    /// [`RemovedTriviaPlacement::Leading`](crate::ownership::RemovedTriviaPlacement::Leading)
    /// everything is in `leading` and `trailing` is always empty.
    pub removed_trivia: TriviaOwnership<'src>,
}

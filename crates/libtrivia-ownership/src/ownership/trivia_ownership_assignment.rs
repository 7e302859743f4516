use crate::TriviaOwnershipError;
use crate::ownership::ListItemRemoval;
use crate::ownership::TriviaOwnership;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxItem;
use crate::syntax::SyntaxToken;

/// Decides which list item logically owns the trivia between the items of a
/// separated list, and removes items while keeping that trivia intact.
///
/// Implementations encode a language's conventions for where comments
/// "belong". [`LineOrientedTriviaOwnership`](crate::ownership::LineOrientedTriviaOwnership)
/// implements the convention shared by C-family languages.
pub trait TriviaOwnershipAssignment {
    /// Computes the `(leading, trailing)` trivia owned by each item of
    /// `list`, in list order.
    ///
    /// `previous_token` and `next_token` are the tokens immediately before
    /// and after the list (e.g. `(` and `)`).
    ///
    /// Fails with [`TriviaOwnershipError::MalformedList`] if the list's
    /// separators do not interleave its items.
    fn assign_trivia_ownership<'src, T: SyntaxItem<'src>>(
        &self,
        previous_token: &SyntaxToken<'src>,
        list: &SeparatedList<'src, T>,
        next_token: &SyntaxToken<'src>,
    ) -> Result<Vec<TriviaOwnership<'src>>, TriviaOwnershipError>;

    /// Removes the item at `index_to_remove` from `list`, reassigning the
    /// trivia of its former neighbors and reporting the comments it owned.
    ///
    /// Fails with [`TriviaOwnershipError::OutOfRange`] if `list` is empty or
    /// `index_to_remove >= list.len()`.
    fn remove_list_item<'src, T: SyntaxItem<'src>>(
        &self,
        previous_token: &SyntaxToken<'src>,
        list: &SeparatedList<'src, T>,
        next_token: &SyntaxToken<'src>,
        index_to_remove: usize,
    ) -> Result<ListItemRemoval<'src, T>, TriviaOwnershipError>;
}

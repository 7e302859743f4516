use crate::TriviaOwnershipError;
use crate::ownership::ListItemRemoval;
use crate::ownership::ListItemRemovalOptions;
use crate::ownership::TriviaOwnership;
use crate::ownership::TriviaOwnershipAssignment;
use crate::ownership::list_item_remover::remove_item;
use crate::ownership::ownership_assigner::assign_ownership;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxItem;
use crate::syntax::SyntaxToken;
use inherent::inherent;

/// [`TriviaOwnershipAssignment`] for languages where a comment on the same
/// line as an item belongs to that item, and a comment on its own line
/// belongs to the item that follows it:
///
/// ```text
/// M(
///     // owned by `a` (leading)
///     a, // owned by `a` (trailing)
///     /* owned by `b` (leading) */ b // owned by `b` (trailing)
/// );
/// ```
///
/// # Example
///
/// ```rust
/// use libtrivia_ownership::ownership::LineOrientedTriviaOwnership;
/// use libtrivia_ownership::syntax::SeparatedList;
/// use libtrivia_ownership::syntax::SyntaxToken;
/// use libtrivia_ownership::trivia::scan_trivia;
/// use libtrivia_ownership::trivia::TriviaSequence;
///
/// let open = SyntaxToken::new("(");
/// let close = SyntaxToken::new(")");
/// let list = SeparatedList::new(
///     vec![
///         SyntaxToken::new("a"),
///         SyntaxToken::with_trivia(scan_trivia(" "), "b", TriviaSequence::new()),
///     ],
///     vec![SyntaxToken::with_trivia(
///         TriviaSequence::new(),
///         ",",
///         scan_trivia(" // about a\n"),
///     )],
/// )?;
///
/// let ownership = LineOrientedTriviaOwnership::new()
///     .assign_trivia_ownership(&open, &list, &close)?;
/// assert_eq!(ownership[0].trailing.to_string(), " // about a\n");
/// # Ok::<(), libtrivia_ownership::TriviaOwnershipError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOrientedTriviaOwnership {
    options: ListItemRemovalOptions,
}

impl LineOrientedTriviaOwnership {
    /// Creates the service with default [`ListItemRemovalOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ListItemRemovalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ListItemRemovalOptions {
        &self.options
    }
}

#[inherent]
impl TriviaOwnershipAssignment for LineOrientedTriviaOwnership {
    pub fn assign_trivia_ownership<'src, T: SyntaxItem<'src>>(
        &self,
        previous_token: &SyntaxToken<'src>,
        list: &SeparatedList<'src, T>,
        next_token: &SyntaxToken<'src>,
    ) -> Result<Vec<TriviaOwnership<'src>>, TriviaOwnershipError> {
        assign_ownership(previous_token, list, next_token)
    }

    pub fn remove_list_item<'src, T: SyntaxItem<'src>>(
        &self,
        previous_token: &SyntaxToken<'src>,
        list: &SeparatedList<'src, T>,
        next_token: &SyntaxToken<'src>,
        index_to_remove: usize,
    ) -> Result<ListItemRemoval<'src, T>, TriviaOwnershipError> {
        remove_item(previous_token, list, next_token, index_to_remove, &self.options)
    }
}

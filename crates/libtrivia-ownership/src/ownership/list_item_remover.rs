//! Removal of one item from a separated list, redistributing the trivia
//! around it according to [`assign_ownership`].

use crate::TriviaOwnershipError;
use crate::ownership::ListItemRemoval;
use crate::ownership::ListItemRemovalOptions;
use crate::ownership::RemovedTriviaPlacement;
use crate::ownership::TriviaOwnership;
use crate::ownership::ownership_assigner::assign_ownership;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxItem;
use crate::syntax::SyntaxToken;
use crate::trivia::TriviaAtom;
use crate::trivia::TriviaSequence;

pub(crate) fn remove_item<'src, T: SyntaxItem<'src>>(
    previous_token: &SyntaxToken<'src>,
    list: &SeparatedList<'src, T>,
    next_token: &SyntaxToken<'src>,
    index_to_remove: usize,
    options: &ListItemRemovalOptions,
) -> Result<ListItemRemoval<'src, T>, TriviaOwnershipError> {
    let count = list.len();
    if index_to_remove >= count {
        return Err(TriviaOwnershipError::OutOfRange {
            index: index_to_remove,
            count,
        });
    }
    tracing::debug!(index = index_to_remove, count, "removing separated list item");

    let trivia_parts = assign_ownership(previous_token, list, next_token)?;

    let mut items: Vec<T> = Vec::with_capacity(count - 1);
    let mut separators: Vec<SyntaxToken<'src>> = Vec::with_capacity(count.saturating_sub(1));
    for (index, item) in list.items().iter().enumerate() {
        if index == index_to_remove {
            continue;
        }

        // The first item's logical leading trivia is the previous token's
        // trailing trivia, which stays where it is.
        items.push(if index == 0 {
            item.clone()
        } else {
            item.with_leading_trivia(trivia_parts[index].leading.clone())
        });

        if let Some(separator) = list.separator_at(index) {
            separators.push(separator.with_trailing_trivia(trivia_parts[index].trailing.clone()));
        }
    }

    // Removing the last item leaves the separator before it dangling at the
    // end of the list. Fold its trivia into the new last item and drop it.
    if index_to_remove == count - 1
        && let Some(dangling_separator) = separators.pop()
        && let Some(last_item) = items.pop()
    {
        let separator_trivia = dangling_separator
            .leading_trivia
            .concat(&dangling_separator.trailing_trivia);
        items.push(last_item.with_appended_trailing_trivia(&separator_trivia));
    }

    let new_previous_token = if index_to_remove == 0 {
        // Already owned (and now removed) by the first item.
        previous_token.with_trailing_trivia(TriviaSequence::new())
    } else {
        previous_token.clone()
    };

    if options.ensure_terminal_newline
        && let Some(last_item) = items.pop()
    {
        items.push(if last_item.trailing_trivia().ends_with_newline() {
            last_item
        } else {
            last_item.with_appended_trailing_trivia(&TriviaSequence::from(vec![
                TriviaAtom::synthesized_newline(),
            ]))
        });
    }

    let removed_trivia = removed_item_trivia(&trivia_parts[index_to_remove], options);
    tracing::debug!(
        discarded = removed_trivia.is_empty(),
        "collected trivia owned by the removed item"
    );

    Ok(ListItemRemoval {
        previous_token: new_previous_token,
        list: SeparatedList::new(items, separators)?,
        next_token: next_token.clone(),
        removed_trivia,
    })
}

/// Prepares the trivia owned by a removed item for reinsertion elsewhere.
///
/// Pure formatting is discarded. Otherwise every comment is made to end its
/// own line so it cannot swallow whatever it is later spliced in front of.
fn removed_item_trivia<'src>(
    owned: &TriviaOwnership<'src>,
    options: &ListItemRemovalOptions,
) -> TriviaOwnership<'src> {
    let all_owned = owned.concat();
    if all_owned.is_whitespace_or_newline_only() {
        return TriviaOwnership::default();
    }

    match options.removed_trivia_placement {
        RemovedTriviaPlacement::Leading => {
            TriviaOwnership::new(all_owned.with_comment_line_breaks(), TriviaSequence::new())
        },
        RemovedTriviaPlacement::Split => TriviaOwnership::new(
            owned.leading.with_comment_line_breaks(),
            owned.trailing.with_comment_line_breaks(),
        ),
    }
}

//! Line-oriented assignment of list trivia to the items that logically own
//! it.
//!
//! A single left-to-right pass over the list threads a `carry` sequence:
//! the trivia that will become the *next* item's leading trivia. It starts
//! as the previous boundary token's trailing trivia. At each separator:
//!
//! - If the separator begins on the line the item ends on, the item owns
//!   the separator's leading trivia plus the separator's trailing trivia
//!   through its first line break (so `a, // note` gives `// note` to `a`).
//!   The rest of the separator's trailing trivia is carried forward.
//! - Otherwise a line break already sits between the item and the
//!   separator, so the item owns nothing and all of the separator's trivia
//!   is carried forward to the next item.
//!
//! The last item has no separator after it. It owns the next boundary
//! token's leading trivia and, when it sits on its own line and the
//! boundary token follows on that same line, the boundary token's trailing
//! trivia as well (`    c); // note` gives `// note` to `c`).
//!
//! Item trivia that is physically attached to the items themselves is never
//! part of the assignment: it already belongs to the item it is attached to.

use crate::TriviaOwnershipError;
use crate::ownership::TriviaOwnership;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxItem;
use crate::syntax::SyntaxToken;
use crate::trivia::TriviaSequence;

pub(crate) fn assign_ownership<'src, T: SyntaxItem<'src>>(
    previous_token: &SyntaxToken<'src>,
    list: &SeparatedList<'src, T>,
    next_token: &SyntaxToken<'src>,
) -> Result<Vec<TriviaOwnership<'src>>, TriviaOwnershipError> {
    list.check_well_formed()?;

    let items = list.items();
    let separators = list.separators();
    tracing::trace!(items = items.len(), "assigning list trivia ownership");

    let mut carry = previous_token.trailing_trivia.clone();
    let mut ownership = Vec::with_capacity(items.len());
    for (index, (item, separator)) in items
        .iter()
        .zip(separators.iter().map(Some).chain(std::iter::once(None)))
        .enumerate()
    {
        let leading = std::mem::take(&mut carry);
        let trailing = match separator {
            Some(separator) => {
                let (trailing, next_carry) = split_separator_trivia(item, separator);
                carry = next_carry;
                trailing
            },
            None => last_item_trailing_trivia(previous_token, list, index, next_token),
        };
        ownership.push(TriviaOwnership::new(leading, trailing));
    }

    Ok(ownership)
}

/// Splits the trivia of the separator after `item` into the part `item`
/// owns as trailing trivia and the part carried to the following item.
fn split_separator_trivia<'src, T: SyntaxItem<'src>>(
    item: &T,
    separator: &SyntaxToken<'src>,
) -> (TriviaSequence<'src>, TriviaSequence<'src>) {
    let separator_on_item_line = !item.trailing_trivia().contains_newline()
        && !separator.leading_trivia.contains_newline();

    if separator_on_item_line {
        let (through_newline, after_newline) =
            separator.trailing_trivia.split_through_first_newline();
        (separator.leading_trivia.concat(&through_newline), after_newline)
    } else {
        (
            TriviaSequence::new(),
            separator.leading_trivia.concat(&separator.trailing_trivia),
        )
    }
}

fn last_item_trailing_trivia<'src, T: SyntaxItem<'src>>(
    previous_token: &SyntaxToken<'src>,
    list: &SeparatedList<'src, T>,
    last_index: usize,
    next_token: &SyntaxToken<'src>,
) -> TriviaSequence<'src> {
    let last_item = &list.items()[last_index];
    let next_token_on_item_line = !last_item.trailing_trivia().contains_newline()
        && !next_token.leading_trivia.contains_newline();

    if next_token_on_item_line && is_last_item_on_own_line(previous_token, list, last_index) {
        tracing::trace!("last item owns the next token's trailing trivia");
        next_token.leading_trivia.concat(&next_token.trailing_trivia)
    } else {
        next_token.leading_trivia.clone()
    }
}

/// Whether a line break separates the last item from whatever precedes it.
///
/// A lone item is on its own line when a line break follows the previous
/// boundary token or precedes the item itself. Otherwise a line break must
/// appear somewhere between the penultimate item and the last one.
fn is_last_item_on_own_line<'src, T: SyntaxItem<'src>>(
    previous_token: &SyntaxToken<'src>,
    list: &SeparatedList<'src, T>,
    last_index: usize,
) -> bool {
    let items = list.items();
    let last_item = &items[last_index];
    if last_index == 0 {
        return previous_token.trailing_trivia.contains_newline()
            || last_item.leading_trivia().contains_newline();
    }

    let penultimate_item = &items[last_index - 1];
    let separator = &list.separators()[last_index - 1];
    penultimate_item.trailing_trivia().contains_newline()
        || last_item.leading_trivia().contains_newline()
        || separator.leading_trivia.contains_newline()
        || separator.trailing_trivia.contains_newline()
}

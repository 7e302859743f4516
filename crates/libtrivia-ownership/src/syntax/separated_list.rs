use crate::TriviaOwnershipError;
use crate::syntax::ListElement;
use crate::syntax::SyntaxToken;
use std::fmt;

/// An ordered list of items with one separator token between each adjacent
/// pair (e.g. the arguments of a call together with their commas).
///
/// A list of `n > 0` items always holds exactly `n - 1` separators; the
/// constructors reject anything else with
/// [`TriviaOwnershipError::MalformedList`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeparatedList<'src, T> {
    items: Vec<T>,
    separators: Vec<SyntaxToken<'src>>,
}

impl<'src, T> SeparatedList<'src, T> {
    /// Creates a list from its items and the separators between them.
    pub fn new(
        items: Vec<T>,
        separators: Vec<SyntaxToken<'src>>,
    ) -> Result<Self, TriviaOwnershipError> {
        let list = Self { items, separators };
        list.check_well_formed()?;
        Ok(list)
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            separators: Vec::new(),
        }
    }

    /// Creates a list from an alternating item/separator sequence, starting
    /// and ending with an item.
    pub fn from_elements(
        elements: Vec<ListElement<'src, T>>,
    ) -> Result<Self, TriviaOwnershipError> {
        let mut items = Vec::with_capacity(elements.len() / 2 + 1);
        let mut separators = Vec::with_capacity(elements.len() / 2);
        let mut interleaved = true;
        for (index, element) in elements.into_iter().enumerate() {
            let expects_item = index % 2 == 0;
            match element {
                ListElement::Item(item) => {
                    interleaved &= expects_item;
                    items.push(item);
                },
                ListElement::Separator(separator) => {
                    interleaved &= !expects_item;
                    separators.push(separator);
                },
            }
        }

        if !interleaved {
            return Err(TriviaOwnershipError::MalformedList {
                items: items.len(),
                separators: separators.len(),
            });
        }
        Self::new(items, separators)
    }

    /// Verifies that the separator count matches the item count.
    pub(crate) fn check_well_formed(&self) -> Result<(), TriviaOwnershipError> {
        let expected_separators = self.items.len().saturating_sub(1);
        if self.separators.len() == expected_separators {
            Ok(())
        } else {
            Err(TriviaOwnershipError::MalformedList {
                items: self.items.len(),
                separators: self.separators.len(),
            })
        }
    }

    /// The number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn separators(&self) -> &[SyntaxToken<'src>] {
        &self.separators
    }

    /// The separator that follows the item at `index`, if any.
    pub fn separator_at(&self, index: usize) -> Option<&SyntaxToken<'src>> {
        self.separators.get(index)
    }

    /// Iterates the list's children in source order.
    pub fn elements(&self) -> impl Iterator<Item = ListElement<'src, &T>> + '_ {
        self.items.iter().enumerate().flat_map(move |(index, item)| {
            let separator = self
                .separators
                .get(index)
                .map(|separator| ListElement::Separator(separator.clone()));
            std::iter::once(ListElement::Item(item)).chain(separator)
        })
    }
}

impl<T: fmt::Display> fmt::Display for SeparatedList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            write!(f, "{item}")?;
            if let Some(separator) = self.separators.get(index) {
                write!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}

use crate::trivia::TriviaSequence;

/// The trivia logically owned by one list item: the `(leading, trailing)`
/// pair that an edit should treat as belonging to the item, regardless of
/// which tokens that trivia is physically attached to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TriviaOwnership<'src> {
    pub leading: TriviaSequence<'src>,
    pub trailing: TriviaSequence<'src>,
}

impl<'src> TriviaOwnership<'src> {
    pub fn new(leading: TriviaSequence<'src>, trailing: TriviaSequence<'src>) -> Self {
        Self { leading, trailing }
    }

    /// Returns `true` if neither side owns any trivia.
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }

    /// The leading trivia followed by the trailing trivia.
    pub fn concat(&self) -> TriviaSequence<'src> {
        self.leading.concat(&self.trailing)
    }
}

/// Where the comments owned by a removed item are reported in
/// [`ListItemRemoval::removed_trivia`](crate::ownership::ListItemRemoval::removed_trivia).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovedTriviaPlacement {
    /// Everything the removed item owned, leading and trailing, is reported
    /// as leading trivia; the trailing side is always empty.
    ///
    /// Suits callers that reinsert removed comments above the insertion
    /// point.
    #[default]
    Leading,

    /// The removed item's leading trivia is reported as leading and its
    /// trailing trivia (e.g. a same-line `// note`) as trailing.
    Split,
}

/// Configuration for
/// [`TriviaOwnershipAssignment::remove_list_item`](crate::ownership::TriviaOwnershipAssignment::remove_list_item).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ListItemRemovalOptions {
    /// See [`RemovedTriviaPlacement`].
    pub removed_trivia_placement: RemovedTriviaPlacement,

    /// Whether the new last item's trailing trivia is guaranteed to end in a
    /// line break (a zero-width one is appended when it does not).
    pub ensure_terminal_newline: bool,
}

impl ListItemRemovalOptions {
    pub fn with_removed_trivia_placement(mut self, placement: RemovedTriviaPlacement) -> Self {
        self.removed_trivia_placement = placement;
        self
    }

    pub fn with_ensure_terminal_newline(mut self, ensure_terminal_newline: bool) -> Self {
        self.ensure_terminal_newline = ensure_terminal_newline;
        self
    }
}

impl Default for ListItemRemovalOptions {
    fn default() -> Self {
        Self {
            removed_trivia_placement: RemovedTriviaPlacement::Leading,
            ensure_terminal_newline: true,
        }
    }
}

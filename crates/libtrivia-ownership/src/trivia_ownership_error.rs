/// Errors produced by trivia ownership assignment and list-item removal.
///
/// Both operations are pure, so every error is deterministic for a given
/// input and nothing has been modified when one is returned.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TriviaOwnershipError {
    /// The requested item index does not exist in the list.
    ///
    /// Also returned when removing from an empty list (`count == 0`).
    #[error("item index {index} is out of range for a separated list of {count} item(s)")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of items in the list.
        count: usize,
    },

    /// The separators of a list do not interleave its items.
    ///
    /// A well-formed list of `n > 0` items has exactly `n - 1` separators,
    /// one between each adjacent pair (and an empty list has none).
    #[error("malformed separated list: {items} item(s) with {separators} separator(s)")]
    MalformedList {
        /// The number of items found.
        items: usize,
        /// The number of separators found.
        separators: usize,
    },
}

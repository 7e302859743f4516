//! This module provides logical trivia ownership for separated lists: the
//! assignment of inter-item trivia to the items that own it, and item
//! removal built on top of it.

mod line_oriented_trivia_ownership;
mod list_item_removal;
mod list_item_removal_options;
mod list_item_remover;
mod ownership_assigner;
mod trivia_ownership;
mod trivia_ownership_assignment;

pub use line_oriented_trivia_ownership::LineOrientedTriviaOwnership;
pub use list_item_removal::ListItemRemoval;
pub use list_item_removal_options::ListItemRemovalOptions;
pub use list_item_removal_options::RemovedTriviaPlacement;
pub use trivia_ownership::TriviaOwnership;
pub use trivia_ownership_assignment::TriviaOwnershipAssignment;

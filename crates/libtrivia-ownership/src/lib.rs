//! Logical trivia ownership for separated syntax lists.
//!
//! Comments and whitespace in source code are physically attached to
//! tokens, but editing features reason about them in terms of the list
//! items they describe: `a, // note` is a note about `a`, not about the
//! comma. This crate provides:
//!
//! - a value model of trivia ([`trivia`]) and of tokens, items and
//!   separated lists ([`syntax`]);
//! - the assignment of inter-item trivia to the items that logically own
//!   it, and removal of a list item that keeps its neighbors' trivia intact
//!   while surfacing the comments it owned ([`ownership`]).
//!
//! Every operation is pure: inputs are never modified and results are new
//! values, so they can be computed concurrently and shared freely.

pub mod ownership;
pub mod syntax;
pub mod trivia;
mod trivia_ownership_error;

pub use ownership::LineOrientedTriviaOwnership;
pub use ownership::TriviaOwnershipAssignment;
pub use trivia_ownership_error::TriviaOwnershipError;

#[cfg(test)]
mod tests;

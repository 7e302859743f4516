//! This module provides the trivia model: classified atoms of
//! non-significant text and the sequences of them attached to tokens.

mod trivia_atom;
mod trivia_kind;
mod trivia_scanner;
mod trivia_sequence;

pub use trivia_atom::TriviaAtom;
pub use trivia_kind::TriviaKind;
pub use trivia_scanner::TriviaScanner;
pub use trivia_scanner::scan_trivia;
pub use trivia_sequence::TriviaSequence;

#[cfg(test)]
mod tests;

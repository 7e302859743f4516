use crate::trivia::TriviaAtom;
use smallvec::SmallVec;
use std::fmt;

/// Backing storage for [`TriviaSequence`]. Uses SmallVec to avoid heap
/// allocation for the common case of 0-2 atoms between two tokens.
type TriviaAtomVec<'src> = SmallVec<[TriviaAtom<'src>; 2]>;

/// An ordered run of [`TriviaAtom`]s attached to one side of a token.
///
/// Sequences are values: every operation that "changes" a sequence returns
/// a new one, so results can be freely shared between the structures an
/// edit produces.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TriviaSequence<'src> {
    atoms: TriviaAtomVec<'src>,
}

impl<'src> TriviaSequence<'src> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            atoms: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriviaAtom<'src>> {
        self.atoms.iter()
    }

    pub fn as_slice(&self) -> &[TriviaAtom<'src>] {
        &self.atoms
    }

    pub fn first(&self) -> Option<&TriviaAtom<'src>> {
        self.atoms.first()
    }

    pub fn last(&self) -> Option<&TriviaAtom<'src>> {
        self.atoms.last()
    }

    /// Returns `true` if any atom in this sequence is a line break.
    pub fn contains_newline(&self) -> bool {
        self.atoms.iter().any(|atom| atom.kind.is_newline())
    }

    /// Returns `true` if the final atom of this sequence is a line break.
    pub fn ends_with_newline(&self) -> bool {
        self.atoms.last().is_some_and(|atom| atom.kind.is_newline())
    }

    /// Returns `true` if this sequence is pure formatting (only whitespace
    /// and line breaks). An empty sequence is pure formatting.
    pub fn is_whitespace_or_newline_only(&self) -> bool {
        self.atoms
            .iter()
            .all(|atom| atom.kind.is_whitespace_or_newline())
    }

    /// Returns a new sequence holding this sequence's atoms followed by
    /// `other`'s.
    pub fn concat(&self, other: &TriviaSequence<'src>) -> Self {
        let mut atoms = TriviaAtomVec::with_capacity(self.len() + other.len());
        atoms.extend(self.atoms.iter().cloned());
        atoms.extend(other.atoms.iter().cloned());
        Self { atoms }
    }

    /// Splits this sequence after its first line break.
    ///
    /// The first half runs through and including the first Newline atom;
    /// the second half is everything after it. If the sequence contains no
    /// Newline the first half is empty and the second half is the whole
    /// sequence.
    pub fn split_through_first_newline(&self) -> (Self, Self) {
        match self.atoms.iter().position(|atom| atom.kind.is_newline()) {
            Some(newline_index) => {
                let (through, rest) = self.atoms.split_at(newline_index + 1);
                (Self::from(through), Self::from(rest))
            },
            None => (Self::new(), self.clone()),
        }
    }

    /// Returns a copy of this sequence where every comment atom that is not
    /// immediately followed by a line break gets a zero-width one inserted
    /// after it.
    ///
    /// This keeps relocated comments from absorbing whatever is spliced in
    /// after them (a `//` comment would otherwise comment out the code that
    /// follows it on the same line).
    pub fn with_comment_line_breaks(&self) -> Self {
        let mut atoms = TriviaAtomVec::with_capacity(self.len());
        let mut remaining = self.atoms.iter().peekable();
        while let Some(atom) = remaining.next() {
            atoms.push(atom.clone());
            let followed_by_newline =
                remaining.peek().is_some_and(|next| next.kind.is_newline());
            if atom.kind.is_comment() && !followed_by_newline {
                atoms.push(TriviaAtom::synthesized_newline());
            }
        }
        Self { atoms }
    }

    /// Converts into a sequence whose atoms own their text.
    pub fn into_owned(self) -> TriviaSequence<'static> {
        TriviaSequence {
            atoms: self.atoms.into_iter().map(TriviaAtom::into_owned).collect(),
        }
    }
}

impl<'src> From<&[TriviaAtom<'src>]> for TriviaSequence<'src> {
    fn from(atoms: &[TriviaAtom<'src>]) -> Self {
        Self {
            atoms: atoms.iter().cloned().collect(),
        }
    }
}

impl<'src> From<Vec<TriviaAtom<'src>>> for TriviaSequence<'src> {
    fn from(atoms: Vec<TriviaAtom<'src>>) -> Self {
        Self {
            atoms: SmallVec::from_vec(atoms),
        }
    }
}

impl<'src> FromIterator<TriviaAtom<'src>> for TriviaSequence<'src> {
    fn from_iter<I: IntoIterator<Item = TriviaAtom<'src>>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl<'src> Extend<TriviaAtom<'src>> for TriviaSequence<'src> {
    fn extend<I: IntoIterator<Item = TriviaAtom<'src>>>(&mut self, iter: I) {
        self.atoms.extend(iter);
    }
}

impl<'a, 'src> IntoIterator for &'a TriviaSequence<'src> {
    type Item = &'a TriviaAtom<'src>;
    type IntoIter = std::slice::Iter<'a, TriviaAtom<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl<'src> IntoIterator for TriviaSequence<'src> {
    type Item = TriviaAtom<'src>;
    type IntoIter = smallvec::IntoIter<[TriviaAtom<'src>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl fmt::Display for TriviaSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

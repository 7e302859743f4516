use crate::syntax::SyntaxToken;

/// One child of a separated list in source order: either an item or the
/// separator token between two items.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListElement<'src, T> {
    Item(T),
    Separator(SyntaxToken<'src>),
}

impl<'src, T> ListElement<'src, T> {
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Separator(_) => None,
        }
    }

    pub fn as_separator(&self) -> Option<&SyntaxToken<'src>> {
        match self {
            Self::Item(_) => None,
            Self::Separator(separator) => Some(separator),
        }
    }
}

//! Various test utils.

use crate::ownership::ListItemRemoval;
use crate::ownership::TriviaOwnership;
use crate::syntax::ListElement;
use crate::syntax::SeparatedList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::trivia::TriviaSequence;
use crate::trivia::scan_trivia;

/// A separated list together with the tokens that bound it.
pub(crate) struct ListFixture<'src> {
    pub previous_token: SyntaxToken<'src>,
    pub list: SeparatedList<'src, SyntaxNode<'src>>,
    pub next_token: SyntaxToken<'src>,
}

impl ListFixture<'_> {
    /// Renders the boundary tokens and the list back into source text.
    pub fn render(&self) -> String {
        format!("{}{}{}", self.previous_token, self.list, self.next_token)
    }
}

/// Installs a `tracing` subscriber that writes through the test harness's
/// captured output. Safe to call from every test.
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Parses a C-like, comma-separated list snippet into a [`ListFixture`].
///
/// The first token is the previous boundary token and the last token is the
/// next boundary token (e.g. `(` and `)`). Every `,` between them is a
/// separator and every run of other tokens is one item. Identifiers are runs
/// of ASCII alphanumerics and `_`; any other character is a one-character
/// token. Nesting is not supported.
///
/// Trivia is attached the usual way: a token's trailing trivia runs through
/// the first line break after it (or all the way to the next token when
/// there is no line break), and the rest is the next token's leading trivia.
pub(crate) fn parse_list(source: &str) -> ListFixture<'_> {
    let mut tokens = lex_tokens(source);
    assert!(tokens.len() >= 2, "fixture needs two boundary tokens: {source:?}");
    let next_token = tokens.pop().unwrap();
    let previous_token = tokens.remove(0);

    let mut elements = Vec::new();
    let mut current_item: Option<SyntaxNode<'_>> = None;
    for token in tokens {
        if token.text == "," {
            let item = current_item.take().expect("separator without an item");
            elements.push(ListElement::Item(item));
            elements.push(ListElement::Separator(token));
        } else {
            current_item = Some(match current_item {
                Some(item) => item.with_token(token),
                None => SyntaxNode::new(token),
            });
        }
    }
    if let Some(item) = current_item {
        elements.push(ListElement::Item(item));
    }

    ListFixture {
        previous_token,
        list: SeparatedList::from_elements(elements).unwrap(),
        next_token,
    }
}

/// Splits `source` into tokens with attached trivia.
fn lex_tokens(source: &str) -> Vec<SyntaxToken<'_>> {
    let mut tokens: Vec<SyntaxToken<'_>> = Vec::new();
    let mut offset = 0;
    let mut pending_leading = TriviaSequence::new();

    loop {
        let trivia_end = offset + trivia_len(&source[offset..]);
        let trivia = scan_trivia(&source[offset..trivia_end]);
        offset = trivia_end;

        match tokens.last_mut() {
            Some(previous) => {
                let at_end = offset == source.len();
                let (through_newline, rest) = trivia.split_through_first_newline();
                if at_end || through_newline.is_empty() {
                    previous.trailing_trivia = trivia;
                } else {
                    previous.trailing_trivia = through_newline;
                    pending_leading = rest;
                }
            },
            None => pending_leading = trivia,
        }

        if offset == source.len() {
            return tokens;
        }

        let token_len = token_len(&source[offset..]);
        tokens.push(SyntaxToken::with_trivia(
            std::mem::take(&mut pending_leading),
            &source[offset..offset + token_len],
            TriviaSequence::new(),
        ));
        offset += token_len;
    }
}

fn trivia_len(text: &str) -> usize {
    let mut len = 0;
    loop {
        let rest = &text[len..];
        if rest.starts_with("//") {
            len += rest.find(['\n', '\r']).unwrap_or(rest.len());
        } else if rest.starts_with("/*") {
            len += rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
        } else if let Some(ch) = rest.chars().next().filter(|ch| ch.is_whitespace()) {
            len += ch.len_utf8();
        } else {
            return len;
        }
    }
}

fn token_len(text: &str) -> usize {
    let is_ident_char = |ch: char| ch.is_ascii_alphanumeric() || ch == '_';
    let ident_len = text.find(|ch: char| !is_ident_char(ch)).unwrap_or(text.len());
    if ident_len > 0 {
        ident_len
    } else {
        text.chars().next().map_or(0, char::len_utf8)
    }
}

/// Renders each ownership pair as `(leading, trailing)` strings.
pub(crate) fn render_ownership(ownership: &[TriviaOwnership<'_>]) -> Vec<(String, String)> {
    ownership
        .iter()
        .map(|owned| (owned.leading.to_string(), owned.trailing.to_string()))
        .collect()
}

/// Renders a removal result back into source text (excluding the removed
/// trivia).
pub(crate) fn render_removal<T: std::fmt::Display>(removal: &ListItemRemoval<'_, T>) -> String {
    format!("{}{}{}", removal.previous_token, removal.list, removal.next_token)
}

/// Shorthand for a pair of expected `(leading, trailing)` strings.
pub(crate) fn owned(leading: &str, trailing: &str) -> (String, String) {
    (leading.to_string(), trailing.to_string())
}

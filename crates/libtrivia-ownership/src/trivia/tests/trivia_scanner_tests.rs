//! Tests for `TriviaScanner` and `scan_trivia()`.

use crate::trivia::TriviaAtom;
use crate::trivia::TriviaKind;
use crate::trivia::TriviaScanner;
use crate::trivia::scan_trivia;
use proptest::prelude::*;

fn scanned(source: &str) -> Vec<(TriviaKind, &str)> {
    TriviaScanner::new(source)
        .map(|atom| {
            let TriviaAtom { kind, text } = atom;
            match text {
                std::borrow::Cow::Borrowed(text) => (kind, text),
                std::borrow::Cow::Owned(_) => panic!("scanner allocated for {kind:?}"),
            }
        })
        .collect()
}

// =============================================================================
// Classification
// =============================================================================

/// Verifies that an empty input yields no atoms.
#[test]
fn empty_input() {
    assert!(scan_trivia("").is_empty());
}

/// Verifies that each line break style is a single Newline atom.
#[test]
fn line_breaks() {
    assert_eq!(
        scanned("\n\r\n\r"),
        vec![
            (TriviaKind::Newline, "\n"),
            (TriviaKind::Newline, "\r\n"),
            (TriviaKind::Newline, "\r"),
        ],
    );
}

/// Verifies that runs of horizontal whitespace, including the BOM, form one
/// atom and stop at line breaks.
#[test]
fn whitespace_runs() {
    assert_eq!(
        scanned(" \t\u{FEFF} \n  "),
        vec![
            (TriviaKind::Whitespace, " \t\u{FEFF} "),
            (TriviaKind::Newline, "\n"),
            (TriviaKind::Whitespace, "  "),
        ],
    );
}

/// Verifies that a line comment excludes the line break that ends it.
#[test]
fn line_comment_stops_before_line_break() {
    assert_eq!(
        scanned("// note\r\n// last"),
        vec![
            (TriviaKind::LineComment, "// note"),
            (TriviaKind::Newline, "\r\n"),
            (TriviaKind::LineComment, "// last"),
        ],
    );
}

/// Verifies block comments, including multi-line ones and ones whose first
/// `*` cannot close them.
#[test]
fn block_comments() {
    assert_eq!(
        scanned("/* a\n b */ /*/ c */"),
        vec![
            (TriviaKind::BlockComment, "/* a\n b */"),
            (TriviaKind::Whitespace, " "),
            (TriviaKind::BlockComment, "/*/ c */"),
        ],
    );
}

/// Verifies that an unterminated block comment runs to the end of the input.
#[test]
fn unterminated_block_comment() {
    assert_eq!(
        scanned("/* open\n"),
        vec![(TriviaKind::BlockComment, "/* open\n")],
    );
}

/// Verifies that unrecognized text is classified as Other and stops at the
/// next whitespace or comment.
#[test]
fn other_text() {
    assert_eq!(
        scanned("#if/* x */ ;\n"),
        vec![
            (TriviaKind::Other, "#if"),
            (TriviaKind::BlockComment, "/* x */"),
            (TriviaKind::Whitespace, " "),
            (TriviaKind::Other, ";"),
            (TriviaKind::Newline, "\n"),
        ],
    );
}

/// Verifies that a lone `/` is Other rather than the start of a comment.
#[test]
fn lone_slash_is_other() {
    assert_eq!(scanned("/ /"), vec![
        (TriviaKind::Other, "/"),
        (TriviaKind::Whitespace, " "),
        (TriviaKind::Other, "/"),
    ]);
}

/// Verifies that multi-byte characters are kept intact.
#[test]
fn multi_byte_text() {
    assert_eq!(
        scanned("// ünïcødé 🎉\n\u{3000}"),
        vec![
            (TriviaKind::LineComment, "// ünïcødé 🎉"),
            (TriviaKind::Newline, "\n"),
            (TriviaKind::Whitespace, "\u{3000}"),
        ],
    );
}

// =============================================================================
// Losslessness
// =============================================================================

proptest! {
    /// Concatenating the scanned atoms reproduces the input, and no atom is
    /// empty.
    #[test]
    fn scanning_is_lossless(source in "[ \t\r\n/*#a-z\u{00e9}]{0,48}") {
        let trivia = scan_trivia(&source);
        prop_assert_eq!(trivia.to_string(), source.as_str());
        prop_assert!(trivia.iter().all(|atom| !atom.is_zero_width()));
    }

    /// Scanning arbitrary text never panics and stays lossless.
    #[test]
    fn scanning_arbitrary_text_is_lossless(source in any::<String>()) {
        prop_assert_eq!(scan_trivia(&source).to_string(), source.as_str());
    }
}

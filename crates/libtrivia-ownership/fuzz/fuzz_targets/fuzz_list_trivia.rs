#![no_main]

use libfuzzer_sys::fuzz_target;
use libtrivia_ownership::LineOrientedTriviaOwnership;
use libtrivia_ownership::syntax::SeparatedList;
use libtrivia_ownership::syntax::SyntaxToken;
use libtrivia_ownership::trivia::TriviaSequence;
use libtrivia_ownership::trivia::scan_trivia;

// Input is split on `\0` into trivia slots: the previous token's trailing
// trivia, then a (leading, trailing) pair per item and per separator, then
// the next token's leading and trailing trivia.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let slots: Vec<&str> = s.split('\0').collect();
    // 1 + 2n + 2(n - 1) + 2 = 4n + 1 slots for n items.
    if slots.len() < 5 || (slots.len() - 1) % 4 != 0 {
        return;
    }
    let item_count = (slots.len() - 1) / 4;

    let previous_token = SyntaxToken::with_trivia(TriviaSequence::new(), "(", scan_trivia(slots[0]));
    let mut items = Vec::with_capacity(item_count);
    let mut separators = Vec::with_capacity(item_count - 1);
    for index in 0..item_count {
        let base = 1 + index * 4;
        items.push(SyntaxToken::with_trivia(
            scan_trivia(slots[base]),
            "item",
            scan_trivia(slots[base + 1]),
        ));
        if index + 1 < item_count {
            separators.push(SyntaxToken::with_trivia(
                scan_trivia(slots[base + 2]),
                ",",
                scan_trivia(slots[base + 3]),
            ));
        }
    }
    let next_token = SyntaxToken::with_trivia(
        scan_trivia(slots[slots.len() - 2]),
        ")",
        scan_trivia(slots[slots.len() - 1]),
    );
    let list = SeparatedList::new(items, separators).unwrap();

    let service = LineOrientedTriviaOwnership::new();
    let ownership = service
        .assign_trivia_ownership(&previous_token, &list, &next_token)
        .unwrap();
    assert_eq!(ownership.len(), item_count);

    // Assignment only repartitions the list's outer trivia.
    let assigned: String = ownership.iter().map(|owned| owned.concat().to_string()).collect();
    let mut expected = previous_token.trailing_trivia.to_string();
    for separator in list.separators() {
        expected.push_str(&separator.leading_trivia.to_string());
        expected.push_str(&separator.trailing_trivia.to_string());
    }
    expected.push_str(&next_token.leading_trivia.to_string());
    let expected_with_next_trailing =
        format!("{expected}{}", next_token.trailing_trivia);
    assert!(assigned == expected || assigned == expected_with_next_trailing);

    for index in 0..item_count {
        let removal = service
            .remove_list_item(&previous_token, &list, &next_token, index)
            .unwrap();
        assert_eq!(removal.list.len(), item_count - 1);
    }
});

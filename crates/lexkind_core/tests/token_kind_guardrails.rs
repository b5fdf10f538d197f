use std::collections::HashMap;

use lexkind_core::registry::{self, Grouping, KindCategory, TOKEN_KINDS};
use lexkind_core::TokenKind;

#[test]
fn table_rows_match_variant_names() {
    // Drift guard between the enum and the table: names are the variant identifiers.
    for entry in TOKEN_KINDS {
        assert_eq!(
            format!("{:?}", entry.kind),
            entry.name,
            "registry row name does not match its variant"
        );
    }
    assert_eq!(TOKEN_KINDS.len(), TokenKind::COUNT);
    assert_eq!(TOKEN_KINDS.last().map(|e| e.kind), TokenKind::ALL.last().copied());
}

#[test]
fn every_declared_variant_is_registered() {
    let registered: Vec<TokenKind> = TokenKind::all().collect();
    assert_eq!(registered.as_slice(), TokenKind::ALL);
    for &kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_tag(kind.tag()), Some(kind), "{kind:?} has no registry row");
        assert_eq!(format!("{kind:?}"), kind.name());
    }
}

#[test]
fn names_unique_nonempty_and_resolvable() {
    let mut seen: HashMap<&'static str, TokenKind> = HashMap::new();

    for kind in TokenKind::all() {
        let name = kind.name();
        assert!(!name.is_empty(), "empty name for tag {}", kind.tag());
        assert_eq!(TokenKind::from_name(name), Some(kind), "name not resolvable: {name}");
        if let Some(prev) = seen.insert(name, kind) {
            panic!("duplicate token kind name {name:?}: {prev:?} and {kind:?}");
        }
    }
}

#[test]
fn enumeration_is_declaration_order_exactly_once() {
    let kinds: Vec<TokenKind> = TokenKind::all().collect();
    assert_eq!(kinds.len(), TokenKind::COUNT);
    for (position, kind) in kinds.iter().enumerate() {
        assert_eq!(usize::from(kind.tag()), position);
        assert_eq!(TOKEN_KINDS[position].kind, *kind);
    }
}

#[test]
fn grouping_partners_form_a_bijection() {
    let mut openings = 0;
    let mut closings = 0;

    for kind in TokenKind::all() {
        if kind.is_opening_symbol() {
            openings += 1;
            let closing = kind.closing_symbol();
            assert!(closing.is_closing_symbol(), "{kind} pairs with non-closing {closing}");
            assert_eq!(closing.opening_symbol(), kind, "{kind} -> {closing} does not pair back");
        }
        if kind.is_closing_symbol() {
            closings += 1;
            let opening = kind.opening_symbol();
            assert!(opening.is_opening_symbol(), "{kind} pairs with non-opening {opening}");
            assert_eq!(opening.closing_symbol(), kind, "{kind} -> {opening} does not pair back");
        }
    }

    assert_eq!(openings, closings);
    assert_eq!(openings, registry::registry().pair_count());
}

#[test]
fn grouping_matches_declared_partner_names() {
    for entry in TOKEN_KINDS {
        match entry.grouping {
            Grouping::None => assert!(!entry.kind.is_grouping_symbol()),
            Grouping::Opening { closing } => assert_eq!(entry.kind.closing_symbol().name(), closing),
            Grouping::Closing { opening } => assert_eq!(entry.kind.opening_symbol().name(), opening),
        }
    }
}

#[test]
fn categories_are_exclusive() {
    for kind in TokenKind::all() {
        assert!(
            !(kind.is_symbol() && kind.is_keyword()),
            "{kind} is both a symbol and a keyword"
        );
        assert!(
            !(kind.is_opening_symbol() && kind.is_closing_symbol()),
            "{kind} both opens and closes a group"
        );
        assert_eq!(
            kind.is_grouping_symbol(),
            kind.is_opening_symbol() || kind.is_closing_symbol()
        );
    }
}

#[test]
fn fixed_spelling_present_iff_symbol_keyword_or_grouping() {
    for kind in TokenKind::all() {
        let has_spelling = !kind.fixed_spelling().is_empty();
        let expects_spelling = kind.is_symbol() || kind.is_keyword() || kind.is_grouping_symbol();
        assert_eq!(
            has_spelling, expects_spelling,
            "spelling/category mismatch for {kind}: {:?}",
            kind.fixed_spelling()
        );
        if has_spelling {
            assert_eq!(TokenKind::from_fixed_spelling(kind.fixed_spelling()), Some(kind));
        }
    }

    for kind in [
        TokenKind::Error,
        TokenKind::EndOfFile,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::RealLiteral,
        TokenKind::StringLiteral,
    ] {
        assert_eq!(kind.category(), KindCategory::Plain);
        assert_eq!(kind.fixed_spelling(), "");
    }
}

#[test]
fn symbols_are_punctuation_and_keywords_are_words() {
    for kind in TokenKind::all() {
        let spelling = kind.fixed_spelling();
        if kind.is_symbol() {
            assert!(
                spelling.chars().all(|c| c.is_ascii_punctuation()),
                "symbol {kind} has non-punctuation spelling {spelling:?}"
            );
        }
        if kind.is_keyword() {
            assert!(
                spelling.chars().all(|c| c.is_ascii_lowercase()),
                "keyword {kind} has non-word spelling {spelling:?}"
            );
        }
    }
}

#[test]
fn registry_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| TokenKind::all().filter(|k| k.is_grouping_symbol()).count()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), 6);
    }
}

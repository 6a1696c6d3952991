use super::*;

// -----------------------------------------------------------------------
// boundaries
// -----------------------------------------------------------------------

#[test]
fn single_word_counts_standalone_occurrences() {
    assert_eq!(match_count("luck", "good luck, bad luck"), 2);
}

#[test]
fn embedded_occurrences_do_not_count() {
    assert_eq!(match_count("cat", "concatenate categories"), 0);
}

#[test]
fn underscore_is_a_word_character() {
    assert_eq!(match_count("snake", "snake_case"), 0);
}

#[test]
fn digits_respect_boundaries() {
    assert_eq!(match_count("7", "route 77 and 7"), 1);
}

#[test]
fn matches_at_text_edges() {
    assert_eq!(match_count("luck", "luck"), 1);
    assert_eq!(match_count("luck", "luck is luck"), 2);
}

#[test]
fn punctuation_is_a_boundary() {
    assert_eq!(match_count("luck", "(luck) luck! luck."), 3);
}

// -----------------------------------------------------------------------
// case folding
// -----------------------------------------------------------------------

#[test]
fn case_insensitive_text() {
    assert_eq!(match_count("luck", "LUCK Luck luck"), 3);
}

#[test]
fn case_insensitive_term() {
    let text = "Bad luck follows bad LUCK";
    for term in ["bad luck", "BAD LUCK", "Bad Luck"] {
        assert_eq!(match_count(term, text), 2, "term {term:?}");
    }
}

#[test]
fn upper_and_lower_terms_agree() {
    let samples = [
        ("won", "I WON, you won't"),
        ("café", "Café au lait at the CAFÉ"),
        ("rock", "rock'n'roll and Rock"),
    ];
    for (term, text) in samples {
        assert_eq!(
            match_count(term, text),
            match_count(&term.to_uppercase(), text),
            "term {term:?} in {text:?}"
        );
    }
}

#[test]
fn non_ascii_letters_fold() {
    assert_eq!(match_count("café", "Café au lait"), 1);
}

// -----------------------------------------------------------------------
// apostrophe guard
// -----------------------------------------------------------------------

#[test]
fn won_does_not_match_inside_contraction() {
    assert_eq!(match_count("won", "I won't do it"), 0);
}

#[test]
fn won_matches_standalone() {
    assert_eq!(match_count("won", "I won the race"), 1);
}

#[test]
fn typographic_apostrophe_also_guards() {
    assert_eq!(match_count("won", "I won\u{2019}t do it"), 0);
}

#[test]
fn leading_apostrophe_guards() {
    assert_eq!(match_count("tis", "'tis the season"), 0);
}

#[test]
fn apostrophe_on_either_side_guards() {
    assert_eq!(match_count("n", "rock'n'roll"), 0);
    assert_eq!(match_count("rock", "rock'n'roll"), 0);
}

#[test]
fn term_with_inner_apostrophe_matches() {
    assert_eq!(match_count("can't", "I can't go, I CAN'T"), 2);
}

#[test]
fn rejected_candidate_does_not_hide_overlapping_match() {
    // First candidate "a a" at offset 1 follows an apostrophe; the one at
    // offset 3 overlaps it and must still be found.
    assert_eq!(match_count("a a", "'a a a"), 1);
}

#[test]
fn quoted_word_is_rejected() {
    assert_eq!(match_count("luck", "'luck' and luck"), 1);
}

// -----------------------------------------------------------------------
// phrases
// -----------------------------------------------------------------------

#[test]
fn phrase_matches_as_a_whole() {
    assert_eq!(match_count("bad luck", "that's bad luck indeed"), 1);
}

#[test]
fn word_inside_phrase_still_matches() {
    assert_eq!(match_count("luck", "bad luck"), 1);
}

#[test]
fn phrase_whitespace_is_literal() {
    assert_eq!(match_count("bad luck", "bad  luck"), 0);
    assert_eq!(match_count("bad luck", "bad\nluck"), 0);
}

#[test]
fn phrase_matches_are_non_overlapping() {
    assert_eq!(match_count("ha ha", "ha ha ha"), 1);
    assert_eq!(match_count("ha ha", "ha ha ha ha"), 2);
}

// -----------------------------------------------------------------------
// literal handling
// -----------------------------------------------------------------------

#[test]
fn regex_metacharacters_are_literal() {
    assert_eq!(match_count("a.b", "axb a.b"), 1);
}

#[test]
fn unbalanced_metacharacters_do_not_panic() {
    assert_eq!(match_count("f(x", "call f(x now"), 1);
    assert_eq!(match_count("[", "a [ b"), 0);
    assert_eq!(match_count("a*", "aaa a*"), 0);
}

#[test]
fn term_ending_in_symbol_needs_word_character_after() {
    // Boundaries sit between word and non-word characters, so a term that
    // ends in a symbol only matches when a word character follows it.
    assert_eq!(match_count("c++", "I like c++ a lot"), 0);
    assert_eq!(match_count("c++", "c++x"), 1);
}

// -----------------------------------------------------------------------
// degenerate input
// -----------------------------------------------------------------------

#[test]
fn empty_text_has_no_matches() {
    assert_eq!(match_count("luck", ""), 0);
}

#[test]
fn empty_term_never_matches() {
    assert_eq!(match_count("", "anything at all"), 0);
}

#[test]
fn compiled_matcher_is_reusable() {
    let matcher = TermMatcher::new("luck");
    assert_eq!(matcher.count("luck"), 1);
    assert_eq!(matcher.count("no match here"), 0);
    assert_eq!(matcher.count("luck luck"), 2);
}

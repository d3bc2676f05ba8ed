use sre_compiler::compile;
use sre_runtime::matches;

/// Asserts a pattern accepts every input in `accepted` and none of the
/// inputs in `rejected`.
fn assert_language(pattern: &str, accepted: &[&str], rejected: &[&str]) {
    let automaton = compile(pattern).expect("failed to compile");

    for input in accepted {
        assert!(
            matches(&automaton, input),
            "{:?} should match {:?}",
            pattern,
            input
        );
    }
    for input in rejected {
        assert!(
            !matches(&automaton, input),
            "{:?} should not match {:?}",
            pattern,
            input
        );
    }
}

#[test]
fn should_match_every_single_letter_exactly() {
    for c in 'a'..='z' {
        let letter = c.to_string();
        let other = if c == 'z' { "a" } else { "z" };
        let doubled = letter.repeat(2);

        assert_language(&letter, &[letter.as_str()], &["", other, doubled.as_str()]);
    }
}

#[test]
fn should_match_alternatives() {
    assert_language("a|b", &["a", "b"], &["", "ab", "c"]);
}

#[test]
fn should_match_zero_or_more_repetitions() {
    assert_language("a*", &["", "a", "aaaa"], &["b", "ab"]);
}

#[test]
fn should_match_repeated_group_after_prefix() {
    assert_language("a(b|c)*", &["a", "ab", "ac", "abcbc"], &["", "b", "ba"]);
}

#[test]
fn should_match_repeated_group_before_suffix() {
    assert_language("(a|b)*c", &["c", "abc", "ababc"], &["", "ab"]);
}

#[test]
fn should_match_concatenated_repetitions() {
    assert_language(
        "a*(b|c)*",
        &["", "a", "ab", "aaaac", "b", "c", "abbcb"],
        &["ba", "ca", "d"],
    );
}

#[test]
fn should_ignore_redundant_grouping() {
    assert_language("((((a))))", &["a"], &["", "aa"]);
    assert_language("((((a))*))", &["", "a", "aa"], &["b"]);
}

#[test]
fn should_bind_alternation_loosest() {
    // `ab|cd` is `(ab)|(cd)`, not `a(b|c)d`.
    assert_language("ab|cd", &["ab", "cd"], &["abd", "acd", "a", "d"]);
    // `ab*` repeats only `b`.
    assert_language("ab*", &["a", "abbb"], &["abab", ""]);
}

#[test]
fn should_accept_the_same_language_across_compilations() {
    let patterns = ["a", "a|b", "a*", "a(b|c)*", "(a|b)*c", "((a)*)*"];
    let inputs = ["", "a", "b", "c", "ab", "ac", "abc", "ababc", "abcbc", "aaaa", "ba"];

    for pattern in patterns {
        let first = compile(pattern).expect("failed to compile");
        let second = compile(pattern).expect("failed to compile");

        for input in inputs {
            assert_eq!(
                (pattern, input, matches(&first, input)),
                (pattern, input, matches(&second, input))
            );
        }
    }
}

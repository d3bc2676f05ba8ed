use sre_compiler::compile;
use sre_runtime::matches;

#[test]
fn should_terminate_on_nested_repetition() {
    let automaton = compile("((a)*)*").expect("failed to compile");

    assert!(matches(&automaton, "aaaa"));
    assert!(matches(&automaton, ""));
    assert!(!matches(&automaton, "b"));
}

#[test]
fn should_terminate_on_repeated_repetition() {
    let input_output = vec![
        ("a**", "aaa", true),
        ("(a*)*b", "aaab", true),
        ("(a*)*b", "aaaa", false),
        ("(a*|b*)*", "abba", true),
        ("(a*|b*)*", "abca", false),
        ("((a|b)*)*c", "ababab", false),
    ];

    for (test_id, (pattern, input, expected_res)) in input_output.into_iter().enumerate() {
        let automaton = compile(pattern).expect("failed to compile");

        assert_eq!(
            (test_id, expected_res),
            (test_id, matches(&automaton, input))
        )
    }
}

#[test]
fn should_reject_long_inputs_against_nested_repetition() {
    let automaton = compile("((a*)*)*c").expect("failed to compile");
    let input = "a".repeat(4096);

    assert!(!matches(&automaton, &input));
    assert!(matches(&automaton, &format!("{}c", input)));
}

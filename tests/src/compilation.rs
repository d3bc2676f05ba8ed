use sre_compiler::{compile, BuildError, CompileError, Regex, ValidationError};

#[test]
fn should_report_validation_errors_as_values() {
    let input_output = vec![
        ("Ab", ValidationError::UppercaseNotAllowed),
        ("a+b", ValidationError::IllegalCharacter('+')),
        ("a.b", ValidationError::IllegalCharacter('.')),
        ("a?", ValidationError::IllegalCharacter('?')),
    ];

    for (test_id, (pattern, error)) in input_output.into_iter().enumerate() {
        assert_eq!(
            (test_id, Err(CompileError::Validation(error))),
            (test_id, compile(pattern))
        )
    }
}

#[test]
fn should_report_malformed_patterns_as_values() {
    let inputs = ["", "(", ")", "(a", "a)", "()", "|", "a|", "*a"];

    for (test_id, pattern) in inputs.into_iter().enumerate() {
        assert_eq!(
            (
                test_id,
                Err(CompileError::Build(BuildError::MalformedExpression))
            ),
            (test_id, compile(pattern))
        )
    }
}

#[test]
fn should_render_error_messages() {
    let input_output = vec![
        ("Ab", "uppercase letters are not permitted"),
        (
            "a+b",
            "'+' is not permitted, only lowercase latin letters and '*', '|', '(', ')' are",
        ),
        ("(a", "malformed expression"),
    ];

    for (test_id, (pattern, message)) in input_output.into_iter().enumerate() {
        assert_eq!(
            (test_id, Some(message.to_string())),
            (test_id, compile(pattern).err().map(|e| e.to_string()))
        )
    }
}

#[test]
fn should_keep_automata_independent_of_later_compilations() {
    let first = Regex::new("a|b").expect("failed to compile");
    let snapshot = first.automaton().clone();
    let second = Regex::new("(a|b)*c").expect("failed to compile");

    // compiling a second pattern leaves the first untouched.
    assert_eq!(&snapshot, first.automaton());
    assert!(first.is_match("a"));
    assert!(!first.is_match("abc"));
    assert!(second.is_match("abc"));
}

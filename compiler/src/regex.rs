use std::fmt::Display;
use std::str::FromStr;

use sre_runtime::Automaton;

use crate::compiler::{compile, CompileError};

/// A compiled pattern kept alongside the source it was compiled from.
///
/// # Example
///
/// ```
/// use sre_compiler::Regex;
///
/// let re: Regex = "(a|b)*c".parse().expect("failed to compile");
///
/// assert!(re.is_match("ababc"));
/// assert!(!re.is_match("ab"));
/// assert_eq!("(a|b)*c", re.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pattern: String,
    automaton: Automaton,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        compile(pattern).map(|automaton| Self {
            pattern: pattern.to_string(),
            automaton,
        })
    }

    /// Returns `true` if the pattern matches the entire input.
    pub fn is_match(&self, input: &str) -> bool {
        self.automaton.matches(input)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl From<Regex> for Automaton {
    fn from(re: Regex) -> Self {
        re.automaton
    }
}

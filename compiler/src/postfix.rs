//! Rewrites a validated pattern into postfix notation in two passes: first
//! every implicit concatenation is made explicit, then a shunting-yard pass
//! reorders the explicit infix expression.

use crate::compiler::BuildError;

/// Marks an explicit concatenation of the two preceding operands.
pub const CONCATENATION_MARKER: char = '.';

/// Inserts a [CONCATENATION_MARKER] between every pair of adjacent
/// characters that are implicitly concatenated. Parentheses are kept.
///
/// # Example
///
/// ```
/// use sre_compiler::insert_concatenation;
///
/// assert_eq!("a.(b|c)*.d", insert_concatenation("a(b|c)*d"));
/// ```
pub fn insert_concatenation(pattern: &str) -> String {
    let chars = pattern.chars().collect::<Vec<char>>();
    let mut explicit = String::with_capacity(chars.len() * 2);

    for pair in chars.windows(2) {
        let (c1, c2) = (pair[0], pair[1]);
        explicit.push(c1);

        if !matches!(c1, '(' | '|') && !matches!(c2, ')' | '|' | '*') {
            explicit.push(CONCATENATION_MARKER);
        }
    }

    if let Some(&last) = chars.last() {
        explicit.push(last);
    }

    explicit
}

/// Entries of the operator stack. A group is only a marker for an open
/// parenthesis and binds loosest of all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Group,
    Alternation,
    Concatenation,
    Repetition,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '|' => Some(Self::Alternation),
            CONCATENATION_MARKER => Some(Self::Concatenation),
            '*' => Some(Self::Repetition),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Group => '(',
            Self::Alternation => '|',
            Self::Concatenation => CONCATENATION_MARKER,
            Self::Repetition => '*',
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Group => 1,
            Self::Alternation => 2,
            Self::Concatenation => 3,
            Self::Repetition => 4,
        }
    }
}

/// Converts a pattern with explicit concatenation into postfix notation.
///
/// Letters are emitted as soon as they are read. An operator on the stack is
/// emitted before an incoming operator of lower or equal precedence, which
/// makes `|` and `.` left-associative.
///
/// # Example
///
/// ```
/// use sre_compiler::to_postfix;
///
/// assert_eq!(Ok("abc|*.".to_string()), to_postfix("a.(b|c)*"));
/// ```
pub fn to_postfix(pattern: &str) -> Result<String, BuildError> {
    let mut postfix = String::with_capacity(pattern.len());
    let mut operators: Vec<Operator> = Vec::new();

    for c in pattern.chars() {
        match c {
            '(' => operators.push(Operator::Group),
            ')' => loop {
                match operators.pop() {
                    Some(Operator::Group) => break,
                    Some(op) => postfix.push(op.as_char()),
                    // a group closed without being opened.
                    None => return Err(BuildError::MalformedExpression),
                }
            },
            c if c.is_ascii_lowercase() => postfix.push(c),
            c => {
                let incoming = Operator::from_char(c).ok_or(BuildError::MalformedExpression)?;

                while let Some(&top) = operators.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }

                    operators.pop();
                    postfix.push(top.as_char());
                }

                operators.push(incoming);
            }
        }
    }

    while let Some(op) = operators.pop() {
        match op {
            // a group opened without being closed.
            Operator::Group => return Err(BuildError::MalformedExpression),
            op => postfix.push(op.as_char()),
        }
    }

    Ok(postfix)
}

use parcel::parsers::character::{alphabetic, expect_character};
use parcel::prelude::v1::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{0}' is not permitted, only lowercase latin letters and '*', '|', '(', ')' are")]
    IllegalCharacter(char),
    #[error("uppercase letters are not permitted")]
    UppercaseNotAllowed,
}

/// Checks that a pattern is written only in the supported alphabet of
/// lowercase latin letters, `*`, `|`, `(` and `)`.
///
/// # Example
///
/// ```
/// use sre_compiler::{validate, ValidationError};
///
/// assert_eq!(Ok(()), validate("a(b|c)*"));
/// assert_eq!(Err(ValidationError::UppercaseNotAllowed), validate("Ab"));
/// assert_eq!(Err(ValidationError::IllegalCharacter('+')), validate("a+b"));
/// ```
pub fn validate(pattern: &str) -> Result<(), ValidationError> {
    // case is checked across the whole pattern before any single character.
    if pattern != pattern.to_lowercase() {
        return Err(ValidationError::UppercaseNotAllowed);
    }

    let input = pattern.chars().enumerate().collect::<Vec<(usize, char)>>();
    let remainder = match pattern_symbols().parse(input.as_slice()) {
        Ok(MatchStatus::Match { remainder, .. }) => remainder,
        Ok(MatchStatus::NoMatch(remainder)) => remainder,
        Err(_) => input.as_slice(),
    };

    // the lexer stops at the first character outside the alphabet.
    match remainder.first() {
        Some(&(_, illegal)) => Err(ValidationError::IllegalCharacter(illegal)),
        None => Ok(()),
    }
}

fn pattern_symbols<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Vec<char>> {
    parcel::zero_or_more(symbol())
}

fn symbol<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], char> {
    parcel::or(letter(), || {
        parcel::or(expect_character('*'), || {
            parcel::or(expect_character('|'), || {
                parcel::or(expect_character('('), || expect_character(')'))
            })
        })
    })
}

fn letter<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], char> {
    alphabetic().predicate(|c| c.is_ascii_lowercase())
}

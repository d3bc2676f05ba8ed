//! Provides for the validation and compilation of a simple regular
//! expression into its corresponding automaton.
//!
//! A pattern is written with the lowercase latin letters, `*` for zero or
//! more repetitions of the preceding expression, `|` for alternatives and
//! `(`, `)` for grouping. Adjacent expressions are concatenated. A pattern
//! matches an input only if it describes the whole input.
//!
//! # Example
//!
//! ```rust
//! // Compilation of a pattern into an automaton is accomplished by a single
//! // function exposed in the `sre_compiler` crate.
//! use sre_compiler::compile;
//!
//! // Evaluating a given input against an automaton is accomplished via a
//! // single exposed function in the `sre_runtime` crate.
//! use sre_runtime::matches;
//!
//! let automaton = compile("a*(b|c)*").expect("failed to compile");
//!
//! for input in ["", "a", "ab", "aaaac", "b", "c", "abbcb"] {
//!     assert!(matches(&automaton, input));
//! }
//!
//! // `ba` is not described by the pattern as a whole.
//! assert!(!matches(&automaton, "ba"));
//! ```
//!
//! Compilation runs in three stages, each exposed on its own:
//!
//! ```rust
//! use sre_compiler::{build, insert_concatenation, to_postfix, validate};
//!
//! let pattern = "(a|b)*c";
//! validate(pattern).expect("invalid pattern");
//!
//! let explicit = insert_concatenation(pattern);
//! assert_eq!("(a|b)*.c", explicit);
//!
//! let postfix = to_postfix(&explicit).expect("malformed pattern");
//! assert_eq!("ab|*c.", postfix);
//!
//! let automaton = build(&postfix).expect("malformed pattern");
//! assert!(automaton.matches("abc"));
//! ```

#[macro_use]
mod macros;
pub mod compiler;
pub mod parser;
pub mod postfix;
mod regex;

pub use compiler::{build, compile, BuildError, CompileError};
pub use parser::{validate, ValidationError};
pub use postfix::{insert_concatenation, to_postfix, CONCATENATION_MARKER};
pub use regex::Regex;

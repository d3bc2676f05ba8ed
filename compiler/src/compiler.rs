//! Provides methods and types to facilitate the construction of an automaton
//! from a postfix pattern, via Thompson's construction.
//!
//! # Example
//!
//! ```
//! use sre_compiler::build;
//! use sre_runtime::*;
//!
//! // approximate to `a|b`
//! assert_eq!(
//!     Ok(Automaton::new(
//!         vec![
//!             State::letter('a', StateIdx::from(3)),
//!             State::letter('b', StateIdx::from(3)),
//!             State::split(StateIdx::from(0), StateIdx::from(1)),
//!             State::Accept,
//!         ],
//!         StateIdx::from(2),
//!     )),
//!     build("ab|")
//! )
//! ```
use sre_runtime::{Automaton, State, StateIdx};

use crate::parser::{self, ValidationError};
use crate::postfix::{self, CONCATENATION_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An unbalanced parenthesis, a missing operand or an unknown token.
    #[error("malformed expression")]
    MalformedExpression,
    /// The construction itself went wrong, independent of the pattern.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Names one of the two outgoing transitions of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Out1,
    Out2,
}

/// A transition that has not yet been assigned a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    state: StateIdx,
    edge: Edge,
}

impl Slot {
    fn new(state: StateIdx, edge: Edge) -> Self {
        Self { state, edge }
    }
}

/// A [State] whose transitions may still be dangling.
#[derive(Debug, Clone, Copy)]
enum PendingState {
    Letter {
        value: char,
        out1: Option<StateIdx>,
    },
    Split {
        out1: Option<StateIdx>,
        out2: Option<StateIdx>,
    },
    Accept,
}

impl PendingState {
    /// Returns the finished state, or `None` if a transition was never
    /// patched.
    fn into_state(self) -> Option<State> {
        match self {
            PendingState::Letter { value, out1 } => out1.map(|out1| State::letter(value, out1)),
            PendingState::Split { out1, out2 } => Some(State::split(out1?, out2?)),
            PendingState::Accept => Some(State::Accept),
        }
    }
}

/// A partially built automaton: an entry state and the transitions still
/// waiting on a successor, in order.
#[derive(Debug)]
struct Fragment {
    entry: StateIdx,
    dangling: Vec<Slot>,
}

impl Fragment {
    fn new(entry: StateIdx, dangling: Vec<Slot>) -> Self {
        Self { entry, dangling }
    }
}

#[derive(Debug, Default)]
struct Builder {
    states: Vec<PendingState>,
    fragments: Vec<Fragment>,
}

impl Builder {
    /// Pushes a new state into the arena, returning its index.
    fn state(&mut self, state: PendingState) -> Result<StateIdx, BuildError> {
        let idx = StateIdx::try_from(self.states.len()).map_err(|_| {
            BuildError::InternalInvariantViolation("state arena exceeds a 32-bit index")
        })?;
        self.states.push(state);

        Ok(idx)
    }

    /// Points every slot in `dangling` at `target`.
    fn patch(&mut self, dangling: &[Slot], target: StateIdx) -> Result<(), BuildError> {
        for slot in dangling {
            let transition = match self.states.get_mut(slot.state.as_usize()) {
                Some(PendingState::Letter { out1, .. }) if slot.edge == Edge::Out1 => out1,
                Some(PendingState::Split { out1, .. }) if slot.edge == Edge::Out1 => out1,
                Some(PendingState::Split { out2, .. }) if slot.edge == Edge::Out2 => out2,
                _ => {
                    return Err(BuildError::InternalInvariantViolation(
                        "dangling slot names no transition",
                    ))
                }
            };

            if transition.replace(target).is_some() {
                return Err(BuildError::InternalInvariantViolation(
                    "dangling slot was already patched",
                ));
            }
        }

        Ok(())
    }

    fn pop(&mut self) -> Result<Fragment, BuildError> {
        self.fragments.pop().ok_or(BuildError::MalformedExpression)
    }

    fn letter(&mut self, value: char) -> Result<(), BuildError> {
        let letter = self.state(PendingState::Letter { value, out1: None })?;
        self.fragments.push(Fragment::new(letter, vec![Slot::new(letter, Edge::Out1)]));

        Ok(())
    }

    fn concatenate(&mut self) -> Result<(), BuildError> {
        let b = self.pop()?;
        let a = self.pop()?;

        self.patch(&a.dangling, b.entry)?;
        self.fragments.push(Fragment::new(a.entry, b.dangling));

        Ok(())
    }

    fn alternate(&mut self) -> Result<(), BuildError> {
        let b = self.pop()?;
        let a = self.pop()?;

        let split = self.state(PendingState::Split {
            out1: Some(a.entry),
            out2: Some(b.entry),
        })?;
        let dangling = a.dangling.into_iter().chain(b.dangling).collect();
        self.fragments.push(Fragment::new(split, dangling));

        Ok(())
    }

    fn repeat(&mut self) -> Result<(), BuildError> {
        let f = self.pop()?;

        let split = self.state(PendingState::Split {
            out1: Some(f.entry),
            out2: None,
        })?;
        // close the loop back through the split.
        self.patch(&f.dangling, split)?;
        self.fragments.push(Fragment::new(split, vec![Slot::new(split, Edge::Out2)]));

        Ok(())
    }

    /// Terminates the single remaining fragment in a fresh accept state and
    /// freezes the arena.
    fn finish(mut self) -> Result<Automaton, BuildError> {
        let fragment = match (self.fragments.pop(), self.fragments.is_empty()) {
            (Some(fragment), true) => fragment,
            (None, _) => {
                return Err(BuildError::InternalInvariantViolation(
                    "postfix stream reduced to no fragment",
                ))
            }
            (Some(_), false) => {
                return Err(BuildError::InternalInvariantViolation(
                    "postfix stream reduced to more than one fragment",
                ))
            }
        };

        let accept = self.state(PendingState::Accept)?;
        self.patch(&fragment.dangling, accept)?;

        let states = self
            .states
            .into_iter()
            .map(PendingState::into_state)
            .collect::<Option<Vec<State>>>()
            .ok_or(BuildError::InternalInvariantViolation(
                "a transition was left dangling",
            ))?;

        Ok(Automaton::new(states, fragment.entry))
    }
}

/// Builds an automaton from a pattern in postfix notation, as produced by
/// [postfix::to_postfix].
pub fn build(postfix: &str) -> Result<Automaton, BuildError> {
    // nothing to build from.
    if postfix.is_empty() {
        return Err(BuildError::MalformedExpression);
    }

    let mut builder = Builder::default();
    for token in postfix.chars() {
        match token {
            CONCATENATION_MARKER => builder.concatenate(),
            '|' => builder.alternate(),
            '*' => builder.repeat(),
            c if c.is_ascii_lowercase() => builder.letter(c),
            _ => Err(BuildError::MalformedExpression),
        }?;
    }

    let automaton = builder.finish()?;
    log!(log::debug!(
        "built automaton of {} states from postfix {:?}",
        automaton.len(),
        postfix
    ));

    Ok(automaton)
}

/// Accepts a pattern and attempts to compile it into an automaton for use
/// with the sre-runtime crate.
///
/// # Example
///
/// ```
/// use sre_compiler::{compile, CompileError, ValidationError};
/// use sre_runtime::matches;
///
/// let automaton = compile("a(b|c)*").expect("failed to compile");
/// assert!(matches(&automaton, "abcbc"));
/// assert!(!matches(&automaton, "ba"));
///
/// assert_eq!(
///     Err(CompileError::Validation(ValidationError::IllegalCharacter('+'))),
///     compile("a+b")
/// );
/// ```
pub fn compile(pattern: &str) -> Result<Automaton, CompileError> {
    parser::validate(pattern)?;

    let explicit = postfix::insert_concatenation(pattern);
    let postfix_form = postfix::to_postfix(&explicit)?;
    log!(log::debug!(
        "compiling {:?} with explicit form {:?} and postfix form {:?}",
        pattern,
        explicit,
        postfix_form
    ));

    build(&postfix_form).map_err(Into::into)
}

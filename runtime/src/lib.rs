//! Provides the immutable automaton produced by the `sre-compiler` crate and
//! the simulation used to evaluate it against an input.
//!
//! # Example
//!
//! ```rust
//! use sre_runtime::*;
//!
//! // approximate to `a*`
//! let automaton = Automaton::new(
//!     vec![
//!         State::letter('a', StateIdx::from(1)),
//!         State::split(StateIdx::from(0), StateIdx::from(2)),
//!         State::Accept,
//!     ],
//!     StateIdx::from(1),
//! );
//!
//! assert!(matches(&automaton, ""));
//! assert!(matches(&automaton, "aaaa"));
//! assert!(!matches(&automaton, "ab"));
//! ```

#[macro_use]
mod macros;
mod sparse_set;

use sparse_set::SparseSet;
use std::fmt::Display;

/// An offset into the state arena of an [Automaton].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateIdx(u32);

impl StateIdx {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for StateIdx {
    fn from(ptr: u32) -> Self {
        Self(ptr)
    }
}

impl TryFrom<usize> for StateIdx {
    type Error = std::num::TryFromIntError;

    fn try_from(ptr: usize) -> Result<Self, Self::Error> {
        u32::try_from(ptr).map(Self)
    }
}

impl Display for StateIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A node of the automaton.
///
/// Letter states consume exactly one character and follow `out1`. Split
/// states follow both of their transitions without consuming input. The
/// accept state has no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Letter { value: char, out1: StateIdx },
    Split { out1: StateIdx, out2: StateIdx },
    Accept,
}

impl State {
    #[must_use]
    pub const fn letter(value: char, out1: StateIdx) -> Self {
        Self::Letter { value, out1 }
    }

    #[must_use]
    pub const fn split(out1: StateIdx, out2: StateIdx) -> Self {
        Self::Split { out1, out2 }
    }

    /// Returns `true` if the state is the terminal accept state.
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Returns `true` if leaving the state consumes no input.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Letter { value, out1 } => write!(f, "Letter({:?}) -> {}", value, out1),
            State::Split { out1, out2 } => write!(f, "Split -> ({}, {})", out1, out2),
            State::Accept => write!(f, "Accept"),
        }
    }
}

/// A compiled non-deterministic finite automaton.
///
/// The automaton owns every one of its states and is never mutated once
/// built. Compiling another pattern produces a wholly separate value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    start: StateIdx,
    states: Vec<State>,
}

impl Automaton {
    /// Assembles an automaton from its state arena and entry state.
    #[must_use]
    pub fn new(states: Vec<State>, start: StateIdx) -> Self {
        Self { start, states }
    }

    /// Returns the entry state.
    pub fn start(&self) -> StateIdx {
        self.start
    }

    /// Returns the index of the accept state, if the automaton has one.
    pub fn accept(&self) -> Option<StateIdx> {
        self.states
            .iter()
            .position(State::is_accept)
            .and_then(|idx| StateIdx::try_from(idx).ok())
    }

    /// Borrows a state by its index if it exists in the arena.
    pub fn get(&self, idx: StateIdx) -> Option<&State> {
        self.states.get(idx.as_usize())
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluates the automaton against an input. See [matches()].
    pub fn matches(&self, input: &str) -> bool {
        matches(self, input)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Start: {}", self.start)?;
        for (id, state) in self.states.iter().enumerate() {
            writeln!(f, "{:04}: {}", id, state)?
        }

        Ok(())
    }
}

impl std::ops::Index<StateIdx> for Automaton {
    type Output = State;

    fn index(&self, index: StateIdx) -> &Self::Output {
        &self.states[index.as_usize()]
    }
}

impl AsRef<[State]> for Automaton {
    fn as_ref(&self) -> &[State] {
        &self.states
    }
}

/// The states reachable at a single input position, in the order they were
/// discovered. A state is enqueued at most once per position.
#[derive(Debug)]
struct Worklist {
    members: SparseSet,
    cursor: usize,
    /// Total pairs popped, across every position.
    #[cfg(feature = "logging")]
    explored: usize,
}

impl Worklist {
    fn with_set_size(set_capacity: usize) -> Self {
        Self {
            members: SparseSet::new(set_capacity),
            cursor: 0,
            #[cfg(feature = "logging")]
            explored: 0,
        }
    }

    /// Enqueues a state. Indices outside the arena the worklist was sized for
    /// are dropped, so the set never grows past the automaton.
    fn push(&mut self, idx: StateIdx) {
        let idx = idx.as_usize();
        if idx < self.members.capacity() {
            self.members.insert(idx);
        }
    }

    fn pop(&mut self) -> Option<StateIdx> {
        let next = self.members.get(self.cursor)?;
        self.cursor += 1;
        log!(self.explored += 1);

        StateIdx::try_from(next).ok()
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn clear(&mut self) {
        self.members.clear();
        self.cursor = 0;
    }
}

/// Evaluates an automaton against an input, returning `true` if some path
/// from the entry state reaches the accept state having consumed the whole
/// input.
///
/// The exploration is breadth-first over `(state, consumed)` pairs. Pairs
/// sharing a consumed count are explored together, and each pair is visited
/// at most once, so cycles of split states terminate and the running time is
/// bounded by the number of states times the input length.
///
/// # Example
///
/// ```
/// use sre_runtime::*;
///
/// // approximate to `a|b`
/// let automaton = Automaton::new(
///     vec![
///         State::letter('a', StateIdx::from(3)),
///         State::letter('b', StateIdx::from(3)),
///         State::split(StateIdx::from(0), StateIdx::from(1)),
///         State::Accept,
///     ],
///     StateIdx::from(2),
/// );
///
/// assert!(matches(&automaton, "b"));
/// assert!(!matches(&automaton, "ab"));
/// ```
pub fn matches(automaton: &Automaton, input: &str) -> bool {
    use core::mem::swap;

    let state_cnt = automaton.len();
    let mut current = Worklist::with_set_size(state_cnt);
    let mut next = Worklist::with_set_size(state_cnt);
    let mut chars = input.chars();

    current.push(automaton.start());

    loop {
        let next_char = chars.next();

        while let Some(idx) = current.pop() {
            match automaton.get(idx) {
                Some(State::Split { out1, out2 }) => {
                    current.push(*out1);
                    current.push(*out2);
                }
                Some(State::Accept) if next_char.is_none() => {
                    log!(log::trace!(
                        "accepted after exploring {} pairs",
                        current.explored + next.explored
                    ));
                    return true;
                }
                Some(State::Letter { value, out1 }) if Some(*value) == next_char => {
                    next.push(*out1);
                }
                // an unmatched letter, an early accept or a dangling index
                // ends this path.
                _ => continue,
            }
        }

        if next_char.is_none() || next.is_empty() {
            log!(log::trace!(
                "rejected after exploring {} pairs",
                current.explored + next.explored
            ));
            return false;
        }

        swap(&mut current, &mut next);
        next.clear();
    }
}

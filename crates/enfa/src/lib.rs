//! Acceptance evaluation for nondeterministic finite automata with epsilon
//! transitions.
//!
//! The caller supplies a pre-built definition ([`EpsilonNfa`]): a transition
//! relation keyed by `(source, destination)` state pairs, each edge carrying
//! the set of symbols it consumes, plus one initial state and a set of
//! accepting states. The reserved epsilon marker inside a symbol set makes
//! that edge also traversable without consuming input. An [`Evaluator`]
//! bound to a definition answers one question per call: does some path
//! through the automaton, interleaving epsilon moves with symbol moves over
//! the given input, terminate in an accepting state?
//!
//! Evaluation is an exhaustive depth-first search with no memoization and no
//! cycle detection. A branch terminates once at most one input symbol
//! remains and the current state has no epsilon escape; the current state is
//! then a terminal candidate for acceptance, so the last input symbol is
//! never consumed. Known hazard: an epsilon cycle through states whose
//! outgoing edges all carry the marker recurses without bound.
//! [`Evaluator::accepts_within`] bounds the recursion depth explicitly for
//! such automata.
//!
//! This crate only evaluates. It does not parse automaton definitions,
//! compile regular expressions, determinize, or minimize.

mod automaton;
mod evaluator;
mod explore;
mod state;
mod transitions;

pub use automaton::EpsilonNfa;
pub use evaluator::Evaluator;
pub use explore::{DepthLimitExceeded, Snapshot, explore, explore_with_limit};
pub use state::{StateId, StateSet};
pub use transitions::{EPSILON, Edge, SymbolId, SymbolSet, TransitionTable};

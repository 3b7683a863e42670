//! The automaton definition supplied by the caller.

use crate::evaluator::Evaluator;
use crate::state::{StateId, StateSet};
use crate::transitions::{EPSILON, SymbolId, SymbolSet, TransitionTable};
use std::fmt;

/// A nondeterministic finite automaton with epsilon transitions.
///
/// The definition is plain structured data: a transition relation keyed by
/// `(source, destination)` edges, one initial state, and a set of accepting
/// states. The state set and alphabet are informational; evaluation derives
/// reachability from the relation alone and does not check input symbols
/// against the alphabet.
#[derive(Debug, Clone)]
pub struct EpsilonNfa {
    /// All declared states. Transition endpoints register themselves;
    /// isolated states go through [`EpsilonNfa::add_state`].
    states: StateSet,
    /// Symbols seen on edges, the epsilon marker excluded.
    alphabet: SymbolSet,
    /// The transition relation and its epsilon marker.
    transitions: TransitionTable,
    /// The state evaluation starts from.
    initial_state: StateId,
    /// Terminating in any of these states is acceptance.
    accepting_states: StateSet,
}

impl EpsilonNfa {
    /// Create an automaton with the given initial state and the default
    /// [`EPSILON`] marker.
    pub fn new(initial_state: StateId) -> Self {
        Self::with_epsilon(initial_state, EPSILON)
    }

    /// Create an automaton with a caller-chosen epsilon marker.
    ///
    /// The marker is reserved: it may label edges but must never appear in
    /// evaluation input.
    pub fn with_epsilon(initial_state: StateId, epsilon: SymbolId) -> Self {
        let mut states = StateSet::new();
        states.insert(initial_state);
        Self {
            states,
            alphabet: SymbolSet::new(),
            transitions: TransitionTable::with_epsilon(epsilon),
            initial_state,
            accepting_states: StateSet::new(),
        }
    }

    /// Declare a state without attaching any transition to it.
    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Ensure the edge from `source` to `dest` exists, with an empty symbol
    /// set if nothing has been attached to it yet.
    pub fn add_edge(&mut self, source: StateId, dest: StateId) {
        self.states.insert(source);
        self.states.insert(dest);
        self.transitions.add_edge((source, dest));
    }

    /// Allow `symbol` to be consumed moving from `source` to `dest`. Both
    /// endpoints are declared as states. Passing the epsilon marker is the
    /// same as [`EpsilonNfa::add_epsilon_transition`].
    pub fn add_transition(&mut self, source: StateId, dest: StateId, symbol: SymbolId) {
        self.add_edge(source, dest);
        if symbol != self.transitions.epsilon() {
            self.alphabet.insert(symbol);
        }
        self.transitions.add_symbol((source, dest), symbol);
    }

    /// Mark the edge from `source` to `dest` as traversable without
    /// consuming input.
    pub fn add_epsilon_transition(&mut self, source: StateId, dest: StateId) {
        let epsilon = self.transitions.epsilon();
        self.add_transition(source, dest, epsilon);
    }

    /// Add an accepting state, declaring it if needed.
    pub fn add_accepting_state(&mut self, state: StateId) {
        self.states.insert(state);
        self.accepting_states.insert(state);
    }

    /// Get the initial state.
    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    /// Get the set of all declared states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Get the alphabet, i.e. the symbols seen on edges with the epsilon
    /// marker excluded.
    pub fn alphabet(&self) -> &SymbolSet {
        &self.alphabet
    }

    /// Get the transition relation.
    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Get the set of accepting states.
    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting_states
    }

    /// Get the epsilon marker of this automaton.
    pub fn epsilon(&self) -> SymbolId {
        self.transitions.epsilon()
    }

    /// Create an evaluator bound to this definition.
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(self)
    }
}

impl fmt::Display for EpsilonNfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial: {}", self.initial_state)?;
        writeln!(f, "accepting: {:?}", self.accepting_states)?;
        for ((source, dest), symbols) in self.transitions.iter() {
            write!(f, "{source} -> {dest} on")?;
            if symbols.is_empty() {
                write!(f, " (none)")?;
            }
            for &symbol in symbols {
                if symbol == self.epsilon() {
                    write!(f, " epsilon")?;
                } else {
                    write!(f, " {symbol}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

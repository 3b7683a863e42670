//! The transition relation: edges, symbol sets, and the epsilon marker.

use crate::state::StateId;
use indexmap::{IndexMap, IndexSet};

/// A symbol identifier represented as a u32.
pub type SymbolId = u32;

/// The default epsilon marker, a reserved symbol id that must never appear
/// in evaluation input. An edge whose symbol set contains the marker may be
/// taken without consuming input.
pub const EPSILON: SymbolId = u32::MAX;

/// An edge of the transition relation: a `(source, destination)` state pair.
pub type Edge = (StateId, StateId);

/// The symbols attached to one edge. A set may be empty, hold real symbols,
/// hold the epsilon marker, or mix the marker with real symbols.
pub type SymbolSet = IndexSet<SymbolId>;

/// The transition relation of an automaton.
///
/// Each `(source, destination)` edge appears at most once; multiple symbols
/// on the same edge share that edge's symbol set. Iteration follows edge
/// insertion order, which fixes the order the exploration engine visits
/// edges in.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    edges: IndexMap<Edge, SymbolSet>,
    epsilon: SymbolId,
}

impl TransitionTable {
    /// Create an empty relation using [`EPSILON`] as the marker.
    pub fn new() -> Self {
        Self::with_epsilon(EPSILON)
    }

    /// Create an empty relation with a caller-chosen epsilon marker.
    ///
    /// The marker is reserved: it may appear in symbol sets but must never
    /// appear in evaluation input.
    pub fn with_epsilon(epsilon: SymbolId) -> Self {
        Self {
            edges: IndexMap::new(),
            epsilon,
        }
    }

    /// Get the epsilon marker of this relation.
    pub fn epsilon(&self) -> SymbolId {
        self.epsilon
    }

    /// Ensure an entry for `edge` exists, with an empty symbol set if the
    /// edge is new.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.entry(edge).or_default();
    }

    /// Allow `symbol` to be consumed along `edge`, creating the edge entry
    /// if it does not exist yet. Adding the epsilon marker makes the edge
    /// traversable without consuming input.
    pub fn add_symbol(&mut self, edge: Edge, symbol: SymbolId) {
        self.edges.entry(edge).or_default().insert(symbol);
    }

    /// Get the symbol set attached to `edge`, if the edge exists.
    pub fn symbols(&self, edge: Edge) -> Option<&SymbolSet> {
        self.edges.get(&edge)
    }

    /// Get the number of edges in the relation.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the relation has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over all edges and their symbol sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &SymbolSet)> + '_ {
        self.edges.iter().map(|(&edge, symbols)| (edge, symbols))
    }

    /// Index the relation by source state: every entry whose source equals
    /// `state`, in relation order. A state with no outgoing edges yields an
    /// empty mapping.
    pub fn transitions_from(&self, state: StateId) -> IndexMap<Edge, &SymbolSet> {
        self.edges
            .iter()
            .filter(|(edge, _)| edge.0 == state)
            .map(|(&edge, symbols)| (edge, symbols))
            .collect()
    }

    /// Check whether `edge` may be taken without consuming input, i.e. its
    /// symbol set contains the epsilon marker. Edges absent from the
    /// relation are never epsilon.
    #[inline]
    pub fn is_epsilon_edge(&self, edge: Edge) -> bool {
        self.edges
            .get(&edge)
            .is_some_and(|symbols| symbols.contains(&self.epsilon))
    }

    /// Check whether any of `symbol_sets` contains the epsilon marker.
    ///
    /// Decides whether a branch can still move once its input is down to at
    /// most one symbol.
    pub fn any_could_be_epsilon<'a>(
        &self,
        symbol_sets: impl IntoIterator<Item = &'a SymbolSet>,
    ) -> bool {
        symbol_sets
            .into_iter()
            .any(|symbols| symbols.contains(&self.epsilon))
    }

    /// Check whether `edge` accepts `symbol` as its next consumed symbol.
    /// Matching is exact set membership, with no wildcards or symbol
    /// classes. Edges absent from the relation accept nothing.
    #[inline]
    pub fn accepts_symbol(&self, edge: Edge, symbol: SymbolId) -> bool {
        self.edges
            .get(&edge)
            .is_some_and(|symbols| symbols.contains(&symbol))
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

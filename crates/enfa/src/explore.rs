//! The recursive exploration engine.

use crate::state::StateId;
use crate::transitions::{SymbolId, TransitionTable};
use tracing::trace;

/// Error returned by the bounded exploration variants when a single path
/// would recurse past the configured depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("exploration exceeded the configured recursion depth limit")]
pub struct DepthLimitExceeded;

/// Per-branch evaluation state, threaded functionally through the recursion.
///
/// Every branch owns its snapshot. Deriving a child branch moves the
/// terminal accumulator into the child, and the child's return value
/// replaces it; nothing is copied. The transition relation itself is shared
/// read-only.
#[derive(Debug)]
pub struct Snapshot<'a> {
    table: &'a TransitionTable,
    current_state: StateId,
    terminal_states: Vec<StateId>,
}

impl<'a> Snapshot<'a> {
    /// Seed a snapshot at `initial_state` with an empty terminal
    /// accumulator.
    pub fn seed(table: &'a TransitionTable, initial_state: StateId) -> Self {
        Self {
            table,
            current_state: initial_state,
            terminal_states: Vec::new(),
        }
    }

    /// Get the state this branch is positioned at.
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// Get the states at which explored branches have terminated so far, in
    /// visitation order.
    pub fn terminal_states(&self) -> &[StateId] {
        &self.terminal_states
    }
}

/// Explore every path from the snapshot's current state and return the
/// states at which branches terminated, in visitation order. Duplicates are
/// kept; one state terminates several branches when several paths reach it.
///
/// A branch terminates when at most one input symbol remains and no outgoing
/// edge of the current state carries the epsilon marker; the current state,
/// not a destination, is then recorded as terminal. Otherwise every outgoing
/// edge is tried in relation order: an edge carrying the marker branches
/// without consuming input, and an edge accepting the first remaining symbol
/// branches with it consumed. One edge may do both. A symbol is only
/// consumed while more than one remains, so the last input symbol is never
/// consumed.
///
/// There is no cycle detection. An epsilon cycle through states whose
/// outgoing edges all carry the marker recurses without bound; use
/// [`explore_with_limit`] when that hazard is in play.
pub fn explore(snapshot: Snapshot<'_>, remaining: &[SymbolId]) -> Vec<StateId> {
    match explore_impl(snapshot, remaining, None) {
        Ok(terminal_states) => terminal_states,
        Err(DepthLimitExceeded) => unreachable!("no depth limit was configured"),
    }
}

/// [`explore`] with a recursion depth budget.
///
/// `limit` is the number of transitions any single path may take. A branch
/// that would step past it aborts the whole run with [`DepthLimitExceeded`]
/// instead of being dropped silently, so a bounded run never reports a
/// wrong verdict. Terminating at the current state consumes no budget, so a
/// limit of zero still resolves automata whose initial state terminates
/// immediately.
pub fn explore_with_limit(
    snapshot: Snapshot<'_>,
    remaining: &[SymbolId],
    limit: usize,
) -> Result<Vec<StateId>, DepthLimitExceeded> {
    explore_impl(snapshot, remaining, Some(limit))
}

/// Take one level of depth budget, if a budget is in force.
fn descend(limit: Option<usize>) -> Result<Option<usize>, DepthLimitExceeded> {
    match limit {
        Some(0) => Err(DepthLimitExceeded),
        Some(depth) => Ok(Some(depth - 1)),
        None => Ok(None),
    }
}

fn explore_impl(
    snapshot: Snapshot<'_>,
    remaining: &[SymbolId],
    limit: Option<usize>,
) -> Result<Vec<StateId>, DepthLimitExceeded> {
    let Snapshot {
        table,
        current_state,
        mut terminal_states,
    } = snapshot;

    let current_edges = table.transitions_from(current_state);

    // Termination test: at most one symbol left and no epsilon escape. The
    // current state is the terminal state, not any destination.
    if remaining.len() <= 1 && !table.any_could_be_epsilon(current_edges.values().copied()) {
        terminal_states.push(current_state);
        trace!(state = current_state, terminals = ?terminal_states, "branch terminated");
        return Ok(terminal_states);
    }

    for &(source, dest) in current_edges.keys() {
        if table.is_epsilon_edge((source, dest)) {
            trace!(source, dest, "taking epsilon transition");
            let child = Snapshot {
                table,
                current_state: dest,
                terminal_states,
            };
            terminal_states = explore_impl(child, remaining, descend(limit)?)?;
        }
        if remaining.len() > 1 && table.accepts_symbol((source, dest), remaining[0]) {
            trace!(source, dest, symbol = remaining[0], "taking symbol transition");
            let child = Snapshot {
                table,
                current_state: dest,
                terminal_states,
            };
            terminal_states = explore_impl(child, &remaining[1..], descend(limit)?)?;
        }
    }

    // Branches that run out of matching edges contribute no terminal state.
    trace!(state = current_state, terminals = ?terminal_states, "edges exhausted");
    Ok(terminal_states)
}

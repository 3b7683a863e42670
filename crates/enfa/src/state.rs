//! State identifiers and state sets.

use fixedbitset::FixedBitSet;
use std::fmt;

/// A state identifier represented as a u32.
pub type StateId = u32;

/// A set of states implemented using a growable bit set.
///
/// Holds the declared states of an automaton and its acceptance set. States
/// may be inserted in any order; the set grows on demand.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Create a new empty state set.
    pub fn new() -> Self {
        Self {
            bits: FixedBitSet::new(),
        }
    }

    /// Create a new empty state set with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            false
        } else {
            self.bits.contains(idx)
        }
    }

    /// Check if the set contains any state from `states`.
    ///
    /// This is the acceptance test: an input is accepted when the terminal
    /// states of its evaluation intersect the acceptance set. `states` may
    /// hold duplicates; they do not affect the answer.
    pub fn contains_any(&self, states: &[StateId]) -> bool {
        states.iter().any(|&state| self.contains(state))
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterate over all states in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let items: Vec<StateId> = iter.into_iter().collect();
        let capacity = items.iter().copied().max().map_or(0, |m| m as usize + 1);
        let mut set = Self::with_capacity(capacity);
        for state in items {
            set.insert(state);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_set_basic() {
        let mut set = StateSet::new();
        assert!(set.is_empty());

        set.insert(3);
        set.insert(7);
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(5));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_state_set_contains_any() {
        let set: StateSet = [2, 4].into_iter().collect();
        assert!(set.contains_any(&[0, 1, 2]));
        assert!(set.contains_any(&[4, 4, 4]));
        assert!(!set.contains_any(&[0, 1, 3]));
        assert!(!set.contains_any(&[]));
    }

    #[test]
    fn test_state_set_grows_on_insert() {
        let mut set = StateSet::with_capacity(4);
        set.insert(1000);
        assert!(set.contains(1000));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_state_set_iter_ascending() {
        let set: StateSet = [9, 1, 5].into_iter().collect();
        let states: Vec<StateId> = set.iter().collect();
        assert_eq!(states, vec![1, 5, 9]);
    }
}

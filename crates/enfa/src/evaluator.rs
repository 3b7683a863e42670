//! Binding a definition to the exploration engine.

use crate::automaton::EpsilonNfa;
use crate::explore::{DepthLimitExceeded, Snapshot, explore, explore_with_limit};
use crate::transitions::SymbolId;
use tracing::debug;

/// Evaluates input sequences against one automaton definition.
///
/// The evaluator borrows the definition read-only and keeps no state between
/// calls. One definition may back any number of evaluators, and calls may
/// overlap freely across threads; each call explores on its own stack.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    nfa: &'a EpsilonNfa,
}

impl<'a> Evaluator<'a> {
    /// Bind an evaluator to `nfa`.
    pub fn new(nfa: &'a EpsilonNfa) -> Self {
        Self { nfa }
    }

    /// Decide whether `input` is accepted: seed a snapshot at the initial
    /// state, explore every path, and test the terminal states against the
    /// acceptance set.
    ///
    /// Inherits the divergence hazard of [`explore`] on epsilon-only
    /// cycles; [`Evaluator::accepts_within`] bounds the recursion instead.
    pub fn accepts(&self, input: &[SymbolId]) -> bool {
        let snapshot = Snapshot::seed(self.nfa.transitions(), self.nfa.initial_state());
        let terminal_states = explore(snapshot, input);
        let accepted = self.nfa.accepting_states().contains_any(&terminal_states);
        debug!(accepted, terminals = ?terminal_states, "evaluation finished");
        accepted
    }

    /// [`Evaluator::accepts`] with a recursion depth budget, as described on
    /// [`explore_with_limit`].
    pub fn accepts_within(
        &self,
        input: &[SymbolId],
        limit: usize,
    ) -> Result<bool, DepthLimitExceeded> {
        let snapshot = Snapshot::seed(self.nfa.transitions(), self.nfa.initial_state());
        let terminal_states = explore_with_limit(snapshot, input, limit)?;
        let accepted = self.nfa.accepting_states().contains_any(&terminal_states);
        debug!(accepted, terminals = ?terminal_states, "bounded evaluation finished");
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -a-> 1, accepting {1}  (a = 0)
    fn direct_match() -> EpsilonNfa {
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_transition(0, 1, 0);
        nfa.add_accepting_state(1);
        nfa
    }

    #[test]
    fn test_direct_match_accepts() {
        // the first symbol is consumed, the trailing one triggers
        // termination at state 1
        let nfa = direct_match();
        assert!(nfa.evaluator().accepts(&[0, 0]));
    }

    #[test]
    fn test_wrong_symbol_is_rejected() {
        // symbol 1 matches no edge; the lone branch terminates at the
        // non-accepting initial state
        let nfa = direct_match();
        assert!(!nfa.evaluator().accepts(&[1]));
    }

    #[test]
    fn test_epsilon_bridge() {
        // 0 -ε-> 1 -x-> 2, accepting {2}  (x = 5)
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_epsilon_transition(0, 1);
        nfa.add_transition(1, 2, 5);
        nfa.add_accepting_state(2);

        assert!(nfa.evaluator().accepts(&[5, 5]));
    }

    #[test]
    fn test_unreachable_accepting_state() {
        // accepting {2} is no edge destination, so nothing is accepted
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_transition(0, 1, 0);
        nfa.add_accepting_state(2);

        let evaluator = nfa.evaluator();
        for input in [&[][..], &[0][..], &[0, 0][..], &[1, 0, 0][..]] {
            assert!(!evaluator.accepts(input));
        }
    }

    #[test]
    fn test_empty_input_at_accepting_initial_state() {
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_transition(0, 1, 0);
        nfa.add_accepting_state(0);

        assert!(nfa.evaluator().accepts(&[]));
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let nfa = direct_match();
        let evaluator = nfa.evaluator();
        for _ in 0..10 {
            assert!(evaluator.accepts(&[0, 0]));
            assert!(!evaluator.accepts(&[1]));
        }
    }

    #[test]
    fn test_fresh_evaluators_agree() {
        let nfa = direct_match();
        let first = Evaluator::new(&nfa);
        let second = Evaluator::new(&nfa);

        assert_eq!(first.accepts(&[0, 0]), second.accepts(&[0, 0]));
        assert_eq!(first.accepts(&[1]), second.accepts(&[1]));
    }

    #[test]
    fn test_adding_epsilon_edges_is_monotone() {
        // 0 -a-> 1, accepting {2}: nothing reaches 2 before the bridge
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_transition(0, 1, 0);
        nfa.add_accepting_state(2);

        let inputs: [&[SymbolId]; 3] = [&[0, 0], &[0], &[1, 1]];
        let before: Vec<bool> = inputs.iter().map(|i| nfa.evaluator().accepts(i)).collect();

        nfa.add_epsilon_transition(1, 2);
        let after: Vec<bool> = inputs.iter().map(|i| nfa.evaluator().accepts(i)).collect();

        // acceptances may appear, never disappear
        for (b, a) in before.iter().zip(&after) {
            assert!(*a || !*b);
        }
        assert!(!before[0]);
        assert!(after[0]);
    }

    #[test]
    fn test_bounded_run_on_diverging_automaton() {
        // 0 -ε-> 0 only: unbounded evaluation of this automaton would not
        // return
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_epsilon_transition(0, 0);
        nfa.add_accepting_state(0);

        let verdict = nfa.evaluator().accepts_within(&[3], 128);
        assert_eq!(verdict, Err(DepthLimitExceeded));
    }

    #[test]
    fn test_bounded_run_matches_unbounded_when_it_completes() {
        let mut nfa = EpsilonNfa::new(0);
        nfa.add_epsilon_transition(0, 1);
        nfa.add_transition(1, 2, 5);
        nfa.add_accepting_state(2);

        let evaluator = nfa.evaluator();
        assert_eq!(evaluator.accepts_within(&[5, 5], 32), Ok(true));
        assert_eq!(evaluator.accepts_within(&[6], 32), Ok(false));
        assert_eq!(
            evaluator.accepts_within(&[5, 5], 32),
            Ok(evaluator.accepts(&[5, 5]))
        );
    }

    #[test]
    fn test_subscriber_does_not_change_results() {
        let nfa = direct_match();
        let quiet = nfa.evaluator().accepts(&[0, 0]);

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::level_filters::LevelFilter::TRACE)
            .with_writer(std::io::sink)
            .finish();
        let traced =
            tracing::subscriber::with_default(subscriber, || nfa.evaluator().accepts(&[0, 0]));

        assert_eq!(quiet, traced);
    }
}

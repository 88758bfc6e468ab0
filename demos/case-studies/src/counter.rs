//! The archetypal counter feature
//!
//! The smallest possible demonstration of the architecture: the domain is a
//! count, the actions are the two things a user can do to it, and the reducer
//! is the only place the count changes. Every other case study embeds this
//! feature rather than rewriting it.

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

/// What the counter knows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CounterState {
    pub count: i64,
}

/// What can happen to the counter.
#[derive(ActionMacro, Clone, Debug, PartialEq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

/// How the count changes.
pub fn reducer(state: &mut CounterState, action: CounterAction) -> Effect<CounterAction> {
    match action {
        CounterAction::Increment => state.count += 1,
        CounterAction::Decrement => state.count -= 1,
    }
    Effect::none()
}

/// Mount the feature in a store of its own.
pub fn store() -> Store<CounterState, CounterAction> {
    Store::new(CounterState::default(), reduce_fn(reducer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_increment_decrement() {
        let mut store = TestStore::new(CounterState::default(), reduce_fn(reducer));

        store.send(CounterAction::Increment, |state| state.count = 1);
        store.send(CounterAction::Increment, |state| state.count = 2);
        store.send(CounterAction::Decrement, |state| state.count = 1);
        store.finish();
    }

    #[test]
    fn test_count_is_sum_of_contributions() {
        let store = store();
        let sends = [
            CounterAction::Increment,
            CounterAction::Increment,
            CounterAction::Decrement,
            CounterAction::Increment,
            CounterAction::Decrement,
            CounterAction::Decrement,
            CounterAction::Increment,
        ];

        let expected: i64 = sends
            .iter()
            .map(|a| match a {
                CounterAction::Increment => 1,
                CounterAction::Decrement => -1,
            })
            .sum();

        for action in sends {
            store.send(action);
        }
        assert_eq!(store.state().count, expected);
    }
}

//! Composing a small feature into a bigger one
//!
//! The counter domain is embedded twice in a larger domain: each instance
//! gets its own slice of parent state via a [`StateLens`] and its own variant
//! of the parent action enum via a [`Prism`]. The parent reducer is nothing
//! but the two scoped children; the view layer reaches each counter through
//! `store.scope(..)` and never learns the parent exists.

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

use crate::counter::{self, CounterAction, CounterState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TwoCountersState {
    pub counter1: CounterState,
    pub counter2: CounterState,
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
pub enum TwoCountersAction {
    Counter1(CounterAction),
    Counter2(CounterAction),
}

pub const COUNTER1: StateLens<TwoCountersState, CounterState> =
    StateLens::new(|s| &s.counter1, |s| &mut s.counter1);
pub const COUNTER2: StateLens<TwoCountersState, CounterState> =
    StateLens::new(|s| &s.counter2, |s| &mut s.counter2);

pub const COUNTER1_ACTION: Prism<TwoCountersAction, CounterAction> = Prism::new(
    |a| match a {
        TwoCountersAction::Counter1(c) => Ok(c),
        other => Err(other),
    },
    TwoCountersAction::Counter1,
);
pub const COUNTER2_ACTION: Prism<TwoCountersAction, CounterAction> = Prism::new(
    |a| match a {
        TwoCountersAction::Counter2(c) => Ok(c),
        other => Err(other),
    },
    TwoCountersAction::Counter2,
);

/// The parent reducer: two scoped counters, nothing else.
pub fn reducer() -> CombinedReducer<TwoCountersState, TwoCountersAction> {
    CombinedReducer::new()
        .with(Scope::new(
            COUNTER1,
            COUNTER1_ACTION,
            reduce_fn(counter::reducer),
        ))
        .with(Scope::new(
            COUNTER2,
            COUNTER2_ACTION,
            reduce_fn(counter::reducer),
        ))
}

pub fn store() -> Store<TwoCountersState, TwoCountersAction> {
    Store::new(TwoCountersState::default(), reducer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_each_action_reaches_its_own_slice() {
        let mut store = TestStore::new(TwoCountersState::default(), reducer());

        store.send(TwoCountersAction::Counter1(CounterAction::Increment), |s| {
            s.counter1.count = 1;
        });
        store.send(TwoCountersAction::Counter2(CounterAction::Decrement), |s| {
            s.counter2.count = -1;
        });
        store.finish();
    }

    #[test]
    fn test_counters_are_independent() {
        let store = store();

        for _ in 0..10 {
            store.send(TwoCountersAction::Counter1(CounterAction::Increment));
        }
        assert_eq!(store.state().counter1.count, 10);
        assert_eq!(store.state().counter2, CounterState::default());

        for _ in 0..3 {
            store.send(TwoCountersAction::Counter2(CounterAction::Decrement));
        }
        assert_eq!(store.state().counter1.count, 10);
        assert_eq!(store.state().counter2.count, -3);
    }

    #[test]
    fn test_scoped_stores_stay_fresh() {
        let store = store();
        let first = store.scope(|s: &TwoCountersState| &s.counter1, TwoCountersAction::Counter1);
        let second = store.scope(|s: &TwoCountersState| &s.counter2, TwoCountersAction::Counter2);

        first.send(CounterAction::Increment);
        assert_eq!(first.state().count, 1);
        assert_eq!(second.state().count, 0);

        // A dispatch through the parent is immediately visible in the scope.
        store.send(TwoCountersAction::Counter1(CounterAction::Increment));
        assert_eq!(first.state().count, 2);
    }
}

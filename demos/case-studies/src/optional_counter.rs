//! Showing and hiding a child feature behind optional state
//!
//! The parent holds `Option<CounterState>`. Toggling flips the slice between
//! a fresh default and absent; the counter reducer is mounted with
//! [`Reducer::if_let`] so it only runs while the slice is present. The view
//! layer asks for `store.optional_scope(..)` each render: `Some` means mount
//! the counter view, `None` means render the fallback (and there is no
//! handle to send counter actions on).

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

use crate::counter::{self, CounterAction, CounterState};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionalCounterState {
    pub counter: Option<CounterState>,
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
pub enum OptionalCounterAction {
    ToggleCounterTapped,
    Counter(CounterAction),
}

pub const COUNTER: OptionLens<OptionalCounterState, CounterState> = OptionLens::new(
    |s| s.counter.as_ref(),
    |s| s.counter.as_mut(),
);

pub const COUNTER_ACTION: Prism<OptionalCounterAction, CounterAction> = Prism::new(
    |a| match a {
        OptionalCounterAction::Counter(c) => Ok(c),
        other => Err(other),
    },
    OptionalCounterAction::Counter,
);

fn toggle_reducer(
    state: &mut OptionalCounterState,
    action: OptionalCounterAction,
) -> Effect<OptionalCounterAction> {
    if let OptionalCounterAction::ToggleCounterTapped = action {
        // Re-seed the default on every re-appearance, never a stale value.
        state.counter = match state.counter {
            Some(_) => None,
            None => Some(CounterState::default()),
        };
    }
    Effect::none()
}

pub fn reducer() -> impl Reducer<State = OptionalCounterState, Action = OptionalCounterAction> {
    reduce_fn(toggle_reducer).if_let(COUNTER, COUNTER_ACTION, reduce_fn(counter::reducer))
}

pub fn store() -> Store<OptionalCounterState, OptionalCounterAction> {
    Store::new(OptionalCounterState::default(), reducer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_toggle_alternates_and_reseeds() {
        let mut store = TestStore::new(OptionalCounterState::default(), reducer());

        store.send(OptionalCounterAction::ToggleCounterTapped, |s| {
            s.counter = Some(CounterState::default());
        });
        store.send(
            OptionalCounterAction::Counter(CounterAction::Increment),
            |s| s.counter = Some(CounterState { count: 1 }),
        );
        store.send(OptionalCounterAction::ToggleCounterTapped, |s| {
            s.counter = None;
        });
        // Back to the default, not the retained count of 1.
        store.send(OptionalCounterAction::ToggleCounterTapped, |s| {
            s.counter = Some(CounterState::default());
        });
        store.finish();
    }

    #[test]
    fn test_counter_action_while_absent_is_noop() {
        let mut store = TestStore::new(OptionalCounterState::default(), reducer());

        store.send(OptionalCounterAction::Counter(CounterAction::Increment), |_| {});
        store.finish();
    }

    #[test]
    fn test_optional_scope_lifecycle() {
        let store = store();

        assert!(store
            .optional_scope(|s: &OptionalCounterState| s.counter.as_ref(), OptionalCounterAction::Counter)
            .is_none());

        store.send(OptionalCounterAction::ToggleCounterTapped);
        let scoped = store
            .optional_scope(|s: &OptionalCounterState| s.counter.as_ref(), OptionalCounterAction::Counter)
            .expect("counter just toggled on");

        scoped.send(CounterAction::Increment);
        scoped.send(CounterAction::Increment);
        assert_eq!(scoped.state().count, 2);

        // Dismissal underneath a retained handle: reads turn None, sends drop.
        store.send(OptionalCounterAction::ToggleCounterTapped);
        assert_eq!(scoped.try_state(), None);
        scoped.send(CounterAction::Decrement);
        assert_eq!(store.state().counter, None);
    }
}

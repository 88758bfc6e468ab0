//! Test utilities for uniflow applications
//!
//! - [`TestStore`]: deterministic reducer harness asserting each state
//!   transition and every follow-up action
//! - [`TestHarness`]: channel-based harness for observer/dispatch plumbing
//! - Assertion macros for verifying emitted actions
//!
//! # Example
//!
//! ```ignore
//! use uniflow_core::testing::TestStore;
//!
//! let mut store = TestStore::new(CounterState::default(), reduce_fn(counter_reducer));
//!
//! store.send(CounterAction::Increment, |state| {
//!     state.count = 1;
//! });
//! store.finish();
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;

use tokio::sync::mpsc;

use crate::action::{Action, ActionCategory};
use crate::reducer::Reducer;

/// Deterministic harness for exercising a reducer action by action.
///
/// Each [`send`](TestStore::send) takes the expected mutation as a closure:
/// the closure is applied to a copy of the pre-reduction state and the result
/// compared against the actual post-reduction state, so a test documents
/// exactly what each action changes. Follow-up actions enqueued by effects
/// must be consumed with [`receive`](TestStore::receive);
/// [`finish`](TestStore::finish) fails if any are left.
pub struct TestStore<R: Reducer> {
    state: R::State,
    reducer: R,
    pending: VecDeque<R::Action>,
}

impl<R> TestStore<R>
where
    R: Reducer,
    R::State: Clone + PartialEq + Debug,
    R::Action: PartialEq,
{
    /// Create a test store with initial state and the reducer under test.
    pub fn new(state: R::State, reducer: R) -> Self {
        Self {
            state,
            reducer,
            pending: VecDeque::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Send an action and assert the state mutation it performs.
    ///
    /// # Panics
    ///
    /// Panics if the post-reduction state differs from the expectation, or if
    /// follow-ups from a previous send have not been received yet.
    pub fn send(&mut self, action: R::Action, expect: impl FnOnce(&mut R::State)) {
        assert!(
            self.pending.is_empty(),
            "unreceived follow-up actions: {:?}",
            self.pending
        );
        self.reduce_and_assert(action, expect);
    }

    /// Consume the next queued follow-up action, asserting its identity and
    /// the state mutation it performs.
    pub fn receive(&mut self, expected: R::Action, expect: impl FnOnce(&mut R::State)) {
        let action = self
            .pending
            .pop_front()
            .expect("no follow-up action queued to receive");
        assert_eq!(
            action, expected,
            "next follow-up action did not match expectation"
        );
        self.reduce_and_assert(action, expect);
    }

    /// Assert that no follow-up actions remain unconsumed.
    pub fn finish(self) {
        assert!(
            self.pending.is_empty(),
            "test finished with unreceived follow-up actions: {:?}",
            self.pending
        );
    }

    fn reduce_and_assert(&mut self, action: R::Action, expect: impl FnOnce(&mut R::State)) {
        let mut expected = self.state.clone();
        expect(&mut expected);
        let effect = self.reducer.reduce(&mut self.state, action);
        assert_eq!(
            self.state, expected,
            "state after reduction did not match expectation"
        );
        self.pending.extend(effect.into_actions());
    }
}

/// Generic channel-backed harness for dispatch plumbing.
///
/// Provides a state field, an action channel for capturing emitted actions,
/// and helpers for draining them. Useful when testing code that feeds a store
/// from an event source rather than the reducer itself.
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Get a clone of the action sender for passing to handlers.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Check if any actions were emitted.
    pub fn has_emitted(&mut self) -> bool {
        !self.drain_emitted().is_empty()
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S, A: ActionCategory> TestHarness<S, A> {
    /// Drain all emitted actions that belong to a specific category.
    ///
    /// Actions not matching the category remain in the channel.
    pub fn drain_category(&mut self, category: &str) -> Vec<A> {
        let all = self.drain_emitted();
        let mut matching = Vec::new();

        for action in all {
            if action.category() == Some(category) {
                matching.push(action);
            } else {
                let _ = self.tx.send(action);
            }
        }
        matching
    }

    /// Check if any action of the given category was emitted.
    pub fn has_category(&mut self, category: &str) -> bool {
        !self.drain_category(category).is_empty()
    }
}

/// Assert that a specific action was emitted.
///
/// # Example
///
/// ```ignore
/// let actions = effect.into_actions();
/// assert_emitted!(actions, Action::Increment);
/// assert_emitted!(actions, Action::SetValue(42));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find and return the first action matching a pattern.
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

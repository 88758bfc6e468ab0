//! Core traits and types for uniflow
//!
//! This crate provides a composable state container following a Redux/Elm
//! inspired unidirectional-data-flow architecture: state changes only through
//! actions sent to a store, reducers are pure transitions, and child features
//! embed inside parents through scoping.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe what happened
//! - **Reducer**: Pure `(state, action) -> state + follow-ups` transition
//! - **Store**: Centralized state container with send/observe/scope
//! - **Lens/Prism**: State slicing and action routing for composition
//! - **Binding**: One generic selector+value action covering many fields
//!
//! # Basic Example
//!
//! ```ignore
//! use uniflow_core::prelude::*;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Action, Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! fn counter(state: &mut CounterState, action: CounterAction) -> Effect<CounterAction> {
//!     match action {
//!         CounterAction::Increment => state.count += 1,
//!         CounterAction::Decrement => state.count -= 1,
//!     }
//!     Effect::none()
//! }
//!
//! let store = Store::new(CounterState::default(), reduce_fn(counter));
//! store.send(CounterAction::Increment);
//! assert_eq!(store.state().count, 1);
//! ```
//!
//! # Composition
//!
//! A parent embeds two independent counters by scoping the child reducer
//! over disjoint slices, and the view layer scopes the store the same way:
//!
//! ```ignore
//! let reducer = CombinedReducer::new()
//!     .with(Scope::new(COUNTER1, COUNTER1_ACTION, reduce_fn(counter)))
//!     .with(Scope::new(COUNTER2, COUNTER2_ACTION, reduce_fn(counter)));
//!
//! let store = Store::new(TwoCounters::default(), reducer);
//! let first = store.scope(|s| &s.counter1, AppAction::Counter1);
//! first.send(CounterAction::Increment);
//! ```

pub mod action;
pub mod binding;
pub mod debug;
pub mod effect;
pub mod lens;
pub mod reducer;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory};
pub use effect::Effect;
pub use lens::{OptionLens, Prism, StateLens};
pub use reducer::{reduce_fn, CombinedReducer, FnReducer, IfLet, Reducer, Scope};

// Store exports
pub use store::{
    ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, ObserverId, Store,
};

// Binding exports
pub use binding::{bind, BindableAction, BindingAction, BindingReducer, Field};

// Testing exports
pub use testing::{TestHarness, TestStore};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory};
    pub use crate::binding::{bind, BindableAction, BindingAction, BindingReducer, Field};
    pub use crate::effect::Effect;
    pub use crate::lens::{OptionLens, Prism, StateLens};
    pub use crate::reducer::{reduce_fn, CombinedReducer, FnReducer, IfLet, Reducer, Scope};
    pub use crate::store::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, ObserverId, Store,
    };
}

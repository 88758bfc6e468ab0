//! uniflow: Composable unidirectional state management
//!
//! Like Redux/Elm: state lives in a store, changes only through dispatched
//! actions, and reducers are pure transitions. Child features compose into
//! parents through scoped reducers and scoped stores, so a counter written
//! once can be embedded twice, behind an `Option`, or inside any larger
//! feature without modification.
//!
//! # Example
//! ```ignore
//! use uniflow::prelude::*;
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
//! ```

// Re-export everything from core
pub use uniflow_core::*;

// Re-export derive macros
pub use uniflow_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use uniflow_core::{Action, ActionCategory};

    // Store
    pub use uniflow_core::{
        ComposedMiddleware, LoggingMiddleware, Middleware, NoopMiddleware, ObserverId, Store,
    };

    // Reducers and composition
    pub use uniflow_core::{
        reduce_fn, CombinedReducer, Effect, FnReducer, IfLet, OptionLens, Prism, Reducer, Scope,
        StateLens,
    };

    // Bindings
    pub use uniflow_core::{bind, BindableAction, BindingAction, BindingReducer, Field};

    // Derive macros
    pub use uniflow_macros::Action;
}

//! Tutorial case studies for the uniflow architecture
//!
//! Each module is a self-contained feature (state + actions + reducer) that
//! demonstrates one idea, roughly in reading order:
//!
//! 1. [`counter`] - the archetypal feature: state, actions, reducer, store
//! 2. [`two_counters`] - composing a feature into a larger one, twice
//! 3. [`bindings_basics`] - two-way control bindings, one action per field
//! 4. [`bindings_form`] - the same form with a single consolidated binding
//!    action and field-specific interception
//! 5. [`optional_counter`] - showing/hiding a child feature behind optional
//!    state with `if_let` and `optional_scope`
//! 6. [`optional_value`] - optional state reduced inline, with absent-state
//!    sends defined as no-ops
//!
//! The view layer is deliberately absent: every feature here is driven and
//! verified purely through its store.

pub mod bindings_basics;
pub mod bindings_form;
pub mod counter;
pub mod optional_counter;
pub mod optional_value;
pub mod two_counters;

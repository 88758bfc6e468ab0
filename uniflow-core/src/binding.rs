//! Consolidated two-way bindings
//!
//! Instead of one bespoke action per editable field, a feature can register a
//! [`Field`] (a named getter/setter pair) for each bindable piece of state and
//! funnel every control change through a single [`BindingAction`] variant. A
//! [`BindingReducer`] applies the write generically; the feature's own reducer
//! can still intercept specific fields with [`BindingAction::applies_to`].
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct FormState { step_count: i64, text: String }
//!
//! impl FormState {
//!     const STEP_COUNT: Field<FormState, i64> =
//!         Field::new("step_count", |s| s.step_count, |s, v| s.step_count = v);
//! }
//!
//! #[derive(Clone, Debug, Action)]
//! enum FormAction {
//!     Binding(BindingAction<FormState>),
//!     Reset,
//! }
//!
//! store.send(FormAction::Binding(BindingAction::set(FormState::STEP_COUNT, 42)));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::Reducer;

/// A named getter/setter pair for one bindable field of a state type.
///
/// Fields are the explicit, reflection-free stand-in for key paths: each one
/// is declared once (typically as an associated const on the state type) and
/// reused by every control bound to that field. The name must be unique
/// within the state type; it is what [`BindingAction::applies_to`] compares.
pub struct Field<S, V> {
    name: &'static str,
    get: fn(&S) -> V,
    set: fn(&mut S, V),
}

impl<S, V> Field<S, V> {
    /// Declare a field with its unique name and accessor pair.
    pub const fn new(name: &'static str, get: fn(&S) -> V, set: fn(&mut S, V)) -> Self {
        Self { name, get, set }
    }

    /// The field's selector name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field's current value.
    #[inline]
    pub fn get(&self, state: &S) -> V {
        (self.get)(state)
    }

    /// Write a value into the field.
    #[inline]
    pub fn set(&self, state: &mut S, value: V) {
        (self.set)(state, value)
    }
}

impl<S, V> Clone for Field<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<S, V> Copy for Field<S, V> {}

/// A generic "write this value at this selector" action.
///
/// Carries the field's selector name plus a deferred write closure capturing
/// the new value, so one action variant covers every bindable field of a
/// state type. Equality compares the selector and the rendered value, which
/// is what tests and field interception need.
pub struct BindingAction<S> {
    field: &'static str,
    rendered: String,
    write: Arc<dyn Fn(&mut S) + Send + Sync>,
}

impl<S: 'static> BindingAction<S> {
    /// Build the action that sets `field` to `value`.
    pub fn set<V>(field: Field<S, V>, value: V) -> Self
    where
        V: Clone + fmt::Debug + Send + Sync + 'static,
    {
        let rendered = format!("{value:?}");
        Self {
            field: field.name,
            rendered,
            write: Arc::new(move |state| field.set(state, value.clone())),
        }
    }

    /// The selector this action writes to.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Whether this action writes the given field.
    ///
    /// This is the hook for field-specific interception inside an otherwise
    /// generic binding path.
    pub fn applies_to<V>(&self, field: &Field<S, V>) -> bool {
        self.field == field.name
    }

    /// Perform the write against the state.
    pub fn apply(&self, state: &mut S) {
        (self.write)(state)
    }
}

impl<S> Clone for BindingAction<S> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            rendered: self.rendered.clone(),
            write: Arc::clone(&self.write),
        }
    }
}

impl<S> fmt::Debug for BindingAction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingAction")
            .field("field", &self.field)
            .field("value", &self.rendered)
            .finish()
    }
}

impl<S> PartialEq for BindingAction<S> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.rendered == other.rendered
    }
}
impl<S> Eq for BindingAction<S> {}

/// Action enums that carry a consolidated binding variant.
pub trait BindableAction: Action {
    /// The state type the bindings write into.
    type State;

    /// Wrap a binding action in the enum's binding variant.
    fn binding(action: BindingAction<Self::State>) -> Self;

    /// Unwrap the binding variant, if this is one.
    fn as_binding(&self) -> Option<&BindingAction<Self::State>>;
}

/// Convenience: build the enum-wrapped action that sets `field` to `value`.
pub fn bind<A, V>(field: Field<A::State, V>, value: V) -> A
where
    A: BindableAction,
    V: Clone + fmt::Debug + Send + Sync + 'static,
{
    A::binding(BindingAction::set(field, value))
}

/// The shared reduction rule for binding actions: apply the write, nothing
/// else. Compose it before the feature's own reducer so interception sees
/// the already-updated value.
pub struct BindingReducer<S, A> {
    _marker: PhantomData<fn(&mut S, A)>,
}

impl<S, A> Default for BindingReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> BindingReducer<S, A> {
    /// Create the binding reducer.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, A> Reducer for BindingReducer<S, A>
where
    S: 'static,
    A: BindableAction<State = S>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut S, action: A) -> Effect<A> {
        if let Some(binding) = action.as_binding() {
            tracing::trace!(field = binding.field(), "Applying binding write");
            binding.apply(state);
        }
        Effect::none()
    }
}

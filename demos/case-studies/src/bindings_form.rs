//! Two-way bindings, consolidated
//!
//! The same form as [`crate::bindings_basics`], but the per-field action
//! boilerplate is gone: every bindable field registers a [`Field`] and all
//! control changes funnel through one `Binding` variant, applied by the
//! shared [`BindingReducer`]. The feature's own reducer still runs after the
//! write and intercepts the step-count field specifically, which is the
//! pattern for "do something extra when this one field changes".

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

#[derive(Clone, Debug, PartialEq)]
pub struct BindingsFormState {
    pub slider_value: f64,
    pub step_count: i64,
    pub text: String,
    pub toggle_is_on: bool,
    /// How many times the step-count interception has fired.
    pub step_count_changes: u64,
}

impl Default for BindingsFormState {
    fn default() -> Self {
        Self {
            slider_value: 5.0,
            step_count: 10,
            text: String::new(),
            toggle_is_on: false,
            step_count_changes: 0,
        }
    }
}

impl BindingsFormState {
    pub const SLIDER_VALUE: Field<BindingsFormState, f64> =
        Field::new("slider_value", |s| s.slider_value, |s, v| {
            s.slider_value = v
        });
    pub const STEP_COUNT: Field<BindingsFormState, i64> =
        Field::new("step_count", |s| s.step_count, |s, v| s.step_count = v);
    pub const TEXT: Field<BindingsFormState, String> =
        Field::new("text", |s| s.text.clone(), |s, v| s.text = v);
    pub const TOGGLE_IS_ON: Field<BindingsFormState, bool> =
        Field::new("toggle_is_on", |s| s.toggle_is_on, |s, v| {
            s.toggle_is_on = v
        });
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
pub enum BindingsFormAction {
    Binding(BindingAction<BindingsFormState>),
    ResetTapped,
}

impl BindableAction for BindingsFormAction {
    type State = BindingsFormState;

    fn binding(action: BindingAction<BindingsFormState>) -> Self {
        BindingsFormAction::Binding(action)
    }

    fn as_binding(&self) -> Option<&BindingAction<BindingsFormState>> {
        match self {
            BindingsFormAction::Binding(binding) => Some(binding),
            BindingsFormAction::ResetTapped => None,
        }
    }
}

/// Runs after [`BindingReducer`], so intercepted state already holds the new
/// value.
fn form_reducer(
    state: &mut BindingsFormState,
    action: BindingsFormAction,
) -> Effect<BindingsFormAction> {
    match action {
        BindingsFormAction::Binding(binding) => {
            if binding.applies_to(&BindingsFormState::STEP_COUNT) {
                state.step_count_changes += 1;
                tracing::info!(step_count = state.step_count, "step count changed");
            }
        }
        BindingsFormAction::ResetTapped => *state = BindingsFormState::default(),
    }
    Effect::none()
}

/// Binding write first, feature logic second.
pub fn reducer() -> CombinedReducer<BindingsFormState, BindingsFormAction> {
    CombinedReducer::new()
        .with(BindingReducer::new())
        .with(reduce_fn(form_reducer))
}

pub fn store() -> Store<BindingsFormState, BindingsFormAction> {
    Store::new(BindingsFormState::default(), reducer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_binding_writes_any_field() {
        let mut store = TestStore::new(BindingsFormState::default(), reducer());

        store.send(bind(BindingsFormState::TEXT, "hello".to_string()), |s| {
            s.text = "hello".to_string();
        });
        store.send(bind(BindingsFormState::TOGGLE_IS_ON, true), |s| {
            s.toggle_is_on = true;
        });
        store.send(bind(BindingsFormState::SLIDER_VALUE, 2.5), |s| {
            s.slider_value = 2.5;
        });
        store.finish();
    }

    #[test]
    fn test_step_count_interception_fires_exactly_once() {
        let store = store();

        store.send(bind(BindingsFormState::STEP_COUNT, 42));
        assert_eq!(store.state().step_count, 42);
        assert_eq!(store.state().step_count_changes, 1);
    }

    #[test]
    fn test_other_fields_do_not_trip_interception() {
        let store = store();

        store.send(bind(BindingsFormState::TEXT, "x".to_string()));
        store.send(bind(BindingsFormState::SLIDER_VALUE, 1.0));
        store.send(bind(BindingsFormState::TOGGLE_IS_ON, true));
        assert_eq!(store.state().step_count_changes, 0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = store();

        store.send(bind(BindingsFormState::STEP_COUNT, 99));
        store.send(bind(BindingsFormState::TEXT, "dirty".to_string()));
        store.send(BindingsFormAction::ResetTapped);

        assert_eq!(store.state(), BindingsFormState::default());
    }
}

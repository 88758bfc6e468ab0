//! Two-way bindings, the explicit way
//!
//! Two-way control bindings go against the grain of unidirectional data
//! flow: anything can mutate a bound value whenever it wants. Here every
//! control change is instead expressed as its own action, so the reducer
//! stays the single place the form evolves. The cost is one bespoke action
//! variant per field; compare with [`crate::bindings_form`], which
//! consolidates them.

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

#[derive(Clone, Debug, PartialEq)]
pub struct BindingsBasicsState {
    pub slider_value: f64,
    pub step_count: i64,
    pub text: String,
    pub toggle_is_on: bool,
}

impl Default for BindingsBasicsState {
    fn default() -> Self {
        Self {
            slider_value: 5.0,
            step_count: 10,
            text: String::new(),
            toggle_is_on: false,
        }
    }
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum BindingsBasicsAction {
    SliderValueChanged(f64),
    StepCountChanged(i64),
    TextChanged(String),
    ToggleChanged(bool),
}

pub fn reducer(
    state: &mut BindingsBasicsState,
    action: BindingsBasicsAction,
) -> Effect<BindingsBasicsAction> {
    match action {
        BindingsBasicsAction::SliderValueChanged(value) => state.slider_value = value,
        BindingsBasicsAction::StepCountChanged(count) => state.step_count = count,
        BindingsBasicsAction::TextChanged(text) => state.text = text,
        BindingsBasicsAction::ToggleChanged(is_on) => state.toggle_is_on = is_on,
    }
    Effect::none()
}

pub fn store() -> Store<BindingsBasicsState, BindingsBasicsAction> {
    Store::new(BindingsBasicsState::default(), reduce_fn(reducer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_each_field_updates_independently() {
        let mut store = TestStore::new(BindingsBasicsState::default(), reduce_fn(reducer));

        store.send(BindingsBasicsAction::TextChanged("hi".to_string()), |s| {
            s.text = "hi".to_string();
        });
        store.send(BindingsBasicsAction::ToggleChanged(true), |s| {
            s.toggle_is_on = true;
        });
        store.send(BindingsBasicsAction::SliderValueChanged(7.5), |s| {
            s.slider_value = 7.5;
        });
        store.finish();
    }

    #[test]
    fn test_defaults_match_the_form() {
        let state = BindingsBasicsState::default();
        assert_eq!(state.slider_value, 5.0);
        assert_eq!(state.step_count, 10);
        assert!(state.text.is_empty());
        assert!(!state.toggle_is_on);
    }

    #[test]
    fn test_actions_carry_field_categories() {
        assert_eq!(
            BindingsBasicsAction::SliderValueChanged(1.0).category(),
            Some("slider_value")
        );
        assert_eq!(
            BindingsBasicsAction::StepCountChanged(1).category(),
            Some("step_count")
        );
    }
}

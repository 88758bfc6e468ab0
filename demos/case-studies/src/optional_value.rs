//! Optional state without a child feature
//!
//! A leaner take on [`crate::optional_counter`]: the optional value lives
//! inline in one state struct and one reducer, with no scoping machinery at
//! all. The trade-off is that the reducer itself must handle actions that
//! arrive while the value is absent; they are ignored rather than assumed
//! impossible, so a queued tap racing a dismissal can never crash.

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OptionalValueState {
    pub value: Option<i64>,
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
pub enum OptionalValueAction {
    ToggleCounterTapped,
    Increment,
    Decrement,
}

pub fn reducer(
    state: &mut OptionalValueState,
    action: OptionalValueAction,
) -> Effect<OptionalValueAction> {
    match action {
        OptionalValueAction::ToggleCounterTapped => {
            state.value = match state.value {
                Some(_) => None,
                None => Some(0),
            };
        }
        OptionalValueAction::Increment => {
            if let Some(value) = &mut state.value {
                *value += 1;
            } else {
                tracing::warn!("increment while the counter is hidden; ignoring");
            }
        }
        OptionalValueAction::Decrement => {
            if let Some(value) = &mut state.value {
                *value -= 1;
            } else {
                tracing::warn!("decrement while the counter is hidden; ignoring");
            }
        }
    }
    Effect::none()
}

pub fn store() -> Store<OptionalValueState, OptionalValueAction> {
    Store::new(OptionalValueState::default(), reduce_fn(reducer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniflow::testing::TestStore;

    #[test]
    fn test_toggle_flips_between_zero_and_hidden() {
        let mut store = TestStore::new(OptionalValueState::default(), reduce_fn(reducer));

        store.send(OptionalValueAction::ToggleCounterTapped, |s| {
            s.value = Some(0);
        });
        store.send(OptionalValueAction::Increment, |s| s.value = Some(1));
        store.send(OptionalValueAction::ToggleCounterTapped, |s| s.value = None);
        store.send(OptionalValueAction::ToggleCounterTapped, |s| {
            s.value = Some(0);
        });
        store.finish();
    }

    #[test]
    fn test_counting_while_hidden_is_ignored() {
        let mut store = TestStore::new(OptionalValueState::default(), reduce_fn(reducer));

        store.send(OptionalValueAction::Increment, |_| {});
        store.send(OptionalValueAction::Decrement, |_| {});
        store.finish();
    }

    #[test]
    fn test_count_survives_only_while_shown() {
        let store = store();

        store.send(OptionalValueAction::ToggleCounterTapped);
        store.send(OptionalValueAction::Increment);
        store.send(OptionalValueAction::Increment);
        store.send(OptionalValueAction::Decrement);
        assert_eq!(store.state().value, Some(1));

        store.send(OptionalValueAction::ToggleCounterTapped);
        store.send(OptionalValueAction::ToggleCounterTapped);
        assert_eq!(store.state().value, Some(0));
    }
}

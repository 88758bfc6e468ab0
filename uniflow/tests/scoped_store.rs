//! End-to-end tests for store scoping and binding consolidation through the
//! public facade.

use uniflow::prelude::*;
use uniflow::Action as ActionMacro;

#[derive(Clone, Debug, Default, PartialEq)]
struct CounterState {
    count: i64,
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
enum CounterAction {
    Increment,
    Decrement,
}

fn counter(state: &mut CounterState, action: CounterAction) -> Effect<CounterAction> {
    match action {
        CounterAction::Increment => state.count += 1,
        CounterAction::Decrement => state.count -= 1,
    }
    Effect::none()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct AppState {
    counter1: CounterState,
    counter2: CounterState,
    form: FormState,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct FormState {
    step_count: i64,
    text: String,
    step_interceptions: u64,
}

impl FormState {
    const STEP_COUNT: Field<FormState, i64> =
        Field::new("step_count", |s| s.step_count, |s, v| s.step_count = v);
    const TEXT: Field<FormState, String> = Field::new("text", |s| s.text.clone(), |s, v| s.text = v);
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
enum AppAction {
    Counter1(CounterAction),
    Counter2(CounterAction),
    Form(FormAction),
}

#[derive(ActionMacro, Clone, Debug, PartialEq)]
enum FormAction {
    Binding(BindingAction<FormState>),
}

impl BindableAction for FormAction {
    type State = FormState;

    fn binding(action: BindingAction<FormState>) -> Self {
        FormAction::Binding(action)
    }

    fn as_binding(&self) -> Option<&BindingAction<FormState>> {
        let FormAction::Binding(binding) = self;
        Some(binding)
    }
}

const COUNTER1: StateLens<AppState, CounterState> =
    StateLens::new(|s| &s.counter1, |s| &mut s.counter1);
const COUNTER2: StateLens<AppState, CounterState> =
    StateLens::new(|s| &s.counter2, |s| &mut s.counter2);
const FORM: StateLens<AppState, FormState> = StateLens::new(|s| &s.form, |s| &mut s.form);

const COUNTER1_ACTION: Prism<AppAction, CounterAction> = Prism::new(
    |a| match a {
        AppAction::Counter1(c) => Ok(c),
        other => Err(other),
    },
    AppAction::Counter1,
);
const COUNTER2_ACTION: Prism<AppAction, CounterAction> = Prism::new(
    |a| match a {
        AppAction::Counter2(c) => Ok(c),
        other => Err(other),
    },
    AppAction::Counter2,
);
const FORM_ACTION: Prism<AppAction, FormAction> = Prism::new(
    |a| match a {
        AppAction::Form(f) => Ok(f),
        other => Err(other),
    },
    AppAction::Form,
);

fn form_reducer(state: &mut FormState, action: FormAction) -> Effect<FormAction> {
    let FormAction::Binding(binding) = &action;
    if binding.applies_to(&FormState::STEP_COUNT) {
        state.step_interceptions += 1;
    }
    Effect::none()
}

fn app_store() -> Store<AppState, AppAction> {
    let reducer = CombinedReducer::new()
        .with(Scope::new(COUNTER1, COUNTER1_ACTION, reduce_fn(counter)))
        .with(Scope::new(COUNTER2, COUNTER2_ACTION, reduce_fn(counter)))
        .with(Scope::new(
            FORM,
            FORM_ACTION,
            CombinedReducer::new()
                .with(BindingReducer::new())
                .with(reduce_fn(form_reducer)),
        ));
    Store::new(AppState::default(), reducer)
}

#[test]
fn test_two_scoped_counters_are_independent() {
    let store = app_store();
    let first = store.scope(|s: &AppState| &s.counter1, AppAction::Counter1);
    let second = store.scope(|s: &AppState| &s.counter2, AppAction::Counter2);

    first.send(CounterAction::Increment);
    first.send(CounterAction::Increment);
    second.send(CounterAction::Decrement);

    assert_eq!(first.state().count, 2);
    assert_eq!(second.state().count, -1);
}

#[test]
fn test_scoped_reads_are_live() {
    let store = app_store();
    let first = store.scope(|s: &AppState| &s.counter1, AppAction::Counter1);

    store.send(AppAction::Counter1(CounterAction::Increment));
    assert_eq!(first.state().count, 1);

    first.send(CounterAction::Increment);
    assert_eq!(store.state().counter1.count, 2);
}

#[test]
fn test_binding_writes_and_intercepts_through_scope() {
    let store = app_store();
    let form = store.scope(|s: &AppState| &s.form, AppAction::Form);

    form.send(bind(FormState::STEP_COUNT, 42));
    assert_eq!(form.state().step_count, 42);
    assert_eq!(form.state().step_interceptions, 1);

    // Writes to other fields do not trip the step-count interception.
    form.send(bind(FormState::TEXT, "hello".to_string()));
    assert_eq!(form.state().text, "hello");
    assert_eq!(form.state().step_interceptions, 1);
}

//! Reducers and the combinators that compose them
//!
//! A [`Reducer`] maps `(state, action)` to new state, in place, plus an
//! [`Effect`] of follow-up actions. Small feature reducers compose into larger
//! ones with:
//!
//! - [`Scope`]: run a child reducer on one slice of parent state, fed by one
//!   variant of the parent action enum
//! - [`CombinedReducer`]: run an ordered list of reducers over the same domain
//! - [`IfLet`] (via [`Reducer::if_let`]): run a child reducer only while an
//!   optional slice is present
//!
//! Each child reduction only ever touches its own slice; siblings composed
//! with `Scope` cannot observe or mutate each other.

use std::marker::PhantomData;

use crate::action::Action;
use crate::effect::Effect;
use crate::lens::{OptionLens, Prism, StateLens};

/// A pure state transition: `(state, action) -> state + follow-ups`.
///
/// The mutation happens in place through `&mut`, which is this crate's
/// representation of the value-to-value contract. A reducer must not read
/// anything but its inputs and must not perform work beyond the mutation;
/// side requests are declared through the returned [`Effect`].
pub trait Reducer {
    /// The state slice this reducer owns.
    type State;
    /// The actions this reducer understands.
    type Action: Action;

    /// Apply one action to the state.
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effect<Self::Action>;

    /// Attach a child reducer over an optional slice of this reducer's state.
    ///
    /// While the slice is present, matching child actions are delegated to
    /// `child` (before this reducer runs, so a child can react to the same
    /// delivery that dismisses it). While the slice is absent, matching child
    /// actions are a no-op. In both cases this reducer still sees every
    /// action.
    fn if_let<C>(
        self,
        state: OptionLens<Self::State, C::State>,
        action: Prism<Self::Action, C::Action>,
        child: C,
    ) -> IfLet<Self, C>
    where
        Self: Sized,
        C: Reducer,
    {
        IfLet {
            parent: self,
            child,
            state,
            action,
        }
    }
}

/// Adapter turning a plain function (or non-capturing closure) into a [`Reducer`].
///
/// Built with [`reduce_fn`]; lets a feature keep its reducer as a free
/// `fn reduce(state, action)`.
pub struct FnReducer<S, A, F> {
    f: F,
    _marker: PhantomData<fn(&mut S, A)>,
}

/// Wrap a function as a [`Reducer`].
pub fn reduce_fn<S, A, F>(f: F) -> FnReducer<S, A, F>
where
    A: Action,
    F: Fn(&mut S, A) -> Effect<A>,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<S, A, F>
where
    A: Action,
    F: Fn(&mut S, A) -> Effect<A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut S, action: A) -> Effect<A> {
        (self.f)(state, action)
    }
}

/// Run a child reducer on one slice of parent state.
///
/// Actions not matching the prism are ignored; matching actions are reduced
/// against the lensed slice, and the child's follow-ups are embedded back
/// into the parent action enum.
pub struct Scope<R, P, PA>
where
    R: Reducer,
{
    child: R,
    state: StateLens<P, R::State>,
    action: Prism<PA, R::Action>,
}

impl<R, P, PA> Scope<R, P, PA>
where
    R: Reducer,
{
    /// Scope `child` over the given state slice and action variant.
    pub fn new(
        state: StateLens<P, R::State>,
        action: Prism<PA, R::Action>,
        child: R,
    ) -> Self {
        Self {
            child,
            state,
            action,
        }
    }
}

impl<R, P, PA> Reducer for Scope<R, P, PA>
where
    R: Reducer,
    PA: Action,
{
    type State = P;
    type Action = PA;

    fn reduce(&self, state: &mut P, action: PA) -> Effect<PA> {
        match self.action.extract(action) {
            Ok(child_action) => self
                .child
                .reduce(self.state.get_mut(state), child_action)
                .map(|a| self.action.embed(a)),
            Err(_) => Effect::none(),
        }
    }
}

/// An ordered list of reducers over the same state/action domain.
///
/// Each reducer sees every action, in registration order; follow-up effects
/// are concatenated in the same order. The usual shape is one [`Scope`] per
/// child feature plus a `reduce_fn` for the parent's own variants.
pub struct CombinedReducer<S, A> {
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
}

impl<S, A: Action> Default for CombinedReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A: Action> CombinedReducer<S, A> {
    /// Create an empty combination.
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    /// Append a reducer, builder style.
    pub fn with(mut self, reducer: impl Reducer<State = S, Action = A> + 'static) -> Self {
        self.reducers.push(Box::new(reducer));
        self
    }

    /// Append a reducer.
    pub fn push(&mut self, reducer: impl Reducer<State = S, Action = A> + 'static) {
        self.reducers.push(Box::new(reducer));
    }
}

impl<S, A: Action> Reducer for CombinedReducer<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut S, action: A) -> Effect<A> {
        let mut effect = Effect::none();
        for reducer in &self.reducers {
            effect = effect.merge(reducer.reduce(state, action.clone()));
        }
        effect
    }
}

/// A parent reducer with a child mounted over an optional state slice.
///
/// Built with [`Reducer::if_let`]. The child runs first, and only while its
/// slice is present; a matching child action arriving while the slice is
/// absent is dropped without touching state.
pub struct IfLet<R, C>
where
    R: Reducer,
    C: Reducer,
{
    parent: R,
    child: C,
    state: OptionLens<R::State, C::State>,
    action: Prism<R::Action, C::Action>,
}

impl<R, C> Reducer for IfLet<R, C>
where
    R: Reducer,
    C: Reducer,
{
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: &mut R::State, action: R::Action) -> Effect<R::Action> {
        let child_effect = match self.action.extract(action.clone()) {
            Ok(child_action) => match self.state.get_mut(state) {
                Some(slice) => self
                    .child
                    .reduce(slice, child_action)
                    .map(|a| self.action.embed(a)),
                None => {
                    tracing::warn!(
                        action = %action.name(),
                        "child action received while optional state is absent; ignoring"
                    );
                    Effect::none()
                }
            },
            Err(_) => Effect::none(),
        };
        child_effect.merge(self.parent.reduce(state, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Counter {
        count: i64,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum CounterAction {
        Increment,
        Decrement,
    }

    impl Action for CounterAction {
        fn name(&self) -> &'static str {
            match self {
                CounterAction::Increment => "Increment",
                CounterAction::Decrement => "Decrement",
            }
        }
    }

    fn counter_reducer(state: &mut Counter, action: CounterAction) -> Effect<CounterAction> {
        match action {
            CounterAction::Increment => state.count += 1,
            CounterAction::Decrement => state.count -= 1,
        }
        Effect::none()
    }

    #[derive(Debug, Default, PartialEq)]
    struct Pair {
        first: Counter,
        second: Counter,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum PairAction {
        First(CounterAction),
        Second(CounterAction),
    }

    impl Action for PairAction {
        fn name(&self) -> &'static str {
            match self {
                PairAction::First(_) => "First",
                PairAction::Second(_) => "Second",
            }
        }
    }

    const FIRST: StateLens<Pair, Counter> = StateLens::new(|p| &p.first, |p| &mut p.first);
    const SECOND: StateLens<Pair, Counter> = StateLens::new(|p| &p.second, |p| &mut p.second);
    const FIRST_ACTION: Prism<PairAction, CounterAction> = Prism::new(
        |a| match a {
            PairAction::First(c) => Ok(c),
            other => Err(other),
        },
        PairAction::First,
    );
    const SECOND_ACTION: Prism<PairAction, CounterAction> = Prism::new(
        |a| match a {
            PairAction::Second(c) => Ok(c),
            other => Err(other),
        },
        PairAction::Second,
    );

    fn pair_reducer() -> CombinedReducer<Pair, PairAction> {
        CombinedReducer::new()
            .with(Scope::new(FIRST, FIRST_ACTION, reduce_fn(counter_reducer)))
            .with(Scope::new(SECOND, SECOND_ACTION, reduce_fn(counter_reducer)))
    }

    #[test]
    fn test_scope_routes_to_own_slice() {
        let reducer = pair_reducer();
        let mut state = Pair::default();

        reducer.reduce(&mut state, PairAction::First(CounterAction::Increment));
        reducer.reduce(&mut state, PairAction::First(CounterAction::Increment));
        reducer.reduce(&mut state, PairAction::Second(CounterAction::Decrement));

        assert_eq!(state.first.count, 2);
        assert_eq!(state.second.count, -1);
    }

    #[test]
    fn test_siblings_are_independent() {
        let reducer = pair_reducer();
        let mut state = Pair::default();

        for _ in 0..5 {
            reducer.reduce(&mut state, PairAction::First(CounterAction::Increment));
        }
        assert_eq!(state.second, Counter::default());
    }

    #[derive(Debug, Default, PartialEq)]
    struct Outer {
        inner: Option<Counter>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum OuterAction {
        Toggle,
        Inner(CounterAction),
    }

    impl Action for OuterAction {
        fn name(&self) -> &'static str {
            match self {
                OuterAction::Toggle => "Toggle",
                OuterAction::Inner(_) => "Inner",
            }
        }
    }

    const INNER: OptionLens<Outer, Counter> =
        OptionLens::new(|o| o.inner.as_ref(), |o| o.inner.as_mut());
    const INNER_ACTION: Prism<OuterAction, CounterAction> = Prism::new(
        |a| match a {
            OuterAction::Inner(c) => Ok(c),
            other => Err(other),
        },
        OuterAction::Inner,
    );

    fn outer_reducer() -> impl Reducer<State = Outer, Action = OuterAction> {
        reduce_fn(|state: &mut Outer, action: OuterAction| {
            if let OuterAction::Toggle = action {
                state.inner = match state.inner {
                    Some(_) => None,
                    None => Some(Counter::default()),
                };
            }
            Effect::none()
        })
        .if_let(INNER, INNER_ACTION, reduce_fn(counter_reducer))
    }

    #[test]
    fn test_if_let_delegates_when_present() {
        let reducer = outer_reducer();
        let mut state = Outer {
            inner: Some(Counter::default()),
        };

        reducer.reduce(&mut state, OuterAction::Inner(CounterAction::Increment));
        assert_eq!(state.inner, Some(Counter { count: 1 }));
    }

    #[test]
    fn test_if_let_noop_when_absent() {
        let reducer = outer_reducer();
        let mut state = Outer::default();

        reducer.reduce(&mut state, OuterAction::Inner(CounterAction::Increment));
        assert_eq!(state, Outer::default());
    }

    #[test]
    fn test_toggle_reseeds_default() {
        let reducer = outer_reducer();
        let mut state = Outer::default();

        reducer.reduce(&mut state, OuterAction::Toggle);
        reducer.reduce(&mut state, OuterAction::Inner(CounterAction::Increment));
        assert_eq!(state.inner, Some(Counter { count: 1 }));

        reducer.reduce(&mut state, OuterAction::Toggle);
        assert_eq!(state.inner, None);

        reducer.reduce(&mut state, OuterAction::Toggle);
        assert_eq!(state.inner, Some(Counter { count: 0 }));
    }
}

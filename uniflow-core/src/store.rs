//! Centralized state store with reducer pattern
//!
//! A [`Store`] owns one state value and one reducer, and is the single point
//! through which that state changes. Handles are cheap clones over shared
//! ownership; [`Store::scope`] and [`Store::optional_scope`] derive child
//! handles that read a live view of the parent's state and forward their
//! actions back into the parent, so a child feature never knows the parent
//! exists.
//!
//! Dispatch is single-threaded and run-to-completion: a `send` reduces, then
//! notifies observers, then drains any follow-up actions queued by the
//! reduction's [`Effect`]. No two reductions for the same store interleave,
//! and state is never observable mid-reduction.
//!
//! # Example
//! ```ignore
//! let store = Store::new(CounterState::default(), reduce_fn(counter_reducer));
//! store.send(CounterAction::Increment);
//! assert_eq!(store.state().count, 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducer::Reducer;

/// Handle returned by [`Store::observe`], used to unregister the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Object-safe surface shared by the root store and its scoped projections.
trait StoreCore<S, A> {
    fn send(&self, action: A);
    /// Calls `f` with the current state; returns false when an optional
    /// slice is absent (in which case `f` is not called).
    fn read(&self, f: &mut dyn FnMut(&S)) -> bool;
    fn observe(&self, callback: Rc<dyn Fn(&S)>) -> ObserverId;
    fn unobserve(&self, id: ObserverId);
}

struct RootCore<S, A: Action> {
    state: RefCell<S>,
    reducer: Box<dyn Reducer<State = S, Action = A>>,
    middleware: RefCell<Box<dyn Middleware<A>>>,
    observers: RefCell<Vec<(ObserverId, Rc<dyn Fn(&S)>)>>,
    next_observer: Cell<u64>,
    /// Actions waiting for the current drain loop; sends that arrive while a
    /// dispatch is in flight (e.g. from an observer) land here.
    queue: RefCell<VecDeque<A>>,
    sending: Cell<bool>,
}

impl<S: 'static, A: Action> RootCore<S, A> {
    fn notify(&self) {
        // Snapshot the observer list so a callback may observe/unobserve.
        let observers: Vec<Rc<dyn Fn(&S)>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        let state = self.state.borrow();
        for callback in observers {
            callback(&state);
        }
    }

    fn process(&self, action: A) {
        self.middleware.borrow_mut().before(&action);
        let effect = {
            let mut state = self.state.borrow_mut();
            self.reducer.reduce(&mut state, action.clone())
        };
        self.middleware.borrow_mut().after(&action, &effect);
        self.queue.borrow_mut().extend(effect.into_actions());
        self.notify();
    }
}

impl<S: 'static, A: Action> StoreCore<S, A> for RootCore<S, A> {
    fn send(&self, action: A) {
        self.queue.borrow_mut().push_back(action);
        if self.sending.get() {
            // Already draining further up the call stack.
            return;
        }
        self.sending.set(true);
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(action) => self.process(action),
                None => break,
            }
        }
        self.sending.set(false);
    }

    fn read(&self, f: &mut dyn FnMut(&S)) -> bool {
        f(&self.state.borrow());
        true
    }

    fn observe(&self, callback: Rc<dyn Fn(&S)>) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, callback));
        id
    }

    fn unobserve(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(oid, _)| *oid != id);
    }
}

/// Projection of a parent store onto one always-present child slice.
struct ScopedCore<P, C, PA, CA> {
    parent: Rc<dyn StoreCore<P, PA>>,
    state: fn(&P) -> &C,
    embed: fn(CA) -> PA,
}

impl<P: 'static, C: 'static, PA, CA> StoreCore<C, CA> for ScopedCore<P, C, PA, CA> {
    fn send(&self, action: CA) {
        self.parent.send((self.embed)(action));
    }

    fn read(&self, f: &mut dyn FnMut(&C)) -> bool {
        let state = self.state;
        self.parent.read(&mut |p| f(state(p)))
    }

    fn observe(&self, callback: Rc<dyn Fn(&C)>) -> ObserverId {
        let state = self.state;
        self.parent.observe(Rc::new(move |p| callback(state(p))))
    }

    fn unobserve(&self, id: ObserverId) {
        self.parent.unobserve(id);
    }
}

/// Projection onto a child slice that may be absent.
///
/// Sends are dropped (with a warning) while the slice is absent; reads
/// report absence instead of panicking.
struct OptionalScopedCore<P, C, PA, CA> {
    parent: Rc<dyn StoreCore<P, PA>>,
    state: fn(&P) -> Option<&C>,
    embed: fn(CA) -> PA,
}

impl<P, C, PA, CA: Action> OptionalScopedCore<P, C, PA, CA> {
    fn is_present(&self) -> bool {
        let state = self.state;
        let mut present = false;
        self.parent.read(&mut |p| present = state(p).is_some());
        present
    }
}

impl<P: 'static, C: 'static, PA, CA: Action> StoreCore<C, CA> for OptionalScopedCore<P, C, PA, CA> {
    fn send(&self, action: CA) {
        if !self.is_present() {
            tracing::warn!(
                action = %action.name(),
                "send on a scoped store whose state is absent; ignoring"
            );
            return;
        }
        self.parent.send((self.embed)(action));
    }

    fn read(&self, f: &mut dyn FnMut(&C)) -> bool {
        let state = self.state;
        let mut present = false;
        self.parent.read(&mut |p| {
            if let Some(c) = state(p) {
                present = true;
                f(c);
            }
        });
        present
    }

    fn observe(&self, callback: Rc<dyn Fn(&C)>) -> ObserverId {
        let state = self.state;
        self.parent.observe(Rc::new(move |p| {
            if let Some(c) = state(p) {
                callback(c);
            }
        }))
    }

    fn unobserve(&self, id: ObserverId) {
        self.parent.unobserve(id);
    }
}

/// Runtime holder of one state value + one reducer.
///
/// `Store` is a cheap handle (`Clone` shares the same underlying state); it
/// lives from feature mount to unmount and dies when the last handle drops.
/// All mutation goes through [`send`](Store::send); reads go through
/// [`state`](Store::state) / [`with_state`](Store::with_state); views re-render
/// via [`observe`](Store::observe).
pub struct Store<S, A> {
    core: Rc<dyn StoreCore<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<S: 'static, A: Action> Store<S, A> {
    /// Create a store with initial state and reducer.
    pub fn new(state: S, reducer: impl Reducer<State = S, Action = A> + 'static) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }

    /// Create a store whose dispatches pass through `middleware`.
    ///
    /// Use [`ComposedMiddleware`] to attach more than one.
    pub fn with_middleware(
        state: S,
        reducer: impl Reducer<State = S, Action = A> + 'static,
        middleware: impl Middleware<A> + 'static,
    ) -> Self {
        Self {
            core: Rc::new(RootCore {
                state: RefCell::new(state),
                reducer: Box::new(reducer),
                middleware: RefCell::new(Box::new(middleware)),
                observers: RefCell::new(Vec::new()),
                next_observer: Cell::new(0),
                queue: RefCell::new(VecDeque::new()),
                sending: Cell::new(false),
            }),
        }
    }

    /// Send an action: reduce, replace state, notify observers, then process
    /// any follow-up actions the reduction enqueued.
    pub fn send(&self, action: A) {
        self.core.send(action);
    }

    /// Read the current state through a closure, without cloning.
    ///
    /// # Panics
    ///
    /// Panics on a handle from [`optional_scope`](Store::optional_scope)
    /// whose slice has since become absent; use
    /// [`try_with_state`](Store::try_with_state) on such handles.
    pub fn with_state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        self.try_with_state(f)
            .unwrap_or_else(|| panic!("state read through a scoped store whose state is absent"))
    }

    /// Read the current state through a closure; `None` when an optional
    /// slice is absent.
    pub fn try_with_state<T>(&self, f: impl FnOnce(&S) -> T) -> Option<T> {
        let mut f = Some(f);
        let mut out = None;
        self.core.read(&mut |s| {
            if let Some(f) = f.take() {
                out = Some(f(s));
            }
        });
        out
    }

    /// Clone a snapshot of the current state.
    ///
    /// # Panics
    ///
    /// Same as [`with_state`](Store::with_state).
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.with_state(S::clone)
    }

    /// Clone a snapshot of the current state; `None` when an optional slice
    /// is absent.
    pub fn try_state(&self) -> Option<S>
    where
        S: Clone,
    {
        self.try_with_state(S::clone)
    }

    /// Register a callback fired after each state replacement, with the new
    /// state. On scoped handles the callback sees the projected slice and is
    /// skipped while an optional slice is absent.
    pub fn observe(&self, callback: impl Fn(&S) + 'static) -> ObserverId {
        self.core.observe(Rc::new(callback))
    }

    /// Remove a previously registered observer.
    pub fn unobserve(&self, id: ObserverId) {
        self.core.unobserve(id);
    }

    /// Derive a child store over one slice of this store's state.
    ///
    /// The child handle holds no state of its own: every read goes through
    /// the parent's current value, and every send is routed through `action`
    /// into the parent's dispatch.
    pub fn scope<C: 'static, CA: Action>(
        &self,
        state: fn(&S) -> &C,
        action: fn(CA) -> A,
    ) -> Store<C, CA> {
        Store {
            core: Rc::new(ScopedCore {
                parent: Rc::clone(&self.core),
                state,
                embed: action,
            }),
        }
    }

    /// Derive a child store over an optional slice, or `None` if the slice
    /// is currently absent.
    ///
    /// A caller that gets `None` renders its fallback and has no handle to
    /// send on. A retained handle outliving the slice keeps working in a
    /// degraded, defined way: sends are dropped and `try_state` reads `None`.
    pub fn optional_scope<C: 'static, CA: Action>(
        &self,
        state: fn(&S) -> Option<&C>,
        action: fn(CA) -> A,
    ) -> Option<Store<C, CA>> {
        let core = OptionalScopedCore {
            parent: Rc::clone(&self.core),
            state,
            embed: action,
        };
        if !core.is_present() {
            return None;
        }
        Some(Store {
            core: Rc::new(core),
        })
    }
}

/// Middleware trait for intercepting dispatches
///
/// Implement this trait to add logging, recording, or other cross-cutting
/// concerns around the reducer.
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer returns, with the effect it produced
    fn after(&mut self, action: &A, effect: &Effect<A>);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _effect: &Effect<A>) {}
}

/// Middleware that logs actions (for debugging)
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Create a new logging middleware with default settings (log after only)
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Sending action");
        }
    }

    fn after(&mut self, action: &A, effect: &Effect<A>) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                followups = effect.actions().len(),
                "Action processed"
            );
        }
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> std::fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    /// Create a new composed middleware
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }

    /// Add a middleware, builder style
    pub fn with<M: Middleware<A> + 'static>(mut self, middleware: M) -> Self {
        self.add(middleware);
        self
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, effect: &Effect<A>) {
        // Call in reverse order for proper nesting
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, effect);
        }
    }
}

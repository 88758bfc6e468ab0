//! Follow-up actions produced by a reduction
//!
//! A reducer returns an [`Effect`] alongside its state mutation. The effect is
//! a declarative list of actions to feed back into the store once the current
//! reduction has returned, never work performed inline. Every tutorial case
//! study returns [`Effect::none`]; the slot exists so a feature can later
//! enqueue follow-ups without changing the reducer contract.
//!
//! # Example
//!
//! ```ignore
//! fn reduce(state: &mut State, action: AppAction) -> Effect<AppAction> {
//!     match action {
//!         AppAction::Refresh => {
//!             state.refreshing = true;
//!             Effect::send(AppAction::RefreshStarted)
//!         }
//!         AppAction::RefreshStarted => Effect::none(),
//!     }
//! }
//! ```

/// Zero or more follow-up actions to process after a reduction returns.
///
/// Follow-ups are queued by the store and processed run-to-completion, so a
/// reduction never observes state mid-mutation from its own effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect<A> {
    actions: Vec<A>,
}

impl<A> Default for Effect<A> {
    fn default() -> Self {
        Self::none()
    }
}

impl<A> Effect<A> {
    /// An effect that enqueues nothing.
    #[inline]
    pub fn none() -> Self {
        Self { actions: vec![] }
    }

    /// Enqueue a single follow-up action.
    #[inline]
    pub fn send(action: A) -> Self {
        Self {
            actions: vec![action],
        }
    }

    /// Enqueue several follow-up actions, processed in order.
    #[inline]
    pub fn batch(actions: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Append a follow-up action to this effect.
    #[inline]
    pub fn with(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns true if no follow-up actions were enqueued.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.actions.is_empty()
    }

    /// The queued follow-up actions, in processing order.
    #[inline]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Consume the effect, yielding its follow-up actions.
    #[inline]
    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }

    /// Re-wrap each follow-up action, embedding a child effect into a parent
    /// action space. Used by scoping combinators.
    #[inline]
    pub fn map<B>(self, f: impl Fn(A) -> B) -> Effect<B> {
        Effect {
            actions: self.actions.into_iter().map(f).collect(),
        }
    }

    /// Merge another effect's follow-ups after this one's.
    #[inline]
    pub fn merge(mut self, other: Effect<A>) -> Self {
        self.actions.extend(other.actions);
        self
    }
}

//! Lenses and prisms for slicing state and routing actions
//!
//! These are the plumbing behind reducer composition and store scoping: a
//! [`StateLens`] focuses a parent state value on one child slice, an
//! [`OptionLens`] focuses on a slice that may be absent, and a [`Prism`]
//! extracts a child action out of a parent action enum (and embeds child
//! actions back for follow-up routing).
//!
//! All three hold plain `fn` pointers, so a feature defines them as consts:
//!
//! ```ignore
//! const COUNTER1: StateLens<AppState, CounterState> =
//!     StateLens::new(|s| &s.counter1, |s| &mut s.counter1);
//!
//! const COUNTER1_ACTION: Prism<AppAction, CounterAction> = Prism::new(
//!     |a| match a {
//!         AppAction::Counter1(child) => Ok(child),
//!         other => Err(other),
//!     },
//!     AppAction::Counter1,
//! );
//! ```

/// A read/write focus on one child slice of a parent state.
pub struct StateLens<P, C> {
    get: fn(&P) -> &C,
    get_mut: fn(&mut P) -> &mut C,
}

impl<P, C> StateLens<P, C> {
    /// Create a lens from a getter pair.
    pub const fn new(get: fn(&P) -> &C, get_mut: fn(&mut P) -> &mut C) -> Self {
        Self { get, get_mut }
    }

    /// Borrow the child slice.
    #[inline]
    pub fn get<'a>(&self, parent: &'a P) -> &'a C {
        (self.get)(parent)
    }

    /// Mutably borrow the child slice.
    #[inline]
    pub fn get_mut<'a>(&self, parent: &'a mut P) -> &'a mut C {
        (self.get_mut)(parent)
    }
}

// Manual impls: derived Clone/Copy would bound P and C.
impl<P, C> Clone for StateLens<P, C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, C> Copy for StateLens<P, C> {}

/// A read/write focus on a child slice that may be absent.
pub struct OptionLens<P, C> {
    get: fn(&P) -> Option<&C>,
    get_mut: fn(&mut P) -> Option<&mut C>,
}

impl<P, C> OptionLens<P, C> {
    /// Create a lens from a getter pair.
    pub const fn new(get: fn(&P) -> Option<&C>, get_mut: fn(&mut P) -> Option<&mut C>) -> Self {
        Self { get, get_mut }
    }

    /// Borrow the child slice, if present.
    #[inline]
    pub fn get<'a>(&self, parent: &'a P) -> Option<&'a C> {
        (self.get)(parent)
    }

    /// Mutably borrow the child slice, if present.
    #[inline]
    pub fn get_mut<'a>(&self, parent: &'a mut P) -> Option<&'a mut C> {
        (self.get_mut)(parent)
    }
}

impl<P, C> Clone for OptionLens<P, C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<P, C> Copy for OptionLens<P, C> {}

/// A two-way mapping between a parent action enum and one child action type.
///
/// `extract` consumes the parent action and returns the child action when the
/// variant matches, or gives the parent action back untouched when it does
/// not. `embed` wraps a child action in the matching parent variant.
pub struct Prism<PA, CA> {
    extract: fn(PA) -> Result<CA, PA>,
    embed: fn(CA) -> PA,
}

impl<PA, CA> Prism<PA, CA> {
    /// Create a prism from an extract/embed pair.
    pub const fn new(extract: fn(PA) -> Result<CA, PA>, embed: fn(CA) -> PA) -> Self {
        Self { extract, embed }
    }

    /// Try to pull a child action out of a parent action.
    #[inline]
    pub fn extract(&self, parent: PA) -> Result<CA, PA> {
        (self.extract)(parent)
    }

    /// Wrap a child action back into the parent enum.
    #[inline]
    pub fn embed(&self, child: CA) -> PA {
        (self.embed)(child)
    }
}

impl<PA, CA> Clone for Prism<PA, CA> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<PA, CA> Copy for Prism<PA, CA> {}

//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be sent to a store
///
/// Actions describe "what happened". They should be:
/// - Clone: Actions may be logged, replayed, or re-enqueued as follow-ups
/// - Debug: For debugging and logging
/// - Send + 'static: So follow-up actions can cross task boundaries
///
/// Use `#[derive(Action)]` from `uniflow-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Actions that can be grouped into categories
///
/// Implemented automatically by `#[derive(Action)]` with
/// `#[action(infer_categories)]`. Categories group related variants
/// (e.g. `Counter1Increment` and `Counter1Decrement` share `"counter1"`),
/// which the test harness and action log can filter on.
pub trait ActionCategory: Action {
    /// The generated category enum type
    type Category: Copy + Debug + Eq;

    /// Get the action's category name, if categorized
    fn category(&self) -> Option<&'static str>;

    /// Get the category as an enum value
    fn category_enum(&self) -> Self::Category;
}

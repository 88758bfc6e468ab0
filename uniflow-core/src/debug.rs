//! Action logging with pattern-based filtering and in-memory storage
//!
//! Configurable action logging using glob patterns to include/exclude
//! specific actions. Logs via `tracing` and can additionally keep an
//! in-memory ring buffer of recent dispatches, exportable as JSON for
//! inspection outside the process.
//!
//! # Example
//!
//! ```ignore
//! use uniflow_core::debug::{ActionLogConfig, ActionLoggerConfig, ActionLoggerMiddleware};
//!
//! // Log all actions except Tick (tracing only)
//! let middleware = ActionLoggerMiddleware::new(ActionLoggerConfig::default());
//!
//! // Log with in-memory storage
//! let middleware = ActionLoggerMiddleware::with_log(ActionLogConfig::default());
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;

use crate::action::Action;
use crate::effect::Effect;
use crate::store::Middleware;

/// Configuration for action logging with glob pattern filtering.
///
/// Patterns support:
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - Literal text matches exactly
///
/// # Examples
///
/// - `Counter*` matches Counter1Increment, Counter2Decrement, etc.
/// - `*Binding*` matches any action containing "Binding"
/// - `Tick` matches only Tick
#[derive(Debug, Clone)]
pub struct ActionLoggerConfig {
    /// If non-empty, only log actions matching these patterns
    pub include_patterns: Vec<String>,
    /// Exclude actions matching these patterns (applied after include)
    pub exclude_patterns: Vec<String>,
}

impl Default for ActionLoggerConfig {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            // By default, exclude noisy high-frequency actions
            exclude_patterns: vec!["Tick".to_string()],
        }
    }
}

impl ActionLoggerConfig {
    /// Create a config from comma-separated pattern strings
    ///
    /// # Example
    /// ```
    /// use uniflow_core::debug::ActionLoggerConfig;
    ///
    /// let config = ActionLoggerConfig::new(Some("Counter*,Toggle"), Some("Tick"));
    /// assert!(config.should_log("Counter1Increment"));
    /// assert!(config.should_log("Toggle"));
    /// assert!(!config.should_log("Tick"));
    /// ```
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        let include_patterns = include
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_default();

        let exclude_patterns = exclude
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(|| vec!["Tick".to_string()]);

        Self {
            include_patterns,
            exclude_patterns,
        }
    }

    /// Create a config with specific pattern vectors
    pub fn with_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include_patterns: include,
            exclude_patterns: exclude,
        }
    }

    /// Check if an action name should be logged based on include/exclude patterns
    pub fn should_log(&self, action_name: &str) -> bool {
        if !self.include_patterns.is_empty() {
            let matches_include = self
                .include_patterns
                .iter()
                .any(|p| glob_match(p, action_name));
            if !matches_include {
                return false;
            }
        }

        !self
            .exclude_patterns
            .iter()
            .any(|p| glob_match(p, action_name))
    }
}

/// Simple glob matcher supporting `*` and `?`.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_inner(&pattern, &text)
}

fn glob_match_inner(pattern: &[char], text: &[char]) -> bool {
    match (pattern.first(), text.first()) {
        (None, None) => true,
        (Some('*'), _) => {
            glob_match_inner(&pattern[1..], text)
                || (!text.is_empty() && glob_match_inner(pattern, &text[1..]))
        }
        (Some('?'), Some(_)) => glob_match_inner(&pattern[1..], &text[1..]),
        (Some(p), Some(t)) if p == t => glob_match_inner(&pattern[1..], &text[1..]),
        _ => false,
    }
}

/// An entry in the action log
#[derive(Debug, Clone)]
pub struct ActionLogEntry {
    /// Action name (from `Action::name()`)
    pub name: &'static str,
    /// Full Debug rendering of the action, payload included
    pub detail: String,
    /// Timestamp when the action was logged
    pub timestamp: Instant,
    /// Sequence number for ordering
    pub sequence: u64,
    /// How many follow-up actions the reduction enqueued
    pub followups: Option<usize>,
}

impl ActionLogEntry {
    fn new(name: &'static str, detail: String, sequence: u64) -> Self {
        Self {
            name,
            detail,
            timestamp: Instant::now(),
            sequence,
            followups: None,
        }
    }

    /// Time since this action was logged
    pub fn elapsed(&self) -> std::time::Duration {
        self.timestamp.elapsed()
    }

    /// Format the elapsed time for display (e.g., "2.3s", "150ms")
    pub fn elapsed_display(&self) -> String {
        let elapsed = self.elapsed();
        if elapsed.as_secs() >= 1 {
            format!("{:.1}s", elapsed.as_secs_f64())
        } else {
            format!("{}ms", elapsed.as_millis())
        }
    }
}

/// Serializable snapshot of a log entry, for [`ActionLog::to_json`].
#[derive(Debug, Clone, Serialize)]
pub struct ActionLogExport {
    /// Action name
    pub name: &'static str,
    /// Full Debug rendering of the action
    pub detail: String,
    /// Sequence number
    pub sequence: u64,
    /// Milliseconds since the entry was logged
    pub elapsed_ms: u128,
    /// Follow-up action count, if the reduction has run
    pub followups: Option<usize>,
}

/// Configuration for the action log ring buffer
#[derive(Debug, Clone)]
pub struct ActionLogConfig {
    /// Maximum number of entries to keep
    pub capacity: usize,
    /// Filter config
    pub filter: ActionLoggerConfig,
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            filter: ActionLoggerConfig::default(),
        }
    }
}

impl ActionLogConfig {
    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Create with custom capacity and filter
    pub fn new(capacity: usize, filter: ActionLoggerConfig) -> Self {
        Self { capacity, filter }
    }
}

/// In-memory ring buffer storing recent dispatches.
///
/// Older entries are discarded when capacity is reached.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<ActionLogEntry>,
    config: ActionLogConfig,
    next_sequence: u64,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(ActionLogConfig::default())
    }
}

impl ActionLog {
    /// Create a new action log with configuration
    pub fn new(config: ActionLogConfig) -> Self {
        Self {
            entries: VecDeque::with_capacity(config.capacity),
            config,
            next_sequence: 0,
        }
    }

    /// Log an action (if it passes the filter)
    ///
    /// Returns the entry if it was logged, None if filtered out.
    pub fn log<A: Action>(&mut self, action: &A) -> Option<&ActionLogEntry> {
        let name = action.name();
        if !self.config.filter.should_log(name) {
            return None;
        }

        let entry = ActionLogEntry::new(name, format!("{action:?}"), self.next_sequence);
        self.next_sequence += 1;

        if self.entries.len() >= self.config.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.entries.back()
    }

    /// Record the follow-up count on the last entry (called after the reducer)
    pub fn update_last_followups(&mut self, followups: usize) {
        if let Some(entry) = self.entries.back_mut() {
            entry.followups = Some(followups);
        }
    }

    /// Get all entries (oldest first)
    pub fn entries(&self) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter()
    }

    /// Get the most recent N entries (newest first)
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &ActionLogEntry> {
        self.entries.iter().rev().take(count)
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export the log (oldest first) as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let export: Vec<ActionLogExport> = self
            .entries
            .iter()
            .map(|e| ActionLogExport {
                name: e.name,
                detail: e.detail.clone(),
                sequence: e.sequence,
                elapsed_ms: e.elapsed().as_millis(),
                followups: e.followups,
            })
            .collect();
        serde_json::to_string_pretty(&export)
    }
}

/// Middleware that logs actions with configurable pattern filtering.
///
/// Two modes:
/// - **Tracing only** (default): logs via `tracing::debug!()`
/// - **With storage**: also stores entries in an [`ActionLog`] ring buffer
#[derive(Debug, Clone)]
pub struct ActionLoggerMiddleware {
    config: ActionLoggerConfig,
    log: Option<ActionLog>,
    last_action_logged: bool,
}

impl ActionLoggerMiddleware {
    /// Create a logger middleware with tracing only (no in-memory storage)
    pub fn new(config: ActionLoggerConfig) -> Self {
        Self {
            config,
            log: None,
            last_action_logged: false,
        }
    }

    /// Create middleware with in-memory storage
    pub fn with_log(config: ActionLogConfig) -> Self {
        Self {
            config: config.filter.clone(),
            log: Some(ActionLog::new(config)),
            last_action_logged: false,
        }
    }

    /// Create with default config and in-memory storage
    pub fn with_default_log() -> Self {
        Self::with_log(ActionLogConfig::default())
    }

    /// Create with no filtering (logs all actions), tracing only
    pub fn log_all() -> Self {
        Self::new(ActionLoggerConfig::with_patterns(vec![], vec![]))
    }

    /// Access the in-memory log, if storage is enabled
    pub fn log(&self) -> Option<&ActionLog> {
        self.log.as_ref()
    }

    /// Mutable access to the in-memory log, if storage is enabled
    pub fn log_mut(&mut self) -> Option<&mut ActionLog> {
        self.log.as_mut()
    }
}

impl<A: Action> Middleware<A> for ActionLoggerMiddleware {
    fn before(&mut self, action: &A) {
        self.last_action_logged = self.config.should_log(action.name());
        if !self.last_action_logged {
            return;
        }
        tracing::debug!(action = %action.name(), detail = ?action, "Sending action");
        if let Some(log) = self.log.as_mut() {
            log.log(action);
        }
    }

    fn after(&mut self, action: &A, effect: &Effect<A>) {
        if !self.last_action_logged {
            return;
        }
        tracing::debug!(
            action = %action.name(),
            followups = effect.actions().len(),
            "Action processed"
        );
        if let Some(log) = self.log.as_mut() {
            log.update_last_followups(effect.actions().len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("Counter*", "Counter1Increment"));
        assert!(glob_match("*Binding*", "FormBindingChanged"));
        assert!(glob_match("T?ck", "Tick"));
        assert!(glob_match("Tick", "Tick"));
        assert!(!glob_match("Counter*", "Toggle"));
        assert!(!glob_match("Tick", "Tock"));
    }

    #[test]
    fn test_config_include_exclude() {
        let config = ActionLoggerConfig::new(Some("Counter*"), Some("*Decrement"));
        assert!(config.should_log("Counter1Increment"));
        assert!(!config.should_log("Counter1Decrement"));
        assert!(!config.should_log("Toggle"));
    }

    #[test]
    fn test_default_excludes_tick() {
        let config = ActionLoggerConfig::default();
        assert!(config.should_log("Increment"));
        assert!(!config.should_log("Tick"));
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Tick,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Increment => "Increment",
                TestAction::Tick => "Tick",
            }
        }
    }

    #[test]
    fn test_log_respects_filter_and_capacity() {
        let mut log = ActionLog::new(ActionLogConfig::with_capacity(2));

        assert!(log.log(&TestAction::Tick).is_none());
        assert!(log.log(&TestAction::Increment).is_some());
        log.log(&TestAction::Increment);
        log.log(&TestAction::Increment);

        assert_eq!(log.len(), 2);
        let sequences: Vec<u64> = log.entries().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[test]
    fn test_middleware_records_followups() {
        let mut middleware = ActionLoggerMiddleware::with_default_log();
        let action = TestAction::Increment;

        Middleware::before(&mut middleware, &action);
        Middleware::after(&mut middleware, &action, &Effect::send(TestAction::Tick));

        let log = middleware.log().unwrap();
        assert_eq!(log.len(), 1);
        let entry = log.entries().next().unwrap();
        assert_eq!(entry.name, "Increment");
        assert_eq!(entry.followups, Some(1));
    }

    #[test]
    fn test_json_export() {
        let mut log = ActionLog::default();
        log.log(&TestAction::Increment);
        log.update_last_followups(0);

        let json = log.to_json().unwrap();
        assert!(json.contains("\"name\": \"Increment\""));
        assert!(json.contains("\"followups\": 0"));
    }
}

//! Persist actions
//!
//! A persist action pairs a human-readable label with the literal SQL
//! text to run. Object editors append ordered lists of these to a
//! caller-owned list; execution order, transaction boundaries, and
//! rollback stay with the caller.

use serde::{Deserialize, Serialize};

/// A single DDL statement descriptor
///
/// # Examples
///
/// ```
/// use dbscope_objects::PersistAction;
///
/// let action = PersistAction::new("Drop event", "DROP EVENT IF EXISTS cleanup");
/// assert_eq!(action.title(), "Drop event");
/// assert_eq!(action.script(), "DROP EVENT IF EXISTS cleanup");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistAction {
    title: String,
    script: String,
}

impl PersistAction {
    /// Create a new persist action
    pub fn new(title: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script: script.into(),
        }
    }

    /// Get the display label
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the SQL text
    pub fn script(&self) -> &str {
        &self.script
    }
}

impl std::fmt::Display for PersistAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.script)
    }
}

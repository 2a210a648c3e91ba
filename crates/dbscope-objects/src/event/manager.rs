//! Event manager implementation
//!
//! Composes the DDL persist actions for scheduled-event edits. The
//! server has no CREATE OR REPLACE for events, so create and modify both
//! become a guarded drop followed by the object's own CREATE source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PersistAction;

/// Keyword used in DROP statements for event-like objects
const DEFAULT_OBJECT_TYPE: &str = "EVENT";

/// Specification of a scheduled-event object
///
/// The event itself is opaque to the editor: a name, the object-type
/// keyword it is dropped with, and its definition text, which is the
/// complete CREATE source as held in the editor buffer.
///
/// # Examples
///
/// ```
/// use dbscope_objects::EventSpec;
///
/// let spec = EventSpec::new("purge_logs", "CREATE EVENT purge_logs ...");
/// assert_eq!(spec.name(), "purge_logs");
/// assert_eq!(spec.object_type(), "EVENT");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSpec {
    name: String,
    schema: Option<String>,
    object_type: String,
    definition: String,
}

impl EventSpec {
    /// Create a new event specification
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            object_type: DEFAULT_OBJECT_TYPE.to_string(),
            definition: definition.into(),
        }
    }

    /// Set the schema the event lives in
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Override the object-type keyword used in DROP statements
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    /// Get the event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the schema (if set)
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Get the object-type keyword
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Get the definition text (the full CREATE source)
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// Error type for event operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Event name is empty
    #[error("Event name cannot be empty")]
    EmptyName,
}

/// Event manager composing DDL persist actions
///
/// # Examples
///
/// ```
/// use dbscope_objects::{EventManager, EventSpec};
///
/// let manager = EventManager::new();
/// let spec = EventSpec::new("purge_logs", "CREATE EVENT purge_logs ...");
///
/// let mut actions = Vec::new();
/// manager.compose_create_actions(&spec, &mut actions).unwrap();
/// assert_eq!(actions.len(), 2);
/// assert_eq!(actions[0].script(), "DROP EVENT IF EXISTS purge_logs");
/// ```
#[derive(Debug, Default)]
pub struct EventManager;

impl EventManager {
    /// Create a new event manager
    pub fn new() -> Self {
        Self
    }

    /// Validate an event specification before persisting a change
    pub fn validate(&self, spec: &EventSpec) -> Result<(), EventError> {
        if spec.name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }
        Ok(())
    }

    /// Append the actions that create a new event
    ///
    /// Exactly two actions, in order: a guarded drop of any previous
    /// version, then the definition text verbatim. Nothing is appended
    /// when validation fails.
    pub fn compose_create_actions(
        &self,
        spec: &EventSpec,
        actions: &mut Vec<PersistAction>,
    ) -> Result<(), EventError> {
        self.drop_and_recreate(spec, actions)
    }

    /// Append the actions that persist edits to an existing event
    ///
    /// Identical to the create path: the previous version is dropped and
    /// the edited source is submitted as-is.
    pub fn compose_modify_actions(
        &self,
        spec: &EventSpec,
        actions: &mut Vec<PersistAction>,
    ) -> Result<(), EventError> {
        self.drop_and_recreate(spec, actions)
    }

    /// Append the single action that drops an event
    ///
    /// No IF EXISTS guard: deleting an object that is already gone should
    /// surface as a server error, not pass silently.
    pub fn compose_delete_actions(&self, spec: &EventSpec, actions: &mut Vec<PersistAction>) {
        tracing::debug!(event = %spec.name(), "composing event drop actions");
        actions.push(PersistAction::new(
            "Drop event",
            format!("DROP {} {}", spec.object_type(), spec.name()),
        ));
    }

    fn drop_and_recreate(
        &self,
        spec: &EventSpec,
        actions: &mut Vec<PersistAction>,
    ) -> Result<(), EventError> {
        self.validate(spec)?;
        tracing::debug!(event = %spec.name(), "composing event create/replace actions");
        actions.push(PersistAction::new(
            "Drop event",
            format!("DROP {} IF EXISTS {}", spec.object_type(), spec.name()),
        ));
        actions.push(PersistAction::new("Create event", spec.definition()));
        Ok(())
    }
}

//! Sequence manager implementation
//!
//! Builds CREATE/DROP SEQUENCE and COMMENT statements from a sequence
//! bean. Only clauses the bean actually carries are emitted; the server
//! fills in its own defaults for the rest.

use crate::sequence::{Sequence, SequenceError};

/// Sequence manager for generating sequence DDL statements
///
/// # Examples
///
/// ```
/// use dbscope_objects::{Sequence, SequenceManager};
///
/// let manager = SequenceManager::new();
/// let seq = Sequence::new("SALES", "ORDERS_SEQ");
///
/// let sql = manager.build_create_sequence(&seq).unwrap();
/// assert!(sql.starts_with("CREATE SEQUENCE SALES.ORDERS_SEQ AS INTEGER"));
/// ```
#[derive(Debug, Default)]
pub struct SequenceManager;

impl SequenceManager {
    /// Create a new sequence manager
    pub fn new() -> Self {
        Self
    }

    /// Validate a sequence bean before generating DDL
    pub fn validate(&self, seq: &Sequence) -> Result<(), SequenceError> {
        if seq.name().trim().is_empty() {
            return Err(SequenceError::EmptyName);
        }
        Ok(())
    }

    /// Build a CREATE SEQUENCE statement
    pub fn build_create_sequence(&self, seq: &Sequence) -> Result<String, SequenceError> {
        self.validate(seq)?;
        tracing::debug!(sequence = %seq.qualified_name(), "generating CREATE SEQUENCE DDL");

        let mut sql = format!(
            "CREATE SEQUENCE {} AS {}",
            seq.qualified_name(),
            seq.precision().data_type()
        );

        if let Some(start) = seq.start() {
            sql.push_str(&format!("\n    START WITH {}", start));
        }
        if let Some(increment) = seq.increment() {
            sql.push_str(&format!("\n    INCREMENT BY {}", increment));
        }
        match seq.min_value() {
            Some(min) => sql.push_str(&format!("\n    MINVALUE {}", min)),
            None => sql.push_str("\n    NO MINVALUE"),
        }
        match seq.max_value() {
            Some(max) => sql.push_str(&format!("\n    MAXVALUE {}", max)),
            None => sql.push_str("\n    NO MAXVALUE"),
        }
        match seq.cache() {
            Some(cache) => sql.push_str(&format!("\n    CACHE {}", cache)),
            None => sql.push_str("\n    NO CACHE"),
        }
        sql.push_str(if seq.cycle() {
            "\n    CYCLE"
        } else {
            "\n    NO CYCLE"
        });
        sql.push_str(if seq.order() {
            "\n    ORDER"
        } else {
            "\n    NO ORDER"
        });

        Ok(sql)
    }

    /// Build a DROP SEQUENCE statement
    pub fn build_drop_sequence(
        &self,
        seq: &Sequence,
        if_exists: bool,
    ) -> Result<String, SequenceError> {
        self.validate(seq)?;
        tracing::debug!(sequence = %seq.qualified_name(), "generating DROP SEQUENCE DDL");

        let guard = if if_exists { "IF EXISTS " } else { "" };
        Ok(format!("DROP SEQUENCE {}{}", guard, seq.qualified_name()))
    }

    /// Build a COMMENT ON SEQUENCE statement from the bean's remarks
    ///
    /// Returns `None` when the bean carries no remarks.
    pub fn build_comment(&self, seq: &Sequence) -> Option<String> {
        let remarks = seq.remarks()?;
        Some(format!(
            "COMMENT ON SEQUENCE {} IS '{}'",
            seq.qualified_name(),
            remarks.replace('\'', "''")
        ))
    }
}

//! Sequence bean and its classification enums
//!
//! The bean mirrors one catalog row on the read path and carries the
//! engine factory defaults on the write path. Setters perform no
//! cross-field validation (min/start/max consistency is the server's
//! call); the one lookup that can fail, precision-by-description, fails
//! loudly instead of guessing.

use chrono::NaiveDateTime;
use dbscope_core::Row;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for sequence operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Sequence name is empty
    #[error("Sequence name cannot be empty")]
    EmptyName,
    /// Precision description did not match any known precision
    #[error("Unknown sequence precision: {0}")]
    UnknownPrecision(String),
}

/// Who owns a sequence (catalog OWNERTYPE / ORIGIN codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOwnerType {
    /// Created by a user
    User,
    /// Generated by the system (e.g. for an identity column)
    System,
}

impl SequenceOwnerType {
    /// Single-letter catalog code
    pub fn code(&self) -> &'static str {
        match self {
            SequenceOwnerType::User => "U",
            SequenceOwnerType::System => "S",
        }
    }

    /// Human-readable description for the property sheet
    pub fn description(&self) -> &'static str {
        match self {
            SequenceOwnerType::User => "User",
            SequenceOwnerType::System => "System",
        }
    }

    /// Look up from a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(SequenceOwnerType::User),
            "S" => Some(SequenceOwnerType::System),
            _ => None,
        }
    }
}

/// Kind of sequence object (catalog SEQTYPE codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceType {
    /// A regular, user-visible sequence
    Sequence,
    /// The hidden sequence backing an identity column
    Identity,
}

impl SequenceType {
    /// Single-letter catalog code
    pub fn code(&self) -> &'static str {
        match self {
            SequenceType::Sequence => "S",
            SequenceType::Identity => "I",
        }
    }

    /// Human-readable description for the property sheet
    pub fn description(&self) -> &'static str {
        match self {
            SequenceType::Sequence => "Sequence",
            SequenceType::Identity => "Identity",
        }
    }

    /// Look up from a catalog code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(SequenceType::Sequence),
            "I" => Some(SequenceType::Identity),
            _ => None,
        }
    }
}

/// Decimal precision of the values a sequence generates
///
/// Each variant maps to the underlying integer type and its digit count.
/// Both lookups are total over `Option`: unrecognized input comes back as
/// `None`, never a panic.
///
/// # Examples
///
/// ```
/// use dbscope_objects::SequencePrecision;
///
/// let p = SequencePrecision::P10;
/// assert_eq!(p.digits(), 10);
/// assert_eq!(p.data_type(), "INTEGER");
/// assert_eq!(SequencePrecision::from_digits(19), Some(SequencePrecision::P19));
/// assert_eq!(SequencePrecision::from_digits(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePrecision {
    /// 5 digits (SMALLINT)
    P5,
    /// 10 digits (INTEGER)
    P10,
    /// 19 digits (BIGINT)
    P19,
}

impl SequencePrecision {
    /// Number of decimal digits
    pub fn digits(&self) -> i32 {
        match self {
            SequencePrecision::P5 => 5,
            SequencePrecision::P10 => 10,
            SequencePrecision::P19 => 19,
        }
    }

    /// SQL data type generating values of this precision
    pub fn data_type(&self) -> &'static str {
        match self {
            SequencePrecision::P5 => "SMALLINT",
            SequencePrecision::P10 => "INTEGER",
            SequencePrecision::P19 => "BIGINT",
        }
    }

    /// Display string shown in the property sheet
    pub fn description(&self) -> String {
        format!("{} ({} digits)", self.data_type(), self.digits())
    }

    /// Look up from a catalog digit count
    pub fn from_digits(digits: i32) -> Option<Self> {
        match digits {
            5 => Some(SequencePrecision::P5),
            10 => Some(SequencePrecision::P10),
            19 => Some(SequencePrecision::P19),
            _ => None,
        }
    }

    /// Look up from a property-sheet display string
    pub fn from_description(description: &str) -> Option<Self> {
        [
            SequencePrecision::P5,
            SequencePrecision::P10,
            SequencePrecision::P19,
        ]
        .into_iter()
        .find(|p| p.description() == description)
    }
}

impl Default for SequencePrecision {
    fn default() -> Self {
        SequencePrecision::P10
    }
}

/// A database sequence object's metadata
///
/// Loaded from the catalog the fields mirror the server's current row;
/// constructed fresh for a new object they carry the engine factory
/// defaults (increment 1, cache 20, no cycle, no order, 10-digit
/// precision). Generation parameters are read-write for the property
/// sheet; identity, classification, and audit fields are read-only.
///
/// # Examples
///
/// ```
/// use dbscope_objects::{Sequence, SequencePrecision};
///
/// let seq = Sequence::new("SALES", "ORDERS_SEQ");
/// assert_eq!(seq.increment(), Some(1));
/// assert_eq!(seq.cache(), Some(20));
/// assert!(!seq.cycle());
/// assert_eq!(seq.precision(), SequencePrecision::P10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    name: String,
    schema: String,
    owner: Option<String>,
    owner_type: Option<SequenceOwnerType>,
    seq_id: Option<i32>,
    seq_type: SequenceType,
    base_schema: Option<String>,
    base_sequence: Option<String>,
    increment: Option<i64>,
    start: Option<i64>,
    max_value: Option<i64>,
    min_value: Option<i64>,
    next_cache_first_value: Option<i64>,
    cycle: bool,
    cache: Option<i32>,
    order: bool,
    data_type_id: Option<i32>,
    source_type_id: Option<i32>,
    create_time: Option<NaiveDateTime>,
    alter_time: Option<NaiveDateTime>,
    precision: SequencePrecision,
    origin: Option<SequenceOwnerType>,
    remarks: Option<String>,
    persisted: bool,
}

impl Sequence {
    /// Build a sequence bean from a catalog result row
    ///
    /// Every column is read with the default-on-null convention; a row
    /// from a partial query simply leaves the matching fields empty. An
    /// unrecognized PRECISION value falls back to the default rather than
    /// aborting schema enumeration.
    pub fn from_row(schema: impl Into<String>, row: &Row) -> Self {
        Self {
            name: row.get_string("SEQNAME").unwrap_or_default(),
            schema: schema.into(),
            owner: row.get_string("OWNER"),
            owner_type: row
                .get_string("OWNERTYPE")
                .and_then(|c| SequenceOwnerType::from_code(&c)),
            seq_id: row.get_i32("SEQID"),
            seq_type: row
                .get_string("SEQTYPE")
                .and_then(|c| SequenceType::from_code(&c))
                .unwrap_or(SequenceType::Sequence),
            base_schema: row.get_string_trimmed("BASE_SEQSCHEMA"),
            base_sequence: row.get_string("BASE_SEQNAME"),
            increment: row.get_i64("INCREMENT"),
            start: row.get_i64("START"),
            max_value: row.get_i64("MAXVALUE"),
            min_value: row.get_i64("MINVALUE"),
            next_cache_first_value: row.get_i64("NEXTCACHEFIRSTVALUE"),
            cycle: row.get_flag("CYCLE", "Y"),
            cache: row.get_i32("CACHE"),
            order: row.get_flag("ORDER", "Y"),
            data_type_id: row.get_i32("DATATYPEID"),
            source_type_id: row.get_i32("SOURCETYPEID"),
            create_time: row.get_timestamp("CREATE_TIME"),
            alter_time: row.get_timestamp("ALTER_TIME"),
            precision: row
                .get_i32("PRECISION")
                .and_then(SequencePrecision::from_digits)
                .unwrap_or_default(),
            origin: row
                .get_string("ORIGIN")
                .and_then(|c| SequenceOwnerType::from_code(&c)),
            remarks: row.get_string("REMARKS"),
            persisted: true,
        }
    }

    /// Create a fresh bean for a not-yet-persisted sequence
    ///
    /// Defaults mirror the target engine's factory settings.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            owner: None,
            owner_type: Some(SequenceOwnerType::User),
            seq_id: None,
            seq_type: SequenceType::Sequence,
            base_schema: None,
            base_sequence: None,
            increment: Some(1),
            start: None,
            max_value: None,
            min_value: None,
            next_cache_first_value: None,
            cycle: false,
            cache: Some(20),
            order: false,
            data_type_id: None,
            source_type_id: None,
            create_time: None,
            alter_time: None,
            precision: SequencePrecision::default(),
            origin: Some(SequenceOwnerType::User),
            remarks: None,
            persisted: false,
        }
    }

    /// Get the sequence name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the containing schema
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Get the schema-qualified name
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Get the owner (if known)
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Get the owner type (if known)
    pub fn owner_type(&self) -> Option<SequenceOwnerType> {
        self.owner_type
    }

    /// Get the catalog sequence id (if known)
    pub fn seq_id(&self) -> Option<i32> {
        self.seq_id
    }

    /// Get the sequence kind
    pub fn seq_type(&self) -> SequenceType {
        self.seq_type
    }

    /// Get the base object's schema (alias sequences only)
    pub fn base_schema(&self) -> Option<&str> {
        self.base_schema.as_deref()
    }

    /// Get the base object's name (alias sequences only)
    pub fn base_sequence(&self) -> Option<&str> {
        self.base_sequence.as_deref()
    }

    /// Get the increment between generated values
    pub fn increment(&self) -> Option<i64> {
        self.increment
    }

    /// Set the increment between generated values
    pub fn set_increment(&mut self, increment: Option<i64>) {
        self.increment = increment;
    }

    /// Get the first value the sequence generates
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// Set the first value the sequence generates
    pub fn set_start(&mut self, start: Option<i64>) {
        self.start = start;
    }

    /// Get the maximum value
    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }

    /// Set the maximum value
    pub fn set_max_value(&mut self, max_value: Option<i64>) {
        self.max_value = max_value;
    }

    /// Get the minimum value
    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    /// Set the minimum value
    pub fn set_min_value(&mut self, min_value: Option<i64>) {
        self.min_value = min_value;
    }

    /// Get the first value of the next cache block
    pub fn next_cache_first_value(&self) -> Option<i64> {
        self.next_cache_first_value
    }

    /// Set the first value of the next cache block
    pub fn set_next_cache_first_value(&mut self, value: Option<i64>) {
        self.next_cache_first_value = value;
    }

    /// Whether the sequence wraps around at its bounds
    pub fn cycle(&self) -> bool {
        self.cycle
    }

    /// Set whether the sequence wraps around at its bounds
    pub fn set_cycle(&mut self, cycle: bool) {
        self.cycle = cycle;
    }

    /// Get the number of preallocated values
    pub fn cache(&self) -> Option<i32> {
        self.cache
    }

    /// Set the number of preallocated values
    pub fn set_cache(&mut self, cache: Option<i32>) {
        self.cache = cache;
    }

    /// Whether values are generated in strict request order
    pub fn order(&self) -> bool {
        self.order
    }

    /// Set whether values are generated in strict request order
    pub fn set_order(&mut self, order: bool) {
        self.order = order;
    }

    /// Get the catalog data type id (if known)
    pub fn data_type_id(&self) -> Option<i32> {
        self.data_type_id
    }

    /// Get the catalog source type id (if known)
    pub fn source_type_id(&self) -> Option<i32> {
        self.source_type_id
    }

    /// Get the creation timestamp (if known)
    pub fn create_time(&self) -> Option<NaiveDateTime> {
        self.create_time
    }

    /// Get the last-alter timestamp (if known)
    pub fn alter_time(&self) -> Option<NaiveDateTime> {
        self.alter_time
    }

    /// Get the value precision
    pub fn precision(&self) -> SequencePrecision {
        self.precision
    }

    /// Set the value precision
    pub fn set_precision(&mut self, precision: SequencePrecision) {
        self.precision = precision;
    }

    /// Set the precision from a property-sheet display string
    ///
    /// The property sheet hands the editor the selected display string,
    /// not the variant. An unmapped string leaves the field unchanged
    /// and reports an error.
    pub fn set_precision_from_description(
        &mut self,
        description: &str,
    ) -> Result<(), SequenceError> {
        match SequencePrecision::from_description(description) {
            Some(precision) => {
                self.precision = precision;
                Ok(())
            }
            None => Err(SequenceError::UnknownPrecision(description.to_string())),
        }
    }

    /// Get the origin of the sequence (if known)
    pub fn origin(&self) -> Option<SequenceOwnerType> {
        self.origin
    }

    /// Get the free-text remarks (if any)
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Set the free-text remarks
    pub fn set_remarks(&mut self, remarks: Option<String>) {
        self.remarks = remarks;
    }

    /// Whether the bean mirrors a server-side object
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}

//! Sequence metadata and DDL
//!
//! This module holds the sequence bean populated from the server catalog
//! (or constructed fresh with engine defaults for a new object) and the
//! builder that turns it into CREATE/DROP SEQUENCE statements.

mod manager;
mod model;

#[cfg(test)]
mod tests;

pub use manager::*;
pub use model::*;

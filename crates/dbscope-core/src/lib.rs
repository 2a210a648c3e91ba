//! DBScope Core - shared types for database object tooling
//!
//! This crate provides the fundamental types the other dbscope crates
//! depend on:
//!
//! - `Value` - a database value covering the common SQL types
//! - `Row` - a row from a query result with safe typed column access
//! - `DbscopeError` / `Result` - the workspace error type

mod error;
mod types;

pub use error::*;
pub use types::*;

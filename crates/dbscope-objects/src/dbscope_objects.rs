//! DBScope Objects - database object editing
//!
//! This crate provides the models and DDL builders used when editing
//! server-side objects:
//! - Scheduled events (drop/create persist scripts)
//! - Sequences (catalog metadata and generation parameters)

pub mod action;
pub mod event;
pub mod sequence;

pub use action::*;
pub use event::*;
pub use sequence::*;

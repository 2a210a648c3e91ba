//! Scheduled event editing
//!
//! This module translates create, modify, and delete intents on a
//! scheduled-event object into the ordered DDL persist actions an
//! execution framework submits to the server.

mod manager;


pub use manager::*;

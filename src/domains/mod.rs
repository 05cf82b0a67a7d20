//! Domain modules organized by bounded contexts.
//!
//! Each domain module encapsulates a specific area of functionality.

pub mod tools;

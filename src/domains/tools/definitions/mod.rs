//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod demo;
pub mod ldoce;

pub use demo::{SumParams, SumTool};
pub use ldoce::{
    DictionaryEntriesParams, DictionaryEntriesTool, DictionaryLookupParams, DictionaryLookupTool,
};

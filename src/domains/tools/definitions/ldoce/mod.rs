//! LDOCE dictionary scraper tools.
//!
//! Two tools scrape `ldoceonline.com` entry pages for a word:
//!
//! - `get_dictionary_entry` (`lookup.rs`) - the original flat shape with
//!   senses and the verb conjugation table
//! - `get_dictionary_entries` (`entries.rs`) - the richer shape with an
//!   entries array, corpus example groups, and word origin
//!
//! Both depend entirely on the site's markup staying stable; absent or
//! malformed nodes degrade to empty fields rather than errors.

pub mod common;
mod entries;
mod lookup;

pub use entries::{DictionaryEntriesParams, DictionaryEntriesTool, EntriesDocument};
pub use lookup::{DictionaryLookupParams, DictionaryLookupTool, LookupDocument};

//! Protocol demonstration tools.

mod sum;

pub use sum::{SumParams, SumTool};

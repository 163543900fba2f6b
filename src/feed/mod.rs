//! Feed parsing module.
//!
//! Turns an exported RSS feed into the ordered sequence of entries the
//! download orchestrator drains.

pub mod entry;
pub mod parser;

pub use entry::{Entry, EntryAttributes};
pub use parser::parse_feed;

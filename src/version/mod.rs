//! Release version handling
//!
//! # Modules
//!
//! - [`tag`]: Release tags, tag name parsing, and newest-first ordering

pub mod tag;

pub use tag::{Tag, TagVersion};

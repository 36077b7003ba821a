//! databag-util — structural equality and test-data helpers for databag.
//!
//! `json_equal` is the change-detection authority for the overlay store:
//! strict deep equality, extended over possibly-absent operands.
//! `random_doc` generates reproducible random documents for randomized
//! store tests.

pub mod json_equal;
pub mod random_doc;

// Re-exports for convenience
pub use json_equal::{deep_equal, has_same_value};
pub use random_doc::{DocGenOptions, RandomDoc};

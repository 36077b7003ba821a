//! databag — a change-overlay store for JSON documents.
//!
//! A [`DataBag`] holds a snapshot document that writes never touch and an
//! overlay of pending per-path changes. Reads consult the overlay first
//! and fall through to the snapshot; [`DataBag::current_data`] merges the
//! two into a full document on demand.
//!
//! Paths use dot notation (`user.tags.0`). Segments that read as
//! canonical non-negative integers address list positions, everything
//! else addresses mapping keys.

pub mod cli;
pub mod store;

// Re-exports for convenience
pub use databag_dot_path::{parse_dot_path, Path, PathStep};
pub use store::{ChangeRecord, DataBag, DataBagError};

//! Core types for dotted-path addressing.

/// One segment of a dotted path.
///
/// Segments are tagged at parse time: a segment spelling a canonical
/// non-negative decimal integer (see [`crate::is_valid_index`]) becomes an
/// `Index`, everything else a `Key`. When walking a document, an `Index`
/// selects a list slot if the current value is a list, and otherwise the
/// mapping key spelled by its decimal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// A mapping key.
    Key(String),
    /// A list index (or a numeric mapping key, decided while walking).
    Index(usize),
}

/// A parsed dotted path. Empty means "the document itself".
pub type Path = Vec<PathStep>;

//! Change-overlay store over a JSON snapshot.
//!
//! A [`DataBag`] keeps an immutable snapshot (the *initial data*) plus a
//! keyed overlay of pending changes. Reads consult the overlay first and
//! fall through to the snapshot; writes diff against the snapshot so the
//! overlay only ever holds real differences.

use databag_dot_path::{parse_dot_path, resolve, set_in, DotPathError};
use databag_util::has_same_value;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors returned by [`DataBag`] operations.
#[derive(Error, Debug, PartialEq)]
pub enum DataBagError {
    /// The snapshot document must be a mapping at the root.
    #[error("INVALID_INITIAL_DATA")]
    InvalidInitialData,
    /// Write paths must have at least one segment.
    #[error("EMPTY_PATH")]
    EmptyPath,
}

impl From<DotPathError> for DataBagError {
    fn from(err: DotPathError) -> Self {
        match err {
            DotPathError::EmptyPath => DataBagError::EmptyPath,
        }
    }
}

/// One pending change, keyed by its dot-path in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    /// Value the snapshot held at the path when the change was first
    /// recorded. `None` when the path did not resolve.
    pub initial_value: Option<Value>,
    /// Value reads at the path return while the change is pending.
    pub new_value: Value,
}

/// JSON document with an overlay of pending, revertable edits.
///
/// The snapshot is never modified by writes. Each write is compared
/// against the value the snapshot currently holds at that path, so
/// writing a value back to its original removes the pending change
/// instead of recording a second edit.
///
/// # Examples
///
/// ```
/// use databag::DataBag;
/// use serde_json::json;
///
/// let mut bag = DataBag::with_initial_data(json!({
///     "user": { "name": "Anna", "city": "Stockholm" }
/// }))?;
///
/// bag.set_value("user.city", json!("Uppsala"))?;
/// assert_eq!(bag.current_value("user.city"), Some(json!("Uppsala")));
/// assert_eq!(bag.initial_data()["user"]["city"], json!("Stockholm"));
///
/// bag.set_value("user.city", json!("Stockholm"))?;
/// assert!(!bag.has_pending_changes());
/// # Ok::<(), databag::DataBagError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataBag {
    initial_data: Value,
    changes: IndexMap<String, ChangeRecord>,
}

impl DataBag {
    /// Creates a store over an empty mapping.
    pub fn new() -> Self {
        DataBag {
            initial_data: Value::Object(Map::new()),
            changes: IndexMap::new(),
        }
    }

    /// Creates a store over the given snapshot.
    ///
    /// The root must be a mapping so dot-paths have somewhere to start.
    pub fn with_initial_data(initial_data: Value) -> Result<Self, DataBagError> {
        if !initial_data.is_object() {
            return Err(DataBagError::InvalidInitialData);
        }
        Ok(DataBag {
            initial_data,
            changes: IndexMap::new(),
        })
    }

    /// Replaces the snapshot wholesale, keeping pending changes.
    ///
    /// Pending changes are reinterpreted lazily against the new snapshot:
    /// reads of edited paths keep returning the edited values, and a later
    /// [`set_value`](DataBag::set_value) diffs against the new snapshot.
    pub fn set_initial_data(&mut self, initial_data: Value) -> Result<(), DataBagError> {
        if !initial_data.is_object() {
            return Err(DataBagError::InvalidInitialData);
        }
        self.initial_data = initial_data;
        Ok(())
    }

    /// The snapshot document. Writes never modify it.
    pub fn initial_data(&self) -> &Value {
        &self.initial_data
    }

    /// Reads the effective value at `path`.
    ///
    /// A pending change at the exact path wins; otherwise the path is
    /// resolved against the snapshot. Returns `None` when neither holds a
    /// value. The empty path reads the whole snapshot. Returned values are
    /// independent copies.
    pub fn current_value(&self, path: &str) -> Option<Value> {
        if let Some(record) = self.changes.get(path) {
            return Some(record.new_value.clone());
        }
        let steps = parse_dot_path(path);
        resolve(&self.initial_data, &steps).cloned()
    }

    /// Writes `new_value` at `path`, recording a pending change only when
    /// the value actually differs from the snapshot.
    ///
    /// The snapshot value at the path is resolved fresh on every call:
    ///
    /// - no pending change and `new_value` matches the snapshot: no-op;
    /// - no pending change otherwise: a change is recorded along with the
    ///   snapshot value it replaces;
    /// - pending change whose value matches `new_value`: no-op;
    /// - `new_value` matches the snapshot: the pending change is removed;
    /// - otherwise the pending change is updated in place.
    ///
    /// Absent paths and `null` compare as equal, so writing `null` where
    /// the snapshot has nothing records no change.
    ///
    /// # Errors
    ///
    /// [`DataBagError::EmptyPath`] when `path` has no segments. The store
    /// is left untouched.
    pub fn set_value(&mut self, path: &str, new_value: Value) -> Result<(), DataBagError> {
        let steps = parse_dot_path(path);
        if steps.is_empty() {
            return Err(DataBagError::EmptyPath);
        }
        let true_original = resolve(&self.initial_data, &steps);

        if let Some(record) = self.changes.get(path) {
            if has_same_value(Some(&new_value), Some(&record.new_value)) {
                return Ok(());
            }
            if has_same_value(Some(&new_value), true_original) {
                self.changes.shift_remove(path);
            } else if let Some(record) = self.changes.get_mut(path) {
                record.new_value = new_value;
            }
            return Ok(());
        }

        if has_same_value(Some(&new_value), true_original) {
            return Ok(());
        }
        self.changes.insert(
            path.to_string(),
            ChangeRecord {
                initial_value: true_original.cloned(),
                new_value,
            },
        );
        Ok(())
    }

    /// Whether any change is pending.
    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Drops every pending change, reverting all reads to the snapshot.
    pub fn discard_all_changes(&mut self) {
        self.changes.clear();
    }

    /// Paths with a pending change, in the order the changes were first
    /// recorded.
    pub fn pending_paths(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    /// The pending change at `path`, if one is recorded.
    pub fn pending_change(&self, path: &str) -> Option<&ChangeRecord> {
        self.changes.get(path)
    }

    /// Materializes the snapshot with every pending change applied, in
    /// recording order. The snapshot itself is left untouched.
    ///
    /// When one pending path is a prefix of another, whichever change was
    /// recorded later lands on top.
    pub fn current_data(&self) -> Value {
        let mut merged = self.initial_data.clone();
        for (path, record) in &self.changes {
            let steps = parse_dot_path(path);
            // set_value never records an empty path, so this cannot fail.
            let _ = set_in(&mut merged, &steps, record.new_value.clone());
        }
        merged
    }
}

impl Default for DataBag {
    fn default() -> Self {
        Self::new()
    }
}

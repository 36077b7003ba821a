//! Dotted-path addressing for JSON documents.
//!
//! Paths are strings with segments joined by `.` (for example
//! `"contacts.2.email"`). A segment spelling a canonical non-negative
//! integer addresses a list slot when the value being walked is a list;
//! every other segment addresses a mapping key. Reading a path that leads
//! nowhere is a miss, never an error; writing builds any containers the
//! path needs.
//!
//! # Example
//!
//! ```
//! use databag_dot_path::{parse_dot_path, resolve, set};
//! use serde_json::json;
//!
//! let doc = json!({"contacts": [{"email": "a@x.com"}]});
//! let path = parse_dot_path("contacts.0.email");
//! assert_eq!(resolve(&doc, &path), Some(&json!("a@x.com")));
//!
//! let updated = set(&doc, &path, json!("b@x.com")).unwrap();
//! assert_eq!(resolve(&updated, &path), Some(&json!("b@x.com")));
//! // the input document is untouched
//! assert_eq!(resolve(&doc, &path), Some(&json!("a@x.com")));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// Writes require a path; the empty string addresses nothing.
    #[error("EMPTY_PATH")]
    EmptyPath,
}

// ── Parsing and formatting ────────────────────────────────────────────────

/// Check if a string spells a canonical non-negative integer list index.
///
/// Canonical means ASCII digits only, with no leading zeros (`"0"` itself
/// is canonical). Non-canonical digit strings such as `"01"` stay mapping
/// keys.
///
/// # Example
///
/// ```
/// use databag_dot_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("1.5"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a dotted path string into tagged steps.
///
/// The empty string parses to the empty path (the document itself). Empty
/// segments are kept as empty keys, so `"a..b"` addresses the key `""`
/// inside `"a"`.
///
/// # Example
///
/// ```
/// use databag_dot_path::{parse_dot_path, PathStep};
///
/// assert_eq!(parse_dot_path(""), Vec::<PathStep>::new());
/// assert_eq!(
///     parse_dot_path("contacts.2.email"),
///     vec![
///         PathStep::Key("contacts".to_string()),
///         PathStep::Index(2),
///         PathStep::Key("email".to_string()),
///     ]
/// );
/// ```
pub fn parse_dot_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.')
        .map(|segment| {
            if is_valid_index(segment) {
                // numerals too large for usize stay keys
                match segment.parse::<usize>() {
                    Ok(idx) => PathStep::Index(idx),
                    Err(_) => PathStep::Key(segment.to_string()),
                }
            } else {
                PathStep::Key(segment.to_string())
            }
        })
        .collect()
}

/// Format steps back into a dotted path string.
///
/// Inverse of [`parse_dot_path`] for every path it produces.
pub fn format_dot_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        match step {
            PathStep::Key(key) => out.push_str(key),
            PathStep::Index(idx) => out.push_str(&idx.to_string()),
        }
    }
    out
}

// ── Reading ───────────────────────────────────────────────────────────────

/// Resolve a path in a document.
///
/// Walks one step at a time; returns `None` the moment an intermediate
/// value is missing, null, or a scalar where a container was expected.
/// The empty path resolves to the document itself. An explicit null *at*
/// the path is found and returned as `Some(&Value::Null)`; found-and-null
/// is not the same as missing.
///
/// # Example
///
/// ```
/// use databag_dot_path::{parse_dot_path, resolve};
/// use serde_json::json;
///
/// let doc = json!({"place": {"city": "Stockholm"}});
/// assert_eq!(
///     resolve(&doc, &parse_dot_path("place.city")),
///     Some(&json!("Stockholm"))
/// );
/// assert_eq!(resolve(&doc, &parse_dot_path("place.country")), None);
/// assert_eq!(resolve(&doc, &[]), Some(&doc));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), PathStep::Key(key)) => map.get(key.as_str())?,
            (Value::Object(map), PathStep::Index(idx)) => map.get(idx.to_string().as_str())?,
            (Value::Array(arr), PathStep::Index(idx)) => arr.get(*idx)?,
            _ => return None,
        };
    }
    Some(current)
}

// ── Writing ───────────────────────────────────────────────────────────────

/// Write a value at a path, copy-on-write.
///
/// Returns a new document identical to the input except along the path:
/// each container on the path is copied, its one child slot replaced, and
/// the final slot receives `new_value` as passed. Callers that keep their
/// own copy of the value should clone before calling. The input document
/// is never modified.
///
/// Containers missing along the path are created: mappings by default,
/// lists when the step is an index. An existing value of the wrong shape
/// for its step (scalar, null, or mismatched container kind) is replaced
/// by a fresh container. Writing an index past the end of a list pads the
/// gap with nulls.
///
/// # Errors
///
/// [`DotPathError::EmptyPath`] when `path` is empty.
///
/// # Example
///
/// ```
/// use databag_dot_path::{parse_dot_path, set};
/// use serde_json::json;
///
/// let empty = json!({});
/// let doc = set(&empty, &parse_dot_path("contacts.0.email"), json!("a@x.com")).unwrap();
/// assert_eq!(doc, json!({"contacts": [{"email": "a@x.com"}]}));
/// ```
pub fn set(doc: &Value, path: &[PathStep], new_value: Value) -> Result<Value, DotPathError> {
    if path.is_empty() {
        return Err(DotPathError::EmptyPath);
    }
    Ok(rebuild(Some(doc), path, new_value))
}

// Copies the container at the head step, replaces its one child slot with
// the rebuilt remainder, and recurses. `current` is None once the path
// walks off the existing document.
fn rebuild(current: Option<&Value>, path: &[PathStep], new_value: Value) -> Value {
    let (step, rest) = match path.split_first() {
        Some(pair) => pair,
        None => return new_value,
    };
    match step {
        PathStep::Key(key) => {
            let mut map = match current {
                Some(Value::Object(existing)) => existing.clone(),
                _ => Map::new(),
            };
            let child = rebuild(map.get(key.as_str()), rest, new_value);
            map.insert(key.clone(), child);
            Value::Object(map)
        }
        PathStep::Index(idx) => match current {
            // a mapping absorbs numeric steps as decimal keys
            Some(Value::Object(existing)) => {
                let key = idx.to_string();
                let mut map = existing.clone();
                let child = rebuild(map.get(key.as_str()), rest, new_value);
                map.insert(key, child);
                Value::Object(map)
            }
            other => {
                let mut arr = match other {
                    Some(Value::Array(existing)) => existing.clone(),
                    _ => Vec::new(),
                };
                let child = rebuild(arr.get(*idx), rest, new_value);
                if *idx < arr.len() {
                    arr[*idx] = child;
                } else {
                    while arr.len() < *idx {
                        arr.push(Value::Null);
                    }
                    arr.push(child);
                }
                Value::Array(arr)
            }
        },
    }
}

/// Write a value at a path, in place.
///
/// Same path semantics as [`set`] — container creation, kind replacement,
/// list padding — for callers that own the working copy and want to avoid
/// rebuilding it, such as a store materializing many edits into one clone.
///
/// # Errors
///
/// [`DotPathError::EmptyPath`] when `path` is empty.
pub fn set_in(doc: &mut Value, path: &[PathStep], new_value: Value) -> Result<(), DotPathError> {
    if path.is_empty() {
        return Err(DotPathError::EmptyPath);
    }
    write_slot(doc, path, new_value);
    Ok(())
}

fn write_slot(slot: &mut Value, path: &[PathStep], new_value: Value) {
    let (step, rest) = match path.split_first() {
        Some(pair) => pair,
        None => {
            *slot = new_value;
            return;
        }
    };
    match step {
        PathStep::Key(key) => {
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(map) = slot {
                write_slot(map.entry(key.clone()).or_insert(Value::Null), rest, new_value);
            }
        }
        PathStep::Index(idx) => {
            if slot.is_object() {
                if let Value::Object(map) = slot {
                    write_slot(
                        map.entry(idx.to_string()).or_insert(Value::Null),
                        rest,
                        new_value,
                    );
                }
            } else {
                if !slot.is_array() {
                    *slot = Value::Array(Vec::new());
                }
                if let Value::Array(arr) = slot {
                    while arr.len() <= *idx {
                        arr.push(Value::Null);
                    }
                    write_slot(&mut arr[*idx], rest, new_value);
                }
            }
        }
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────

/// Every addressable dotted path in a document, containers and leaves,
/// pre-order.
///
/// Keys that are empty or contain `.` cannot be spelled in dotted syntax;
/// they are skipped together with their subtrees, so every returned path
/// resolves in the same document.
///
/// # Example
///
/// ```
/// use databag_dot_path::enumerate_paths;
/// use serde_json::json;
///
/// let doc = json!({"contacts": [{"email": "a@x.com"}]});
/// assert_eq!(
///     enumerate_paths(&doc),
///     vec!["contacts", "contacts.0", "contacts.0.email"]
/// );
/// ```
pub fn enumerate_paths(doc: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(doc, "", &mut paths);
    paths
}

fn collect_paths(node: &Value, prefix: &str, paths: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                if key.is_empty() || key.contains('.') {
                    continue;
                }
                let path = join_segment(prefix, key);
                paths.push(path.clone());
                collect_paths(child, &path, paths);
            }
        }
        Value::Array(arr) => {
            for (idx, child) in arr.iter().enumerate() {
                let path = join_segment(prefix, &idx.to_string());
                paths.push(path.clone());
                collect_paths(child, &path, paths);
            }
        }
        _ => {}
    }
}

fn join_segment(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

//! Command-line front ends for the change-overlay store.
//!
//! Provides the core logic used by the binary entry points:
//! - `databag-get`   — look up a dot-path in a JSON document
//! - `databag-apply` — apply a set of dot-path edits to a JSON document

use serde_json::Value;

use crate::store::DataBag;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Store(String),
    Edits(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)  => write!(f, "{e}"),
            CliError::Store(e) => write!(f, "{e}"),
            CliError::Edits(e) => write!(f, "Invalid edits: {e}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

// ── databag-get ───────────────────────────────────────────────────────────

/// Look up a dot-path in a JSON document.
///
/// `doc_json`: the document as a JSON string (the root must be an object).
/// `path`: the dot-path (e.g., `user.tags.0`); the empty path reads the
/// whole document.
///
/// Returns the found value as a pretty-printed JSON string, or the literal
/// `undefined` when the path does not resolve. A miss is not an error.
pub fn lookup_path(doc_json: &str, path: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let bag = DataBag::with_initial_data(doc)
        .map_err(|e| CliError::Store(e.to_string()))?;
    match bag.current_value(path) {
        Some(value) => Ok(serde_json::to_string_pretty(&value)?),
        None => Ok("undefined".to_string()),
    }
}

// ── databag-apply ─────────────────────────────────────────────────────────

/// Apply a set of dot-path edits to a JSON document.
///
/// `doc_json`: the document as a JSON string (the root must be an object).
/// `edits_json`: a JSON object mapping dot-paths to replacement values;
/// edits run in the order they appear in the text.
///
/// Returns the merged document as a pretty-printed JSON string. The edits
/// go through a [`DataBag`], so writes that match the document record no
/// change and containers missing along a path are created.
pub fn apply_edits(doc_json: &str, edits_json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let edits: Value = serde_json::from_str(edits_json)?;
    let entries = match edits {
        Value::Object(map) => map,
        _ => return Err(CliError::Edits("expected an object of path: value".to_string())),
    };

    let mut bag = DataBag::with_initial_data(doc)
        .map_err(|e| CliError::Store(e.to_string()))?;
    for (path, value) in entries {
        bag.set_value(&path, value)
            .map_err(|e| CliError::Store(e.to_string()))?;
    }
    Ok(serde_json::to_string_pretty(&bag.current_data())?)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── databag-get ────────────────────────────────────────────────────────

    #[test]
    fn lookup_nested_value() {
        let doc = r#"{"user":{"name":"Anna","tags":["a","b"]}}"#;
        let out = lookup_path(doc, "user.name").unwrap();
        assert_eq!(out.trim(), "\"Anna\"");
    }

    #[test]
    fn lookup_list_element() {
        let doc = r#"{"user":{"tags":["a","b"]}}"#;
        let out = lookup_path(doc, "user.tags.1").unwrap();
        assert_eq!(out.trim(), "\"b\"");
    }

    #[test]
    fn lookup_empty_path_reads_the_root() {
        let doc = r#"{"a":1}"#;
        let out = lookup_path(doc, "").unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn lookup_miss_prints_undefined() {
        let doc = r#"{"a":1}"#;
        assert_eq!(lookup_path(doc, "z").unwrap(), "undefined");
        assert_eq!(lookup_path(doc, "a.b.c").unwrap(), "undefined");
    }

    #[test]
    fn lookup_rejects_non_mapping_documents() {
        let err = lookup_path("[1,2]", "0").unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
        assert_eq!(err.to_string(), "INVALID_INITIAL_DATA");
    }

    // ── databag-apply ──────────────────────────────────────────────────────

    #[test]
    fn apply_single_edit() {
        let doc   = r#"{"user":{"city":"Stockholm"}}"#;
        let edits = r#"{"user.city":"Uppsala"}"#;
        let out = apply_edits(doc, edits).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["user"]["city"], "Uppsala");
    }

    #[test]
    fn apply_creates_missing_containers() {
        let out = apply_edits("{}", r#"{"contacts.0.email":"a@x.com"}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"contacts": [{"email": "a@x.com"}]}));
    }

    #[test]
    fn apply_keeps_document_key_order() {
        let out = apply_edits(r#"{"a":1,"b":2,"c":3}"#, r#"{"b":9}"#).unwrap();
        let a = out.find("\"a\"").unwrap();
        let b = out.find("\"b\"").unwrap();
        let c = out.find("\"c\"").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn apply_runs_edits_in_textual_order() {
        let out = apply_edits("{}", r#"{"a":{"b":1},"a.b":2}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v, serde_json::json!({"a": {"b": 2}}));
    }

    #[test]
    fn apply_rejects_empty_paths() {
        let err = apply_edits(r#"{"a":1}"#, r#"{"":5}"#).unwrap_err();
        assert_eq!(err.to_string(), "EMPTY_PATH");
    }

    #[test]
    fn apply_rejects_non_object_edits() {
        let err = apply_edits("{}", "[1,2]").unwrap_err();
        assert!(matches!(err, CliError::Edits(_)));
    }

    #[test]
    fn apply_rejects_malformed_json() {
        assert!(matches!(apply_edits("{", "{}"), Err(CliError::Json(_))));
        assert!(matches!(apply_edits("{}", "{"), Err(CliError::Json(_))));
    }
}

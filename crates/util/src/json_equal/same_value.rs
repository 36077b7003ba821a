use serde_json::Value;

use super::deep_equal;

/// Compare two possibly-absent values the way the overlay store does.
///
/// "No value at this path" (`None`) and an explicit null are
/// interchangeable here: writing null into a slot the snapshot never had
/// is not a change, and reverting an edit to null matches an absent
/// original. Present non-null operands fall through to [`deep_equal`].
///
/// # Examples
///
/// ```
/// use databag_util::json_equal::has_same_value;
/// use serde_json::json;
///
/// assert!(has_same_value(None, Some(&json!(null))));
/// assert!(!has_same_value(None, Some(&json!(""))));
/// assert!(has_same_value(Some(&json!({"a": 1})), Some(&json!({"a": 1}))));
/// ```
pub fn has_same_value(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => true,
        (None | Some(Value::Null), _) | (_, None | Some(Value::Null)) => false,
        (Some(a), Some(b)) => deep_equal(a, b),
    }
}

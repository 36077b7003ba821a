use serde_json::Value;

/// Strict deep structural equality over two JSON values.
///
/// Differing kinds are never equal (no coercion; `"1"` is not `1` and
/// `0` is not `false`). Scalars compare by type and value. Lists are
/// equal iff they have the same length and are pairwise equal in order.
/// Mappings are equal iff they have the same key set and every key's
/// value is equal; key order never matters.
///
/// # Examples
///
/// ```
/// use databag_util::json_equal::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(
///     &json!({"city": "Stockholm", "zip": "111 22"}),
///     &json!({"zip": "111 22", "city": "Stockholm"}),
/// ));
/// assert!(!deep_equal(&json!("1"), &json!(1)));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, value)| match b.get(key) {
                    Some(other) => deep_equal(value, other),
                    None => false,
                })
        }
        _ => false,
    }
}

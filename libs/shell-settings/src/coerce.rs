//! Value coercions referenced by the schema table

use serde_json::Value;

/// Normalises a raw persisted value.
///
/// Returning `None` rejects the value; the caller keeps whatever the
/// setting currently holds (normally its default). Coercions must be
/// idempotent over their valid domain so that a saved document parses back
/// to itself.
pub type Coercion = fn(&Value) -> Option<Value>;

/// Accepts a fraction or a percentage and yields a fraction.
///
/// Numbers above 1 are read as percentages and divided by 100; anything at
/// or below 1 passes through untouched, including its integer/float form.
/// The valid domain is `[0, 100]`: a value such as 150 becomes 1.5, which is
/// outside the unit range and is not normalised again.
pub fn percent_to_unit(raw: &Value) -> Option<Value> {
    let n = raw.as_f64()?;
    if n > 1.0 {
        serde_json::Number::from_f64(n / 100.0).map(Value::Number)
    } else {
        Some(raw.clone())
    }
}

/// Loose truthiness used when folding legacy flags.
///
/// Older documents stored flags written by a dynamically typed front end,
/// so `1`, `"yes"` and non-empty containers all count as set.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

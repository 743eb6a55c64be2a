//! Quantity coercion for alert payloads.

use serde_json::Value;

/// Coerce a raw `qty` value into a strictly positive share count.
///
/// Accepted inputs:
/// - JSON integers
/// - JSON floats, truncated toward zero
/// - strings holding a base-10 integer, surrounding whitespace allowed
///
/// Booleans, null, arrays and objects are never coerced. Zero, negative and
/// out-of-range results yield `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_quantity(value: &Value) -> Option<u64> {
    let qty: i128 = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i128::from(i)
            } else if let Some(u) = n.as_u64() {
                i128::from(u)
            } else {
                let f = n.as_f64()?;
                if !f.is_finite() {
                    return None;
                }
                f.trunc() as i128
            }
        }
        Value::String(s) => s.trim().parse::<i128>().ok()?,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };

    u64::try_from(qty).ok().filter(|q| *q > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(10), Some(10); "integer")]
    #[test_case(json!("10"), Some(10); "numeric string")]
    #[test_case(json!(" 7 "), Some(7); "padded string")]
    #[test_case(json!("+3"), Some(3); "explicit plus sign")]
    #[test_case(json!(10.7), Some(10); "float truncates")]
    #[test_case(json!(u64::MAX), Some(u64::MAX); "largest quantity")]
    #[test_case(json!(0), None; "zero")]
    #[test_case(json!(-5), None; "negative")]
    #[test_case(json!(0.5), None; "float truncating to zero")]
    #[test_case(json!("abc"), None; "non numeric string")]
    #[test_case(json!("10.0"), None; "decimal string")]
    #[test_case(json!(""), None; "empty string")]
    #[test_case(json!(true), None; "boolean")]
    #[test_case(json!(null), None; "null")]
    #[test_case(json!([5]), None; "array")]
    #[test_case(json!({"qty": 5}), None; "object")]
    #[test_case(json!("99999999999999999999999"), None; "overflow")]
    fn coerce(value: Value, expected: Option<u64>) {
        assert_eq!(coerce_quantity(&value), expected);
    }
}

pub mod dataset;
pub mod field;
pub mod format;
mod record;
pub mod summary;

pub use dataset::Dataset;
pub use field::{FieldKind, FieldValue, SortField};
pub use record::Record;
pub use summary::{Summary, SummaryStats};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Helper to deserialize a record id as either an integer, a float or a numeric string.
///
/// Spreadsheet exports frequently write `1.0` for integer ids. Anything that is not a
/// number becomes `0` rather than failing the whole document.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, float or numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(i64::try_from(value).unwrap_or(i64::MAX))
        }

        fn visit_f64<E>(self, value: f64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(if value.is_finite() { value as i64 } else { 0 })
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v as i64)
                .unwrap_or(0))
        }

        fn visit_unit<E>(self) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_bool<E>(self, _value: bool) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize an optional number leniently.
///
/// Numbers pass through, numeric strings are parsed, and everything else
/// (null, `"N/A"`, objects, non-finite values) is treated as missing.
pub(crate) fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Helper to deserialize an optional text field leniently.
///
/// Numbers and booleans are stringified; empty strings count as missing.
pub(crate) fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value).filter(|s| !s.is_empty()))
}

/// Like [`deserialize_lenient_text`], but an empty string stays a present
/// value. Used for sortable text fields, where `""` orders before any other
/// text while missing values go last.
pub(crate) fn deserialize_sortable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

//! Token categories: the coarse shape shared by a JSON node and the type an
//! alternative would serialize as.
//!
//! Both halves of the classifier must agree. A value of type `T` serialized by
//! serde_json and run back through [`classify_node`] lands in
//! [`classify_type::<T>()`](classify_type), with two deliberate exceptions:
//!
//! - strings and string-backed enums share [`Category::StringOrEnum`]; the
//!   alternative's own type decides how the text is read;
//! - a `String` holding a date-time reclassifies as [`Category::Date`], which
//!   the inferred decoder resolves with its date fallback.

use crate::alternative::Alternative;
use crate::options::DecodeOptions;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// Coarse semantic category of a node or of an alternative type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Object,
    /// Plain text and enums serialized by variant name.
    StringOrEnum,
    Integer,
    Float,
    Boolean,
    /// ISO 8601 date-times carried as strings.
    Date,
    /// Nodes and types the union codecs never select (null, arrays, `char`).
    Unsupported,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Object => "object",
            Category::StringOrEnum => "string-or-enum",
            Category::Integer => "integer",
            Category::Float => "float",
            Category::Boolean => "boolean",
            Category::Date => "date",
            Category::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a node with the default [`DecodeOptions`].
///
/// # Examples
///
/// ```
/// use oneof_serde::{classify_node, Category};
/// use serde_json::json;
///
/// assert_eq!(classify_node(&json!(2)), Category::Integer);
/// assert_eq!(classify_node(&json!(90.0)), Category::Float);
/// assert_eq!(classify_node(&json!("Petrol")), Category::StringOrEnum);
/// assert_eq!(classify_node(&json!("2021-01-20T12:00:00Z")), Category::Date);
/// assert_eq!(classify_node(&json!(null)), Category::Unsupported);
/// ```
pub fn classify_node(node: &Value) -> Category {
    classify_node_with(node, &DecodeOptions::default())
}

/// Classify a node, consulting `options` for how date-like strings are read.
pub fn classify_node_with(node: &Value, options: &DecodeOptions) -> Category {
    match node {
        Value::Object(_) => Category::Object,
        Value::String(text) if options.detects_dates() && Timestamp::parse(text).is_some() => {
            Category::Date
        }
        Value::String(_) => Category::StringOrEnum,
        // serde_json stores a number as f64 only when the source had a
        // fraction or exponent, so `90.0` stays a float and `90` an integer.
        Value::Number(n) if n.is_f64() => Category::Float,
        Value::Number(_) => Category::Integer,
        Value::Bool(_) => Category::Boolean,
        Value::Null | Value::Array(_) => Category::Unsupported,
    }
}

/// The category a value of `T` produces on the wire.
pub fn classify_type<T: Alternative>() -> Category {
    T::CATEGORY
}

/// A parsed date-time string, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timestamp {
    Offset(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Parse `YYYY-MM-DDTHH:MM:SS[.fff][offset]`. With an offset the date and
    /// time may be separated by `T`, `t` or a space, as RFC 3339 allows.
    /// Strings without an offset are left to chrono's `NaiveDateTime` parser.
    /// Date-only strings and other ISO 8601 shapes are left as text.
    pub(crate) fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        // Cheap shape check so ordinary strings never reach chrono.
        if bytes.len() < 19
            || bytes[4] != b'-'
            || bytes[7] != b'-'
            || !matches!(bytes[10], b'T' | b't' | b' ')
        {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Timestamp::Offset(dt));
        }
        text.parse::<NaiveDateTime>().ok().map(Timestamp::Naive)
    }
}

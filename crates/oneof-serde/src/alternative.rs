//! The [`Alternative`] trait: what a type must provide to appear in a
//! shape-inferred union.
//!
//! Primitive, text and date-time types are covered here. Application types
//! opt in with a one-line impl naming their category; hydration then goes
//! through serde:
//!
//! ```
//! use oneof_serde::{Alternative, Category};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! enum Fuel { Petrol, Diesel }
//!
//! impl Alternative for Fuel {
//!     const CATEGORY: Category = Category::StringOrEnum;
//! }
//! ```

use crate::category::{classify_node, Category, Timestamp};
use crate::error::{OneOfError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A type that can be selected as one alternative of a shape-inferred union.
pub trait Alternative: Serialize + DeserializeOwned {
    /// The category this type serializes as. Read once per union shape.
    const CATEGORY: Category;

    /// Build a value from a node whose category already matched
    /// [`Self::CATEGORY`].
    ///
    /// The default delegates to serde, which reads enums by exact variant name
    /// and objects field by field. Scalar impls override it with permissive
    /// conversions.
    fn from_node(node: Value) -> Result<Self> {
        Ok(serde_json::from_value(node)?)
    }

    /// Serialize a value of this alternative as a node.
    fn to_node(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn coerce_error(node: &Value, target: &'static str) -> OneOfError {
    OneOfError::Coerce {
        category: classify_node(node),
        target,
    }
}

// Integer and float alternatives accept any JSON number and convert with `as`:
// floats truncate toward zero, out-of-range values saturate or wrap exactly as
// Rust's numeric casts do. Bounds are the caller's business.
//
// JSON has no NaN or infinity and serde_json writes them as `null`, which
// would decode back as absent. Encoding such a float is a `Coerce` error.
// Every integer widens to a finite f64, so the check only bites floats.
macro_rules! numeric_alternative {
    ($category:expr => $($ty:ty),+ $(,)?) => {$(
        impl Alternative for $ty {
            const CATEGORY: Category = $category;

            fn from_node(node: Value) -> Result<Self> {
                let Value::Number(n) = &node else {
                    return Err(coerce_error(&node, stringify!($ty)));
                };
                if let Some(v) = n.as_i64() {
                    Ok(v as $ty)
                } else if let Some(v) = n.as_u64() {
                    Ok(v as $ty)
                } else if let Some(v) = n.as_f64() {
                    Ok(v as $ty)
                } else {
                    Err(coerce_error(&node, stringify!($ty)))
                }
            }

            fn to_node(&self) -> Result<Value> {
                if !(*self as f64).is_finite() {
                    return Err(OneOfError::Coerce {
                        category: $category,
                        target: stringify!($ty),
                    });
                }
                Ok(serde_json::to_value(self)?)
            }
        }
    )+};
}

numeric_alternative!(Category::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_alternative!(Category::Float => f32, f64);

impl Alternative for bool {
    const CATEGORY: Category = Category::Boolean;

    fn from_node(node: Value) -> Result<Self> {
        node.as_bool().ok_or_else(|| coerce_error(&node, "bool"))
    }
}

impl Alternative for String {
    const CATEGORY: Category = Category::StringOrEnum;

    fn from_node(node: Value) -> Result<Self> {
        match node {
            Value::String(text) => Ok(text),
            other => Err(coerce_error(&other, "String")),
        }
    }
}

fn timestamp(node: &Value, target: &'static str) -> Result<Timestamp> {
    node.as_str()
        .and_then(Timestamp::parse)
        .ok_or_else(|| coerce_error(node, target))
}

impl Alternative for DateTime<Utc> {
    const CATEGORY: Category = Category::Date;

    fn from_node(node: Value) -> Result<Self> {
        Ok(match timestamp(&node, "DateTime<Utc>")? {
            Timestamp::Offset(dt) => dt.with_timezone(&Utc),
            Timestamp::Naive(naive) => naive.and_utc(),
        })
    }
}

impl Alternative for DateTime<FixedOffset> {
    const CATEGORY: Category = Category::Date;

    fn from_node(node: Value) -> Result<Self> {
        Ok(match timestamp(&node, "DateTime<FixedOffset>")? {
            Timestamp::Offset(dt) => dt,
            Timestamp::Naive(naive) => naive.and_utc().fixed_offset(),
        })
    }
}

impl Alternative for NaiveDateTime {
    const CATEGORY: Category = Category::Date;

    fn from_node(node: Value) -> Result<Self> {
        Ok(match timestamp(&node, "NaiveDateTime")? {
            Timestamp::Offset(dt) => dt.naive_utc(),
            Timestamp::Naive(naive) => naive,
        })
    }
}

// Representable, but no node ever classifies into them.
impl Alternative for char {
    const CATEGORY: Category = Category::Unsupported;
}

impl Alternative for () {
    const CATEGORY: Category = Category::Unsupported;
}

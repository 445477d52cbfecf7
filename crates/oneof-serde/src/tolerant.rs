//! Serde `with` adapters giving union-typed fields absent-on-mismatch
//! behaviour.
//!
//! The plain `Deserialize` impls on union types are strict: serde has no way
//! to say "this field holds nothing I recognise" other than an error. Fields
//! declared as `Option<U>` (or `Option<Vec<U>>` with [`seq`]) and routed
//! through these adapters instead decode unrecognised nodes to `None` and
//! leave the rest of the document intact.
//!
//! ```
//! use oneof_serde::{tolerant, Alternative, Category, OneOf2};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! enum Fuel { Petrol, Gas }
//!
//! impl Alternative for Fuel {
//!     const CATEGORY: Category = Category::StringOrEnum;
//! }
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct EngineDetails {
//!     #[serde(default, with = "tolerant")]
//!     fuel: Option<OneOf2<i32, Fuel>>,
//!     #[serde(default, with = "tolerant::seq")]
//!     alternatives: Option<Vec<OneOf2<i32, Fuel>>>,
//! }
//!
//! let details: EngineDetails =
//!     serde_json::from_str(r#"{"fuel":true,"alternatives":[1,"Gas",false]}"#).unwrap();
//! assert_eq!(details.fuel, None);
//! assert_eq!(
//!     details.alternatives,
//!     Some(vec![OneOf2::T0(1), OneOf2::T1(Fuel::Gas)])
//! );
//! ```

use crate::error::Result;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::Value;

/// Node-level codec shared by both union families.
///
/// Implemented for [`OneOf1`](crate::OneOf1) … [`OneOf4`](crate::OneOf4) via
/// [`crate::inferred`], and for every [`tagged_union!`](crate::tagged_union)
/// via [`crate::tagged`].
pub trait UnionCodec: Sized {
    fn encode_node(&self) -> Result<Value>;

    /// `Ok(None)` when the node holds no declared alternative.
    fn decode_node(node: Value) -> Result<Option<Self>>;
}

pub fn serialize<U, S>(value: &Option<U>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    U: UnionCodec,
    S: Serializer,
{
    match value {
        Some(union) => union
            .encode_node()
            .map_err(<S::Error as ser::Error>::custom)?
            .serialize(serializer),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, U, D>(deserializer: D) -> std::result::Result<Option<U>, D::Error>
where
    U: UnionCodec,
    D: Deserializer<'de>,
{
    let node = Value::deserialize(deserializer)?;
    U::decode_node(node).map_err(de::Error::custom)
}

/// The same behaviour for optional collections of unions.
///
/// A non-array node decodes to `None`; inside an array, elements that match
/// no alternative are dropped.
pub mod seq {
    use super::UnionCodec;
    use crate::sequence::{decode_elements, encode_elements};
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{self, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<C, S>(value: &Option<C>, serializer: S) -> Result<S::Ok, S::Error>
    where
        C: IntoIterator,
        C::Item: UnionCodec,
        for<'a> &'a C: IntoIterator<Item = &'a C::Item>,
        S: Serializer,
    {
        match value {
            Some(unions) => encode_elements(unions, <C::Item as UnionCodec>::encode_node)
                .map_err(<S::Error as ser::Error>::custom)?
                .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, C, D>(deserializer: D) -> Result<Option<C>, D::Error>
    where
        C: IntoIterator + FromIterator<<C as IntoIterator>::Item>,
        C::Item: UnionCodec,
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => {
                decode_elements::<C::Item, C, _>(items, <C::Item as UnionCodec>::decode_node)
                    .map(Some)
                    .map_err(de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

//! Case-tagged codec: unions whose alternatives name themselves on the wire.
//!
//! Each alternative is a *case*: a struct implementing [`Case`], whose
//! [`Case::NAME`] is its own type name. A tagged union serializes as the
//! active case's object with a leading `"Value"` tag:
//!
//! ```json
//! {"Value":"Started","Readiness":20}
//! ```
//!
//! Decoding reads the tag and walks the declared cases in order; the first
//! case whose name equals the tag exactly is hydrated from the remaining
//! fields. An object without a tag, or with a tag no case declares, decodes to
//! `Ok(None)` so that documents written with newer cases still load. Nodes
//! that are not objects also decode to `Ok(None)`.
//!
//! Unions are declared with [`tagged_union!`](crate::tagged_union) and cases
//! named with [`cases!`](crate::cases):
//!
//! ```
//! use oneof_serde::{cases, tagged, tagged_union};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! pub struct Waiting {}
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! pub struct Running {}
//!
//! cases!(Waiting, Running);
//!
//! tagged_union! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum JobStatus {
//!         Waiting(Waiting),
//!         Running(Running),
//!     }
//! }
//!
//! let node = tagged::encode(&JobStatus::Running(Running {})).unwrap();
//! assert_eq!(node, json!({"Value": "Running"}));
//!
//! let status: Option<JobStatus> = tagged::decode(json!({"Value": "Waiting"})).unwrap();
//! assert_eq!(status, Some(JobStatus::Waiting(Waiting {})));
//!
//! let status: Option<JobStatus> = tagged::decode(json!({"Value": "Paused"})).unwrap();
//! assert_eq!(status, None);
//! ```

use crate::category::classify_node;
use crate::error::{OneOfError, Result};
use crate::sequence::{decode_elements, encode_elements};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Name of the field carrying a case's tag.
pub const TAG_FIELD: &str = "Value";

/// An alternative of a tagged union.
///
/// `NAME` is written to [`TAG_FIELD`] on every encode, whatever the case's
/// own serialization says, so the name a case travels under is always the
/// one declared here.
pub trait Case: Serialize + DeserializeOwned {
    const NAME: &'static str;
}

// Bare text can sit next to real cases. It serializes without a tag, so a
// document holding it decodes to `None`.
impl Case for String {
    const NAME: &'static str = "String";
}

/// A union of [`Case`] types, usually generated by
/// [`tagged_union!`](crate::tagged_union).
pub trait TaggedUnion: Sized {
    /// Declared case names, in declaration order.
    const CASES: &'static [&'static str];

    /// Name of the active case.
    fn case_name(&self) -> &'static str;

    /// Zero-based position of the active case.
    fn index(&self) -> usize;

    /// Serialize the active case on its own, without a tag.
    fn encode_case(&self) -> Result<Value>;

    /// Hydrate the case at `index` from an untagged node.
    fn decode_case(index: usize, node: Value) -> Result<Self>;
}

/// Encode a union as its active case, tagged.
///
/// Objects gain a leading [`TAG_FIELD`]; a case that serializes to `null`
/// becomes an object holding only the tag; anything else is written bare.
pub fn encode<U: TaggedUnion>(union: &U) -> Result<Value> {
    let name = union.case_name();
    Ok(match union.encode_case()? {
        Value::Object(fields) => Value::Object(with_tag(name, fields)),
        Value::Null => Value::Object(with_tag(name, Map::new())),
        bare => bare,
    })
}

fn with_tag(name: &str, fields: Map<String, Value>) -> Map<String, Value> {
    let mut tagged = Map::with_capacity(fields.len() + 1);
    tagged.insert(TAG_FIELD.to_string(), Value::String(name.to_string()));
    tagged.extend(fields.into_iter().filter(|(key, _)| key != TAG_FIELD));
    tagged
}

/// Encode a sequence of unions as an array of tagged cases.
pub fn encode_seq<'a, U, I>(unions: I) -> Result<Value>
where
    U: TaggedUnion + 'a,
    I: IntoIterator<Item = &'a U>,
{
    encode_elements(unions, encode::<U>)
}

/// Encode a union straight to JSON text.
pub fn to_string<U: TaggedUnion>(union: &U) -> Result<String> {
    Ok(serde_json::to_string(&encode(union)?)?)
}

/// Position of the first declared case named exactly `tag`.
pub fn resolve<U: TaggedUnion>(tag: &str) -> Option<usize> {
    U::CASES.iter().position(|&name| name == tag)
}

/// Decode a tagged object, returning `Ok(None)` for anything that is not an
/// object with a declared tag.
pub fn decode<U: TaggedUnion>(node: Value) -> Result<Option<U>> {
    let mut fields = match node {
        Value::Object(fields) => fields,
        other => {
            debug!(category = %classify_node(&other), "tagged decode needs an object");
            return Ok(None);
        }
    };
    let tag = fields.get(TAG_FIELD).and_then(Value::as_str);
    let Some(index) = tag.and_then(resolve::<U>) else {
        debug!(?tag, declared = ?U::CASES, "no declared case matches tag");
        return Ok(None);
    };
    trace!(case = U::CASES[index], index, "selected case");
    fields.remove(TAG_FIELD);
    U::decode_case(index, Value::Object(fields)).map(Some)
}

/// Decode a node that must hold one of the declared cases.
///
/// The strict counterpart of [`decode`], used by the generated `Deserialize`
/// impls: a missing or unknown tag is a [`OneOfError::UnknownCase`].
pub fn decode_required<U: TaggedUnion>(node: Value) -> Result<U> {
    let tag = node
        .get(TAG_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string);
    decode(node)?.ok_or(OneOfError::UnknownCase { tag })
}

/// Decode JSON text.
pub fn from_str<U: TaggedUnion>(json: &str) -> Result<Option<U>> {
    let node: Value = serde_json::from_str(json)?;
    decode(node)
}

/// Decode an array node element by element into any collection of unions.
///
/// Anything other than an array yields `Ok(None)`. Elements without a
/// declared tag are dropped.
pub fn decode_seq<U, C>(node: Value) -> Result<Option<C>>
where
    U: TaggedUnion,
    C: FromIterator<U>,
{
    match node {
        Value::Array(items) => decode_elements(items, decode::<U>).map(Some),
        other => {
            debug!(category = %classify_node(&other), "sequence decode needs an array");
            Ok(None)
        }
    }
}

/// Implement [`Case`] for each listed type, naming it after itself.
///
/// ```
/// use oneof_serde::{cases, Case};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Idle {}
///
/// cases!(Idle);
/// assert_eq!(<Idle as Case>::NAME, "Idle");
/// ```
#[macro_export]
macro_rules! cases {
    ($($case:ident),+ $(,)?) => {
        $(
            impl $crate::Case for $case {
                const NAME: &'static str = stringify!($case);
            }
        )+
    };
}

/// Declare a tagged union over [`Case`] types.
///
/// Generates the enum itself, its [`TaggedUnion`] and [`UnionCodec`] impls,
/// `From<Case>` for every case, and `Serialize`/`Deserialize` impls backed by
/// [`encode`] and [`decode_required`].
///
/// [`UnionCodec`]: crate::UnionCodec
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($case:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant($case)),+
        }

        impl $crate::TaggedUnion for $name {
            const CASES: &'static [&'static str] = &[$(<$case as $crate::Case>::NAME),+];

            fn case_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => <$case as $crate::Case>::NAME),+
                }
            }

            fn index(&self) -> usize {
                enum Position { $($variant),+ }
                match self {
                    $($name::$variant(_) => Position::$variant as usize),+
                }
            }

            fn encode_case(&self) -> $crate::Result<$crate::__private::serde_json::Value> {
                match self {
                    $($name::$variant(case) => Ok($crate::__private::serde_json::to_value(case)?)),+
                }
            }

            fn decode_case(
                index: usize,
                node: $crate::__private::serde_json::Value,
            ) -> $crate::Result<Self> {
                enum Position { $($variant),+ }
                $(
                    if index == Position::$variant as usize {
                        let case: $case = $crate::__private::serde_json::from_value(node)?;
                        return Ok($name::$variant(case));
                    }
                )+
                Err($crate::OneOfError::IndexOutOfRange {
                    index,
                    arity: <Self as $crate::TaggedUnion>::CASES.len(),
                })
            }
        }

        impl $crate::UnionCodec for $name {
            fn encode_node(&self) -> $crate::Result<$crate::__private::serde_json::Value> {
                $crate::tagged::encode(self)
            }

            fn decode_node(
                node: $crate::__private::serde_json::Value,
            ) -> $crate::Result<::core::option::Option<Self>> {
                $crate::tagged::decode(node)
            }
        }

        $(
            impl ::core::convert::From<$case> for $name {
                fn from(case: $case) -> Self {
                    $name::$variant(case)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let node = $crate::tagged::encode(self)
                    .map_err(<S::Error as $crate::__private::serde::ser::Error>::custom)?;
                $crate::__private::serde::Serialize::serialize(&node, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let node = <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                $crate::tagged::decode_required(node)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

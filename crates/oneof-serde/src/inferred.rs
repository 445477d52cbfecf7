//! Shape-inferring codec: unions whose alternatives carry no tag.
//!
//! On the wire an inferred union is exactly its active alternative: a bare
//! number, string, boolean or object. Decoding recovers the alternative from
//! the node alone:
//!
//! 1. classify the node ([`classify_node_with`]); unsupported nodes (null,
//!    arrays) match nothing;
//! 2. pick the **first** declared alternative with the same category, so
//!    declaration order settles ties such as two integer widths;
//! 3. a date-time string with no date alternative falls back to the first
//!    string-or-enum alternative; if that alternative rejects the text (an
//!    enum with no such label) the result is absent;
//! 4. hand the node to that alternative ([`Alternative::from_node`]).
//!
//! When no alternative fits, the result is `Ok(None)` rather than an error, so
//! payloads produced by a newer or older set of alternatives degrade to
//! "absent" instead of failing the surrounding document. Only a failure to
//! build the selected alternative (a malformed object, an unknown enum label)
//! is reported as an error.
//!
//! # Example
//!
//! ```
//! use oneof_serde::{inferred, Alternative, Category, OneOf2};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! enum Fuel { Petrol, Electricity }
//!
//! impl Alternative for Fuel {
//!     const CATEGORY: Category = Category::StringOrEnum;
//! }
//!
//! let fuel: Option<OneOf2<i32, Fuel>> = inferred::decode(json!("Petrol")).unwrap();
//! assert_eq!(fuel, Some(OneOf2::T1(Fuel::Petrol)));
//!
//! let fuel: Option<OneOf2<i32, Fuel>> = inferred::decode(json!(true)).unwrap();
//! assert_eq!(fuel, None);
//! ```
//!
//! [`Alternative::from_node`]: crate::Alternative::from_node

use crate::category::{classify_node_with, Category};
use crate::error::{OneOfError, Result};
use crate::options::DecodeOptions;
use crate::sequence::{decode_elements, encode_elements};
use serde_json::Value;
use tracing::{debug, trace};

/// A union decoded by node shape. Implemented for [`OneOf1`] through
/// [`OneOf4`].
///
/// [`OneOf1`]: crate::OneOf1
/// [`OneOf4`]: crate::OneOf4
pub trait InferredUnion: Sized {
    /// Category of each declared alternative, in declaration order.
    const CATEGORIES: &'static [Category];

    /// Zero-based position of the active alternative.
    fn index(&self) -> usize;

    /// Serialize the active alternative on its own.
    fn encode_active(&self) -> Result<Value>;

    /// Build the alternative at `index` from `node`.
    fn from_index_and_node(index: usize, node: Value) -> Result<Self>;
}

/// Position of the alternative that a node of `category` selects, if any.
///
/// ```
/// use oneof_serde::{inferred, Category, OneOf3};
///
/// type Angle = OneOf3<f64, String, i8>;
/// assert_eq!(inferred::resolve::<Angle>(Category::Float), Some(0));
/// assert_eq!(inferred::resolve::<Angle>(Category::Integer), Some(2));
/// assert_eq!(inferred::resolve::<Angle>(Category::Date), Some(1));
/// assert_eq!(inferred::resolve::<Angle>(Category::Boolean), None);
/// ```
pub fn resolve<U: InferredUnion>(category: Category) -> Option<usize> {
    if category == Category::Unsupported {
        return None;
    }
    let first = |wanted: Category| U::CATEGORIES.iter().position(|&c| c == wanted);
    first(category).or_else(|| match category {
        Category::Date => first(Category::StringOrEnum),
        _ => None,
    })
}

/// Encode a union as its bare active alternative.
pub fn encode<U: InferredUnion>(union: &U) -> Result<Value> {
    union.encode_active()
}

/// Encode a sequence of unions as an array of bare alternatives, in order.
pub fn encode_seq<'a, U, I>(unions: I) -> Result<Value>
where
    U: InferredUnion + 'a,
    I: IntoIterator<Item = &'a U>,
{
    encode_elements(unions, U::encode_active)
}

/// Encode a union straight to JSON text.
pub fn to_string<U: InferredUnion>(union: &U) -> Result<String> {
    Ok(serde_json::to_string(&encode(union)?)?)
}

/// Decode a node with the default [`DecodeOptions`].
pub fn decode<U: InferredUnion>(node: Value) -> Result<Option<U>> {
    decode_with(node, &DecodeOptions::default())
}

/// Decode a node, returning `Ok(None)` when no declared alternative matches
/// its category.
pub fn decode_with<U: InferredUnion>(node: Value, options: &DecodeOptions) -> Result<Option<U>> {
    let category = classify_node_with(&node, options);
    let Some(index) = resolve::<U>(category) else {
        debug!(%category, declared = ?U::CATEGORIES, "no alternative accepts node");
        return Ok(None);
    };
    trace!(%category, index, "selected alternative");
    match U::from_index_and_node(index, node) {
        Ok(union) => Ok(Some(union)),
        // A date string reached a string-or-enum alternative only through the
        // fallback; an enum that rejects it means nothing matched.
        Err(err) if U::CATEGORIES[index] != category => {
            debug!(%category, index, error = %err, "fallback alternative rejected node");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Decode a node that must hold one of the alternatives.
///
/// The strict counterpart of [`decode`]: a node no alternative accepts is a
/// [`OneOfError::NoMatchingAlternative`]. This is what the `Deserialize`
/// impls use, since serde has no notion of an absent result.
pub fn decode_required<U: InferredUnion>(node: Value) -> Result<U> {
    let category = classify_node_with(&node, &DecodeOptions::default());
    decode(node)?.ok_or(OneOfError::NoMatchingAlternative { category })
}

/// Decode JSON text with the default [`DecodeOptions`].
pub fn from_str<U: InferredUnion>(json: &str) -> Result<Option<U>> {
    let node: Value = serde_json::from_str(json)?;
    decode(node)
}

/// Decode an array node into any collection of unions.
///
/// Anything other than an array yields `Ok(None)`. Elements that match no
/// alternative are dropped; the remaining elements keep their order.
pub fn decode_seq<U, C>(node: Value) -> Result<Option<C>>
where
    U: InferredUnion,
    C: FromIterator<U>,
{
    decode_seq_with(node, &DecodeOptions::default())
}

/// [`decode_seq`] with explicit options.
pub fn decode_seq_with<U, C>(node: Value, options: &DecodeOptions) -> Result<Option<C>>
where
    U: InferredUnion,
    C: FromIterator<U>,
{
    match node {
        Value::Array(items) => {
            decode_elements(items, |item| decode_with::<U>(item, options)).map(Some)
        }
        other => {
            let category = classify_node_with(&other, options);
            debug!(%category, "sequence decode needs an array");
            Ok(None)
        }
    }
}

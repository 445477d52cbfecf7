//! # oneof-serde
//!
//! JSON codec for **exactly-one-of-N union values**.
//!
//! A union holds one of a fixed, ordered list of alternative types. Two wire
//! encodings are supported, each with its own decoder:
//!
//! - **Case-tagged** ([`tagged`]): alternatives are case structs and the
//!   active one is written as an object with a leading `"Value"` tag naming
//!   the case: `{"Value":"Started","Readiness":20}`.
//! - **Shape-inferred** ([`inferred`]): alternatives are plain numbers,
//!   strings, string enums, booleans, date-times or objects, written bare.
//!   The decoder picks the first declared alternative whose [`Category`]
//!   matches the node.
//!
//! In both families a node that fits no declared alternative decodes to
//! `Ok(None)`; only failures inside the chosen alternative are errors.
//!
//! ## Quick start
//!
//! ```rust
//! use oneof_serde::{inferred, Alternative, Category, OneOf2};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! enum Fuel { Petrol, Diesel, Electricity }
//!
//! impl Alternative for Fuel {
//!     const CATEGORY: Category = Category::StringOrEnum;
//! }
//!
//! let fuel: Vec<OneOf2<i32, Fuel>> = inferred::decode_seq(
//!     serde_json::json!([0, "Petrol", 2, "Electricity"]),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(fuel.iter().map(|f| f.index()).collect::<Vec<_>>(), [0, 1, 0, 1]);
//!
//! let json = serde_json::to_string(&fuel).unwrap();
//! assert_eq!(json, r#"[0,"Petrol",2,"Electricity"]"#);
//! ```
//!
//! ## Modules
//!
//! - [`category`] — node and type classification
//! - [`alternative`] — [`Alternative`] impls for primitives and date-times
//! - [`one_of`] — [`OneOf1`] … [`OneOf4`]
//! - [`inferred`] — shape-inferring encode/decode
//! - [`tagged`] — case-tagged encode/decode, [`cases!`], [`tagged_union!`]
//! - [`tolerant`] — serde `with` adapters for optional union fields
//! - [`options`] — [`DecodeOptions`]
//! - [`error`] — [`OneOfError`]

pub mod alternative;
pub mod category;
pub mod error;
pub mod inferred;
pub mod one_of;
pub mod options;
mod sequence;
pub mod tagged;
pub mod tolerant;

pub use alternative::Alternative;
pub use category::{classify_node, classify_node_with, classify_type, Category};
pub use error::{OneOfError, Result};
pub use inferred::InferredUnion;
pub use one_of::{OneOf1, OneOf2, OneOf3, OneOf4};
pub use options::{DateStrings, DecodeOptions};
pub use tagged::{Case, TaggedUnion, TAG_FIELD};
pub use tolerant::UnionCodec;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

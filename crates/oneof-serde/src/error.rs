//! Error types for union encoding and decoding.
//!
//! Most "could not tell which alternative this is" outcomes are not errors at
//! all: the codec functions return `Ok(None)` for them. The variants below are
//! what remains once an alternative has been chosen, plus the strict forms
//! surfaced by the `Deserialize` impls, which have no way to say "absent".

use crate::category::Category;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a union value.
#[derive(Error, Debug)]
pub enum OneOfError {
    /// serde_json failed to serialize an alternative or to hydrate the
    /// selected alternative from its node.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No declared alternative accepts a node of this category.
    #[error("no declared alternative accepts a {category} node")]
    NoMatchingAlternative { category: Category },

    /// The object carries no tag, or its tag names no declared case.
    #[error("no declared case matches tag {tag:?}")]
    UnknownCase { tag: Option<String> },

    /// The node could not be converted into the selected alternative's type.
    #[error("cannot coerce a {category} node into {target}")]
    Coerce {
        category: Category,
        target: &'static str,
    },

    /// An alternative index past the end of the union's declaration.
    #[error("alternative index {index} out of range for a union of {arity}")]
    IndexOutOfRange { index: usize, arity: usize },
}

/// Convenience alias used throughout oneof-serde.
pub type Result<T> = std::result::Result<T, OneOfError>;

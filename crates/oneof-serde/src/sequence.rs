//! Element-wise helpers shared by both union families' sequence paths.

use crate::error::Result;
use serde_json::Value;
use tracing::debug;

/// Decode every element independently and collect the ones that matched.
///
/// Elements whose decoder returns `Ok(None)` are skipped; the first error
/// aborts the whole sequence.
pub(crate) fn decode_elements<U, C, F>(items: Vec<Value>, mut decode: F) -> Result<C>
where
    C: FromIterator<U>,
    F: FnMut(Value) -> Result<Option<U>>,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match decode(item) {
            Ok(Some(union)) => Some(Ok(union)),
            Ok(None) => {
                debug!(position, "skipping sequence element with no matching alternative");
                None
            }
            Err(err) => Some(Err(err)),
        })
        .collect()
}

/// Encode every element in order into an array node.
pub(crate) fn encode_elements<'a, U, I, F>(unions: I, encode: F) -> Result<Value>
where
    U: 'a,
    I: IntoIterator<Item = &'a U>,
    F: FnMut(&'a U) -> Result<Value>,
{
    unions
        .into_iter()
        .map(encode)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

//! Bounds checking for index-addressed lists.

use tracing::trace;

use crate::error::{CollectionError, Result};

/// Validates `index` against a list of `size` elements.
///
/// Returns the index as a `usize` when `0 <= index < size`. Negative and
/// past-the-end indices are rejected with
/// [`CollectionError::IndexOutOfRange`]; callers on the `Option` API turn
/// that into `None`.
pub fn check_index(index: isize, size: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(position) if position < size => Ok(position),
        _ => {
            trace!(index, size, "index out of range");
            Err(CollectionError::IndexOutOfRange { index, size })
        }
    }
}

//! Error types for collection operations.

/// Result type for fallible collection operations.
pub type Result<T> = core::result::Result<T, CollectionError>;

/// Errors reported by collection operations.
///
/// The primary list API signals absence through `Option`; this type backs
/// the bounds check and the `try_*` variants that prefer `?` propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// Index fell outside `0..size`.
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange { index: isize, size: usize },
}

impl CollectionError {
    /// Returns true if this is an out-of-range index error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, CollectionError::IndexOutOfRange { .. })
    }
}

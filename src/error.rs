//! Errors returned by tree operations.

/// Returned by operations that are only defined on a non-empty [`Tree`][crate::Tree],
/// such as [`min_value`][crate::Tree::min_value].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation requires a non-empty tree")]
pub struct EmptyTreeError;

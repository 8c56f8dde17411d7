//! Errors for dot-matrix construction and sampling.

use thiserror::Error;

/// Errors returned when building or sampling a [`DotMatrix`](crate::matrix::DotMatrix).
///
/// The decomposer itself never fails: any well-formed matrix decomposes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DotError {
    /// A size, resolution, or grid shape that cannot produce a usable matrix.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

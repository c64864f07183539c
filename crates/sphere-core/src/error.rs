//! Workspace error type.
//!
//! Sub-crates may define their own error enums and wrap `GeoError` as one
//! variant (see `sphere-route`), or return it directly.  "No path between two
//! graph nodes" is not an error anywhere in the workspace; it is a normal
//! routing outcome.

use thiserror::Error;

/// The geometric error type shared by all `sphere-*` crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Out-of-range radius, latitude, sample count, speed, too few polygon
    /// vertices, and similar caller mistakes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is mathematically undefined for these inputs
    /// (antipodal or coincident points, zero-length normal or vector sum).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Too few points, or points that do not span three dimensions, for a
    /// convex hull.
    #[error("insufficient points: {0}")]
    InsufficientPoints(String),
}

impl GeoError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeoError::InvalidArgument(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        GeoError::DegenerateInput(msg.into())
    }
}

/// Shorthand result type for all `sphere-*` crates.
pub type GeoResult<T> = Result<T, GeoError>;

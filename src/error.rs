use thiserror::Error;

/// Top-level error type for the Planar geometry library.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing figures.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
}

/// Errors raised by query operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("intersection of {lhs} with {rhs} is not supported")]
    Unsupported {
        lhs: &'static str,
        rhs: &'static str,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;

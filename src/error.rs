//! Error types for buffer allocation and shape validation

use thiserror::Error;

/// Reasons a shape is rejected before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("circle radius must not be negative (got {0})")]
    NegativeRadius(i32),

    #[error("polygon needs at least 3 vertices (got {0})")]
    TooFewVertices(usize),

    #[error("stroke thickness must be at least 1 (got {0})")]
    InvalidThickness(i32),

    #[error("rectangle size must not be negative (got {w}x{h})")]
    NegativeSize { w: i32, h: i32 },
}

/// Errors returned by the rasterizer.
///
/// Out-of-bounds coordinates are never an error: every primitive clips
/// silently at the buffer edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} pixel buffer")]
    Allocation { width: i32, height: i32 },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
}

pub type Result<T, E = RasterError> = std::result::Result<T, E>;

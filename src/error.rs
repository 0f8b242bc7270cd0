//! Error types
//!
//! Geometry errors are programming-contract violations (zero vectors,
//! out-of-range spline parameters). Puzzle errors wrap them together with
//! bad grid/surface/settings input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("cannot normalise a zero-length vector")]
    ZeroLength,
    #[error("cannot normalise a vector with non-finite length")]
    NonFinite,
    #[error("control path needs at least 2 points, got {len}")]
    PathTooShort { len: usize },
    #[error("spline parameter {t} outside [0, {max}]")]
    ParameterOutOfRange { t: f32, max: f32 },
    #[error("sample step must be finite and positive, got {0}")]
    InvalidStep(f32),
}

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("puzzle grid must have at least one row and column, got {rows}x{cols}")]
    EmptyGrid { rows: u32, cols: u32 },
    #[error("puzzle grid {rows}x{cols} exceeds the {max}x{max} limit")]
    GridTooLarge { rows: u32, cols: u32, max: u32 },
    #[error("surface size must be finite and positive, got {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

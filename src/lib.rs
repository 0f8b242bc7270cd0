//! Jigsaw Canvas - procedural jigsaw pieces you can drag around
//!
//! Core modules:
//! - `puzzle`: Deterministic piece generation (splines, shared edges, outlines, hit testing)
//! - `interact`: Pointer state and the hover/drag arbitration state machine
//! - `session`: One puzzle session, ties generation and interaction to the frame loop
//! - `settings`: Data-driven edge shape configuration

pub mod error;
pub mod interact;
pub mod puzzle;
pub mod session;
pub mod settings;
pub mod vector;

pub use error::{GeometryError, PuzzleError};
pub use session::PuzzleSession;
pub use settings::{EdgeConfig, ParamRange, PuzzleSettings};
pub use vector::Vector2Ext;

/// Puzzle configuration constants
pub mod consts {
    /// Spline parameter step used when sampling an edge into a polyline
    pub const EDGE_SAMPLE_STEP: f32 = 0.1;
    /// Range accepted for the sample step from settings
    pub const MIN_SAMPLE_STEP: f32 = 1e-3;
    pub const MAX_SAMPLE_STEP: f32 = 1.0;
    /// Upper bound on points produced when sampling one spline
    pub const MAX_EDGE_SAMPLES: usize = 100_000;
    /// Max gap allowed between consecutive edges of a piece outline
    pub const SEAM_TOLERANCE: f32 = 1e-3;

    /// Grid defaults
    pub const DEFAULT_ROWS: u32 = 8;
    pub const DEFAULT_COLS: u32 = 8;
    /// Upper bound on rows/cols accepted from settings
    pub const MAX_GRID_DIM: u32 = 64;

    /// Outline stroke widths for the renderer
    pub const STROKE_WIDTH: f64 = 2.0;
    pub const STROKE_WIDTH_HOVERED: f64 = 3.0;
}

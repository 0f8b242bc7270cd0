//! Deterministic puzzle geometry
//!
//! Everything here is a pure function of the grid, the edge settings and the
//! RNG stream:
//! - Seeded RNG only
//! - Row-major generation order
//! - No rendering or platform dependencies

pub mod edge;
pub mod hit;
pub mod lattice;
pub mod outline;
pub mod piece;
pub mod spline;

pub use edge::{ControlPath, Orientation, TabParams};
pub use hit::{Bounds, point_in_polygon};
pub use lattice::EdgeLattice;
pub use outline::{EdgeDirection, EdgeInstance, PieceOutline};
pub use piece::{Puzzle, PuzzlePiece};
pub use spline::{SampledEdge, Spline};

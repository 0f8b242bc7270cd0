//! Grid edge assembler
//!
//! Every grid line segment is generated exactly once and shared by the two
//! tiles on either side, so neighbours always interlock without gaps.
//!
//! For an R x C grid:
//! - `horizontal[y][x]`, y in 0..=R, x in 0..C
//! - `vertical[y][x]`, y in 0..R, x in 0..=C

use glam::Vec2;
use rand::Rng;

use super::edge::{ControlPath, Orientation, TabParams};
use super::spline::SampledEdge;
use crate::error::PuzzleError;
use crate::settings::EdgeConfig;

#[derive(Debug, Clone)]
pub struct EdgeLattice {
    rows: u32,
    cols: u32,
    horizontal: Vec<Vec<SampledEdge>>,
    vertical: Vec<Vec<SampledEdge>>,
}

impl EdgeLattice {
    /// Generate all shared edges for a `rows` x `cols` grid of `tile_size` tiles
    pub fn generate<R: Rng>(
        rows: u32,
        cols: u32,
        tile_size: Vec2,
        config: &EdgeConfig,
        step: f32,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::EmptyGrid { rows, cols });
        }

        let mut horizontal: Vec<Vec<SampledEdge>> = (0..=rows)
            .map(|_| Vec::with_capacity(cols as usize))
            .collect();
        let mut vertical: Vec<Vec<SampledEdge>> = (0..rows)
            .map(|_| Vec::with_capacity(cols as usize + 1))
            .collect();

        // Row-major so a given rng stream always lands on the same edges
        for y in 0..=rows {
            for x in 0..=cols {
                if x < cols {
                    let border = y == 0 || y == rows;
                    let path = edge_path(tile_size.x, Orientation::Horizontal, border, config, rng);
                    horizontal[y as usize].push(path.smooth(step)?);
                }
                if y < rows {
                    let border = x == 0 || x == cols;
                    let path = edge_path(tile_size.y, Orientation::Vertical, border, config, rng);
                    vertical[y as usize].push(path.smooth(step)?);
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            horizontal,
            vertical,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Horizontal edge on grid line `y`, column `x`
    pub fn horizontal(&self, x: u32, y: u32) -> &SampledEdge {
        &self.horizontal[y as usize][x as usize]
    }

    /// Vertical edge on grid line `x`, row `y`
    pub fn vertical(&self, x: u32, y: u32) -> &SampledEdge {
        &self.vertical[y as usize][x as usize]
    }

    pub fn top(&self, x: u32, y: u32) -> &SampledEdge {
        self.horizontal(x, y)
    }

    pub fn bottom(&self, x: u32, y: u32) -> &SampledEdge {
        self.horizontal(x, y + 1)
    }

    pub fn left(&self, x: u32, y: u32) -> &SampledEdge {
        self.vertical(x, y)
    }

    pub fn right(&self, x: u32, y: u32) -> &SampledEdge {
        self.vertical(x + 1, y)
    }

    pub fn is_border_horizontal(&self, y: u32) -> bool {
        y == 0 || y == self.rows
    }

    pub fn is_border_vertical(&self, x: u32) -> bool {
        x == 0 || x == self.cols
    }
}

fn edge_path<R: Rng>(
    length: f32,
    orientation: Orientation,
    border: bool,
    config: &EdgeConfig,
    rng: &mut R,
) -> ControlPath {
    if border {
        ControlPath::straight(length, orientation)
    } else {
        let tab = TabParams::sample(config, rng);
        ControlPath::tabbed(length, orientation, &tab)
    }
}

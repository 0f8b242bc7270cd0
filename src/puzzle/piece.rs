//! Puzzle pieces and the generated board

use glam::{UVec2, Vec2};
use rand::Rng;

use super::lattice::EdgeLattice;
use super::outline::PieceOutline;
use crate::consts::{MAX_GRID_DIM, SEAM_TOLERANCE};
use crate::error::PuzzleError;
use crate::interact::{DragStart, Interactive};
use crate::settings::EdgeConfig;

/// A draggable jigsaw piece
#[derive(Debug, Clone)]
pub struct PuzzlePiece {
    /// Grid cell (x = column, y = row)
    pub cell: UVec2,
    /// Solved position of the piece center; also where the image is anchored
    pub home: Vec2,
    /// Current world position of the piece center
    pub pos: Vec2,
    outline: PieceOutline,
}

impl PuzzlePiece {
    pub fn new(cell: UVec2, home: Vec2, outline: PieceOutline) -> Self {
        Self {
            cell,
            home,
            pos: home,
            outline,
        }
    }

    pub fn outline(&self) -> &PieceOutline {
        &self.outline
    }

    /// Where to draw the full image so this piece shows its own part of it
    pub fn image_origin(&self) -> Vec2 {
        self.pos - self.home
    }

    /// World-space outline points
    pub fn world_outline(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.outline.translated(self.pos)
    }
}

impl Interactive for PuzzlePiece {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.outline.contains(point, self.pos)
    }

    fn on_drag_start(&mut self) -> DragStart {
        DragStart::Focus
    }

    fn on_drag_move(&mut self, new_pos: Vec2) {
        self.pos = new_pos;
    }
}

/// A generated board: grid layout plus its shared edges
#[derive(Debug, Clone)]
pub struct Puzzle {
    rows: u32,
    cols: u32,
    size: Vec2,
    tile_size: Vec2,
    lattice: EdgeLattice,
}

impl Puzzle {
    /// Generate a `rows` x `cols` board covering `size`
    pub fn generate<R: Rng>(
        rows: u32,
        cols: u32,
        size: Vec2,
        config: &EdgeConfig,
        step: f32,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(PuzzleError::InvalidSurface {
                width: size.x,
                height: size.y,
            });
        }
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::EmptyGrid { rows, cols });
        }
        if rows > MAX_GRID_DIM || cols > MAX_GRID_DIM {
            return Err(PuzzleError::GridTooLarge {
                rows,
                cols,
                max: MAX_GRID_DIM,
            });
        }

        let tile_size = size / Vec2::new(cols as f32, rows as f32);
        let lattice = EdgeLattice::generate(rows, cols, tile_size, config, step, rng)?;

        log::info!(
            "Generated {}x{} puzzle, tile {:.1}x{:.1}",
            rows,
            cols,
            tile_size.x,
            tile_size.y
        );

        Ok(Self {
            rows,
            cols,
            size,
            tile_size,
            lattice,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    pub fn lattice(&self) -> &EdgeLattice {
        &self.lattice
    }

    /// Center of tile `(x, y)` in the solved layout
    pub fn tile_center(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32 + 0.5, y as f32 + 0.5) * self.tile_size
    }

    pub fn outline(&self, x: u32, y: u32) -> PieceOutline {
        PieceOutline::for_tile(&self.lattice, x, y, self.tile_size)
    }

    /// One piece per tile, row-major, each sitting at its home position
    pub fn pieces(&self) -> Vec<PuzzlePiece> {
        let mut pieces = Vec::with_capacity((self.rows * self.cols) as usize);
        for y in 0..self.rows {
            for x in 0..self.cols {
                let outline = self.outline(x, y);
                if !outline.is_closed(SEAM_TOLERANCE) {
                    log::warn!("Piece ({x},{y}) outline has seams {:?}", outline.seams());
                }
                pieces.push(PuzzlePiece::new(UVec2::new(x, y), self.tile_center(x, y), outline));
            }
        }
        pieces
    }
}

//! Piece outline builder
//!
//! A tile walks its four lattice edges clockwise (top, right, bottom, left).
//! Top and right are read forwards, bottom and left backwards, and each edge
//! is shifted from its own centered frame onto the matching side of the tile.

use glam::Vec2;

use super::hit::{Bounds, point_in_polygon_bounded};
use super::lattice::EdgeLattice;
use super::spline::SampledEdge;

/// Point order used when a tile consumes a lattice edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Forward,
    Reversed,
}

/// A borrowed lattice edge placed on one side of a tile
#[derive(Debug, Clone, Copy)]
pub struct EdgeInstance<'a> {
    pub edge: &'a SampledEdge,
    /// Edge frame origin relative to the tile center
    pub offset: Vec2,
    pub direction: EdgeDirection,
}

impl<'a> EdgeInstance<'a> {
    pub fn new(edge: &'a SampledEdge, offset: Vec2, direction: EdgeDirection) -> Self {
        Self {
            edge,
            offset,
            direction,
        }
    }

    /// Translated points in this instance's direction
    pub fn points(&self) -> Box<dyn Iterator<Item = Vec2> + 'a> {
        let offset = self.offset;
        let edge: &'a SampledEdge = self.edge;
        let points = edge.points.iter();
        match self.direction {
            EdgeDirection::Forward => Box::new(points.map(move |&p| p + offset)),
            EdgeDirection::Reversed => Box::new(points.rev().map(move |&p| p + offset)),
        }
    }

    pub fn start(&self) -> Option<Vec2> {
        self.points().next()
    }

    pub fn end(&self) -> Option<Vec2> {
        self.points().last()
    }
}

/// Closed polygon in piece-local space (first point is not repeated)
#[derive(Debug, Clone, PartialEq)]
pub struct PieceOutline {
    points: Vec<Vec2>,
    /// Index where each of top/right/bottom/left begins
    edge_starts: [usize; 4],
    bounds: Bounds,
}

impl PieceOutline {
    /// Concatenate `[top, right, bottom, left]` into one outline
    pub fn assemble(edges: [EdgeInstance<'_>; 4]) -> Self {
        let capacity = edges.iter().map(|e| e.edge.len()).sum();
        let mut points = Vec::with_capacity(capacity);
        let mut edge_starts = [0; 4];
        for (start, edge) in edge_starts.iter_mut().zip(&edges) {
            *start = points.len();
            points.extend(edge.points());
        }

        let bounds = Bounds::from_points(&points).unwrap_or(Bounds {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        });

        Self {
            points,
            edge_starts,
            bounds,
        }
    }

    /// Outline for tile `(x, y)` of a lattice with `tile_size` tiles
    pub fn for_tile(lattice: &EdgeLattice, x: u32, y: u32, tile_size: Vec2) -> Self {
        let half = tile_size * 0.5;
        Self::assemble([
            EdgeInstance::new(lattice.top(x, y), Vec2::new(0.0, -half.y), EdgeDirection::Forward),
            EdgeInstance::new(lattice.right(x, y), Vec2::new(half.x, 0.0), EdgeDirection::Forward),
            EdgeInstance::new(lattice.bottom(x, y), Vec2::new(0.0, half.y), EdgeDirection::Reversed),
            EdgeInstance::new(lattice.left(x, y), Vec2::new(-half.x, 0.0), EdgeDirection::Reversed),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Points belonging to side `index` (0 = top, 1 = right, 2 = bottom, 3 = left)
    pub fn edge(&self, index: usize) -> &[Vec2] {
        let start = self.edge_starts[index];
        let end = self
            .edge_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.points.len());
        &self.points[start..end]
    }

    /// Gap between the end of each side and the start of the next
    pub fn seams(&self) -> [f32; 4] {
        std::array::from_fn(|i| {
            let current = self.edge(i);
            let next = self.edge((i + 1) % 4);
            match (current.last(), next.first()) {
                (Some(a), Some(b)) => a.distance(*b),
                _ => f32::INFINITY,
            }
        })
    }

    /// True when every seam is within `eps`
    pub fn is_closed(&self, eps: f32) -> bool {
        self.seams().iter().all(|&gap| gap <= eps)
    }

    /// Whether world-space `point` is inside the outline placed at `offset`
    pub fn contains(&self, point: Vec2, offset: Vec2) -> bool {
        point_in_polygon_bounded(point - offset, &self.points, &self.bounds)
    }

    /// World-space points for drawing at `pos`
    pub fn translated(&self, pos: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |&p| p + pos)
    }
}

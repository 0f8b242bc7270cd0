//! Edge generator
//!
//! Builds the coarse control path for one lattice edge: a straight line for
//! the outer border, or a six-point neck-and-head path for interior edges.
//! Paths are built along +X in unit space, scaled by the edge length,
//! centered on the origin, then rotated into place.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;

use super::spline::{SampledEdge, Spline};
use crate::error::GeometryError;
use crate::settings::EdgeConfig;
use crate::vector::Vector2Ext;

/// Which lattice an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs left to right
    Horizontal,
    /// Runs top to bottom
    Vertical,
}

impl Orientation {
    /// Rotation applied to the unit-space path
    pub fn angle(self) -> f32 {
        match self {
            Orientation::Horizontal => 0.0,
            Orientation::Vertical => FRAC_PI_2,
        }
    }
}

/// Randomized tab shape, all values as fractions of the edge length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabParams {
    pub base_pos: f32,
    pub base_len: f32,
    pub tip_pos: f32,
    pub tip_len: f32,
    /// Signed: positive and negative heights bulge to opposite sides
    pub height: f32,
}

impl TabParams {
    /// Draw a tab shape from the configured ranges
    pub fn sample<R: Rng>(config: &EdgeConfig, rng: &mut R) -> Self {
        let base_pos = config.base_pos_range.sample(rng);
        let base_len = config.base_size_range.sample(rng);
        let tip_len = config.tip_size_range.sample(rng);
        let height = config.tip_height_range.sample(rng);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        Self {
            base_pos,
            base_len,
            tip_pos: base_pos,
            tip_len,
            height: height * sign,
        }
    }
}

/// Coarse polyline fed to the spline (at least two points)
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPath {
    pub points: Vec<Vec2>,
}

impl ControlPath {
    /// Border edge: a straight line of `length`, centered and rotated
    pub fn straight(length: f32, orientation: Orientation) -> Self {
        Self::from_unit(vec![Vec2::ZERO, Vec2::X], length, orientation)
    }

    /// Interior edge: neck at `base_pos`, head of `tip_len` at `height`
    pub fn tabbed(length: f32, orientation: Orientation, tab: &TabParams) -> Self {
        let half_base = tab.base_len * 0.5;
        let half_tip = tab.tip_len * 0.5;

        let unit = vec![
            Vec2::ZERO,
            Vec2::new(tab.base_pos - half_base, 0.0),
            Vec2::new(tab.tip_pos - half_tip, tab.height),
            Vec2::new(tab.tip_pos + half_tip, tab.height),
            Vec2::new(tab.base_pos + half_base, 0.0),
            Vec2::X,
        ];
        Self::from_unit(unit, length, orientation)
    }

    fn from_unit(mut points: Vec<Vec2>, length: f32, orientation: Orientation) -> Self {
        let shift = Vec2::new(length * 0.5, 0.0);
        let rot = orientation.angle();
        for p in &mut points {
            *p *= Vec2::splat(length);
            *p -= shift;
            p.pivot(rot);
        }
        Self { points }
    }

    pub fn to_spline(&self) -> Result<Spline, GeometryError> {
        Spline::new(&self.points)
    }

    /// Smooth and sample into the final edge polyline
    pub fn smooth(&self, step: f32) -> Result<SampledEdge, GeometryError> {
        self.to_spline()?.sample(step)
    }
}

//! Catmull-Rom spline through a coarse control path
//!
//! The control points are padded by repeating the first and last point twice,
//! so the curve starts exactly on the first point, ends exactly on the last,
//! and never overshoots past either end.

use glam::Vec2;

use crate::consts::MAX_EDGE_SAMPLES;
use crate::error::GeometryError;

/// Number of copies added at each end of the control path
const PAD: usize = 2;

/// A smooth curve parameterized by `t ∈ [0, N-1]` for an `N`-point path
#[derive(Debug, Clone)]
pub struct Spline {
    /// Padded control points (`N + 2 * PAD` entries)
    points: Vec<Vec2>,
}

impl Spline {
    pub fn new(path: &[Vec2]) -> Result<Self, GeometryError> {
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return Err(GeometryError::PathTooShort { len: path.len() });
        };
        if path.len() < 2 {
            return Err(GeometryError::PathTooShort { len: path.len() });
        }

        let mut points = Vec::with_capacity(path.len() + 2 * PAD);
        points.extend([first; PAD]);
        points.extend_from_slice(path);
        points.extend([last; PAD]);
        Ok(Self { points })
    }

    /// Number of original (unpadded) control points
    #[inline]
    pub fn control_len(&self) -> usize {
        self.points.len() - 2 * PAD
    }

    /// Largest valid parameter value (`N - 1`)
    #[inline]
    pub fn max_t(&self) -> f32 {
        (self.control_len() - 1) as f32
    }

    /// Point on the curve at parameter `t`
    pub fn point_at(&self, t: f32) -> Result<Vec2, GeometryError> {
        let max = self.max_t();
        if !(0.0..=max).contains(&t) {
            return Err(GeometryError::ParameterOutOfRange { t, max });
        }
        Ok(self.eval(t))
    }

    /// Evaluate with `t` already known to be in range
    fn eval(&self, t: f32) -> Vec2 {
        let last_segment = self.control_len() - 2;
        let mut segment = t.floor() as usize;
        let mut u = t - t.floor();
        if segment > last_segment {
            // t == N-1 lands on the end of the final segment
            segment = last_segment;
            u = 1.0;
        }

        // Original point k lives at padded index k + PAD
        let p0 = self.points[segment + PAD - 1];
        let p1 = self.points[segment + PAD];
        let p2 = self.points[segment + PAD + 1];
        let p3 = self.points[segment + PAD + 2];

        let uu = u * u;
        let uuu = uu * u;

        let q1 = -uuu + 2.0 * uu - u;
        let q2 = 3.0 * uuu - 5.0 * uu + 2.0;
        let q3 = -3.0 * uuu + 4.0 * uu + u;
        let q4 = uuu - uu;

        0.5 * (p0 * q1 + p1 * q2 + p2 * q3 + p3 * q4)
    }

    /// Sample the curve every `step` of `t` into a dense polyline.
    ///
    /// The exact end point is always included as the final sample. Steps
    /// that would produce more than `MAX_EDGE_SAMPLES` points are rejected.
    pub fn sample(&self, step: f32) -> Result<SampledEdge, GeometryError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GeometryError::InvalidStep(step));
        }

        let max = self.max_t();
        let count = (max / step).ceil();
        if count >= MAX_EDGE_SAMPLES as f32 {
            return Err(GeometryError::InvalidStep(step));
        }

        let mut points = Vec::with_capacity(count as usize + 1);
        let mut i = 0usize;
        loop {
            let t = i as f32 * step;
            if t >= max {
                break;
            }
            points.push(self.eval(t));
            i += 1;
        }
        points.push(self.eval(max));

        Ok(SampledEdge { points })
    }
}

/// Dense polyline for one lattice edge, in a frame centered on the edge
#[derive(Debug, Clone, PartialEq)]
pub struct SampledEdge {
    pub points: Vec<Vec2>,
}

impl SampledEdge {
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Point-in-polygon hit testing
//!
//! Even-odd ray casting with an axis-aligned bounding box fast reject.
//! Boundary points follow a half-open convention: the crossing test uses
//! strict comparisons, so for an axis-aligned box the min-x and min-y sides
//! count as inside and the max-x and max-y sides count as outside.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds of a point set, `None` if empty
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, &p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            },
        ))
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Test whether `point` lies inside `polygon` placed at `offset`
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2], offset: Vec2) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    match Bounds::from_points(polygon) {
        Some(bounds) => point_in_polygon_bounded(point - offset, polygon, &bounds),
        None => false,
    }
}

/// Ray cast with precomputed bounds. `local` is already in polygon space.
pub(crate) fn point_in_polygon_bounded(local: Vec2, polygon: &[Vec2], bounds: &Bounds) -> bool {
    if polygon.len() < 3 || !bounds.contains(local) {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, pi) in polygon.iter().enumerate() {
        let pj = polygon[j];
        if (pi.y > local.y) != (pj.y > local.y)
            && local.x < (pj.x - pi.x) * (local.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn test_square_inside_outside() {
        let square = unit_square();
        assert!(point_in_polygon(Vec2::ZERO, &square, Vec2::ZERO));
        assert!(!point_in_polygon(Vec2::new(2.0, 0.0), &square, Vec2::ZERO));
    }

    #[test]
    fn test_square_boundary_is_pinned() {
        let square = unit_square();
        // Max corner and max sides are outside
        assert!(!point_in_polygon(Vec2::new(1.0, 1.0), &square, Vec2::ZERO));
        assert!(!point_in_polygon(Vec2::new(1.0, 0.0), &square, Vec2::ZERO));
        assert!(!point_in_polygon(Vec2::new(0.0, 1.0), &square, Vec2::ZERO));
        // Min sides are inside
        assert!(point_in_polygon(Vec2::new(-1.0, 0.0), &square, Vec2::ZERO));
        assert!(point_in_polygon(Vec2::new(0.0, -1.0), &square, Vec2::ZERO));
        // Same input, same answer
        for _ in 0..10 {
            assert!(!point_in_polygon(Vec2::new(1.0, 1.0), &square, Vec2::ZERO));
        }
    }

    #[test]
    fn test_offset_moves_polygon() {
        let square = unit_square();
        let offset = Vec2::new(10.0, 5.0);
        assert!(point_in_polygon(Vec2::new(10.0, 5.0), &square, offset));
        assert!(!point_in_polygon(Vec2::ZERO, &square, offset));
    }

    #[test]
    fn test_concave_notch() {
        // U shape: notch between x in (-1, 1) above y = 0
        let u = vec![
            Vec2::new(-3.0, -3.0),
            Vec2::new(3.0, -3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(-1.0, 3.0),
            Vec2::new(-3.0, 3.0),
        ];
        assert!(point_in_polygon(Vec2::new(0.0, -1.0), &u, Vec2::ZERO));
        assert!(!point_in_polygon(Vec2::new(0.0, 1.5), &u, Vec2::ZERO));
        assert!(point_in_polygon(Vec2::new(2.0, 1.5), &u, Vec2::ZERO));
    }

    #[test]
    fn test_degenerate_polygons_never_contain() {
        assert!(!point_in_polygon(Vec2::ZERO, &[], Vec2::ZERO));
        assert!(!point_in_polygon(Vec2::ZERO, &[Vec2::ZERO], Vec2::ZERO));
        assert!(!point_in_polygon(
            Vec2::ZERO,
            &[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)],
            Vec2::ZERO
        ));
    }

    #[test]
    fn test_bounds() {
        let b = Bounds::from_points(&unit_square()).unwrap();
        assert_eq!(b.min, Vec2::splat(-1.0));
        assert_eq!(b.max, Vec2::splat(1.0));
        assert!(Bounds::from_points(&[]).is_none());
    }
}

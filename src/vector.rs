//! 2D vector helpers
//!
//! `glam::Vec2` is the point/vector type. Arithmetic comes in two forms:
//! copying (`a + b`, `a - b`, `a * b`, [`Vector2Ext::pivoted`]) and in-place
//! (`a += b`, `a -= b`, `a *= b`, [`Vector2Ext::pivot`]).

use glam::Vec2;

use crate::error::GeometryError;

pub trait Vector2Ext: Sized {
    /// Rotate by `rot` radians, returning a new vector
    fn pivoted(self, rot: f32) -> Self;

    /// Rotate by `rot` radians in place
    fn pivot(&mut self, rot: f32) -> &mut Self;

    /// Unit vector in the same direction. Zero and non-finite vectors are rejected.
    fn normalise(self) -> Result<Self, GeometryError>;
}

impl Vector2Ext for Vec2 {
    #[inline]
    fn pivoted(self, rot: f32) -> Self {
        let (sin, cos) = rot.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    #[inline]
    fn pivot(&mut self, rot: f32) -> &mut Self {
        *self = self.pivoted(rot);
        self
    }

    fn normalise(self) -> Result<Self, GeometryError> {
        let length = self.length();
        if !length.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if length == 0.0 {
            return Err(GeometryError::ZeroLength);
        }
        Ok(self / length)
    }
}

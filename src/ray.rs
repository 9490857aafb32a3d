//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line in
//! 3D space used for intersection testing.

use glam::Vec3A;

use crate::error::GeometryError;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized, but must be non-zero: every primitive
    /// divides by its squared length or relies on it to define a line.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    ///
    /// No validation is done here since the camera builds one ray per pixel.
    /// Use [`Ray::try_new`] for rays coming from untrusted input.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Create a ray, rejecting non-finite components and a zero direction.
    pub fn try_new(origin: Vec3A, direction: Vec3A) -> Result<Self, GeometryError> {
        if !origin.is_finite() || !direction.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if direction.length_squared() == 0.0 {
            return Err(GeometryError::DegenerateDirection);
        }
        Ok(Self::new(origin, direction))
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction. Any t is allowed, including
    /// negative values; interval checks belong to the primitives.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

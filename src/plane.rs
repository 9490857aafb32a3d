//! Infinite plane primitive.

use glam::Vec3A;

use crate::error::GeometryError;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Below this |cos| between the ray direction and the plane normal the ray
/// is treated as parallel. Compared against `normal · direction` scaled by
/// the direction's length, so unnormalized rays behave like unit ones.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Infinite plane through `point`, facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3A,
    normal: Vec3A,
}

impl Plane {
    /// Create a plane; `normal` is normalized and picks the front side.
    pub fn new(point: Vec3A, normal: Vec3A) -> Result<Self, GeometryError> {
        if !point.is_finite() || !normal.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let normal = normal.try_normalize().ok_or(GeometryError::DegenerateDirection)?;
        Ok(Self { point, normal })
    }

    /// A point on the plane.
    pub fn point(&self) -> Vec3A {
        self.point
    }

    /// Unit normal of the front side.
    pub fn normal(&self) -> Vec3A {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let denom = self.normal.dot(r.direction);
        if denom.abs() < PARALLEL_EPSILON * r.direction.length() {
            return None;
        }

        let t = (self.point - r.origin).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        Some(HitRecord::with_face_normal(r, t, r.at(t), self.normal))
    }
}

//! Ray-object intersection contract.
//!
//! Defines the [`Hittable`] trait implemented by every geometric primitive and
//! the [`HitRecord`] it produces.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub point: Vec3A,
    /// Surface normal at the intersection point (unit vector), always facing
    /// against the incident ray
    pub normal: Vec3A,
    /// Ray parameter of the intersection point
    pub t: f32,
    /// True if the ray hit the outward-facing side of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a hit record, orienting the normal against the incident ray.
    ///
    /// `outward_normal` must be unit length and point away from the
    /// primitive's interior. When the ray arrives from inside (or from the
    /// back of a flat primitive) the stored normal is its negation and
    /// `front_face` is false.
    pub fn with_face_normal(r: &Ray, t: f32, point: Vec3A, outward_normal: Vec3A) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            point,
            normal,
            t,
            front_face,
        }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Implementations are read-only during a query, so an immutable scene can be
/// shared across threads.
pub trait Hittable: Sync + Send {
    /// Nearest intersection with `ray_t.min <= t <= ray_t.max`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_face_keeps_outward_normal() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = HitRecord::with_face_normal(&r, 1.0, Vec3A::new(0.0, 0.0, -1.0), Vec3A::Z);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3A::Z);
    }

    #[test]
    fn back_face_flips_normal() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = HitRecord::with_face_normal(&r, 1.0, Vec3A::new(0.0, 0.0, -1.0), -Vec3A::Z);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3A::Z);
        assert!(r.direction.dot(rec.normal) <= 0.0);
    }

    #[test]
    fn grazing_ray_counts_as_back_face() {
        let r = Ray::new(Vec3A::ZERO, Vec3A::X);
        let rec = HitRecord::with_face_normal(&r, 2.0, Vec3A::new(2.0, 0.0, 0.0), Vec3A::Y);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, -Vec3A::Y);
        assert_eq!(rec.t, 2.0);
    }
}

//! Triangle primitive using the Möller–Trumbore intersection test.

use glam::Vec3A;

use crate::error::GeometryError;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Single triangle; counter-clockwise winding (seen from the front) defines
/// the outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Vec3A; 3],
    normal: Vec3A,
}

impl Triangle {
    /// Create a triangle from three vertices.
    ///
    /// Fails when the vertices are collinear, since no normal exists.
    pub fn new(vertices: [Vec3A; 3]) -> Result<Self, GeometryError> {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        let [v0, v1, v2] = vertices;
        let normal = (v1 - v0)
            .cross(v2 - v0)
            .try_normalize()
            .ok_or(GeometryError::DegenerateTriangle)?;
        Ok(Self { vertices, normal })
    }

    /// The three vertices in winding order.
    pub fn vertices(&self) -> [Vec3A; 3] {
        self.vertices
    }

    /// Unit outward normal.
    pub fn normal(&self) -> Vec3A {
        self.normal
    }
}

impl Hittable for Triangle {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        // det scales with both edges and the direction; so does the cutoff
        let p = r.direction.cross(edge2);
        let det = edge1.dot(p);
        let scale = edge1.length() * edge2.length() * r.direction.length();
        if det.abs() < f32::EPSILON * scale {
            return None;
        }
        let inv_det = 1.0 / det;

        // Barycentric coordinates of the crossing point
        let s = r.origin - v0;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = r.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if !ray_t.contains(t) {
            return None;
        }

        Some(HitRecord::with_face_normal(r, t, r.at(t), self.normal))
    }
}

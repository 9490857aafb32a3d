//! Triangle mesh primitive.
//!
//! A [`Mesh`] is a flat list of [`Triangle`]s queried as one object. Like
//! [`Scene`](crate::scene::Scene) it searches linearly and keeps the nearest
//! hit; there is no acceleration structure.

use glam::Vec3A;

use crate::error::GeometryError;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::triangle::Triangle;

/// Collection of triangles forming one surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a mesh from already validated triangles.
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Closed axis-aligned box spanning the corners `a` and `b`, as twelve
    /// triangles wound so every normal points out of the box.
    ///
    /// Fails when the box is flat along any axis.
    pub fn cuboid(a: Vec3A, b: Vec3A) -> Result<Self, GeometryError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let corner = |x: bool, y: bool, z: bool| {
            Vec3A::new(
                if x { hi.x } else { lo.x },
                if y { hi.y } else { lo.y },
                if z { hi.z } else { lo.z },
            )
        };

        // Each face is counter-clockwise seen from outside the box
        let faces = [
            // +z, -z
            [(false, false, true), (true, false, true), (true, true, true), (false, true, true)],
            [(false, false, false), (false, true, false), (true, true, false), (true, false, false)],
            // +x, -x
            [(true, false, false), (true, true, false), (true, true, true), (true, false, true)],
            [(false, false, false), (false, false, true), (false, true, true), (false, true, false)],
            // +y, -y
            [(false, true, false), (false, true, true), (true, true, true), (true, true, false)],
            [(false, false, false), (true, false, false), (true, false, true), (false, false, true)],
        ];

        let mut triangles = Vec::with_capacity(12);
        for face in faces {
            let [q0, q1, q2, q3] = face.map(|(x, y, z)| corner(x, y, z));
            triangles.push(Triangle::new([q0, q1, q2])?);
            triangles.push(Triangle::new([q0, q2, q3])?);
        }
        Ok(Self { triangles })
    }

    /// The triangles in insertion order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl Hittable for Mesh {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Same rule as the scene: shrink the bound, keep the first at equal t
        for triangle in &self.triangles {
            if let Some(rec) = triangle.hit(r, ray_t.with_max(closest_so_far)) {
                if closest.is_none() || rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

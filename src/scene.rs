//! Collection of primitives forming a scene.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through `Box<dyn Hittable>`; a scene is itself [`Hittable`], so
/// scenes can be nested.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of top-level objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit over every object with `t_min <= t <= t_max`.
    ///
    /// When two objects are hit at exactly the same `t`, the one added first
    /// wins.
    pub fn find_nearest_hit(&self, r: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        self.hit(r, Interval::new(t_min, t_max))
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        // Every object is tested; the upper bound shrinks with each hit.
        // Bounds are inclusive, so an equal t must not displace an earlier hit.
        for object in &self.objects {
            if let Some(rec) = object.hit(r, ray_t.with_max(closest_so_far)) {
                if closest.is_none() || rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

impl FromIterator<Box<dyn Hittable>> for Scene {
    fn from_iter<I: IntoIterator<Item = Box<dyn Hittable>>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Hittable>> for Scene {
    fn extend<I: IntoIterator<Item = Box<dyn Hittable>>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use super::*;
    use crate::plane::Plane;
    use crate::sphere::Sphere;

    fn sphere(center: [f32; 3], radius: f32) -> Box<dyn Hittable> {
        Box::new(Sphere::new(Vec3A::from_array(center), radius).unwrap())
    }

    fn down_z() -> Ray {
        Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0))
    }

    /// Reports a fixed t for any query, and remembers nothing.
    struct FixedHit {
        t: f32,
        normal: Vec3A,
    }

    impl Hittable for FixedHit {
        fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
            ray_t
                .contains(self.t)
                .then(|| HitRecord::with_face_normal(r, self.t, r.at(self.t), self.normal))
        }
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.find_nearest_hit(&down_z(), 0.0, f32::INFINITY).is_none());
        assert!(scene.find_nearest_hit(&down_z(), -1.0e9, 1.0e9).is_none());
    }

    #[test]
    fn nearest_wins_regardless_of_order() {
        let near = [0.0, 0.0, -2.0];
        let far = [0.0, 0.0, -5.0];

        let mut front_first = Scene::new();
        front_first.add(sphere(near, 0.5));
        front_first.add(sphere(far, 0.5));

        let back_first: Scene = vec![sphere(far, 0.5), sphere(near, 0.5)].into_iter().collect();

        for scene in [&front_first, &back_first] {
            let rec = scene.find_nearest_hit(&down_z(), 0.0, f32::INFINITY).unwrap();
            assert_eq!(rec.t, 1.5);
        }
    }

    #[test]
    fn nearest_is_no_further_than_each_object() {
        let a = Sphere::new(Vec3A::new(0.0, 0.0, -3.0), 1.0).unwrap();
        let b = Sphere::new(Vec3A::new(0.0, 0.2, -2.0), 0.6).unwrap();
        let r = down_z();

        let ta = a.hit(&r, Interval::FORWARD).unwrap().t;
        let tb = b.hit(&r, Interval::FORWARD).unwrap().t;

        let mut scene = Scene::new();
        scene.add(Box::new(a));
        scene.add(Box::new(b));
        let rec = scene.find_nearest_hit(&r, 0.0, f32::INFINITY).unwrap();

        assert!(rec.t <= ta && rec.t <= tb);
        assert_eq!(rec.t, ta.min(tb));
    }

    #[test]
    fn upper_bound_excludes_far_objects() {
        let mut scene = Scene::new();
        scene.add(sphere([0.0, 0.0, -5.0], 0.5));
        assert!(scene.find_nearest_hit(&down_z(), 0.0, 4.0).is_none());
        assert!(scene.find_nearest_hit(&down_z(), 0.0, 4.5).is_some());
    }

    #[test]
    fn equal_t_keeps_first_object() {
        let mut scene = Scene::new();
        scene.add(Box::new(FixedHit { t: 2.0, normal: Vec3A::Z }));
        scene.add(Box::new(FixedHit { t: 2.0, normal: Vec3A::X }));
        let rec = scene.find_nearest_hit(&down_z(), 0.0, 10.0).unwrap();
        assert_eq!(rec.normal, Vec3A::Z);
    }

    #[test]
    fn mixes_primitive_kinds() {
        let mut scene = Scene::new();
        scene.add(Box::new(
            Plane::new(Vec3A::new(0.0, 0.0, -10.0), Vec3A::Z).unwrap(),
        ));
        scene.add(sphere([0.0, 0.0, -4.0], 1.0));
        assert_eq!(scene.len(), 2);

        let rec = scene.find_nearest_hit(&down_z(), 0.0, f32::INFINITY).unwrap();
        assert_eq!(rec.t, 3.0);

        // Off to the side only the plane is in the way
        let r = Ray::new(Vec3A::new(5.0, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        let rec = scene.find_nearest_hit(&r, 0.0, f32::INFINITY).unwrap();
        assert_eq!(rec.t, 10.0);
        assert!(rec.front_face);
    }

    #[test]
    fn scenes_nest() {
        let inner: Scene = vec![sphere([0.0, 0.0, -2.0], 0.5)].into_iter().collect();
        let mut outer = Scene::new();
        outer.add(sphere([0.0, 0.0, -6.0], 0.5));
        outer.extend([Box::new(inner) as Box<dyn Hittable>]);
        let rec = outer.find_nearest_hit(&down_z(), 0.0, f32::INFINITY).unwrap();
        assert_eq!(rec.t, 1.5);
    }
}

//! rayhit ray tracer
//!
//! Casts one ray per pixel through a fixed viewport, finds the nearest
//! surface hit in a scene of spheres, planes, triangles and triangle meshes,
//! and writes the result as PPM, PNG or EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod mesh;
pub mod output;
pub mod plane;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod triangle;

pub use error::GeometryError;
pub use hittable::{HitRecord, Hittable};
pub use interval::Interval;
pub use ray::Ray;
pub use scene::Scene;

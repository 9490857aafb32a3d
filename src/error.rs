//! Errors raised when building rays and primitives.
//!
//! Intersection misses are not errors; they are reported as `None` by
//! [`Hittable::hit`](crate::hittable::Hittable::hit). The only failures in the
//! geometry layer are malformed inputs, rejected once at construction time so
//! the per-ray tests can stay total.

use std::fmt;

/// Invalid geometry passed to a constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Sphere radius is zero, negative, or not finite.
    NonPositiveRadius(f32),
    /// A ray direction or plane normal has zero length.
    DegenerateDirection,
    /// Triangle vertices are collinear or coincident.
    DegenerateTriangle,
    /// A coordinate is NaN or infinite.
    NonFinite,
    /// Camera aspect ratio is zero, negative, or not finite.
    InvalidAspectRatio(f32),
    /// Requested image exceeds [`MAX_IMAGE_DIMENSION`](crate::camera::MAX_IMAGE_DIMENSION)
    /// along one axis.
    ImageTooLarge {
        /// Requested width in pixels
        width: u32,
        /// Height derived from the aspect ratio, in pixels
        height: u64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonPositiveRadius(radius) => {
                write!(f, "invalid geometry: sphere radius must be positive and finite, got {}", radius)
            }
            GeometryError::DegenerateDirection => {
                write!(f, "invalid geometry: direction vector has zero length")
            }
            GeometryError::DegenerateTriangle => {
                write!(f, "invalid geometry: triangle vertices are collinear")
            }
            GeometryError::NonFinite => {
                write!(f, "invalid geometry: coordinates must be finite")
            }
            GeometryError::InvalidAspectRatio(ratio) => {
                write!(f, "invalid geometry: aspect ratio must be positive and finite, got {}", ratio)
            }
            GeometryError::ImageTooLarge { width, height } => {
                write!(f, "invalid geometry: image of {}x{} pixels is too large", width, height)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_radius() {
        let msg = GeometryError::NonPositiveRadius(-2.5).to_string();
        assert!(msg.contains("-2.5"), "{}", msg);
    }

    #[test]
    fn converts_into_boxed_error() {
        let boxed: Box<dyn std::error::Error> = GeometryError::DegenerateTriangle.into();
        assert!(boxed.to_string().contains("collinear"));
    }

    #[test]
    fn display_names_the_oversized_image() {
        let msg = GeometryError::ImageTooLarge { width: 800, height: 8_000_000 }.to_string();
        assert!(msg.contains("800x8000000"), "{}", msg);
    }
}

//! Camera for ray generation and scene rendering

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::error::GeometryError;
use crate::hittable::HitRecord;
use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Linear f32 RGB image produced by [`Camera::render`].
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Height of the viewport in world units.
const VIEWPORT_HEIGHT: f32 = 2.0;
/// Distance from the camera center to the viewport plane.
const FOCAL_LENGTH: f32 = 1.0;
/// Largest accepted image width or height, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

/// Fixed pinhole camera at the origin looking down -Z.
///
/// Casts exactly one ray per pixel, through the pixel center.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,

    /// Camera position in world space
    center: Vec3A,
    /// World position of the top-left pixel center (pixel 0,0)
    pixel00_loc: Vec3A,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3A,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3A,
}

impl Camera {
    /// Creates a camera for an image of `image_width` pixels.
    ///
    /// The height is derived from `aspect_ratio` (width / height) and is at
    /// least one pixel; the viewport keeps the resulting pixel aspect.
    ///
    /// Fails if `aspect_ratio` is not a positive finite number, or if either
    /// side would exceed [`MAX_IMAGE_DIMENSION`].
    pub fn new(image_width: u32, aspect_ratio: f32) -> Result<Self, GeometryError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(GeometryError::InvalidAspectRatio(aspect_ratio));
        }
        let image_width = image_width.max(1);

        // Checked as a float: a tiny ratio would saturate the u32 cast
        let height = (image_width as f32 / aspect_ratio).max(1.0);
        if image_width > MAX_IMAGE_DIMENSION || height >= (MAX_IMAGE_DIMENSION + 1) as f32 {
            return Err(GeometryError::ImageTooLarge {
                width: image_width,
                height: height as u64,
            });
        }
        let image_height = height as u32;

        let center = Vec3A::ZERO;
        let viewport_width = VIEWPORT_HEIGHT * (image_width as f32 / image_height as f32);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = Vec3A::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3A::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left =
            center - Vec3A::new(0.0, 0.0, FOCAL_LENGTH) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        debug!(
            "Camera {}x{}, viewport {:.3}x{:.3}",
            image_width, image_height, viewport_width, VIEWPORT_HEIGHT
        );

        Ok(Self {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        })
    }

    /// Ray from the camera center through the center of pixel (i, j).
    ///
    /// Row 0 is the top of the image.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let pixel_center =
            self.pixel00_loc + (i as f32 * self.pixel_delta_u) + (j as f32 * self.pixel_delta_v);
        Ray::new(self.center, pixel_center - self.center)
    }

    /// Renders the scene, one ray per pixel, in scanline order.
    ///
    /// Returns an HDR image buffer with linear f32 RGB values.
    pub fn render(&self, world: &Scene) -> HdrImage {
        let mut image = HdrImage::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} with {} objects",
            self.image_width,
            self.image_height,
            world.len()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} scanlines ETA: {eta}") {
            pb.set_style(style);
        }

        for (j, row) in image.enumerate_rows_mut() {
            for (i, _, pixel) in row {
                let r = self.get_ray(i, j);
                let color = ray_color(&r, world);
                *pixel = Rgb([color.x, color.y, color.z]);
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}

/// Color of a primary ray: the hit normal mapped into [0, 1], or the sky.
pub fn ray_color(r: &Ray, world: &Scene) -> Color {
    match world.find_nearest_hit(r, Interval::FORWARD.min, Interval::FORWARD.max) {
        Some(rec) => normal_color(&rec),
        None => sky_color(r),
    }
}

fn normal_color(rec: &HitRecord) -> Color {
    0.5 * (rec.normal + Color::ONE)
}

/// Vertical gradient from white (looking down) to light blue (looking up).
fn sky_color(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

//! # Output Module
//!
//! Writes rendered images to disk or stdout:
//! - plain-text PPM (`P3`), one `r g b` triplet per line, linear values
//! - PNG with sRGB gamma correction
//! - OpenEXR with full linear f32 precision
//!
//! The format is picked from the output path's extension by [`save_image`].

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;

use crate::camera::HdrImage;
use crate::interval::Interval;

/// Output path that sends a PPM stream to stdout.
pub const STDOUT_PATH: &str = "-";

/// Image file formats understood by [`save_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// ASCII pixel-triplet format
    Ppm,
    /// 8-bit PNG, gamma corrected
    Png,
    /// 32-bit float OpenEXR, linear
    Exr,
}

impl ImageFormat {
    /// Format for `path`, decided by its extension (case-insensitive).
    pub fn from_path(path: &str) -> Result<Self, Box<dyn Error>> {
        if path == STDOUT_PATH {
            return Ok(ImageFormat::Ppm);
        }
        let extension = Path::new(path)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            "exr" => Ok(ImageFormat::Exr),
            other => Err(format!(
                "unsupported file extension '{}': expected .ppm, .png or .exr",
                other
            )
            .into()),
        }
    }
}

/// Save `image` to `path` in the format implied by its extension.
///
/// `-` writes PPM to stdout.
pub fn save_image(image: &HdrImage, path: &str) -> Result<(), Box<dyn Error>> {
    match ImageFormat::from_path(path)? {
        ImageFormat::Ppm if path == STDOUT_PATH => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_ppm(image, &mut out)?;
            out.flush()?;
        }
        ImageFormat::Ppm => save_image_as_ppm(image, path)?,
        ImageFormat::Png => save_image_as_png(image, path)?,
        ImageFormat::Exr => save_image_as_exr(image, path)?,
    }
    Ok(())
}

/// Write `image` as ASCII PPM (`P3`, max value 255).
///
/// Rows are written top to bottom. Channels are clamped to [0, 1] and scaled
/// by 255.999 without gamma correction.
pub fn write_ppm<W: Write>(image: &HdrImage, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0.map(to_byte);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

/// Save `image` as an ASCII PPM file.
pub fn save_image_as_ppm(image: &HdrImage, output_path: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(output_path)?);
    write_ppm(image, &mut out)?;
    out.flush()?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Save `image` as an 8-bit PNG with sRGB gamma correction.
///
/// Values outside [0, 1] are clamped before the transfer curve is applied.
pub fn save_image_as_png(image: &HdrImage, output_path: &str) -> Result<(), Box<dyn Error>> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb(pixel.0.map(|c| (linear_to_gamma(UNIT.clamp(c)) * 255.0) as u8))
        });

    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Save `image` as OpenEXR, keeping linear f32 values.
pub fn save_image_as_exr(image: &HdrImage, output_path: &str) -> Result<(), Box<dyn Error>> {
    write_rgb_file(
        output_path,
        image.width() as usize,
        image.height() as usize,
        |x, y| {
            let pixel = image.get_pixel(x as u32, y as u32);
            (pixel[0], pixel[1], pixel[2])
        },
    )?;
    info!("HDR image saved as EXR: {}", output_path);
    Ok(())
}

const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

fn to_byte(c: f32) -> u8 {
    (255.999 * UNIT.clamp(c)) as u8
}

/// sRGB transfer curve with its linear toe for dark values.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use rayhit::camera::MAX_IMAGE_DIMENSION;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    /// One sphere in front of the camera
    Single,
    /// A sphere resting on a large ground sphere
    Ground,
    /// Three spheres side by side
    Triple,
    /// A sphere, a triangle and a floor plane
    Shapes,
    /// A triangle-mesh box next to a sphere, over a floor plane
    Mesh,
}

/// Parses `--aspect-ratio`, accepting only positive finite numbers
fn parse_aspect_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("must be a positive finite number, got {}", s))
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "rayhit")]
#[command(about = "A minimal ray tracer: one ray per pixel, nearest-hit shading")]
pub struct Args {
    /// Log at debug level or more detailed
    #[arg(short, long)]
    pub verbose: bool,

    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(
        long,
        default_value = "800",
        value_parser = clap::value_parser!(u32).range(1..=MAX_IMAGE_DIMENSION as i64),
        help = "Image width in pixels"
    )]
    pub width: u32,

    /// Image width divided by image height
    #[arg(
        long,
        default_value_t = 16.0 / 9.0,
        value_parser = parse_aspect_ratio,
        help = "Image width divided by image height"
    )]
    pub aspect_ratio: f32,

    /// Scene to render
    #[arg(long, value_enum, default_value = "single")]
    pub scene: ScenePreset,

    /// Output file path (.ppm text, .png 8-bit with gamma, .exr HDR linear, - for PPM on stdout)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,
}

impl Args {
    /// Effective log level: `--verbose` raises it to at least debug.
    pub fn log_level(&self) -> LevelFilter {
        let level = LevelFilter::from(self.debug_level);
        if self.verbose {
            level.max(LevelFilter::Debug)
        } else {
            level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_image() {
        let args = Args::try_parse_from(["rayhit"]).unwrap();
        assert_eq!(args.width, 800);
        assert!((args.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(args.scene, ScenePreset::Single);
        assert_eq!(args.output, "output.ppm");
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn verbose_raises_log_level() {
        let args = Args::try_parse_from(["rayhit", "-v"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let args = Args::try_parse_from(["rayhit", "-v", "--debug-level", "trace"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn parses_scene_and_output() {
        let args = Args::try_parse_from(["rayhit", "--scene", "shapes", "-o", "-", "--width", "64"]).unwrap();
        assert_eq!(args.scene, ScenePreset::Shapes);
        assert_eq!(args.output, "-");
        assert_eq!(args.width, 64);
    }

    #[test]
    fn rejects_unusable_aspect_ratios() {
        for ratio in ["0", "-2", "inf", "NaN", "wide"] {
            assert!(
                Args::try_parse_from(["rayhit", "--aspect-ratio", ratio]).is_err(),
                "{} was accepted",
                ratio
            );
        }
        let args = Args::try_parse_from(["rayhit", "--aspect-ratio", "1.5"]).unwrap();
        assert_eq!(args.aspect_ratio, 1.5);
    }

    #[test]
    fn rejects_out_of_range_width() {
        assert!(Args::try_parse_from(["rayhit", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["rayhit", "--width", "16385"]).is_err());
        assert!(Args::try_parse_from(["rayhit", "--width", "16384"]).is_ok());
    }

    #[test]
    fn parses_mesh_scene() {
        let args = Args::try_parse_from(["rayhit", "--scene", "mesh"]).unwrap();
        assert_eq!(args.scene, ScenePreset::Mesh);
    }

    #[test]
    fn rejects_unknown_scene() {
        assert!(Args::try_parse_from(["rayhit", "--scene", "cornell"]).is_err());
    }
}

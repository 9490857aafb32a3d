use clap::Parser;
use glam::Vec3A;
use log::{debug, error, info};

use rayhit::camera::Camera;
use rayhit::mesh::Mesh;
use rayhit::output::save_image;
use rayhit::plane::Plane;
use rayhit::sphere::Sphere;
use rayhit::triangle::Triangle;
use rayhit::{GeometryError, Scene};

mod cli;
mod logger;

use cli::{Args, ScenePreset};
use logger::init_logger;

/// Build one of the built-in scenes.
fn create_scene(preset: ScenePreset) -> Result<Scene, GeometryError> {
    let mut world = Scene::new();

    match preset {
        ScenePreset::Single => {
            world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)?));
        }
        ScenePreset::Ground => {
            world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)?));
            world.add(Box::new(Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0)?));
        }
        ScenePreset::Triple => {
            world.add(Box::new(Sphere::new(Vec3A::new(-1.0, 0.0, -1.5), 0.5)?));
            world.add(Box::new(Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5)?));
            world.add(Box::new(Sphere::new(Vec3A::new(1.0, 0.0, -1.5), 0.5)?));
        }
        ScenePreset::Shapes => {
            world.add(Box::new(Plane::new(Vec3A::new(0.0, -0.5, 0.0), Vec3A::Y)?));
            world.add(Box::new(Sphere::new(Vec3A::new(-0.6, 0.0, -1.2), 0.5)?));
            world.add(Box::new(Triangle::new([
                Vec3A::new(0.2, -0.5, -1.5),
                Vec3A::new(1.4, -0.5, -1.5),
                Vec3A::new(0.8, 0.6, -1.8),
            ])?));
        }
        ScenePreset::Mesh => {
            world.add(Box::new(Plane::new(Vec3A::new(0.0, -0.5, 0.0), Vec3A::Y)?));
            world.add(Box::new(Mesh::cuboid(
                Vec3A::new(-1.3, -0.5, -2.2),
                Vec3A::new(-0.3, 0.3, -1.4),
            )?));
            world.add(Box::new(Sphere::new(Vec3A::new(0.7, 0.0, -1.5), 0.5)?));
        }
    }

    debug!("Scene {:?} built with {} objects", preset, world.len());
    Ok(world)
}

fn main() {
    let args = Args::parse();

    init_logger(args.log_level());

    // Log application startup with version information
    info!("rayhit - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let world = match create_scene(args.scene) {
        Ok(world) => world,
        Err(e) => {
            error!("Failed to build scene {:?}: {}", args.scene, e);
            std::process::exit(1);
        }
    };

    let camera = match Camera::new(args.width, args.aspect_ratio) {
        Ok(camera) => camera,
        Err(e) => {
            error!("Failed to set up camera: {}", e);
            std::process::exit(1);
        }
    };
    info!("Image resolution: {}x{}", camera.image_width, camera.image_height);

    let image = camera.render(&world);

    if let Err(e) = save_image(&image, &args.output) {
        error!("Failed to save image to {}: {}", args.output, e);
        std::process::exit(1);
    }
}

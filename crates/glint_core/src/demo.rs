//! Built-in demo scene.

use glint_math::Vec3;

use crate::scene::{Color, Light, Scene, Sphere};

/// Default image width for the demo scene.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default image height for the demo scene.
pub const DEFAULT_HEIGHT: u32 = 200;

/// Default camera position.
pub const DEFAULT_CAMERA: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Three spheres (large red, small magenta, green) under a white light
/// at (5, 5, 5).
pub fn default_scene() -> Scene {
    Scene::new("demo", Light::white(Vec3::new(5.0, 5.0, 5.0)))
        .with_sphere(
            Sphere::new(Vec3::new(-0.2, 0.0, -1.0), 0.7).with_material(
                Color::new(0.1, 0.0, 0.0),
                Color::new(0.7, 0.0, 0.0),
                Color::ONE,
            ),
        )
        .with_sphere(
            Sphere::new(Vec3::new(0.1, -0.3, 0.0), 0.1).with_material(
                Color::new(0.1, 0.0, 0.1),
                Color::new(0.7, 0.0, 0.7),
                Color::ONE,
            ),
        )
        .with_sphere(
            Sphere::new(Vec3::new(-0.3, 0.0, 0.0), 0.15).with_material(
                Color::new(0.0, 0.1, 0.0),
                Color::new(0.0, 0.6, 0.0),
                Color::ONE,
            ),
        )
}

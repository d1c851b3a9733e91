//! Blinn-Phong shading with a hard shadow test.

use crate::hittable::{distance_or_infinity, nearest, Hit};
use glint_core::{Color, Light, Scene, Sphere};
use glint_math::{normalize, DegenerateVectorError, Interval, Ray, Vec3};

/// What to do when a direction needed for shading has zero length.
///
/// This happens for a camera ray toward its own origin, or a half-vector
/// when the view and light directions are exactly opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Propagate the error and abort the render.
    Fail,
    /// Substitute a zero vector and drop every term that depends on it.
    Zero,
}

impl DegeneratePolicy {
    /// Apply the policy to a normalization result.
    ///
    /// `Ok(None)` means the vector was degenerate and has been dropped.
    pub fn resolve(
        self,
        normalized: Result<Vec3, DegenerateVectorError>,
    ) -> Result<Option<Vec3>, DegenerateVectorError> {
        match (normalized, self) {
            (Ok(v), _) => Ok(Some(v)),
            (Err(err), DegeneratePolicy::Fail) => Err(err),
            (Err(err), DegeneratePolicy::Zero) => {
                log::trace!("{err}, substituting zero vector");
                Ok(None)
            }
        }
    }
}

impl Default for DegeneratePolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            DegeneratePolicy::Fail
        } else {
            DegeneratePolicy::Zero
        }
    }
}

/// Shade the point where `ray` meets `hit`.
///
/// Returns `Ok(None)` when another sphere sits strictly between the point
/// and the light. A shadowed point gets no light at all, ambient included.
/// Otherwise the Blinn-Phong radiance is returned, clamped to `[0, 1]`.
pub fn shade(
    scene: &Scene,
    camera: Vec3,
    ray: &Ray,
    hit: Hit<'_>,
    policy: DegeneratePolicy,
) -> Result<Option<Color>, DegenerateVectorError> {
    let sphere = hit.object;
    let light = &scene.light;

    let intersection = ray.at(hit.distance);
    let normal = policy.resolve(normalize(intersection - sphere.center))?;
    let to_light = light.position - intersection;
    let light_dir = policy.resolve(normalize(to_light))?;

    if let Some(light_dir) = light_dir {
        let shadow_ray = Ray::new(intersection, light_dir);
        let occluder = distance_or_infinity(nearest(&scene.spheres, &shadow_ray));
        if occluder < to_light.length() {
            return Ok(None);
        }
    }

    let view_dir = policy.resolve(normalize(camera - intersection))?;
    let radiance = blinn_phong(sphere, light, normal, light_dir, view_dir, policy)?;

    Ok(Some(Interval::UNIT.clamp_vec(radiance)))
}

/// Unclamped ambient + diffuse + specular radiance.
///
/// The diffuse cosine is not clamped at zero, so a surface facing away from
/// the light loses brightness instead of just receiving none. The specular
/// exponent is `shininess / 4`.
fn blinn_phong(
    sphere: &Sphere,
    light: &Light,
    normal: Option<Vec3>,
    light_dir: Option<Vec3>,
    view_dir: Option<Vec3>,
    policy: DegeneratePolicy,
) -> Result<Color, DegenerateVectorError> {
    let ambient = sphere.ambient * light.ambient;

    let diffuse = match (normal, light_dir) {
        (Some(n), Some(l)) => sphere.diffuse * light.diffuse * l.dot(n),
        _ => Color::ZERO,
    };

    let half = match (view_dir, light_dir) {
        (Some(v), Some(l)) => policy.resolve(normalize(v + l))?,
        _ => None,
    };
    let specular = match (normal, half) {
        (Some(n), Some(h)) => {
            sphere.specular * light.specular * n.dot(h).powf(sphere.shininess / 4.0)
        }
        _ => Color::ZERO,
    };

    Ok(ambient + diffuse + specular)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_sphere(center: Vec3, radius: f32, ka: f32, kd: f32, ks: f32) -> Sphere {
        Sphere::new(center, radius).with_material(Color::splat(ka), Color::splat(kd), Color::splat(ks))
    }

    fn shade_primary(scene: &Scene, camera: Vec3) -> Option<Color> {
        let ray = Ray::towards(camera, scene.spheres[0].center).unwrap();
        let hit = nearest(&scene.spheres, &ray).expect("primary ray should hit");
        shade(scene, camera, &ray, hit, DegeneratePolicy::Fail).unwrap()
    }

    #[test]
    fn test_head_on_lighting() {
        // Camera, hit point and light on one axis: every cosine is 1.
        let camera = Vec3::new(0.0, 0.0, 1.0);
        let scene = Scene::new("head-on", Light::white(Vec3::new(0.0, 0.0, 10.0)))
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, 0.1, 0.5, 0.2));

        let color = shade_primary(&scene, camera).unwrap();
        assert!((color - Color::splat(0.8)).length() < 1e-5, "color={color}");
    }

    #[test]
    fn test_shadowed_point_gets_nothing() {
        let camera = Vec3::new(0.0, 0.0, 1.0);
        let scene = Scene::new("shadow", Light::white(Vec3::new(0.0, 0.0, 10.0)))
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, 0.5, 0.5, 0.5))
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, 5.0), 0.5, 0.5, 0.5, 0.5));

        assert_eq!(shade_primary(&scene, camera), None);
    }

    #[test]
    fn test_occluder_behind_light_does_not_shadow() {
        let camera = Vec3::new(0.0, 0.0, 1.0);
        let scene = Scene::new("behind", Light::white(Vec3::new(0.0, 0.0, 3.0)))
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, 0.1, 0.5, 0.2))
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, 8.0), 0.5, 0.5, 0.5, 0.5));

        assert!(shade_primary(&scene, camera).is_some());
    }

    #[test]
    fn test_output_is_clamped_to_one() {
        let camera = Vec3::new(0.0, 0.0, 1.0);
        let mut light = Light::white(Vec3::new(0.0, 0.0, 10.0));
        light.ambient = Color::splat(2.0);
        let scene = Scene::new("bright", light)
            .with_sphere(material_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, 1.0, 1.0, 1.0));

        let color = shade_primary(&scene, camera).unwrap();
        assert_eq!(color, Color::ONE);
    }

    #[test]
    fn test_diffuse_is_not_clamped_at_zero() {
        // The light sits behind the surface: l.n = -cos(45deg). The negative
        // diffuse term darkens the ambient instead of contributing zero.
        let sphere = material_sphere(Vec3::ZERO, 1.0, 0.5, 0.2, 0.0);
        let light = Light::white(Vec3::splat(10.0));
        let normal = Vec3::Z;
        let light_dir = Vec3::new(0.0, 1.0, -1.0).normalize();

        let color = blinn_phong(
            &sphere,
            &light,
            Some(normal),
            Some(light_dir),
            Some(Vec3::Z),
            DegeneratePolicy::Fail,
        )
        .unwrap();

        let expected = 0.5 - 0.2 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((color.x - expected).abs() < 1e-5, "color={color}");
    }

    #[test]
    fn test_specular_exponent_is_quarter_shininess() {
        // n.h = cos(22.5deg) for view along +Z and light at 45deg.
        let sphere = material_sphere(Vec3::ZERO, 1.0, 0.0, 0.0, 1.0).with_shininess(8.0);
        let light = Light::white(Vec3::splat(10.0));
        let light_dir = Vec3::new(0.0, 1.0, 1.0).normalize();

        let color = blinn_phong(
            &sphere,
            &light,
            Some(Vec3::Z),
            Some(light_dir),
            Some(Vec3::Z),
            DegeneratePolicy::Fail,
        )
        .unwrap();

        let expected = (22.5_f32.to_radians().cos()).powi(2);
        assert!((color.x - expected).abs() < 1e-5, "color={color}");
    }

    #[test]
    fn test_back_lit_specular_stays_in_range() {
        // Seen at a grazing angle with the light behind the surface, n.h is
        // negative and a fractional exponent (50 / 4) makes the power NaN.
        let sphere = Sphere::new(Vec3::ZERO, 1.0).with_shininess(50.0);
        let point = Vec3::Z;
        let camera = point + 5.0 * Vec3::new(0.8, 0.0, 0.6);
        let scene = Scene::new("back-lit", Light::white(point + 5.0 * Vec3::new(-0.6, 0.0, -0.8)));

        let ray = Ray::towards(camera, point).unwrap();
        let hit = Hit {
            object: &sphere,
            index: 0,
            distance: 5.0,
        };

        let color = shade(&scene, camera, &ray, hit, DegeneratePolicy::Zero)
            .unwrap()
            .unwrap();
        assert!(color.is_finite(), "color={color}");
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_opposite_view_and_light() {
        let sphere = material_sphere(Vec3::ZERO, 1.0, 0.1, 0.0, 1.0);
        let light = Light::white(Vec3::splat(10.0));

        let failed = blinn_phong(
            &sphere,
            &light,
            Some(Vec3::Z),
            Some(Vec3::NEG_Z),
            Some(Vec3::Z),
            DegeneratePolicy::Fail,
        );
        assert!(failed.is_err());

        let dropped = blinn_phong(
            &sphere,
            &light,
            Some(Vec3::Z),
            Some(Vec3::NEG_Z),
            Some(Vec3::Z),
            DegeneratePolicy::Zero,
        )
        .unwrap();
        assert!((dropped - Color::splat(0.1)).length() < 1e-6);
    }

    #[test]
    fn test_policy_resolve() {
        assert_eq!(DegeneratePolicy::Zero.resolve(normalize(Vec3::ZERO)), Ok(None));
        assert!(DegeneratePolicy::Fail.resolve(normalize(Vec3::ZERO)).is_err());
        assert_eq!(
            DegeneratePolicy::Fail.resolve(normalize(Vec3::X)),
            Ok(Some(Vec3::X))
        );
    }
}

//! Ray-sphere intersection.

use crate::hittable::Hittable;
use glint_core::Sphere;
use glint_math::{Interval, Ray};

impl Hittable for Sphere {
    /// Solve the ray-sphere quadratic.
    ///
    /// Tangent rays (zero discriminant) miss. A hit is only reported when
    /// both roots are strictly positive, so a ray starting inside the
    /// sphere, or on its surface, does not see that sphere.
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let delta = b * b - 4.0 * a * c;
        if delta <= 0.0 {
            return None;
        }

        let sqrtd = delta.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        if Interval::POSITIVE.surrounds(t1) && Interval::POSITIVE.surrounds(t2) {
            Some(t1.min(t2))
        } else {
            None
        }
    }
}

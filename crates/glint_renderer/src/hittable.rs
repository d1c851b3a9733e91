//! Hittable trait and nearest-hit scene query.

use glint_core::Sphere;
use glint_math::Ray;

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the nearest reported intersection, if any.
    ///
    /// `ray.direction` is expected to be unit length.
    fn hit(&self, ray: &Ray) -> Option<f32>;
}

/// The closest object along a ray.
#[derive(Debug)]
pub struct Hit<'a, H = Sphere> {
    /// The object that was hit
    pub object: &'a H,
    /// Position of the object in the scene's object list
    pub index: usize,
    /// Distance along the ray
    pub distance: f32,
}

// Manual impls so `H` itself does not need to be Clone/Copy.
impl<H> Clone for Hit<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Hit<'_, H> {}

/// Distance of an optional hit, with a miss reading as +infinity.
pub fn distance_or_infinity<H>(hit: Option<Hit<'_, H>>) -> f32 {
    hit.map_or(f32::INFINITY, |hit| hit.distance)
}

/// Find the nearest object hit by `ray`.
///
/// Objects are tested in order and a closer hit must be strictly closer to
/// replace the current one, so on exact ties the earlier object wins.
/// Returns `None` for an empty list or when every object misses.
pub fn nearest<'a, H: Hittable>(objects: &'a [H], ray: &Ray) -> Option<Hit<'a, H>> {
    let mut closest: Option<Hit<'a, H>> = None;
    let mut closest_so_far = f32::INFINITY;

    for (index, object) in objects.iter().enumerate() {
        if let Some(distance) = object.hit(ray) {
            if distance < closest_so_far {
                closest_so_far = distance;
                closest = Some(Hit {
                    object,
                    index,
                    distance,
                });
            }
        }
    }

    closest
}

//! Finding the nearest of several shapes along a ray.
//!
//! Sphere intersection only yields distances for unit-length ray directions, while plane
//! and triangle hits work for any direction. Comparing `t` across shapes therefore needs
//! a unit direction; see [`Ray::normalized`].

use crate::primitive::ray::Ray;
use crate::primitive::surface_point::SurfacePoint;
use crate::shape::Shape;
use crate::tolerance::Tolerance;
use ordered_float::OrderedFloat;
use tracing::trace;

/// The nearest intersection of a ray with a set of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the shape that was hit, in the slice passed to [`closest_hit`].
    pub shape_index: usize,
    /// The ray parameter of the hit.
    pub t: f64,
    /// The hit point and the shape's normal there.
    pub surface: SurfacePoint,
}

/// Finds the nearest shape hit by `ray`, using the default tolerance.
///
/// # Arguments
///
/// * `shapes` - The shapes to test, in no particular order.
/// * `ray` - The ray to trace. Its direction must be unit length, otherwise sphere and
///   plane parameters are not comparable. This is checked in debug builds.
///
/// # Returns
///
/// The hit with the smallest `t`, or `None` if the ray hits nothing. Ties go to the
/// shape that comes first in `shapes`.
pub fn closest_hit(shapes: &[Shape], ray: &Ray) -> Option<Hit> {
    closest_hit_with(shapes, ray, &Tolerance::default())
}

/// Same as [`closest_hit`], with an explicit tolerance.
///
/// This is a linear scan over every shape; there is no acceleration structure.
pub fn closest_hit_with(shapes: &[Shape], ray: &Ray, tolerance: &Tolerance) -> Option<Hit> {
    debug_assert!(
        (ray.direction.norm() - 1.0).abs() < 1e-6,
        "closest_hit needs a unit-length ray direction, got {}",
        ray.direction
    );

    let (shape_index, t) = shapes
        .iter()
        .enumerate()
        .filter_map(|(i, shape)| shape.intersect_with(ray, tolerance).map(|t| (i, t)))
        .min_by_key(|(_, t)| OrderedFloat(*t))?;

    trace!(shape_index, t, "closest hit");

    let point = ray.point_at_parameter(t);
    Some(Hit {
        shape_index,
        t,
        surface: SurfacePoint {
            point,
            normal: shapes[shape_index].normal_at(&point),
        },
    })
}

//! Ray-sphere intersection (geometric form of the quadratic).

use crate::error::ShapeError;
use crate::primitive::ray::Ray;
use crate::shape::Color;
use crate::tolerance::{Sign, Tolerance};
use nalgebra::{Matrix3, Matrix4, Point3, Unit, Vector3};
use tracing::debug;

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub color: Color,
    pub center: Point3<f64>,
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere, rejecting non-finite centers and radii that are not strictly positive.
    pub fn new(color: Color, center: Point3<f64>, radius: f64) -> Result<Self, ShapeError> {
        if !center.coords.iter().all(|c| c.is_finite()) {
            debug!(?center, "rejecting sphere with non-finite center");
            return Err(ShapeError::DegenerateGeometry {
                shape: "sphere",
                reason: "center must be finite",
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            debug!(radius, "rejecting sphere with invalid radius");
            return Err(ShapeError::DegenerateGeometry {
                shape: "sphere",
                reason: "radius must be positive and finite",
            });
        }
        Ok(Self {
            color,
            center,
            radius,
        })
    }

    /// Intersects the sphere with the default tolerance.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_with(ray, &Tolerance::default())
    }

    /// Returns the nearest `t >= eps` at which `ray` enters or leaves the sphere.
    ///
    /// The ray direction must be unit length; `tca` below is only a distance if it is.
    ///
    /// If the origin is inside the sphere only the far root is in front of it, so that
    /// one is returned. A tangent ray gives a single double root.
    pub fn intersect_with(&self, ray: &Ray, tolerance: &Tolerance) -> Option<f64> {
        let v = self.center - ray.origin;
        // Distance along the ray to the point closest to the center.
        let tca = v.dot(&ray.direction);
        // Squared distance from the center to the ray's line.
        let d2 = v.dot(&v) - tca * tca;
        let r2 = self.radius * self.radius;

        if tolerance.sign(d2 - r2) == Sign::Positive {
            return None;
        }

        // d2 may exceed r2 by less than eps here; treat that as tangent.
        let thc = (r2 - d2).max(0.0).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        if t0 >= tolerance.eps() {
            Some(t0)
        } else if t1 >= tolerance.eps() {
            Some(t1)
        } else {
            None
        }
    }

    /// Moves the sphere's center by a homogeneous transform.
    ///
    /// The radius is left untouched, so only rigid motions (optionally combined with a
    /// uniform scale of the center position) are accepted. Matrices whose linear part
    /// shears or scales non-uniformly are rejected and the sphere is left as it was, as are
    /// projective matrices (bottom row other than `[0, 0, 0, 1]`) and zero scale.
    pub fn apply_matrix(&mut self, matrix: &Matrix4<f64>) -> Result<(), ShapeError> {
        let affine = matrix[(3, 0)] == 0.0
            && matrix[(3, 1)] == 0.0
            && matrix[(3, 2)] == 0.0
            && matrix[(3, 3)] == 1.0;
        if !affine {
            debug!(%matrix, "rejecting projective sphere transform");
            return Err(ShapeError::UnsupportedTransform(
                "bottom row must be [0, 0, 0, 1]",
            ));
        }
        let linear: Matrix3<f64> = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        if !(linear.norm_squared() > 0.0) {
            debug!(%matrix, "rejecting collapsing sphere transform");
            return Err(ShapeError::UnsupportedTransform("linear part must not be zero"));
        }
        if !is_similarity(&linear) {
            debug!(%matrix, "rejecting non-uniform sphere transform");
            return Err(ShapeError::NonUniformScale);
        }
        self.center = matrix.transform_point(&self.center);
        Ok(())
    }

    /// Unit vector from the center towards `point`.
    ///
    /// Only meaningful for points on the surface; the center itself has no normal.
    pub fn normal(&self, point: &Point3<f64>) -> Unit<Vector3<f64>> {
        Unit::new_normalize(point - self.center)
    }

    pub fn geogebra_string(&self) -> String {
        format!(
            "Sphere(({:}, {:}, {:}), {:})",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}

/// Whether `linear` is a rotation (or reflection) times a uniform scale, i.e. `Mᵀ M = s² I`.
fn is_similarity(linear: &Matrix3<f64>) -> bool {
    let gram = linear.transpose() * linear;
    let scale_squared = gram[(0, 0)];
    let allowed = 1e-9 * scale_squared.abs().max(1.0);
    (gram - Matrix3::identity() * scale_squared)
        .iter()
        .all(|entry| entry.abs() <= allowed)
}

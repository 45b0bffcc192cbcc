//! Ray-plane intersection.

use crate::error::ShapeError;
use crate::primitive::ray::Ray;
use crate::shape::Color;
use crate::tolerance::Tolerance;
use nalgebra::{Point3, Unit, Vector3};
use tracing::debug;

/// An infinite plane through `pp` with unit normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub color: Color,
    /// A point on the plane.
    pub pp: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

impl Plane {
    /// Creates a plane through `pp`. `normal` may have any non-zero length; it is normalized here.
    pub fn new(color: Color, pp: Point3<f64>, normal: Vector3<f64>) -> Result<Self, ShapeError> {
        if !pp.coords.iter().chain(normal.iter()).all(|c| c.is_finite()) {
            debug!(?pp, ?normal, "rejecting plane with non-finite input");
            return Err(ShapeError::DegenerateGeometry {
                shape: "plane",
                reason: "point and normal must be finite",
            });
        }
        let Some(normal) = Unit::try_new(normal, 0.0) else {
            debug!(?normal, "rejecting plane with zero normal");
            return Err(ShapeError::DegenerateGeometry {
                shape: "plane",
                reason: "normal must be non-zero",
            });
        };
        Ok(Self { color, pp, normal })
    }

    /// Intersects the plane with the default tolerance.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_with(ray, &Tolerance::default())
    }

    /// Computes the ray parameter at which `ray` crosses the plane, if it is past `eps`.
    ///
    /// Rays (nearly) parallel to the plane never hit, including rays lying in the plane.
    /// The plane is two-sided: rays from either side hit.
    pub fn intersect_with(&self, ray: &Ray, tolerance: &Tolerance) -> Option<f64> {
        let denom = self.normal.dot(&ray.direction);

        if tolerance.is_zero(denom) {
            return None;
        }

        let t = self.normal.dot(&(self.pp - ray.origin)) / denom;
        (t > tolerance.eps()).then_some(t)
    }

    /// The plane's normal, which is the same everywhere.
    pub fn normal(&self, _point: &Point3<f64>) -> Unit<Vector3<f64>> {
        self.normal
    }

    /// Signed distance from `point` to the plane, positive on the side the normal points to.
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.pp))
    }

    pub fn geogebra_string(&self) -> String {
        format!(
            "PerpendicularPlane(({:}, {:}, {:}), Vector(({:}, {:}, {:})))",
            self.pp.x, self.pp.y, self.pp.z, self.normal.x, self.normal.y, self.normal.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest::{arbitrary_point, arbitrary_unit_vector};
    use crate::tolerance::EPS;
    use proptest::prelude::*;

    fn plane(pp: Point3<f64>, normal: Vector3<f64>) -> Plane {
        Plane::new(Vector3::new(0.0, 1.0, 0.0), pp, normal).unwrap()
    }

    #[test]
    fn head_on_hit() {
        let plane = plane(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(plane.intersect(&ray), Some(5.0));
    }

    #[test]
    fn normal_is_normalized_on_construction() {
        let plane = plane(Point3::origin(), Vector3::new(0.0, 3.0, 4.0));
        assert!((plane.normal.norm() - 1.0).abs() < 1e-15);
        let normal = plane.normal(&Point3::new(7.0, -2.0, 1.0));
        assert!((normal.into_inner() - Vector3::new(0.0, 0.6, 0.8)).norm() < 1e-15);
    }

    #[test]
    fn hits_from_both_sides() {
        let plane = plane(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let from_below = Ray::new(Point3::new(0.0, 0.0, -10.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(plane.intersect(&from_below), Some(5.0));
        let from_above = Ray::new(Point3::new(1.0, 2.0, 0.0), Vector3::new(0.0, 0.0, -2.0));
        assert_eq!(plane.intersect(&from_above), Some(2.5));
    }

    #[test]
    fn parallel_rays_miss() {
        let plane = plane(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let offset = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(plane.intersect(&offset), None);
        let coplanar = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(plane.intersect(&coplanar), None);
        let nearly = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, -1e-7));
        assert_eq!(plane.intersect(&nearly), None);
    }

    #[test]
    fn plane_behind_the_ray_misses() {
        let plane = plane(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let away = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(plane.intersect(&away), None);
        let on_plane = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(plane.intersect(&on_plane), None);
    }

    #[test]
    fn rejects_zero_normal() {
        assert!(matches!(
            Plane::new(Vector3::zeros(), Point3::origin(), Vector3::zeros()),
            Err(ShapeError::DegenerateGeometry { shape: "plane", .. })
        ));
        let nan_normal = Vector3::new(f64::NAN, 1.0, 0.0);
        assert!(Plane::new(Vector3::zeros(), Point3::origin(), nan_normal).is_err());
    }

    proptest! {
        #[test]
        fn hit_point_lies_on_plane(
            pp in arbitrary_point(),
            normal in arbitrary_unit_vector(),
            origin in arbitrary_point(),
            dir in arbitrary_unit_vector(),
        ) {
            let plane = plane(pp, *normal);
            let ray = Ray::new(origin, *dir);
            prop_assume!(normal.dot(&*dir).abs() > 1e-3);

            let expected_hit = plane.signed_distance(&origin) * normal.dot(&*dir) < 0.0
                && plane.signed_distance(&origin).abs() > 1e-3;

            match plane.intersect(&ray) {
                Some(t) => {
                    prop_assert!(t > EPS);
                    let p = ray.point_at_parameter(t);
                    prop_assert!(plane.signed_distance(&p).abs() < 1e-4);
                }
                None => prop_assert!(!expected_hit),
            }
        }
    }
}

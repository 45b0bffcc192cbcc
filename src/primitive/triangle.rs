//! Ray-triangle intersection on top of the triangle's supporting plane.

use crate::error::ShapeError;
use crate::primitive::plane::Plane;
use crate::primitive::ray::Ray;
use crate::shape::Color;
use crate::tolerance::Tolerance;
use nalgebra::{Point3, Unit, Vector3};
use tracing::debug;

/// A triangle in 3D space defined by three points.
///
/// Hits are tested in a frame anchored at `a` and spanned by two unit edge directions:
/// `edge_ab` is `b - a` with its component along `c - a` removed, and `edge_ac` is `c - a`
/// with its component along `b - a` removed. A point is inside when its projections
/// `beta`, `gama` on those directions and `alpha = 1 - beta - gama` are all non-negative.
///
/// These are not classical barycentric coordinates: the frame is normalized, so the accepted
/// region depends on the triangle's size. Once `b` is more than one unit away from the line
/// through `a` and `c`, `b` itself falls outside it (and likewise for `c`). The construction
/// is kept exactly as is so hit/miss decisions stay stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The supporting plane, anchored at the first vertex.
    pub plane: Plane,
    /// The second vertex of the triangle.
    pub b: Point3<f64>,
    /// The third vertex of the triangle.
    pub c: Point3<f64>,
    pub edge_ab: Unit<Vector3<f64>>,
    pub edge_ac: Unit<Vector3<f64>>,
}

impl Triangle {
    /// Builds a triangle, rejecting collinear or non-finite vertices.
    pub fn new(
        color: Color,
        a: Point3<f64>,
        b: Point3<f64>,
        c: Point3<f64>,
    ) -> Result<Self, ShapeError> {
        let finite = [a, b, c]
            .iter()
            .all(|p| p.coords.iter().all(|v| v.is_finite()));
        if !finite {
            debug!(?a, ?b, ?c, "rejecting triangle with non-finite vertices");
            return Err(ShapeError::DegenerateGeometry {
                shape: "triangle",
                reason: "vertices must be finite",
            });
        }

        let u = b - a;
        let v = c - a;
        let raw_normal = u.cross(&v);
        // Collinear vertices leave no plane and no in-plane frame. The bound is on the sine of
        // the angle at `a`, so it does not depend on the triangle's size; coincident vertices
        // give zero on both sides.
        if raw_normal.norm() <= 1e-10 * u.norm() * v.norm() {
            debug!(?a, ?b, ?c, "rejecting collinear triangle");
            return Err(ShapeError::DegenerateGeometry {
                shape: "triangle",
                reason: "vertices are collinear",
            });
        }

        let plane = Plane::new(color, a, raw_normal)?;

        let proj_u_on_v = v * (u.dot(&v) / v.dot(&v));
        let proj_v_on_u = u * (v.dot(&u) / u.dot(&u));
        let edge_ab = u - proj_u_on_v;
        let edge_ab = Unit::new_unchecked(edge_ab / edge_ab.norm());
        let edge_ac = v - proj_v_on_u;
        let edge_ac = Unit::new_unchecked(edge_ac / edge_ac.norm());

        Ok(Self {
            plane,
            b,
            c,
            edge_ab,
            edge_ac,
        })
    }

    /// The first vertex, which is also the anchor of the supporting plane.
    pub fn a(&self) -> Point3<f64> {
        self.plane.pp
    }

    pub fn color(&self) -> Color {
        self.plane.color
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns `[alpha, beta, gama]` for a point in the triangle's plane.
    pub fn coordinates(&self, point: &Point3<f64>) -> [f64; 3] {
        let ap = point - self.a();
        let beta = self.edge_ab.dot(&ap);
        let gama = self.edge_ac.dot(&ap);
        [1.0 - beta - gama, beta, gama]
    }

    /// Intersects the triangle with the default tolerance.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_with(ray, &Tolerance::default())
    }

    /// Hits the supporting plane, then keeps the hit if all three in-plane coordinates are
    /// at least `-eps`. Points on the boundary count as inside.
    pub fn intersect_with(&self, ray: &Ray, tolerance: &Tolerance) -> Option<f64> {
        let t = self.plane.intersect_with(ray, tolerance)?;
        let p = ray.point_at_parameter(t);

        self.coordinates(&p)
            .iter()
            .all(|&coordinate| coordinate >= -tolerance.eps())
            .then_some(t)
    }

    /// The supporting plane's normal, the same everywhere on the triangle.
    pub fn normal(&self, point: &Point3<f64>) -> Unit<Vector3<f64>> {
        self.plane.normal(point)
    }

    pub fn barycenter(&self) -> Point3<f64> {
        Point3::from((self.a().coords + self.b.coords + self.c.coords) / 3.0)
    }

    pub fn area(&self) -> f64 {
        let ab = self.b - self.a();
        let ac = self.c - self.a();
        0.5 * ab.cross(&ac).norm()
    }

    pub fn geogebra_string(&self) -> String {
        let a = self.a();
        format!(
            "Polygon(({:}, {:}, {:}), ({:}, {:}, {:}), ({:}, {:}, {:}))",
            a.x, a.y, a.z, self.b.x, self.b.y, self.b.z, self.c.x, self.c.y, self.c.z
        )
    }
}

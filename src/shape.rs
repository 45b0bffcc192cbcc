//! The closed set of shapes a ray can be intersected with.

use crate::error::ShapeError;
use crate::primitive::plane::Plane;
use crate::primitive::ray::Ray;
use crate::primitive::sphere::Sphere;
use crate::primitive::triangle::Triangle;
use crate::tolerance::Tolerance;
use nalgebra::{Matrix4, Point3, Unit, Vector3};
use tracing::trace;

/// RGB color attached to a shape. Only used for shading, never for geometry.
pub type Color = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Sphere(sphere) => sphere.color,
            Shape::Plane(plane) => plane.color,
            Shape::Triangle(triangle) => triangle.color(),
        }
    }

    /// Smallest valid `t` at which `ray` hits the shape, using the default tolerance.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_with(ray, &Tolerance::default())
    }

    pub fn intersect_with(&self, ray: &Ray, tolerance: &Tolerance) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect_with(ray, tolerance),
            Shape::Plane(plane) => plane.intersect_with(ray, tolerance),
            Shape::Triangle(triangle) => triangle.intersect_with(ray, tolerance),
        }
    }

    /// Unit surface normal at `point`, which is assumed to lie on the shape.
    pub fn normal_at(&self, point: &Point3<f64>) -> Unit<Vector3<f64>> {
        match self {
            Shape::Sphere(sphere) => sphere.normal(point),
            Shape::Plane(plane) => plane.normal(point),
            Shape::Triangle(triangle) => triangle.normal(point),
        }
    }

    /// Applies a homogeneous transform to the shape in place.
    ///
    /// Only spheres move. Planes and triangles are left untouched; transforming them is
    /// not supported.
    pub fn apply_matrix(&mut self, matrix: &Matrix4<f64>) -> Result<(), ShapeError> {
        match self {
            Shape::Sphere(sphere) => sphere.apply_matrix(matrix),
            Shape::Plane(_) | Shape::Triangle(_) => {
                trace!("ignoring transform of a plane or triangle");
                Ok(())
            }
        }
    }

    pub fn geogebra_string(&self) -> String {
        match self {
            Shape::Sphere(sphere) => sphere.geogebra_string(),
            Shape::Plane(plane) => plane.geogebra_string(),
            Shape::Triangle(triangle) => triangle.geogebra_string(),
        }
    }
}

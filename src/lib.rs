//! Ray intersection primitives for a ray tracer.
//!
//! Three analytic shapes are supported: spheres, infinite planes and triangles.
//! Each can be intersected with a [`Ray`], queried for its surface normal, and
//! (for spheres) moved by a homogeneous transform. There is deliberately no
//! acceleration structure here; [`intersection::closest_hit`] is a plain linear scan.
//!
//! All tolerance decisions go through [`Tolerance`], whose default epsilon is [`EPS`].

pub mod config;
pub mod error;
pub mod intersection;
pub mod primitive;
pub mod shape;
pub mod tolerance;

#[cfg(test)]
pub mod proptest;

// Re-export commonly used types
pub use config::{ShapeData, ShapesConfig, load_config, parse_config};
pub use error::ShapeError;
pub use intersection::{Hit, closest_hit, closest_hit_with};
pub use primitive::plane::Plane;
pub use primitive::ray::Ray;
pub use primitive::sphere::Sphere;
pub use primitive::surface_point::SurfacePoint;
pub use primitive::triangle::Triangle;
pub use shape::{Color, Shape};
pub use tolerance::{EPS, Sign, Tolerance, classify_sign};

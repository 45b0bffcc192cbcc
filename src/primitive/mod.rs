//! This module contains the primitive geometry types.
//!
//! Every primitive here is of O(1) complexity: a ray, and the three analytic shapes
//! a ray can be intersected with (sphere, plane and triangle).
//!
//! The polymorphic wrapper over the shapes lives in [`crate::shape`].

pub mod plane;
pub mod ray;
pub mod sphere;
pub mod surface_point;
pub mod triangle;

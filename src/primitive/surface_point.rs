use nalgebra::{Point3, Unit, Vector3};

/// A point on a shape's surface together with the unit normal there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfacePoint {
    pub point: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

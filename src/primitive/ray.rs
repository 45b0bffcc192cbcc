use nalgebra::{Point3, Vector3};

/// Represents a ray in 3D space, defined by an origin point and a direction.
///
/// The direction is stored as given; it is not normalized. Sphere intersection
/// assumes a unit direction, so use [`Ray::normalized`] when `t` must be a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    /// Creates a new `Ray` from an origin point and a direction vector.
    ///
    /// # Parameters
    /// - `origin`: The origin point of the ray.
    /// - `direction`: The direction vector of the ray.
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Returns the same ray with a unit-length direction.
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize(),
        }
    }

    /// Returns the point `origin + t * direction`.
    ///
    /// # Parameters
    /// - `t`: The ray parameter.
    ///
    /// # Returns
    /// The point at the given parameter along the ray.
    pub fn point_at_parameter(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    pub fn geogebra_string(&self) -> String {
        format!(
            "Ray(({:}, {:}, {:}), Vector(({:}, {:}, {:})))",
            self.origin.x,
            self.origin.y,
            self.origin.z,
            self.direction.x,
            self.direction.y,
            self.direction.z
        )
    }
}

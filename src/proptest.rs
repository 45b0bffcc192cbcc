use nalgebra::{Point3, Unit, Vector3};
use proptest::prelude::*;

/// A Strategy to generate f64 values within the range [-50.0, 50.0].
/// though it is set up to be likely to produce zeros, round numbers, and edge cases.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
            Just(-std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector() -> impl Strategy<Value = Vector3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

pub fn arbitrary_unit_vector() -> impl Strategy<Value = Unit<Vector3<f64>>> {
    arbitrary_vector()
        .prop_filter("Non-zero vector", |v| v.norm() > 0.0001)
        .prop_map(Unit::new_normalize)
}

pub fn arbitrary_point() -> impl Strategy<Value = Point3<f64>> {
    arbitrary_vector().prop_map(Point3::from)
}

/// Three vertices spanning a triangle that is neither tiny nor a sliver.
///
/// The angle at the first vertex is kept above roughly 3 degrees, since the in-plane
/// frame of a triangle loses precision as that angle shrinks.
pub fn arbitrary_triangle_vertices()
-> impl Strategy<Value = (Point3<f64>, Point3<f64>, Point3<f64>)> {
    (arbitrary_point(), arbitrary_point(), arbitrary_point()).prop_filter(
        "Well-shaped triangle",
        |(a, b, c)| {
            let u = b - a;
            let v = c - a;
            let doubled_area = u.cross(&v).norm();
            doubled_area > 1.0 && doubled_area > 0.05 * u.norm() * v.norm()
        },
    )
}

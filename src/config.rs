//! Plain-data shape descriptions, loadable from TOML.
//!
//! ```toml
//! [tolerance]
//! eps = 1e-6
//!
//! [[shapes]]
//! type = "Sphere"
//! color = [1.0, 0.0, 0.0]
//! center = [0.0, 0.0, -5.0]
//! radius = 1.0
//! ```

use crate::error::ShapeError;
use crate::primitive::plane::Plane;
use crate::primitive::sphere::Sphere;
use crate::primitive::triangle::Triangle;
use crate::shape::Shape;
use crate::tolerance::Tolerance;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub type Vec3Data = [f64; 3];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ShapeData {
    Sphere {
        color: Vec3Data,
        center: Vec3Data,
        radius: f64,
    },
    Plane {
        color: Vec3Data,
        point: Vec3Data,
        normal: Vec3Data,
    },
    Triangle {
        color: Vec3Data,
        a: Vec3Data,
        b: Vec3Data,
        c: Vec3Data,
    },
}

impl TryFrom<ShapeData> for Shape {
    type Error = ShapeError;

    fn try_from(data: ShapeData) -> Result<Self, Self::Error> {
        let shape = match data {
            ShapeData::Sphere {
                color,
                center,
                radius,
            } => Sphere::new(color.into(), Point3::from(center), radius)?.into(),
            ShapeData::Plane {
                color,
                point,
                normal,
            } => Plane::new(color.into(), Point3::from(point), Vector3::from(normal))?.into(),
            ShapeData::Triangle { color, a, b, c } => Triangle::new(
                color.into(),
                Point3::from(a),
                Point3::from(b),
                Point3::from(c),
            )?
            .into(),
        };
        Ok(shape)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShapesConfig {
    #[serde(default)]
    pub tolerance: Tolerance,
    #[serde(default)]
    pub shapes: Vec<ShapeData>,
}

impl ShapesConfig {
    /// Validates every description and builds the shapes, in order.
    pub fn build(&self) -> Result<Vec<Shape>, ShapeError> {
        self.shapes.iter().map(|&data| Shape::try_from(data)).collect()
    }
}

pub fn parse_config(input: &str) -> Result<ShapesConfig, ShapeError> {
    Ok(toml::from_str(input)?)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<ShapesConfig, ShapeError> {
    let path = path.as_ref();
    info!("loading shapes from {}", path.display());
    let input = std::fs::read_to_string(path)?;
    parse_config(&input)
}

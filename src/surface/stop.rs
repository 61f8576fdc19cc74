#![warn(missing_docs)]
//! Absorbing stop surface
use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    error::MarmResult,
    meter,
    ray::Ray,
    shape::Shape,
    surface::{check_refractive_index, plane_intersection, Surface},
};

/// A flat absorbing surface, optionally with a transmitting aperture.
///
/// A stop without an aperture absorbs every ray hitting its shape ("full stop"). With an
/// aperture, rays hitting inside the aperture shape pass through unchanged while the
/// remaining shape absorbs. The stop lies in its local xy plane at z=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    shape: Shape,
    aperture: Option<Shape>,
}
impl Default for Stop {
    /// Create a full stop covering the default shape.
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            aperture: None,
        }
    }
}
impl Stop {
    /// Creates a new full [`Stop`] covering the given shape.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            aperture: None,
        }
    }
    /// Creates a new [`Stop`] with a transmitting aperture inside the given shape.
    ///
    /// The aperture is assumed to lie within the outer shape. Points outside the outer
    /// shape never intersect, regardless of the aperture.
    #[must_use]
    pub fn with_aperture(shape: Shape, aperture: Shape) -> Self {
        Self {
            shape,
            aperture: Some(aperture),
        }
    }
    /// Returns a reference to the shape bounding this [`Stop`].
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }
    /// Returns a reference to the aperture of this [`Stop`] (if any).
    #[must_use]
    pub const fn aperture(&self) -> Option<&Shape> {
        self.aperture.as_ref()
    }
}
impl Surface for Stop {
    fn normal(&self, _point: &Point3<Length>) -> Vector3<f64> {
        Vector3::z()
    }
    fn intersection(&self, ray: &Ray) -> Option<Point3<Length>> {
        plane_intersection(ray, &self.shape)
    }
    fn propagate(&self, ray: &Ray, n_in: f64, n_out: f64) -> MarmResult<Vec<Ray>> {
        check_refractive_index(n_in)?;
        check_refractive_index(n_out)?;
        let Some(intersection_point) = self.intersection(ray) else {
            return Ok(Vec::new());
        };
        if let Some(aperture) = &self.aperture {
            if aperture.contains(&Point2::new(intersection_point.x, intersection_point.y)) {
                let pos_in_m = ray.position().map(|c| c.value);
                let intersection_in_m = intersection_point.map(|c| c.value);
                let mut transmitted = ray.clone();
                transmitted.propagate(meter!((intersection_in_m - pos_in_m).norm()))?;
                return Ok(vec![transmitted]);
            }
        }
        Ok(Vec::new())
    }
}

#![warn(missing_docs)]
//! Module for handling the 2D shapes of planar surfaces
//!
//! A [`Shape`] defines the finite footprint of a planar surface within its local xy plane.
//! Shapes are always centered on the local origin. The surface position within a larger
//! component is handled by the respective face placement, not by the shape itself.
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    error::{MarmResult, MarmotError},
    millimeter,
};

/// Different shape types bounding a planar surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// rectangular boundary defined by width and height, centered on the local origin
    Rectangular(RectangleConfig),
    /// circular boundary defined by its radius, centered on the local origin
    Circular(CircleConfig),
}
impl Shape {
    /// Check if the given point lies within the shape boundary.
    ///
    /// Points exactly on the boundary are considered inside.
    #[must_use]
    pub fn contains(&self, point: &Point2<Length>) -> bool {
        match self {
            Self::Rectangular(config) => config.contains(point),
            Self::Circular(config) => config.contains(point),
        }
    }
    /// Returns the half extents of the shape's bounding box.
    #[must_use]
    pub fn half_extents(&self) -> Point2<Length> {
        match self {
            Self::Rectangular(config) => Point2::new(config.width * 0.5, config.height * 0.5),
            Self::Circular(config) => Point2::new(config.radius, config.radius),
        }
    }
}
impl Default for Shape {
    /// Create a rectangular shape with the active area dimensions of a DLP4710 class device.
    fn default() -> Self {
        Self::Rectangular(RectangleConfig {
            width: millimeter!(10.368),
            height: millimeter!(5.832),
        })
    }
}
/// Configuration data for a rectangular shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleConfig {
    width: Length,
    height: Length,
}
impl RectangleConfig {
    /// Create a new rectangular shape configuration of the given width and height.
    ///
    /// # Errors
    ///
    /// This function will return an error if width and/or height are zero, negative, NaN or infinite.
    pub fn new(width: Length, height: Length) -> MarmResult<Self> {
        if width.is_normal()
            && width.is_sign_positive()
            && height.is_normal()
            && height.is_sign_positive()
        {
            Ok(Self { width, height })
        } else {
            Err(MarmotError::InvalidDimension(
                "height & width must be positive".into(),
            ))
        }
    }
    fn contains(&self, point: &Point2<Length>) -> bool {
        point.x.abs() <= self.width * 0.5 && point.y.abs() <= self.height * 0.5
    }
}
/// Configuration data for a circular shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    radius: Length,
}
impl CircleConfig {
    /// Create a new circular shape configuration of the given radius.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given radius is zero, negative, NaN or infinite.
    pub fn new(radius: Length) -> MarmResult<Self> {
        if radius.is_normal() && radius.is_sign_positive() {
            Ok(Self { radius })
        } else {
            Err(MarmotError::InvalidDimension("radius must be positive".into()))
        }
    }
    fn contains(&self, point: &Point2<Length>) -> bool {
        point.x.value.hypot(point.y.value) <= self.radius.value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rectangle_config_new() {
        assert!(RectangleConfig::new(millimeter!(0.0), millimeter!(1.0)).is_err());
        assert!(RectangleConfig::new(millimeter!(1.0), millimeter!(0.0)).is_err());
        assert!(RectangleConfig::new(millimeter!(-1.0), millimeter!(1.0)).is_err());
        assert!(RectangleConfig::new(millimeter!(1.0), millimeter!(-1.0)).is_err());
        assert!(RectangleConfig::new(millimeter!(f64::NAN), millimeter!(1.0)).is_err());
        assert!(RectangleConfig::new(millimeter!(1.0), millimeter!(f64::INFINITY)).is_err());
        assert!(RectangleConfig::new(millimeter!(1.0), millimeter!(2.0)).is_ok());
    }
    #[test]
    fn circle_config_new() {
        assert!(CircleConfig::new(millimeter!(0.0)).is_err());
        assert!(CircleConfig::new(millimeter!(-1.0)).is_err());
        assert!(CircleConfig::new(millimeter!(f64::NAN)).is_err());
        assert!(CircleConfig::new(millimeter!(f64::INFINITY)).is_err());
        assert!(CircleConfig::new(millimeter!(1.0)).is_ok());
    }
    #[test]
    fn rectangle_contains() {
        let shape = Shape::Rectangular(
            RectangleConfig::new(millimeter!(2.0), millimeter!(1.0)).unwrap(),
        );
        assert!(shape.contains(&millimeter!(0.0, 0.0)));
        assert!(shape.contains(&millimeter!(1.0, 0.5)));
        assert!(shape.contains(&millimeter!(-1.0, -0.5)));
        assert!(!shape.contains(&millimeter!(1.1, 0.0)));
        assert!(!shape.contains(&millimeter!(0.0, 0.6)));
    }
    #[test]
    fn circle_contains() {
        let shape = Shape::Circular(CircleConfig::new(millimeter!(1.0)).unwrap());
        assert!(shape.contains(&millimeter!(0.0, 0.0)));
        assert!(shape.contains(&millimeter!(1.0, 0.0)));
        assert!(shape.contains(&millimeter!(0.0, -1.0)));
        assert!(shape.contains(&millimeter!(0.7, 0.7)));
        assert!(!shape.contains(&millimeter!(0.8, 0.8)));
        assert!(!shape.contains(&millimeter!(1.1, 0.0)));
    }
    #[test]
    fn half_extents() {
        let shape = Shape::Rectangular(
            RectangleConfig::new(millimeter!(2.0), millimeter!(1.0)).unwrap(),
        );
        assert_eq!(shape.half_extents(), millimeter!(1.0, 0.5));
        let shape = Shape::Circular(CircleConfig::new(millimeter!(2.0)).unwrap());
        assert_eq!(shape.half_extents(), millimeter!(2.0, 2.0));
    }
    #[test]
    fn default() {
        let shape = Shape::default();
        assert_eq!(shape.half_extents(), millimeter!(5.184, 2.916));
        assert!(shape.contains(&millimeter!(5.184, 2.916)));
        assert!(!shape.contains(&millimeter!(5.2, 0.0)));
    }
}

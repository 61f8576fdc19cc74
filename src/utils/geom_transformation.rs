#![warn(missing_docs)]
//! Module for handling rigid-body transformations between coordinate frames
use nalgebra::{Isometry3, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Angle, Length};

use crate::{
    error::{MarmResult, MarmotError},
    meter, radian,
};

/// A rigid-body transformation (translation + rotation) between two coordinate frames.
///
/// The transformation maps points and directions from a child frame (e.g. a face of a
/// component) into its parent frame. Rotations are given as extrinsic Euler angles
/// (around x, y, z) applied in the order Rz * Ry * Rx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Isometry {
    transform: Isometry3<f64>,
}
impl Isometry {
    /// Create a new [`Isometry`] from the given translation and rotation.
    ///
    /// # Errors
    ///
    /// This function will return an error if a translation or rotation component is not finite.
    pub fn new(translation: Point3<Length>, rotation: Point3<Angle>) -> MarmResult<Self> {
        if translation.iter().any(|c| !c.is_finite()) {
            return Err(MarmotError::Other("translation must be finite".into()));
        }
        if rotation.iter().any(|c| !c.is_finite()) {
            return Err(MarmotError::Other("rotation must be finite".into()));
        }
        let translation_in_m =
            Translation3::new(translation.x.value, translation.y.value, translation.z.value);
        let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_euler_angles(
            rotation.x.value,
            rotation.y.value,
            rotation.z.value,
        ));
        Ok(Self {
            transform: Isometry3::from_parts(translation_in_m, rotation),
        })
    }
    /// Create a new [`Isometry`] from a translation only.
    ///
    /// # Errors
    ///
    /// This function will return an error if a translation component is not finite.
    pub fn new_translation(translation: Point3<Length>) -> MarmResult<Self> {
        Self::new(translation, radian!(0.0, 0.0, 0.0))
    }
    /// Create a new [`Isometry`] from a rotation only.
    ///
    /// # Errors
    ///
    /// This function will return an error if a rotation component is not finite.
    pub fn new_rotation(rotation: Point3<Angle>) -> MarmResult<Self> {
        Self::new(meter!(0.0, 0.0, 0.0), rotation)
    }
    /// Create an identity transform (no translation, no rotation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            transform: Isometry3::identity(),
        }
    }
    /// Transform the given point from the child frame into the parent frame.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<Length>) -> Point3<Length> {
        let point_in_m = point.map(|c| c.value);
        let transformed = self.transform.transform_point(&point_in_m);
        meter!(transformed.x, transformed.y, transformed.z)
    }
    /// Transform the given point from the parent frame into the child frame.
    #[must_use]
    pub fn inverse_transform_point(&self, point: &Point3<Length>) -> Point3<Length> {
        let point_in_m = point.map(|c| c.value);
        let transformed = self.transform.inverse_transform_point(&point_in_m);
        meter!(transformed.x, transformed.y, transformed.z)
    }
    /// Transform the given direction vector from the child frame into the parent frame.
    ///
    /// Only the rotation part is applied since directions are position independent.
    #[must_use]
    pub fn transform_vector_f64(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform.transform_vector(vector)
    }
    /// Transform the given direction vector from the parent frame into the child frame.
    #[must_use]
    pub fn inverse_transform_vector_f64(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.transform.inverse_transform_vector(vector)
    }
}

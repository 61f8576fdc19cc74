#![warn(missing_docs)]
//! Module for handling optical rays
use std::fmt::Display;

use nalgebra::{vector, Point3, Vector3};
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::si::{
    energy::joule,
    f64::{Energy, Length},
    length::{meter, nanometer},
};

use crate::{
    error::{MarmResult, MarmotError},
    utils::geom_transformation::Isometry,
};

///Struct that contains all information about an optical ray
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ray {
    /// Stores the current position of the ray
    pos: Point3<Length>,
    /// Stores the current propagation direction of the ray (stored as direction cosine)
    dir: Vector3<f64>,
    /// Energy of the ray
    e: Energy,
    /// Wavelength of the ray
    wvl: Length,
    /// Bounce count of the ray. Used as stop criterion by tracing engines.
    number_of_bounces: usize,
}
impl Ray {
    /// Creates a new [`Ray`].
    ///
    /// The direction vector is normalized. The direction is thus stored as (`direction cosine`)[`https://en.wikipedia.org/wiki/Direction_cosine`]
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the given energy is < 0.0, `NaN` or +inf
    ///  - the direction vector has a zero or non-finite length
    pub fn new(
        position: Point3<Length>,
        direction: Vector3<f64>,
        wave_length: Length,
        energy: Energy,
    ) -> MarmResult<Self> {
        if wave_length.is_zero() || wave_length.is_sign_negative() || !wave_length.is_finite() {
            return Err(MarmotError::Other("wavelength must be >0".into()));
        }
        if energy.is_sign_negative() || !energy.is_finite() {
            return Err(MarmotError::Other("energy must be >0".into()));
        }
        if !direction.norm().is_normal() {
            return Err(MarmotError::Other(
                "length of direction must be >0 and finite".into(),
            ));
        }
        Ok(Self {
            pos: position,
            dir: direction.normalize(),
            e: energy,
            wvl: wave_length,
            number_of_bounces: 0,
        })
    }
    /// Create a new collimated ray.
    ///
    /// Generate a ray collinear with the z axis (optical axis).
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the given wavelength is <= 0.0, `NaN` or +inf
    ///  - the given energy is < 0.0, `NaN` or +inf
    pub fn new_collimated(
        position: Point3<Length>,
        wave_length: Length,
        energy: Energy,
    ) -> MarmResult<Self> {
        Self::new(position, Vector3::z(), wave_length, energy)
    }
    /// Returns the position of this [`Ray`].
    #[must_use]
    pub fn position(&self) -> Point3<Length> {
        self.pos
    }
    /// Returns the direction of this [`Ray`].
    #[must_use]
    pub const fn direction(&self) -> Vector3<f64> {
        self.dir
    }
    /// Returns the energy of this [`Ray`].
    #[must_use]
    pub fn energy(&self) -> Energy {
        self.e
    }
    /// Returns the wavelength of this [`Ray`].
    #[must_use]
    pub fn wavelength(&self) -> Length {
        self.wvl
    }
    /// Returns the number of bounces of this [`Ray`].
    #[must_use]
    pub const fn number_of_bounces(&self) -> usize {
        self.number_of_bounces
    }
    /// Propagate a ray freely along its direction by the given length.
    ///
    /// # Errors
    /// This functions returns an error if the propagation length is not finite.
    pub fn propagate(&mut self, length: Length) -> MarmResult<()> {
        if !length.is_finite() {
            return Err(MarmotError::Other(
                "propagation length must be finite".into(),
            ));
        }
        self.pos += vector![
            length * self.dir.x,
            length * self.dir.y,
            length * self.dir.z
        ];
        Ok(())
    }
    /// Create the reflection of this [`Ray`] at the given position on a surface with the given normal.
    ///
    /// The reflected direction follows the law of reflection `d' = d - 2 * (d . n) * n`. The
    /// returned ray keeps wavelength and energy and has its bounce counter incremented.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the normal vector has a zero or non-finite length
    ///  - a coordinate of the given position is not finite
    pub fn reflected_at(
        &self,
        position: &Point3<Length>,
        normal: &Vector3<f64>,
    ) -> MarmResult<Self> {
        if !normal.norm().is_normal() {
            return Err(MarmotError::Other(
                "length of surface normal must be >0 and finite".into(),
            ));
        }
        if position.iter().any(|c| !c.is_finite()) {
            return Err(MarmotError::Other(
                "reflection position must be finite".into(),
            ));
        }
        let s1 = self.dir.normalize();
        let n = normal.normalize();
        let reflected_dir = s1 - 2.0 * (s1.dot(&n)) * n;
        let mut reflected_ray = self.clone();
        reflected_ray.pos = *position;
        reflected_ray.dir = reflected_dir;
        reflected_ray.number_of_bounces += 1;
        Ok(reflected_ray)
    }
    /// Get [`Ray`] translated and rotated by given [`Isometry`]
    #[must_use]
    pub fn transformed_ray(&self, isometry: &Isometry) -> Self {
        let transformed_position = isometry.transform_point(&self.pos);
        let transformed_dir = isometry.transform_vector_f64(&self.dir);
        let mut new_ray = self.clone();
        new_ray.pos = transformed_position;
        new_ray.dir = transformed_dir;
        new_ray
    }
    /// Get [`Ray`] inverse translated and rotated by given [`Isometry`]
    #[must_use]
    pub fn inverse_transformed_ray(&self, isometry: &Isometry) -> Self {
        let transformed_position = isometry.inverse_transform_point(&self.pos);
        let transformed_dir = isometry.inverse_transform_vector_f64(&self.dir);
        let mut new_ray = self.clone();
        new_ray.pos = transformed_position;
        new_ray.dir = transformed_dir;
        new_ray
    }
}
impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = Length::format_args(meter, uom::fmt::DisplayStyle::Abbreviation);
        let nm = Length::format_args(nanometer, uom::fmt::DisplayStyle::Abbreviation);
        let e = Energy::format_args(joule, uom::fmt::DisplayStyle::Abbreviation);
        write!(
            f,
            "pos: ({}, {}, {}), dir: ({}, {}, {}), energy: {:.6}, wavelength: {:.4}",
            m.with(self.pos[0]),
            m.with(self.pos[1]),
            m.with(self.pos[2]),
            self.dir[0],
            self.dir[1],
            self.dir[2],
            e.with(self.e),
            nm.with(self.wvl)
        )
    }
}

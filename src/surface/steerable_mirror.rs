#![warn(missing_docs)]
//! Steerable micromirror surface (simplified DMD facet)
//!
//! A digitally steerable mirror as found in DMD (Digital Micromirror Device) projectors,
//! reduced to a single flat facet. The facet geometry is fixed, only the reported surface
//! normal depends on a discrete, runtime switchable state.
use std::{fmt::Display, str::FromStr};

use log::warn;
use nalgebra::{Point3, Vector3};
use num::Zero;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uom::si::f64::{Angle, Length};

use crate::{
    error::{MarmResult, MarmotError},
    ray::Ray,
    shape::Shape,
    surface::{check_refractive_index, plane_intersection, Surface},
};

/// Discrete orientation states of a [`SteerableMirror`].
///
/// All three states are mutually reachable at any time. The canonical string forms used
/// for parsing and display are `"flat"`, `"on"` and `"off"`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum MirrorState {
    /// rest position, the reported normal points along the local +z axis
    #[default]
    Flat,
    /// facet deflected toward the on direction angle
    On,
    /// facet deflected toward the off direction angle
    Off,
}
impl Display for MirrorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Flat => "flat",
            Self::On => "on",
            Self::Off => "off",
        };
        write!(f, "{msg}")
    }
}
impl FromStr for MirrorState {
    type Err = MarmotError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(MarmotError::InvalidState(format!(
                "state must be one of 'flat', 'on' or 'off', got '{s}'"
            ))),
        }
    }
}

/// A flat, finite reflective surface with a state dependent normal.
///
/// The surface lies in its local xy plane at z=0, bounded by its [`Shape`]. Switching the
/// [`MirrorState`] never moves the facet's base plane. Only the normal reported by
/// [`Surface::normal`] (and with it the reflection direction) changes, which models an
/// idealized, infinitely thin pivoting mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteerableMirror {
    tilt_angle: Angle,
    on_direction: Angle,
    off_direction: Angle,
    state: MirrorState,
    shape: Shape,
}
impl Default for SteerableMirror {
    /// Create a flat-state mirror with zero tilt and the default shape.
    fn default() -> Self {
        Self {
            tilt_angle: Angle::zero(),
            on_direction: Angle::zero(),
            off_direction: Angle::zero(),
            state: MirrorState::default(),
            shape: Shape::default(),
        }
    }
}
impl SteerableMirror {
    /// Creates a new [`SteerableMirror`].
    ///
    /// The tilt angle is the magnitude of the normal deflection from the local +z axis in
    /// both active states. The direction angles give the azimuth (counter-clockwise from
    /// the local +x axis) toward which the normal tilts in the respective state. They are
    /// independent of each other, in particular they do not have to be opposite.
    ///
    /// # Errors
    /// This function returns an error if
    ///  - the tilt angle is negative or not finite
    ///  - a direction angle is not finite
    pub fn new(
        tilt_angle: Angle,
        on_direction: Angle,
        off_direction: Angle,
        state: MirrorState,
        shape: Shape,
    ) -> MarmResult<Self> {
        if !tilt_angle.is_finite() || tilt_angle < Angle::zero() {
            return Err(MarmotError::InvalidDimension(
                "tilt angle must be >=0 and finite".into(),
            ));
        }
        if !on_direction.is_finite() {
            return Err(MarmotError::InvalidDimension(
                "on direction angle must be finite".into(),
            ));
        }
        if !off_direction.is_finite() {
            return Err(MarmotError::InvalidDimension(
                "off direction angle must be finite".into(),
            ));
        }
        Ok(Self {
            tilt_angle,
            on_direction,
            off_direction,
            state,
            shape,
        })
    }
    /// Modifies a [`SteerableMirror`]'s state given its canonical string form.
    ///
    /// This function can be used with the "builder pattern".
    ///
    /// # Errors
    ///
    /// This function will return an error if the given string is not one of `"flat"`,
    /// `"on"` or `"off"`.
    pub fn with_state_str(mut self, state: &str) -> MarmResult<Self> {
        self.set_state_str(state)?;
        Ok(self)
    }
    /// Returns the tilt angle of this [`SteerableMirror`].
    #[must_use]
    pub fn tilt_angle(&self) -> Angle {
        self.tilt_angle
    }
    /// Returns the on direction angle of this [`SteerableMirror`].
    #[must_use]
    pub fn on_direction(&self) -> Angle {
        self.on_direction
    }
    /// Returns the off direction angle of this [`SteerableMirror`].
    #[must_use]
    pub fn off_direction(&self) -> Angle {
        self.off_direction
    }
    /// Returns the current state of this [`SteerableMirror`].
    #[must_use]
    pub const fn state(&self) -> MirrorState {
        self.state
    }
    /// Returns a reference to the shape bounding this [`SteerableMirror`].
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }
    /// Sets the state of this [`SteerableMirror`].
    pub fn set_state(&mut self, state: MirrorState) {
        self.state = state;
    }
    /// Sets the state of this [`SteerableMirror`] given its canonical string form.
    ///
    /// The string is validated before the state is committed. On a failed validation the
    /// previous state is retained.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given string is not one of `"flat"`,
    /// `"on"` or `"off"`.
    pub fn set_state_str(&mut self, state: &str) -> MarmResult<()> {
        self.state = state.parse::<MirrorState>()?;
        Ok(())
    }
    fn tilted_normal(tilt_angle: Angle, direction: Angle) -> Vector3<f64> {
        let sin_tilt = tilt_angle.sin().value;
        Vector3::new(
            sin_tilt * direction.cos().value,
            sin_tilt * direction.sin().value,
            tilt_angle.cos().value,
        )
    }
}
impl Surface for SteerableMirror {
    fn normal(&self, _point: &Point3<Length>) -> Vector3<f64> {
        match self.state {
            MirrorState::Flat => Vector3::z(),
            MirrorState::On => Self::tilted_normal(self.tilt_angle, self.on_direction),
            MirrorState::Off => Self::tilted_normal(self.tilt_angle, self.off_direction),
        }
    }
    fn intersection(&self, ray: &Ray) -> Option<Point3<Length>> {
        plane_intersection(ray, &self.shape)
    }
    fn propagate(&self, ray: &Ray, n_in: f64, n_out: f64) -> MarmResult<Vec<Ray>> {
        check_refractive_index(n_in)?;
        check_refractive_index(n_out)?;
        if n_in != n_out {
            warn!(
                "refractive indices n_in={n_in}, n_out={n_out} differ but a steerable mirror only reflects"
            );
        }
        let Some(intersection_point) = self.intersection(ray) else {
            return Ok(Vec::new());
        };
        let reflected = ray.reflected_at(&intersection_point, &self.normal(&intersection_point))?;
        Ok(vec![reflected])
    }
}
impl Display for SteerableMirror {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SteerableMirror(state='{}', tilt_angle={:.5}, on_direction={:.5}, off_direction={:.5})",
            self.state,
            self.tilt_angle.value,
            self.on_direction.value,
            self.off_direction.value
        )
    }
}

#![warn(missing_docs)]
//! Closed enclosure around a steerable micromirror
use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt::Display,
};

use nalgebra::Point3;
use num::Zero;
use serde::{Deserialize, Serialize};
use uom::{
    fmt::DisplayStyle::Abbreviation,
    si::{
        f64::{Angle, Length},
        length::millimeter,
    },
};

use crate::{
    component::{Component, FaceMap, FacePlacement},
    error::{MarmResult, MarmotError},
    millimeter, radian,
    shape::{RectangleConfig, Shape},
    surface::{FaceSurface, MirrorState, SteerableMirror, Stop},
};

/// A steerable micromirror packaged as a closed, box shaped component.
///
/// The enclosure consists of six faces. The front face is a [`SteerableMirror`], the five
/// remaining faces are full [`Stop`]s, so every ray entering the box either reflects off
/// the mirror or is absorbed. The component origin lies at the center of the front face
/// ("principal surface" convention, as for mirrors and gratings). The front face is
/// rotated by π around the y axis, its optical side therefore looks toward the component
/// −z axis.
///
/// The default dimensions of 10.368 x 5.832 x 2 mm correspond to the active area of a
/// DLP4710 chip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorEnclosure {
    width: Length,
    height: Length,
    thickness: Length,
    tilt_angle: Angle,
    on_direction: Angle,
    off_direction: Angle,
    faces: FaceMap,
}
impl MirrorEnclosure {
    /// Creates a new [`MirrorEnclosure`] with the default dimensions, in `flat` state.
    ///
    /// The tilt angle is the magnitude of the mirror normal deflection in both active
    /// states. The direction angles give the azimuth (counter-clockwise from the +x axis)
    /// toward which the normal tilts in the `on` and `off` state respectively.
    ///
    /// # Errors
    ///
    /// This function will return an error if the tilt angle is negative or an angle is
    /// not finite.
    pub fn new(tilt_angle: Angle, on_direction: Angle, off_direction: Angle) -> MarmResult<Self> {
        Self::build(
            tilt_angle,
            on_direction,
            off_direction,
            MirrorState::default(),
            millimeter!(10.368),
            millimeter!(5.832),
            millimeter!(2.0),
        )
    }
    /// Modifies the dimensions of this [`MirrorEnclosure`].
    ///
    /// This function can be used with the "builder pattern". It rebuilds the face
    /// registry, so all face placements follow the new dimensions. The mirror state is
    /// preserved.
    ///
    /// # Errors
    ///
    /// This function will return an error if a dimension is zero, negative or not finite.
    pub fn with_dimensions(
        self,
        width: Length,
        height: Length,
        thickness: Length,
    ) -> MarmResult<Self> {
        let state = self.state()?;
        Self::build(
            self.tilt_angle,
            self.on_direction,
            self.off_direction,
            state,
            width,
            height,
            thickness,
        )
    }
    /// Modifies the mirror state of this [`MirrorEnclosure`].
    ///
    /// This function can be used with the "builder pattern".
    ///
    /// # Errors
    ///
    /// This function will return an error if the front face is missing from the registry.
    pub fn with_state(mut self, state: MirrorState) -> MarmResult<Self> {
        self.set_state(state)?;
        Ok(self)
    }
    /// Modifies the mirror state of this [`MirrorEnclosure`] given its string form.
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
    fn build(
        tilt_angle: Angle,
        on_direction: Angle,
        off_direction: Angle,
        state: MirrorState,
        width: Length,
        height: Length,
        thickness: Length,
    ) -> MarmResult<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        check_dimension("thickness", thickness)?;
        let faces = Self::build_faces(
            tilt_angle,
            on_direction,
            off_direction,
            state,
            width,
            height,
            thickness,
        )?;
        Ok(Self {
            width,
            height,
            thickness,
            tilt_angle,
            on_direction,
            off_direction,
            faces,
        })
    }
    fn build_faces(
        tilt_angle: Angle,
        on_direction: Angle,
        off_direction: Angle,
        state: MirrorState,
        width: Length,
        height: Length,
        thickness: Length,
    ) -> MarmResult<FaceMap> {
        let mirror = SteerableMirror::new(
            tilt_angle,
            on_direction,
            off_direction,
            state,
            Shape::Rectangular(RectangleConfig::new(width, height)?),
        )?;
        let zero = Length::zero();
        let half_width = width * 0.5;
        let half_height = height * 0.5;
        let half_thickness = thickness * 0.5;
        let mut faces = FaceMap::default();
        faces.add(
            "front",
            FacePlacement::new(
                FaceSurface::Mirror(mirror),
                millimeter!(0.0, 0.0, 0.0),
                radian!(0.0, PI, 0.0),
            )?,
        )?;
        faces.add(
            "back",
            FacePlacement::new(
                full_stop(width, height)?,
                Point3::new(zero, zero, thickness),
                radian!(0.0, 0.0, 0.0),
            )?,
        )?;
        faces.add(
            "left",
            FacePlacement::new(
                full_stop(thickness, height)?,
                Point3::new(-half_width, zero, -half_thickness),
                radian!(0.0, FRAC_PI_2, 0.0),
            )?,
        )?;
        faces.add(
            "right",
            FacePlacement::new(
                full_stop(thickness, height)?,
                Point3::new(half_width, zero, -half_thickness),
                radian!(0.0, -FRAC_PI_2, 0.0),
            )?,
        )?;
        faces.add(
            "top",
            FacePlacement::new(
                full_stop(width, thickness)?,
                Point3::new(zero, half_height, -half_thickness),
                radian!(-FRAC_PI_2, 0.0, 0.0),
            )?,
        )?;
        faces.add(
            "bottom",
            FacePlacement::new(
                full_stop(width, thickness)?,
                Point3::new(zero, -half_height, -half_thickness),
                radian!(FRAC_PI_2, 0.0, 0.0),
            )?,
        )?;
        Ok(faces)
    }
    /// Returns the width (x dimension) of this [`MirrorEnclosure`].
    #[must_use]
    pub fn width(&self) -> Length {
        self.width
    }
    /// Returns the height (y dimension) of this [`MirrorEnclosure`].
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }
    /// Returns the thickness (z dimension) of this [`MirrorEnclosure`].
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }
    /// Returns the tilt angle of the steerable front mirror.
    #[must_use]
    pub fn tilt_angle(&self) -> Angle {
        self.tilt_angle
    }
    /// Returns the on direction angle of the steerable front mirror.
    #[must_use]
    pub fn on_direction(&self) -> Angle {
        self.on_direction
    }
    /// Returns the off direction angle of the steerable front mirror.
    #[must_use]
    pub fn off_direction(&self) -> Angle {
        self.off_direction
    }
    /// Returns the current state of the steerable front mirror.
    ///
    /// # Errors
    ///
    /// This function will return an error if the front face is missing from the registry.
    pub fn state(&self) -> MarmResult<MirrorState> {
        Ok(self.mirror()?.state())
    }
    /// Returns a reference to the steerable mirror forming the front face.
    ///
    /// # Errors
    ///
    /// This function will return an error if the front face is missing from the registry.
    pub fn mirror(&self) -> MarmResult<&SteerableMirror> {
        let Some(placement) = self.faces.get("front") else {
            return Err(MarmotError::Component(
                "enclosure has no front face".into(),
            ));
        };
        let FaceSurface::Mirror(mirror) = placement.surface() else {
            return Err(MarmotError::Component(
                "front face is not a steerable mirror".into(),
            ));
        };
        Ok(mirror)
    }
    /// Returns a mutable reference to the steerable mirror forming the front face.
    ///
    /// # Errors
    ///
    /// This function will return an error if the front face is missing from the registry.
    pub fn mirror_mut(&mut self) -> MarmResult<&mut SteerableMirror> {
        let Some(placement) = self.faces.get_mut("front") else {
            return Err(MarmotError::Component(
                "enclosure has no front face".into(),
            ));
        };
        let FaceSurface::Mirror(mirror) = placement.surface_mut() else {
            return Err(MarmotError::Component(
                "front face is not a steerable mirror".into(),
            ));
        };
        Ok(mirror)
    }
    /// Sets the state of the steerable front mirror.
    ///
    /// # Errors
    ///
    /// This function will return an error if the front face is missing from the registry.
    pub fn set_state(&mut self, state: MirrorState) -> MarmResult<()> {
        self.mirror_mut()?.set_state(state);
        Ok(())
    }
    /// Sets the state of the steerable front mirror given its string form.
    ///
    /// The string is validated before the state is committed. On a failed validation the
    /// previous state is retained.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given string is not one of `"flat"`,
    /// `"on"` or `"off"`.
    pub fn set_state_str(&mut self, state: &str) -> MarmResult<()> {
        let state = state.parse::<MirrorState>()?;
        self.set_state(state)
    }
}
impl Component for MirrorEnclosure {
    fn faces(&self) -> &FaceMap {
        &self.faces
    }
    fn faces_mut(&mut self) -> &mut FaceMap {
        &mut self.faces
    }
}
impl Display for MirrorEnclosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mm = Length::format_args(millimeter, Abbreviation);
        let state = self
            .state()
            .map_or_else(|_| "unknown".to_string(), |s| s.to_string());
        write!(
            f,
            "MirrorEnclosure(width={}, height={}, thickness={}, state='{}', tilt_angle={:.5}, on_direction={:.5}, off_direction={:.5})",
            mm.with(self.width),
            mm.with(self.height),
            mm.with(self.thickness),
            state,
            self.tilt_angle.value,
            self.on_direction.value,
            self.off_direction.value
        )
    }
}
fn full_stop(width: Length, height: Length) -> MarmResult<FaceSurface> {
    Ok(FaceSurface::Stop(Stop::new(Shape::Rectangular(
        RectangleConfig::new(width, height)?,
    ))))
}
fn check_dimension(name: &str, value: Length) -> MarmResult<()> {
    if !(value.is_normal() && value.is_sign_positive()) {
        return Err(MarmotError::InvalidDimension(format!(
            "{name} must be positive, got {}",
            value.into_format_args(millimeter, Abbreviation)
        )));
    }
    Ok(())
}

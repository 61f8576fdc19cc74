#![warn(missing_docs)]
//! Registry of named, placed faces forming a component
use std::collections::BTreeMap;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Angle, Length};

use crate::{
    error::{MarmResult, MarmotError},
    surface::FaceSurface,
    utils::geom_transformation::Isometry,
};

/// Placement of a single face within a component's local frame.
///
/// A placement combines a [`FaceSurface`] with the position of the surface origin and the
/// Euler angles (x, y, z, applied in z-y-x order) orienting the surface's local frame
/// inside the component frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePlacement {
    surface: FaceSurface,
    position: Point3<Length>,
    rotation: Point3<Angle>,
}
impl FacePlacement {
    /// Creates a new [`FacePlacement`].
    ///
    /// # Errors
    ///
    /// This function will return an error if a position coordinate or a rotation angle is
    /// not finite.
    pub fn new(
        surface: FaceSurface,
        position: Point3<Length>,
        rotation: Point3<Angle>,
    ) -> MarmResult<Self> {
        // placement parameters are validated up front, the isometry itself is built on demand
        Isometry::new(position, rotation)?;
        Ok(Self {
            surface,
            position,
            rotation,
        })
    }
    /// Returns a reference to the surface of this [`FacePlacement`].
    #[must_use]
    pub const fn surface(&self) -> &FaceSurface {
        &self.surface
    }
    /// Returns a mutable reference to the surface of this [`FacePlacement`].
    pub fn surface_mut(&mut self) -> &mut FaceSurface {
        &mut self.surface
    }
    /// Returns the position of the surface origin in the component frame.
    #[must_use]
    pub fn position(&self) -> Point3<Length> {
        self.position
    }
    /// Returns the Euler angles orienting the surface in the component frame.
    #[must_use]
    pub fn rotation(&self) -> Point3<Angle> {
        self.rotation
    }
    /// Returns the isometry mapping surface coordinates to component coordinates.
    ///
    /// # Errors
    ///
    /// This function will return an error if the underlying transform cannot be built.
    /// This cannot happen for placements created through [`FacePlacement::new`].
    pub fn isometry(&self) -> MarmResult<Isometry> {
        Isometry::new(self.position, self.rotation)
    }
}
/// Ordered registry of the named faces making up a component.
///
/// Face names within a component are unique. Iteration follows the lexical order of the
/// names, which keeps intersection tie-breaking and serialized documents stable.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceMap(BTreeMap<String, FacePlacement>);

impl FaceMap {
    /// Add a new face to this [`FaceMap`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the face name is empty or already present.
    pub fn add(&mut self, name: &str, placement: FacePlacement) -> MarmResult<()> {
        if name.is_empty() {
            return Err(MarmotError::Component("face name must not be empty".into()));
        }
        if self.0.contains_key(name) {
            return Err(MarmotError::Component(format!(
                "face '{name}' already exists"
            )));
        }
        self.0.insert(name.to_string(), placement);
        Ok(())
    }
    /// Get the placement of the face with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FacePlacement> {
        self.0.get(name)
    }
    /// Get a mutable placement of the face with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FacePlacement> {
        self.0.get_mut(name)
    }
    /// Returns the face names of this [`FaceMap`] in lexical order.
    #[must_use]
    pub fn face_names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }
    /// Check if this [`FaceMap`] contains the given face name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    /// Iterate over all (name, placement) pairs in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FacePlacement)> {
        self.0.iter()
    }
    /// Returns the total number of faces in this [`FaceMap`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Check if this [`FaceMap`] contains no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

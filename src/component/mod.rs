#![warn(missing_docs)]
//! Optical components assembled from named, placed faces
//!
//! A [`Component`] groups several [`FaceSurface`](crate::surface::FaceSurface)s into one
//! rigid body. Each face carries its own placement (position and orientation) within the
//! component frame. Rays are handed to a component in component coordinates. The component
//! transforms them into the local frame of each face, finds the nearest hit and maps the
//! resulting rays back.
pub mod face_map;
pub mod mirror_enclosure;

pub use face_map::{FaceMap, FacePlacement};
pub use mirror_enclosure::MirrorEnclosure;

use nalgebra::{Point3, Vector3};
use uom::si::f64::Length;

use crate::{
    error::{MarmResult, MarmotError},
    meter, millimeter,
    ray::Ray,
    surface::Surface,
};

/// Result of a ray / component intersection test.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceHit {
    face: String,
    point: Point3<Length>,
    distance: Length,
}
impl FaceHit {
    /// Returns the name of the hit face.
    #[must_use]
    pub fn face(&self) -> &str {
        &self.face
    }
    /// Returns the intersection point in component coordinates.
    #[must_use]
    pub fn point(&self) -> Point3<Length> {
        self.point
    }
    /// Returns the distance from the ray origin to the intersection point.
    #[must_use]
    pub fn distance(&self) -> Length {
        self.distance
    }
}
/// Trait for rigid bodies built from a registry of named faces.
///
/// Implementors only provide access to their [`FaceMap`]. Intersection and propagation
/// across all faces are handled by the provided methods.
pub trait Component {
    /// Returns the face registry of this component.
    fn faces(&self) -> &FaceMap;
    /// Returns a mutable face registry of this component.
    fn faces_mut(&mut self) -> &mut FaceMap;
    /// Intersect a ray (given in component coordinates) with all faces.
    ///
    /// Returns the nearest hit along the ray or `None` if no face is hit. If two faces
    /// are hit at exactly the same distance, the face earlier in lexical name order wins.
    ///
    /// # Errors
    ///
    /// This function will return an error if a face placement transform cannot be built.
    fn intersection(&self, ray: &Ray) -> MarmResult<Option<FaceHit>> {
        let mut nearest: Option<FaceHit> = None;
        let ray_pos_in_m = ray.position().map(|c| c.value);
        for (name, placement) in self.faces().iter() {
            let isometry = placement.isometry()?;
            let local_ray = ray.inverse_transformed_ray(&isometry);
            let Some(local_point) = placement.surface().intersection(&local_ray) else {
                continue;
            };
            let point = isometry.transform_point(&local_point);
            let point_in_m = point.map(|c| c.value);
            let distance = meter!((point_in_m - ray_pos_in_m).norm());
            if nearest.as_ref().map_or(true, |hit| distance < hit.distance) {
                nearest = Some(FaceHit {
                    face: name.clone(),
                    point,
                    distance,
                });
            }
        }
        Ok(nearest)
    }
    /// Propagate a ray (given in component coordinates) through this component.
    ///
    /// The ray is dispatched to the nearest hit face. The rays produced by that face are
    /// returned in component coordinates. A ray missing all faces and a ray absorbed by a
    /// stop face both yield an empty vector.
    ///
    /// # Errors
    ///
    /// This function will return an error if the refractive indices are invalid or a face
    /// placement transform cannot be built.
    fn propagate(&self, ray: &Ray, n_in: f64, n_out: f64) -> MarmResult<Vec<Ray>> {
        let Some(hit) = self.intersection(ray)? else {
            return Ok(Vec::new());
        };
        let placement = self.faces().get(hit.face()).ok_or_else(|| {
            MarmotError::Component(format!("component has no face named '{}'", hit.face()))
        })?;
        let isometry = placement.isometry()?;
        let local_ray = ray.inverse_transformed_ray(&isometry);
        let local_rays = placement.surface().propagate(&local_ray, n_in, n_out)?;
        Ok(local_rays
            .iter()
            .map(|local_ray| local_ray.transformed_ray(&isometry))
            .collect())
    }
    /// Returns the normal of the named face in component coordinates.
    ///
    /// The normal is evaluated at the face origin, which is exact for the planar surfaces
    /// of this crate.
    ///
    /// # Errors
    ///
    /// This function will return an error if the component has no face with the given
    /// name or the face placement transform cannot be built.
    fn face_normal(&self, name: &str) -> MarmResult<Vector3<f64>> {
        let placement = self.faces().get(name).ok_or_else(|| {
            MarmotError::Component(format!("component has no face named '{name}'"))
        })?;
        let isometry = placement.isometry()?;
        let local_normal = placement.surface().normal(&millimeter!(0.0, 0.0, 0.0));
        Ok(isometry.transform_vector_f64(&local_normal))
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        joule, nanometer, radian,
        shape::{RectangleConfig, Shape},
        surface::{FaceSurface, MirrorState, SteerableMirror, Stop},
    };
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    struct TestComponent {
        faces: FaceMap,
    }
    impl Component for TestComponent {
        fn faces(&self) -> &FaceMap {
            &self.faces
        }
        fn faces_mut(&mut self) -> &mut FaceMap {
            &mut self.faces
        }
    }
    fn stop_face() -> FaceSurface {
        FaceSurface::Stop(Stop::new(Shape::Rectangular(
            RectangleConfig::new(millimeter!(20.0), millimeter!(20.0)).unwrap(),
        )))
    }
    fn test_component() -> TestComponent {
        let mut faces = FaceMap::default();
        faces
            .add(
                "far",
                FacePlacement::new(
                    stop_face(),
                    millimeter!(0.0, 0.0, 16.0),
                    radian!(0.0, 0.0, 0.0),
                )
                .unwrap(),
            )
            .unwrap();
        faces
            .add(
                "near",
                FacePlacement::new(
                    stop_face(),
                    millimeter!(0.0, 0.0, 4.0),
                    radian!(0.0, 0.0, 0.0),
                )
                .unwrap(),
            )
            .unwrap();
        TestComponent { faces }
    }
    fn test_ray(position: Point3<Length>, direction: Vector3<f64>) -> Ray {
        Ray::new(position, direction, nanometer!(1053.0), joule!(1.0)).unwrap()
    }
    #[test]
    fn intersection_nearest_face() {
        let component = test_component();
        let ray = test_ray(millimeter!(0.0, 0.0, 32.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = component.intersection(&ray).unwrap().unwrap();
        assert_eq!(hit.face(), "far");
        assert_eq!(hit.point(), millimeter!(0.0, 0.0, 16.0));
        assert_eq!(hit.distance(), millimeter!(16.0));
    }
    #[test]
    fn intersection_single_face_in_ray_path() {
        // the "near" face lies behind the ray here and must not count
        let component = test_component();
        let ray = test_ray(millimeter!(0.0, 0.0, 8.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = component.intersection(&ray).unwrap().unwrap();
        assert_eq!(hit.face(), "far");
        assert_eq!(hit.distance(), millimeter!(8.0));
    }
    #[test]
    fn intersection_miss() {
        let component = test_component();
        let ray = test_ray(millimeter!(0.0, 0.0, 32.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(component.intersection(&ray).unwrap(), None);
    }
    #[test]
    fn intersection_tie_prefers_lexical_order() {
        let mut faces = FaceMap::default();
        for name in ["beta", "alpha"] {
            faces
                .add(
                    name,
                    FacePlacement::new(
                        stop_face(),
                        millimeter!(0.0, 0.0, 5.0),
                        radian!(0.0, 0.0, 0.0),
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        let component = TestComponent { faces };
        let ray = test_ray(millimeter!(0.0, 0.0, 20.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = component.intersection(&ray).unwrap().unwrap();
        assert_eq!(hit.face(), "alpha");
    }
    #[test]
    fn propagate_absorbed() {
        let component = test_component();
        let ray = test_ray(millimeter!(0.0, 0.0, 32.0), Vector3::new(0.0, 0.0, -1.0));
        let rays = component.propagate(&ray, 1.0, 1.0).unwrap();
        assert!(rays.is_empty());
    }
    #[test]
    fn propagate_reflects_at_rotated_mirror() {
        let mut faces = FaceMap::default();
        let mirror = SteerableMirror::new(
            radian!(0.0),
            radian!(0.0),
            radian!(0.0),
            MirrorState::Flat,
            Shape::default(),
        )
        .unwrap();
        faces
            .add(
                "front",
                FacePlacement::new(
                    FaceSurface::Mirror(mirror),
                    millimeter!(0.0, 0.0, 0.0),
                    radian!(0.0, PI, 0.0),
                )
                .unwrap(),
            )
            .unwrap();
        let component = TestComponent { faces };
        let ray = test_ray(millimeter!(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let rays = component.propagate(&ray, 1.0, 1.0).unwrap();
        assert_eq!(rays.len(), 1);
        let position = rays[0].position().map(|c| c.value);
        assert_relative_eq!(position.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(position.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rays[0].direction().z, -1.0, epsilon = 1e-12);
        assert_eq!(rays[0].number_of_bounces(), 1);
    }
    #[test]
    fn face_normal() {
        let component = test_component();
        assert_eq!(component.face_normal("far").unwrap(), Vector3::z());
        assert!(component.face_normal("lid").is_err());
    }
    #[test]
    fn face_normal_rotated() {
        let mut faces = FaceMap::default();
        faces
            .add(
                "side",
                FacePlacement::new(
                    stop_face(),
                    millimeter!(0.0, 0.0, 0.0),
                    radian!(0.0, PI / 2.0, 0.0),
                )
                .unwrap(),
            )
            .unwrap();
        let component = TestComponent { faces };
        let normal = component.face_normal("side").unwrap();
        assert_relative_eq!(normal.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(normal.z, 0.0, epsilon = 1e-12);
    }
}

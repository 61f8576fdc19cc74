#![warn(missing_docs)]
//! Module for handling optical surfaces
//!
//! A [`Surface`] is a finite planar facet living in its local coordinate frame with its
//! footprint in the xy plane at z=0. Rays are expected to be given in this local frame.
//! Transformation from and to a parent frame is handled by the component layer.

mod steerable_mirror;
mod stop;

pub use steerable_mirror::{MirrorState, SteerableMirror};
pub use stop::Stop;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::{
    error::{MarmResult, MarmotError},
    meter,
    ray::Ray,
    shape::Shape,
};

/// Common capability set of all surfaces.
pub trait Surface {
    /// Returns the outward unit normal of the surface at the given point.
    ///
    /// For the planar surfaces of this crate the normal is uniform over the whole facet,
    /// the query point only exists for interface uniformity with curved surfaces.
    fn normal(&self, point: &Point3<Length>) -> Vector3<f64>;
    /// Calculate the intersection point of a [`Ray`] with this surface.
    ///
    /// This function returns `None` if the given ray does not intersect with the surface.
    fn intersection(&self, ray: &Ray) -> Option<Point3<Length>>;
    /// Calculate the outgoing rays generated by an incident [`Ray`] hitting this surface.
    ///
    /// The refractive indices before (`n_in`) and behind (`n_out`) the surface are accepted
    /// for interface uniformity with refractive surfaces. A ray missing the surface produces
    /// an empty vector.
    ///
    /// # Errors
    /// This function will return an error if a given refractive index is not positive and finite.
    fn propagate(&self, ray: &Ray, n_in: f64, n_out: f64) -> MarmResult<Vec<Ray>>;
}

/// The geometric role of a surface within a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// a reflective (mirror) surface
    Mirror,
    /// a blocking (stop) surface
    Stop,
}

/// A concrete surface registered as the face of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FaceSurface {
    /// a steerable micromirror surface
    Mirror(SteerableMirror),
    /// an opaque stop surface, optionally perforated by an aperture
    Stop(Stop),
}
impl FaceSurface {
    /// Returns the [`SurfaceKind`] of this surface.
    #[must_use]
    pub const fn kind(&self) -> SurfaceKind {
        match self {
            Self::Mirror(_) => SurfaceKind::Mirror,
            Self::Stop(_) => SurfaceKind::Stop,
        }
    }
}
impl Surface for FaceSurface {
    fn normal(&self, point: &Point3<Length>) -> Vector3<f64> {
        match self {
            Self::Mirror(mirror) => mirror.normal(point),
            Self::Stop(stop) => stop.normal(point),
        }
    }
    fn intersection(&self, ray: &Ray) -> Option<Point3<Length>> {
        match self {
            Self::Mirror(mirror) => mirror.intersection(ray),
            Self::Stop(stop) => stop.intersection(ray),
        }
    }
    fn propagate(&self, ray: &Ray, n_in: f64, n_out: f64) -> MarmResult<Vec<Ray>> {
        match self {
            Self::Mirror(mirror) => mirror.propagate(ray, n_in, n_out),
            Self::Stop(stop) => stop.propagate(ray, n_in, n_out),
        }
    }
}

/// Intersect a ray with the z=0 plane bounded by the given shape.
///
/// The z coordinate of the returned point is exactly zero. A ray running parallel to the
/// plane, pointing away from it or crossing it outside the shape boundary does not intersect.
/// A ray starting exactly on the plane counts as a hit.
pub(crate) fn plane_intersection(ray: &Ray, shape: &Shape) -> Option<Point3<Length>> {
    let ray_position = ray.position().map(|c| c.value);
    let ray_direction = ray.direction();
    if ray_direction.z.abs() < f64::EPSILON {
        // Ray propagates parallel to the plane => no intersection
        return None;
    }
    let length_in_ray_dir = -ray_position.z / ray_direction.z;
    if length_in_ray_dir < 0.0 {
        // Plane lies behind the ray => no intersection
        return None;
    }
    let intersection = ray_position + length_in_ray_dir * ray_direction;
    if !shape.contains(&meter!(intersection.x, intersection.y)) {
        return None;
    }
    Some(meter!(intersection.x, intersection.y, 0.0))
}

/// Check the refractive index arguments handed over by a tracing engine.
pub(crate) fn check_refractive_index(n: f64) -> MarmResult<()> {
    if !n.is_normal() || n.is_sign_negative() {
        return Err(MarmotError::Other(
            "refractive index must be >0 and finite".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{joule, millimeter, nanometer, shape::RectangleConfig};
    use nalgebra::Vector3;

    fn test_shape() -> Shape {
        Shape::Rectangular(RectangleConfig::new(millimeter!(20.0), millimeter!(20.0)).unwrap())
    }
    fn test_ray(position: Point3<Length>, direction: Vector3<f64>) -> Ray {
        Ray::new(position, direction, nanometer!(1053.0), joule!(1.0)).unwrap()
    }
    #[test]
    fn plane_intersection_on_axis() {
        let ray = test_ray(millimeter!(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(
            plane_intersection(&ray, &test_shape()),
            Some(millimeter!(0.0, 0.0, 0.0))
        );
    }
    #[test]
    fn plane_intersection_off_axis() {
        let ray = test_ray(millimeter!(1.0, 2.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            plane_intersection(&ray, &test_shape()),
            Some(millimeter!(1.0, 2.0, 0.0))
        );
    }
    #[test]
    fn plane_intersection_diagonal() {
        use approx::assert_relative_eq;
        let ray = test_ray(millimeter!(0.0, 1.0, -1.0), Vector3::new(0.0, 1.0, 1.0));
        let hit = plane_intersection(&ray, &test_shape()).unwrap();
        assert_relative_eq!(hit.x.value, 0.0, epsilon = 1e-12);
        assert_relative_eq!(hit.y.value, 0.002, epsilon = 1e-12);
        assert_eq!(hit.z.value, 0.0);
    }
    #[test]
    fn plane_intersection_behind() {
        let ray = test_ray(millimeter!(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(plane_intersection(&ray, &test_shape()), None);
    }
    #[test]
    fn plane_intersection_parallel() {
        let ray = test_ray(millimeter!(0.0, 0.0, 5.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(plane_intersection(&ray, &test_shape()), None);
    }
    #[test]
    fn plane_intersection_outside_shape() {
        let ray = test_ray(millimeter!(15.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(plane_intersection(&ray, &test_shape()), None);
    }
    #[test]
    fn plane_intersection_on_plane() {
        let ray = test_ray(millimeter!(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(
            plane_intersection(&ray, &test_shape()),
            Some(millimeter!(1.0, 0.0, 0.0))
        );
    }
    #[test]
    fn check_refractive_index_limits() {
        assert!(check_refractive_index(1.0).is_ok());
        assert!(check_refractive_index(1.5).is_ok());
        assert!(check_refractive_index(0.0).is_err());
        assert!(check_refractive_index(-1.0).is_err());
        assert!(check_refractive_index(f64::NAN).is_err());
        assert!(check_refractive_index(f64::INFINITY).is_err());
    }
}

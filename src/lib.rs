//! This is the documentation for the **MARMOT** software package. **MARMOT** stands for
//! **M**icromirror **A**ssembly **R**ay-tracing **MO**del **T**oolkit.
//!
//! The crate models the geometric core of a steerable micromirror (DMD style) simulation:
//! optical [`Ray`]s, flat surfaces with state dependent normals
//! ([`SteerableMirror`](crate::surface::SteerableMirror)), absorbing stops and the
//! [`MirrorEnclosure`] component packaging a mirror and five stops into one closed,
//! box shaped body. All lengths are handled as unit-safe quantities (`uom`), all surfaces
//! and components can be serialized through `serde`.
#![allow(clippy::module_name_repetitions)]

pub mod component;
pub mod error;
pub mod ray;
pub mod shape;
pub mod surface;
pub mod utils;

pub use component::MirrorEnclosure;
pub use ray::Ray;

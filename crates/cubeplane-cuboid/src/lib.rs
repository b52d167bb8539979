#![warn(missing_docs)]

//! Axis-aligned boxes cut by planes.
//!
//! A [`Cuboid`] exposes its 12 edges as [`Segment`](cubeplane_geom::Segment)s
//! and intersects them with a [`Plane`](cubeplane_geom::Plane). The raw
//! intersection is an unordered set of at most six points; the sorted variant
//! orders them so that consecutive points trace the boundary of the section.
//!
//! # Example
//!
//! ```
//! use cubeplane_cuboid::Cuboid;
//! use cubeplane_geom::Plane;
//! use cubeplane_math::Point3;
//!
//! let cube = Cuboid::unit();
//! let square = cube.plane_intersect_sorted(&Plane::x(0.0));
//! assert_eq!(
//!     square,
//!     vec![
//!         Point3::new(0.0, 1.0, 1.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(0.0, 0.0, 1.0),
//!     ]
//! );
//! ```

pub mod cuboid;
pub mod section;

pub use cuboid::{projection_axes, Cuboid, MAX_SECTION_POINTS};
pub use section::CrossSection;

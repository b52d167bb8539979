#![warn(missing_docs)]

//! Planes, segments, and segment-plane intersection for the cubeplane kernel.
//!
//! # Example
//!
//! ```
//! use cubeplane_geom::{intersect_segment, Plane, Segment, SegmentIntersection};
//! use cubeplane_math::{Point3, Vec3};
//!
//! let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
//! let seg = Segment::new(Point3::new(5.0, -4.0, 10.0), Vec3::new(-2.0, 8.0, -5.0));
//! assert_eq!(
//!     intersect_segment(&plane, &seg),
//!     SegmentIntersection::Point(Point3::new(4.0, 0.0, 7.5))
//! );
//! ```

pub mod error;
pub mod plane;
pub mod segment;

pub use error::{GeomError, Result};
pub use plane::Plane;
pub use segment::{intersect_segment, Segment, SegmentIntersection};

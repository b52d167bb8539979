//! Directed line segments and segment-plane intersection.

use cubeplane_math::{dot, Point3, Vec3};

use crate::plane::Plane;

/// A finite segment from `start` to `start + direction`.
///
/// The direction is not normalized; its length is the segment length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point3,
    /// Offset from `start` to the second endpoint.
    pub direction: Vec3,
}

impl Segment {
    /// Create a segment from a start point and a direction.
    pub fn new(start: Point3, direction: Vec3) -> Self {
        Self { start, direction }
    }

    /// Create a segment running from `start` to `end`.
    pub fn from_endpoints(start: Point3, end: Point3) -> Self {
        Self {
            start,
            direction: end - start,
        }
    }

    /// Second endpoint, `start + direction`.
    #[inline]
    pub fn end(&self) -> Point3 {
        self.start + self.direction
    }

    /// Point at parameter `t`: `start + direction * t`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.start + self.direction * t
    }
}

/// Outcome of intersecting a segment with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segment does not touch the plane.
    None,
    /// The segment crosses or touches the plane at a single point.
    Point(Point3),
    /// Every point of the segment lies in the plane.
    Entire,
}

impl SegmentIntersection {
    /// True for [`SegmentIntersection::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentIntersection::None)
    }

    /// The single intersection point, if there is exactly one.
    pub fn point(&self) -> Option<Point3> {
        match self {
            SegmentIntersection::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// Intersect a segment with a plane.
///
/// Solves `dot(n, start + t * direction) = d` for `t`. A zero denominator
/// means the segment is parallel to the plane: it is then either entirely in
/// the plane or misses it. Otherwise the hit counts only for `t` in `[0, 1]`.
///
/// Both zero tests are exact; segments that are parallel up to rounding error
/// are treated as crossing.
pub fn intersect_segment(plane: &Plane, segment: &Segment) -> SegmentIntersection {
    let numerator = plane.offset - dot(&plane.normal, &segment.start.coords);
    let denominator = dot(&plane.normal, &segment.direction);

    if denominator == 0.0 {
        return if numerator == 0.0 {
            SegmentIntersection::Entire
        } else {
            SegmentIntersection::None
        };
    }

    let t = numerator / denominator;
    if !(0.0..=1.0).contains(&t) {
        return SegmentIntersection::None;
    }

    SegmentIntersection::Point(segment.at(t))
}

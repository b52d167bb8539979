//! Planes in implicit `n·p = d` form.

use cubeplane_math::{dot, length, Point3, Vec3};

use crate::error::{GeomError, Result};

/// An infinite plane: every point `p` with `dot(normal, p) == offset`.
///
/// The normal is stored as given and is not normalized, so `offset` is
/// measured in units of `|normal|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector (not necessarily unit length).
    pub normal: Vec3,
    /// Right-hand side `d` of the plane equation.
    pub offset: f64,
}

impl Plane {
    /// Create a plane from its normal and offset without validation.
    pub fn new(normal: Vec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Create a plane, rejecting zero or non-finite normals and non-finite offsets.
    pub fn try_new(normal: Vec3, offset: f64) -> Result<Self> {
        if !normal.iter().all(|c| c.is_finite()) {
            return Err(GeomError::NonFinite("plane normal".into()));
        }
        if !offset.is_finite() {
            return Err(GeomError::NonFinite("plane offset".into()));
        }
        if normal.x == 0.0 && normal.y == 0.0 && normal.z == 0.0 {
            return Err(GeomError::DegenerateNormal);
        }
        Ok(Self { normal, offset })
    }

    /// Plane with the given normal passing through `point`.
    pub fn through_point(normal: Vec3, point: &Point3) -> Self {
        Self {
            normal,
            offset: dot(&normal, &point.coords),
        }
    }

    /// The plane `x = offset`.
    pub fn x(offset: f64) -> Self {
        Self::new(Vec3::x(), offset)
    }

    /// The plane `y = offset`.
    pub fn y(offset: f64) -> Self {
        Self::new(Vec3::y(), offset)
    }

    /// The plane `z = offset`.
    pub fn z(offset: f64) -> Self {
        Self::new(Vec3::z(), offset)
    }

    /// Residual of the plane equation at `p`: `dot(normal, p) - offset`.
    ///
    /// Positive on the side the normal points to.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        dot(&self.normal, &p.coords) - self.offset
    }

    /// Exact membership test: `dot(normal, p) == offset`.
    pub fn contains(&self, p: &Point3) -> bool {
        dot(&self.normal, &p.coords) == self.offset
    }

    /// Unsigned Euclidean distance from `p` to the plane.
    pub fn distance_to(&self, p: &Point3) -> f64 {
        self.evaluate(p).abs() / length(&self.normal)
    }
}

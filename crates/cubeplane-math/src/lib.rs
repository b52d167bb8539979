#![warn(missing_docs)]

//! Math types for the cubeplane kernel.
//!
//! Thin wrappers around nalgebra providing the point and vector types used
//! by the box/plane kernel, and a handful of free functions over them.
//!
//! All types are `Copy` values; every function returns a new value.

use std::f64::consts::PI;

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate index of this axis (0, 1 or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }
}

// =============================================================================
// 3D
// =============================================================================

/// Dot product `a.x*b.x + a.y*b.y + a.z*b.z`.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Euclidean length of `v`.
#[inline]
pub fn length(v: &Vec3) -> f64 {
    v.norm()
}

/// `v` divided by its length.
///
/// A zero vector is not special-cased: the result has NaN components.
#[inline]
pub fn normalize(v: &Vec3) -> Vec3 {
    v / v.norm()
}

/// `v` scaled by `s`.
#[inline]
pub fn scale(v: &Vec3, s: f64) -> Vec3 {
    v * s
}

/// Component-wise sum.
#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// Distance between two points.
#[inline]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// True if every coordinate of `a` and `b` differs by at most `delta`.
pub fn points_equal_within(a: &Point3, b: &Point3, delta: f64) -> bool {
    (a - b).iter().all(|d| d.abs() <= delta)
}

// =============================================================================
// 2D
// =============================================================================

/// 2D dot product.
#[inline]
pub fn dot_2d(a: &Vec2, b: &Vec2) -> f64 {
    a.dot(b)
}

/// Euclidean length of a 2D vector.
#[inline]
pub fn length_2d(v: &Vec2) -> f64 {
    v.norm()
}

/// 2D vector divided by its length. Zero in, NaN out.
#[inline]
pub fn normalize_2d(v: &Vec2) -> Vec2 {
    v / v.norm()
}

/// 2D vector scaled by `s`.
#[inline]
pub fn scale_2d(v: &Vec2, s: f64) -> Vec2 {
    v * s
}

/// Component-wise 2D sum.
#[inline]
pub fn add_2d(a: &Vec2, b: &Vec2) -> Vec2 {
    a + b
}

/// Component-wise 2D difference `a - b`.
#[inline]
pub fn sub_2d(a: &Vec2, b: &Vec2) -> Vec2 {
    a - b
}

/// Signed angle of `v` relative to `reference`, in radians.
///
/// Computed as `atan2(reference) - atan2(v)` and shifted by one full turn if
/// the difference falls strictly outside `[-π, π]`. Argument order matters:
/// `angle_2d(x_axis, y_axis)` is `-π/2`.
pub fn angle_2d(reference: &Vec2, v: &Vec2) -> f64 {
    let mut angle = reference.y.atan2(reference.x) - v.y.atan2(v.x);
    if angle > PI {
        angle -= 2.0 * PI;
    } else if angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_length() {
        assert_eq!(length(&Vec3::new(1.0, 0.0, 0.0)), 1.0);
        assert_eq!(length(&Vec3::new(2.0, 2.0, 1.0)), 3.0);
        assert_eq!(length(&Vec3::new(0.0, -3.0, -4.0)), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&Vec3::new(0.0, -3.0, -4.0));
        assert_eq!(n.x, 0.0);
        assert_eq!(n.y, -0.6);
        assert_eq!(n.z, -0.8);

        assert_relative_eq!(length(&normalize(&Vec3::new(2.0, 2.0, 1.0))), 1.0);
        assert_relative_eq!(length(&normalize(&Vec3::new(0.0, -3.0, -4.0))), 1.0);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = normalize(&Vec3::zeros());
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(normalize_2d(&Vec2::zeros()).x.is_nan());
    }

    #[test]
    fn test_componentwise_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(add(&a, &b), Vec3::new(-3.0, 2.5, 5.0));
        assert_eq!(sub(&a, &b), Vec3::new(5.0, 1.5, 1.0));
        assert_eq!(scale(&a, -2.0), Vec3::new(-2.0, -4.0, -6.0));
        assert_eq!(dot(&a, &b), -4.0 + 1.0 + 6.0);

        let c = Vec2::new(3.0, 4.0);
        assert_eq!(length_2d(&c), 5.0);
        assert_eq!(add_2d(&c, &Vec2::new(1.0, 1.0)), Vec2::new(4.0, 5.0));
        assert_eq!(sub_2d(&c, &Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
        assert_eq!(scale_2d(&c, 0.5), Vec2::new(1.5, 2.0));
        assert_eq!(dot_2d(&c, &c), 25.0);
    }

    #[test]
    fn test_distance_and_delta_equality() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 5.0);
        assert_eq!(distance(&a, &b), 2.0);
        assert!(points_equal_within(&a, &Point3::new(1.05, 1.95, 3.0), 0.1));
        assert!(!points_equal_within(&a, &b, 1.0));
        assert!(!points_equal_within(&a, &Point3::new(f64::NAN, 2.0, 3.0), 1.0));
    }

    #[test]
    fn test_ops_match_nalgebra() {
        let a = Vec3::new(0.5, -2.0, 4.0);
        let b = Vec3::new(3.0, 1.0, -0.25);
        assert_eq!(dot(&a, &b), a.dot(&b));
        assert_eq!(length(&b), b.norm());
        assert_relative_eq!(normalize(&b), b.normalize());
        assert_eq!(add(&a, &b), a + b);
        assert_eq!(sub(&a, &b), a - b);
        assert_eq!(scale(&a, 3.0), a * 3.0);
        assert_eq!(normalize_2d(&Vec2::new(0.0, -2.0)), Vec2::new(0.0, -1.0));
    }

    fn assert_angle(reference: (f64, f64), v: (f64, f64), expected: f64) {
        let actual = angle_2d(&Vec2::new(reference.0, reference.1), &Vec2::new(v.0, v.1));
        assert!(
            (actual - expected).abs() < 1e-12,
            "angle_2d({reference:?}, {v:?}) = {actual}, expected {expected}"
        );
    }

    #[test]
    fn test_angle_2d_table() {
        let e1 = (1.0, 0.0);
        let e2 = (0.0, 1.0);
        let e3 = (1.0, 1.0);
        let e4 = (-1.0, 1.0);
        let e5 = (-1.0, 0.0);
        let e6 = (0.0, -1.0);

        assert_angle(e1, e1, 0.0);
        assert_angle(e1, e2, -FRAC_PI_2);
        assert_angle(e1, e3, -FRAC_PI_4);
        assert_angle(e1, e4, -3.0 * PI / 4.0);
        assert_angle(e1, e5, -PI);
        assert_angle(e1, e6, FRAC_PI_2);

        assert_angle(e3, e1, FRAC_PI_4);
        assert_angle(e3, e2, -FRAC_PI_4);
        assert_angle(e3, e3, 0.0);
        assert_angle(e3, e4, -FRAC_PI_2);
        assert_angle(e3, e5, -3.0 * PI / 4.0);
        assert_angle(e3, e6, 3.0 * PI / 4.0);

        assert_angle(e4, e1, 3.0 * PI / 4.0);
        assert_angle(e4, e2, FRAC_PI_4);
        assert_angle(e4, e3, FRAC_PI_2);
        assert_angle(e4, e4, 0.0);
        assert_angle(e4, e5, -FRAC_PI_4);
        assert_angle(e4, e6, -3.0 * PI / 4.0);

        assert_angle(e6, e1, -FRAC_PI_2);
        assert_angle(e6, e2, -PI);
        assert_angle(e6, e3, -3.0 * PI / 4.0);
        assert_angle(e6, e4, 3.0 * PI / 4.0);
        assert_angle(e6, e5, FRAC_PI_2);
        assert_angle(e6, e6, 0.0);
    }

    #[test]
    fn test_angle_2d_antisymmetric() {
        let a = Vec2::new(0.3, -1.2);
        let b = Vec2::new(-2.0, 0.7);
        assert_eq!(angle_2d(&a, &a), 0.0);
        assert_relative_eq!(angle_2d(&a, &b), -angle_2d(&b, &a), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_2d_stays_in_range() {
        for i in 0..16 {
            for j in 0..16 {
                let ta = i as f64 * PI / 8.0;
                let tb = j as f64 * PI / 8.0;
                let angle = angle_2d(&Vec2::new(ta.cos(), ta.sin()), &Vec2::new(tb.cos(), tb.sin()));
                assert!((-PI..=PI).contains(&angle), "{angle} out of range");
            }
        }
    }

    #[test]
    fn test_axis() {
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1, 2]);
        assert_eq!(Axis::Y.unit(), Vec3::y());
    }
}

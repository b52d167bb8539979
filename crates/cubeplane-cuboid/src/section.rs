//! Cross-section polygons.

use cubeplane_geom::Plane;
use cubeplane_math::{distance, Point2, Point3, Vec3};

use crate::cuboid::projection_axes;

/// The polygon a plane cuts out of a box, vertices in boundary order.
///
/// Sections with fewer than three vertices are degenerate: a single
/// touched corner, or a grazed edge (treated as a doubled segment).
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    plane: Plane,
    points: Vec<Point3>,
}

impl CrossSection {
    /// Wrap already ordered boundary points.
    pub fn new(plane: Plane, points: Vec<Point3>) -> Self {
        Self { plane, points }
    }

    /// The cutting plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Vertices in boundary order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consume the section, returning its vertices.
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the plane misses the box.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary edges, including the closing edge from last to first.
    pub fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Boundary length.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| distance(&a, &b)).sum()
    }

    /// Average of the vertices, or `None` for an empty section.
    pub fn centroid(&self) -> Option<Point3> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec3::zeros(), |acc, p| acc + p.coords);
        Some(Point3::from(sum / self.points.len() as f64))
    }

    /// Enclosed area (Newell's method), zero for fewer than three vertices.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let normal = self
            .edges()
            .fold(Vec3::zeros(), |acc, (a, b)| acc + a.coords.cross(&b.coords));
        normal.norm() / 2.0
    }

    /// Whether no two non-adjacent boundary edges touch.
    ///
    /// Checked in the same 2D projection used to order the vertices.
    /// Sections with three or fewer vertices are always simple.
    pub fn is_simple(&self) -> bool {
        let n = self.points.len();
        if n <= 3 {
            return true;
        }

        let [a, b] = projection_axes(&self.plane.normal);
        let flat: Vec<Point2> = self
            .points
            .iter()
            .map(|p| Point2::new(p[a.index()], p[b.index()]))
            .collect();

        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (p1, p2) = (flat[i], flat[(i + 1) % n]);
                let (q1, q2) = (flat[j], flat[(j + 1) % n]);
                if segments_touch(p1, p2, q1, q2) {
                    return false;
                }
            }
        }
        true
    }
}

fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn within_box(a: Point2, b: Point2, p: Point2) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

fn segments_touch(p1: Point2, p2: Point2, q1: Point2, q2: Point2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_box(q1, q2, p1))
        || (d2 == 0.0 && within_box(q1, q2, p2))
        || (d3 == 0.0 && within_box(p1, p2, q1))
        || (d4 == 0.0 && within_box(p1, p2, q2))
}

//! Axis-aligned boxes and their intersection with planes.

use std::cmp::Ordering;

use cubeplane_geom::{intersect_segment, GeomError, Plane, Segment, SegmentIntersection};
use cubeplane_math::{angle_2d, dot, normalize_2d, Axis, Point2, Point3, Vec3};

use crate::section::CrossSection;

/// A plane meets an axis-aligned box in at most a hexagon.
pub const MAX_SECTION_POINTS: usize = 6;

/// An axis-aligned box with independently sized edges.
///
/// Defined by a corner and three edge lengths. `width` runs along X,
/// `depth` along Y and `height` along Z. A negative length flips the
/// direction that edge extends from the corner; the box is never rotated.
///
/// Vertex layout for positive lengths, with the four anchors used by
/// [`Cuboid::sides`] marked `p1`..`p4`:
/// ```text
///        p4 ------ +           z
///       / |       /|           |  y
///      + ------- p3|           | /
///      |  |      | |           |/
///      |  + -----|-p2          +---- x
///      | /       |/
///     p1 ------- +
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    corner: Point3,
    width: Vec3,
    height: Vec3,
    depth: Vec3,
}

impl Cuboid {
    /// Build a box from its corner and edge lengths along X (`width`),
    /// Z (`height`) and Y (`depth`).
    pub fn new(corner: Point3, width: f64, height: f64, depth: f64) -> Self {
        Self {
            corner,
            width: Vec3::new(width, 0.0, 0.0),
            height: Vec3::new(0.0, 0.0, height),
            depth: Vec3::new(0.0, depth, 0.0),
        }
    }

    /// Like [`Cuboid::new`], but rejects NaN or infinite inputs.
    pub fn try_new(
        corner: Point3,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<Self, GeomError> {
        if !corner.iter().all(|c| c.is_finite()) {
            return Err(GeomError::NonFinite("box corner".into()));
        }
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() {
                return Err(GeomError::NonFinite(format!("box {name}")));
            }
        }
        Ok(Self::new(corner, width, height, depth))
    }

    /// The unit box with its corner at the origin.
    pub fn unit() -> Self {
        Self::new(Point3::origin(), 1.0, 1.0, 1.0)
    }

    /// The defining corner.
    pub fn corner(&self) -> Point3 {
        self.corner
    }

    /// Edge vector along X.
    pub fn width(&self) -> Vec3 {
        self.width
    }

    /// Edge vector along Z.
    pub fn height(&self) -> Vec3 {
        self.height
    }

    /// Edge vector along Y.
    pub fn depth(&self) -> Vec3 {
        self.depth
    }

    /// The four pairwise non-adjacent corners every edge starts from.
    pub fn anchors(&self) -> [Point3; 4] {
        let p1 = self.corner;
        let p2 = p1 + self.width + self.depth;
        let p3 = p1 + self.width + self.height;
        let p4 = p1 + self.height + self.depth;
        [p1, p2, p3, p4]
    }

    /// The 12 edges of the box, each emitted once.
    ///
    /// Every anchor contributes the three edges leaving it, ordered
    /// width, height, depth, with each direction pointing away from the
    /// anchor.
    pub fn sides(&self) -> [Segment; 12] {
        let [p1, p2, p3, p4] = self.anchors();
        let (w, h, d) = (self.width, self.height, self.depth);

        [
            Segment::new(p1, w),
            Segment::new(p1, h),
            Segment::new(p1, d),
            Segment::new(p2, -w),
            Segment::new(p2, h),
            Segment::new(p2, -d),
            Segment::new(p3, -w),
            Segment::new(p3, -h),
            Segment::new(p3, d),
            Segment::new(p4, w),
            Segment::new(p4, -h),
            Segment::new(p4, -d),
        ]
    }

    /// All 8 vertices of the box.
    pub fn corners(&self) -> [Point3; 8] {
        let c = self.corner;
        let (w, h, d) = (self.width, self.height, self.depth);
        [
            c,
            c + w,
            c + w + d,
            c + d,
            c + h,
            c + w + h,
            c + w + d + h,
            c + d + h,
        ]
    }

    /// Minimum and maximum corner of the box, whatever the edge signs.
    pub fn bounds(&self) -> (Point3, Point3) {
        let far = self.corner + self.width + self.height + self.depth;
        let min = Point3::new(
            self.corner.x.min(far.x),
            self.corner.y.min(far.y),
            self.corner.z.min(far.z),
        );
        let max = Point3::new(
            self.corner.x.max(far.x),
            self.corner.y.max(far.y),
            self.corner.z.max(far.z),
        );
        (min, max)
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        self.corner + (self.width + self.height + self.depth) * 0.5
    }

    /// Whether `p` lies inside the box or on its boundary.
    pub fn contains(&self, p: &Point3) -> bool {
        let (min, max) = self.bounds();
        (0..3).all(|i| min[i] <= p[i] && p[i] <= max[i])
    }

    /// Distinct points where `plane` meets the edges of the box.
    ///
    /// An edge lying in the plane contributes both endpoints. Points are
    /// deduplicated by exact coordinate equality and returned in discovery
    /// order, which carries no geometric meaning. At most
    /// [`MAX_SECTION_POINTS`] points are returned.
    pub fn plane_intersect(&self, plane: &Plane) -> Vec<Point3> {
        let mut found = PointSet::default();

        for (idx, side) in self.sides().iter().enumerate() {
            match intersect_segment(plane, side) {
                SegmentIntersection::None => continue,
                SegmentIntersection::Entire => {
                    log::trace!("side {idx} lies in plane");
                    found.insert(side.start);
                    found.insert(side.end());
                }
                SegmentIntersection::Point(p) => {
                    log::trace!("side {idx} hits plane at {p:?}");
                    found.insert(p);
                }
            }

            if found.len() >= MAX_SECTION_POINTS {
                log::debug!("section complete after {} of 12 sides", idx + 1);
                break;
            }
        }

        found.into_points()
    }

    /// Intersection points ordered around the boundary of the section.
    ///
    /// Connecting consecutive points, and the last back to the first,
    /// traces the polygon the plane cuts out of the box. The points are
    /// projected onto two coordinate axes (see [`projection_axes`]) and
    /// sorted by their angle around the center of their bounding rectangle,
    /// measured from the first point.
    pub fn plane_intersect_sorted(&self, plane: &Plane) -> Vec<Point3> {
        let points = self.plane_intersect(plane);
        if points.is_empty() {
            return points;
        }

        let [a, b] = projection_axes(&plane.normal);
        log::debug!("projecting section onto {a:?}{b:?}");
        let projected: Vec<Point2> = points
            .iter()
            .map(|p| Point2::new(p[a.index()], p[b.index()]))
            .collect();

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &projected {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let middle = Point2::new(min_x + (max_x - min_x) / 2.0, min_y + (max_y - min_y) / 2.0);

        let reference = normalize_2d(&(projected[0] - middle));
        let angles: Vec<f64> = projected
            .iter()
            .map(|p| angle_2d(&reference, &normalize_2d(&(*p - middle))))
            .collect();

        // Stable: equal angles keep discovery order. NaN (a lone point sits
        // on its own center) sorts last.
        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&i, &j| compare_angles(angles[i], angles[j]));

        order.into_iter().map(|i| points[i]).collect()
    }

    /// The sorted section wrapped as a polygon.
    pub fn cross_section(&self, plane: &Plane) -> CrossSection {
        CrossSection::new(*plane, self.plane_intersect_sorted(plane))
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::unit()
    }
}

/// The two coordinate axes a section in a plane with this normal is
/// projected onto.
///
/// Axes along which the normal has no component are kept first, in X, Y, Z
/// order. When fewer than two qualify, X (if not already kept) and then Y
/// fill the remaining slots.
pub fn projection_axes(normal: &Vec3) -> [Axis; 2] {
    let mut keep: Vec<Axis> = Axis::ALL
        .into_iter()
        .filter(|axis| dot(normal, &axis.unit()) == 0.0)
        .collect();

    if keep.len() < 2 {
        if !keep.contains(&Axis::X) {
            keep.push(Axis::X);
        }
        keep.push(Axis::Y);
    }

    [keep[0], keep[1]]
}

fn compare_angles(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Insertion-ordered set of points under exact coordinate equality.
///
/// Holds at most a handful of points, so membership is a linear scan.
#[derive(Debug, Default)]
struct PointSet {
    points: Vec<Point3>,
}

impl PointSet {
    fn insert(&mut self, p: Point3) -> bool {
        // Adding +0.0 folds -0.0 into 0.0 so stored coordinates are canonical.
        let p = Point3::new(p.x + 0.0, p.y + 0.0, p.z + 0.0);
        if self.points.iter().any(|q| same_point(q, &p)) {
            return false;
        }
        self.points.push(p);
        true
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

fn same_point(a: &Point3, b: &Point3) -> bool {
    (0..3).all(|i| a[i] == b[i] || (a[i].is_nan() && b[i].is_nan()))
}

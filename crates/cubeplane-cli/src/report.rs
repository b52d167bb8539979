//! JSON output records.

use cubeplane_cuboid::{CrossSection, Cuboid};
use cubeplane_geom::{Plane, Segment};
use cubeplane_math::Point3;
use serde::Serialize;

fn coords(p: &Point3) -> [f64; 3] {
    [p.x, p.y, p.z]
}

/// Intersection of one plane with the box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    /// Plane normal.
    pub normal: [f64; 3],
    /// Plane offset.
    pub offset: f64,
    /// Intersection points, in boundary order unless unsorted output was requested.
    pub points: Vec<[f64; 3]>,
}

impl SectionReport {
    /// Intersect `plane` with `cuboid`.
    pub fn new(cuboid: &Cuboid, plane: &Plane, sorted: bool) -> Self {
        let points = if sorted {
            cuboid.plane_intersect_sorted(plane)
        } else {
            cuboid.plane_intersect(plane)
        };
        Self {
            normal: [plane.normal.x, plane.normal.y, plane.normal.z],
            offset: plane.offset,
            points: points.iter().map(coords).collect(),
        }
    }
}

/// One box edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeReport {
    /// First endpoint.
    pub start: [f64; 3],
    /// Second endpoint.
    pub end: [f64; 3],
}

impl From<&Segment> for EdgeReport {
    fn from(seg: &Segment) -> Self {
        Self {
            start: coords(&seg.start),
            end: coords(&seg.end()),
        }
    }
}

/// Human-readable summary of a section.
pub fn describe_section(index: usize, section: &CrossSection) -> String {
    let plane = section.plane();
    let n = plane.normal;
    let shape = match section.len() {
        0 => "no intersection",
        1 => "corner",
        2 => "edge",
        3 => "triangle",
        4 => "quadrilateral",
        5 => "pentagon",
        _ => "hexagon",
    };
    if section.len() < 3 {
        return format!(
            "plane {index} ({}, {}, {}) = {}: {shape}, {} point(s)",
            n.x,
            n.y,
            n.z,
            plane.offset,
            section.len()
        );
    }
    format!(
        "plane {index} ({}, {}, {}) = {}: {shape}, area {:.6}, perimeter {:.6}",
        n.x,
        n.y,
        n.z,
        plane.offset,
        section.area(),
        section.perimeter()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeplane_math::Vec3;

    #[test]
    fn test_section_report_json() {
        let report = SectionReport::new(&Cuboid::unit(), &Plane::x(0.0), true);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "normal": [1.0, 0.0, 0.0],
                "offset": 0.0,
                "points": [
                    [0.0, 1.0, 1.0],
                    [0.0, 1.0, 0.0],
                    [0.0, 0.0, 0.0],
                    [0.0, 0.0, 1.0],
                ],
            })
        );
    }

    #[test]
    fn test_unsorted_report_keeps_discovery_order() {
        let report = SectionReport::new(&Cuboid::unit(), &Plane::x(0.0), false);
        assert_eq!(
            report.points,
            vec![
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_edge_report() {
        let sides = Cuboid::unit().sides();
        let edges: Vec<EdgeReport> = sides.iter().map(EdgeReport::from).collect();
        assert_eq!(edges.len(), 12);
        assert_eq!(edges[3].start, [1.0, 1.0, 0.0]);
        assert_eq!(edges[3].end, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_describe_section() {
        let cube = Cuboid::unit();
        let square = cube.cross_section(&Plane::x(0.5));
        assert_eq!(
            describe_section(0, &square),
            "plane 0 (1, 0, 0) = 0.5: quadrilateral, area 1.000000, perimeter 4.000000"
        );

        let miss = cube.cross_section(&Plane::new(Vec3::new(-1.0, 1.0, 2.0), 6.0));
        assert_eq!(
            describe_section(2, &miss),
            "plane 2 (-1, 1, 2) = 6: no intersection, 0 point(s)"
        );
    }
}

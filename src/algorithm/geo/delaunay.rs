use std::collections::BTreeSet;

use geo::{coord, Coord, Geometry, GeometryCollection, LineString, MultiLineString, Polygon};

use crate::algorithm::geo::utils::{cross, sites};
use crate::geometry::empty;

/// The Delaunay triangulation of the vertices of `geometry`.
///
/// Vertices within `tolerance` of each other are merged first. The result is a collection of
/// triangles, or a multi line string of the unique triangulation edges with `only_edges`.
pub(crate) fn delaunay_triangles(geometry: &Geometry, tolerance: f64, only_edges: bool) -> Geometry {
    let sites = sites(geometry, tolerance);
    let triangles = triangulate(&sites);
    if triangles.is_empty() {
        return empty();
    }

    if only_edges {
        let edges: BTreeSet<(usize, usize)> = triangles
            .iter()
            .flat_map(|[a, b, c]| [(*a, *b), (*b, *c), (*c, *a)])
            .map(|(p, q)| (p.min(q), p.max(q)))
            .collect();
        return Geometry::MultiLineString(MultiLineString::new(
            edges
                .into_iter()
                .map(|(p, q)| LineString::new(vec![sites[p], sites[q]]))
                .collect(),
        ));
    }

    Geometry::GeometryCollection(GeometryCollection::new_from(
        triangles
            .iter()
            .map(|[a, b, c]| {
                Geometry::Polygon(Polygon::new(
                    LineString::new(vec![sites[*a], sites[*b], sites[*c], sites[*a]]),
                    vec![],
                ))
            })
            .collect(),
    ))
}

/// Bowyer-Watson triangulation. Returns counter-clockwise index triples into `points`.
pub(crate) fn triangulate(points: &[Coord]) -> Vec<[usize; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }

    let (mut min, mut max) = (points[0], points[0]);
    for point in points {
        min = coord! { x: min.x.min(point.x), y: min.y.min(point.y) };
        max = coord! { x: max.x.max(point.x), y: max.y.max(point.y) };
    }
    let extent = (max.x - min.x).max(max.y - min.y).max(f64::EPSILON);
    let mid = coord! { x: (min.x + max.x) / 2.0, y: (min.y + max.y) / 2.0 };

    // The super triangle's vertices follow the input points.
    let n = points.len();
    let mut all = points.to_vec();
    all.push(coord! { x: mid.x - 20.0 * extent, y: mid.y - extent });
    all.push(coord! { x: mid.x + 20.0 * extent, y: mid.y - extent });
    all.push(coord! { x: mid.x, y: mid.y + 20.0 * extent });

    let mut triangles: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];
    for p in 0..n {
        let (bad, good): (Vec<[usize; 3]>, Vec<[usize; 3]>) = triangles
            .into_iter()
            .partition(|t| in_circumcircle(all[t[0]], all[t[1]], all[t[2]], all[p]));

        // Edges of the cavity are the edges of exactly one bad triangle.
        let edges: Vec<(usize, usize)> = bad
            .iter()
            .flat_map(|[a, b, c]| [(*a, *b), (*b, *c), (*c, *a)])
            .collect();
        let boundary = edges
            .iter()
            .filter(|(a, b)| !edges.contains(&(*b, *a)))
            .copied();

        triangles = good;
        triangles.extend(boundary.map(|(a, b)| [a, b, p]));
    }

    triangles.retain(|t| t.iter().all(|v| *v < n) && cross(all[t[0]], all[t[1]], all[t[2]]) > 0.0);
    triangles
}

/// Whether `p` lies strictly inside the circumcircle of the counter-clockwise triangle `a b c`.
fn in_circumcircle(a: Coord, b: Coord, c: Coord, p: Coord) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let det = (ax * ax + ay * ay) * (bx * cy - cx * by) - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    det > 0.0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::geometry::{ls1, square};
    use geo::{Area, MultiPoint};

    #[test]
    fn square_triangulation() {
        match delaunay_triangles(&Geometry::Polygon(square()), 0.0, false) {
            Geometry::GeometryCollection(triangles) => {
                assert_eq!(triangles.len(), 2);
                let area: f64 = triangles.iter().map(|t| t.unsigned_area()).sum();
                approx::assert_relative_eq!(area, 100.0);
            }
            other => panic!("expected triangles, got {other:?}"),
        }
    }

    #[test]
    fn square_edges() {
        match delaunay_triangles(&Geometry::Polygon(square()), 0.0, true) {
            Geometry::MultiLineString(edges) => assert_eq!(edges.0.len(), 5),
            other => panic!("expected edges, got {other:?}"),
        }
    }

    #[test]
    fn triangles_are_empty_circle() {
        let points = MultiPoint::from(vec![
            (0., 0.),
            (4., 0.),
            (7., 3.),
            (3., 6.),
            (-2., 4.),
            (2., 2.),
        ]);
        let sites: Vec<Coord> = points.iter().map(|p| p.0).collect();
        let triangles = triangulate(&sites);
        // Euler: 2n - 2 - h triangles, with 5 hull vertices
        assert_eq!(triangles.len(), 5);
        for [a, b, c] in &triangles {
            for (i, p) in sites.iter().enumerate() {
                if ![*a, *b, *c].contains(&i) {
                    assert!(!in_circumcircle(sites[*a], sites[*b], sites[*c], *p));
                }
            }
        }
    }

    #[test]
    fn degenerate_input() {
        assert!(is_empty(&delaunay_triangles(&Geometry::LineString(ls1()), 0.0, false)));
        assert!(is_empty(&delaunay_triangles(&empty(), 0.0, true)));
        // merged down to two sites
        let nearly = Geometry::MultiPoint(MultiPoint::from(vec![(0., 0.), (10., 0.), (0.1, 0.1)]));
        assert!(is_empty(&delaunay_triangles(&nearly, 0.5, false)));
    }
}

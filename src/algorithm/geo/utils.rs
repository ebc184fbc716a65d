use std::cmp::Ordering;
use std::collections::HashSet;

use geo::{
    Coord, CoordsIter, Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon,
};
use itertools::Itertools;

/// The role a coordinate sequence plays in its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceKind {
    Point,
    Line,
    Ring,
}

/// Hashable identity of a coordinate. Positive and negative zero are the same coordinate.
pub(crate) fn coord_key(coord: Coord) -> (u64, u64) {
    ((coord.x + 0.0).to_bits(), (coord.y + 0.0).to_bits())
}

/// Every distinct coordinate of a geometry, in first-occurrence order.
pub(crate) fn unique_coords(geometry: &Geometry) -> Vec<Coord> {
    let mut seen = HashSet::new();
    geometry
        .coords_iter()
        .filter(|coord| seen.insert(coord_key(*coord)))
        .collect()
}

/// Distinct coordinates, additionally merging any coordinate within `tolerance` of one already
/// kept.
pub(crate) fn sites(geometry: &Geometry, tolerance: f64) -> Vec<Coord> {
    let coords = unique_coords(geometry);
    if tolerance <= 0.0 {
        return coords;
    }
    let mut kept: Vec<Coord> = Vec::with_capacity(coords.len());
    for coord in coords {
        if kept.iter().all(|site| distance(*site, coord) > tolerance) {
            kept.push(coord);
        }
    }
    kept
}

pub(crate) fn lex_cmp(a: &Coord, b: &Coord) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

pub(crate) fn distance(a: Coord, b: Coord) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// z-component of `(a - o) x (b - o)`. Positive when `o, a, b` turn left.
pub(crate) fn cross(o: Coord, a: Coord, b: Coord) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Distance from `p` to the closed segment `a b`.
pub(crate) fn segment_distance(p: Coord, a: Coord, b: Coord) -> f64 {
    distance(p, closest_on_segment(p, a, b).0)
}

/// The point of segment `a b` closest to `p`, and its parameter along the segment.
pub(crate) fn closest_on_segment(p: Coord, a: Coord, b: Coord) -> (Coord, f64) {
    let d = b - a;
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == 0.0 {
        return (a, 0.0);
    }
    let t = (((p.x - a.x) * d.x + (p.y - a.y) * d.y) / len2).clamp(0.0, 1.0);
    (a + d * t, t)
}

/// Consecutive coordinate pairs of a sequence.
pub(crate) fn segments(coords: &[Coord]) -> impl Iterator<Item = (Coord, Coord)> + '_ {
    coords.iter().copied().tuple_windows()
}

/// Rebuild a geometry with every coordinate sequence replaced by `f`'s output.
///
/// Rects and triangles come back as polygons, and lines as line strings.
pub(crate) fn map_sequences<F>(geometry: &Geometry, f: &mut F) -> Geometry
where
    F: FnMut(&[Coord], SequenceKind) -> Vec<Coord>,
{
    match geometry {
        Geometry::Point(point) => Geometry::Point(map_point(point, f)),
        Geometry::MultiPoint(points) => {
            Geometry::MultiPoint(points.iter().map(|point| map_point(point, f)).collect())
        }
        Geometry::Line(line) => {
            Geometry::LineString(LineString::new(f(&[line.start, line.end], SequenceKind::Line)))
        }
        Geometry::LineString(line) => {
            Geometry::LineString(LineString::new(f(&line.0, SequenceKind::Line)))
        }
        Geometry::MultiLineString(lines) => Geometry::MultiLineString(MultiLineString::new(
            lines
                .iter()
                .map(|line| LineString::new(f(&line.0, SequenceKind::Line)))
                .collect(),
        )),
        Geometry::Polygon(polygon) => Geometry::Polygon(map_polygon(polygon, f)),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(MultiPolygon::new(
            polygons
                .iter()
                .map(|polygon| map_polygon(polygon, f))
                .collect(),
        )),
        Geometry::Rect(rect) => Geometry::Polygon(map_polygon(&rect.to_polygon(), f)),
        Geometry::Triangle(triangle) => Geometry::Polygon(map_polygon(&triangle.to_polygon(), f)),
        Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(
            collection
                .iter()
                .map(|geometry| map_sequences(geometry, f))
                .collect(),
        ),
    }
}

fn map_point<F>(point: &Point, f: &mut F) -> Point
where
    F: FnMut(&[Coord], SequenceKind) -> Vec<Coord>,
{
    let mapped = f(&[point.0], SequenceKind::Point);
    Point::from(mapped.first().copied().unwrap_or(point.0))
}

fn map_polygon<F>(polygon: &Polygon, f: &mut F) -> Polygon
where
    F: FnMut(&[Coord], SequenceKind) -> Vec<Coord>,
{
    let exterior = LineString::new(f(&polygon.exterior().0, SequenceKind::Ring));
    let interiors = polygon
        .interiors()
        .iter()
        .map(|ring| LineString::new(f(&ring.0, SequenceKind::Ring)))
        .collect();
    Polygon::new(exterior, interiors)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometry::{ls0, square_with_hole};
    use geo::coord;

    #[test]
    fn unique_in_order() {
        let coords = unique_coords(&Geometry::Polygon(square_with_hole()));
        assert_eq!(coords.len(), 8);
        assert_eq!(coords[0], coord! { x: 0., y: 0. });
        assert_eq!(coords[4], coord! { x: 4., y: 4. });
    }

    #[test]
    fn signed_zero_is_one_coordinate() {
        assert_eq!(
            coord_key(coord! { x: -0.0, y: 1. }),
            coord_key(coord! { x: 0.0, y: 1. })
        );
    }

    #[test]
    fn merged_sites() {
        let geometry = Geometry::LineString(ls0());
        assert_eq!(sites(&geometry, 0.0).len(), 3);
        // (1 1) lies within 1.5 of (0 0)
        assert_eq!(sites(&geometry, 1.5).len(), 2);
    }

    #[test]
    fn distance_to_segment() {
        let a = coord! { x: 0., y: 0. };
        let b = coord! { x: 10., y: 0. };
        assert_eq!(segment_distance(coord! { x: 5., y: 3. }, a, b), 3.0);
        assert_eq!(segment_distance(coord! { x: 13., y: 4. }, a, b), 5.0);
        assert_eq!(segment_distance(coord! { x: 3., y: 4. }, a, a), 5.0);
    }

    #[test]
    fn sequences_keep_structure() {
        let mut kinds = Vec::new();
        let mapped = map_sequences(&Geometry::Polygon(square_with_hole()), &mut |coords, kind| {
            kinds.push(kind);
            coords.to_vec()
        });
        assert_eq!(kinds, vec![SequenceKind::Ring, SequenceKind::Ring]);
        assert_eq!(mapped, Geometry::Polygon(square_with_hole()));
    }
}

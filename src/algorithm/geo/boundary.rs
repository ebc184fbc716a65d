use std::collections::HashMap;

use geo::{Coord, Geometry, HasDimensions, LineString, MultiLineString, MultiPoint, Point, Polygon};

use crate::algorithm::geo::utils::{coord_key, lex_cmp};
use crate::error::{ConstructiveError, Result};
use crate::geometry::empty;

/// The topological boundary of a geometry.
///
/// The boundary of a curve is the set of its endpoints that are shared by an odd number of
/// curves (the "mod 2" rule), so closed curves have an empty boundary. The boundary of a
/// polygon is its set of rings.
pub(crate) fn boundary(geometry: &Geometry) -> Result<Geometry> {
    if geometry.is_empty() {
        return Ok(empty());
    }
    let boundary = match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => empty(),
        Geometry::Line(line) => curve_boundary([&LineString::new(vec![line.start, line.end])]),
        Geometry::LineString(line) => curve_boundary([line]),
        Geometry::MultiLineString(lines) => curve_boundary(lines),
        Geometry::Polygon(polygon) => polygon_boundary(polygon),
        Geometry::MultiPolygon(polygons) => rings(polygons.iter()),
        Geometry::Rect(rect) => polygon_boundary(&rect.to_polygon()),
        Geometry::Triangle(triangle) => polygon_boundary(&triangle.to_polygon()),
        Geometry::GeometryCollection(_) => {
            return Err(ConstructiveError::IncorrectGeometryType(
                "boundary of a geometry collection is undefined".to_string(),
            ))
        }
    };
    Ok(boundary)
}

fn curve_boundary<'a>(lines: impl IntoIterator<Item = &'a LineString>) -> Geometry {
    let mut counts: HashMap<(u64, u64), (Coord, usize)> = HashMap::new();
    for line in lines {
        let (Some(start), Some(end)) = (line.0.first(), line.0.last()) else {
            continue;
        };
        for endpoint in [*start, *end] {
            counts.entry(coord_key(endpoint)).or_insert((endpoint, 0)).1 += 1;
        }
    }

    let mut endpoints: Vec<Coord> = counts
        .into_values()
        .filter(|(_, count)| count % 2 == 1)
        .map(|(coord, _)| coord)
        .collect();
    if endpoints.is_empty() {
        return empty();
    }
    endpoints.sort_by(lex_cmp);
    Geometry::MultiPoint(MultiPoint::new(
        endpoints.into_iter().map(Point::from).collect(),
    ))
}

fn polygon_boundary(polygon: &Polygon) -> Geometry {
    if polygon.interiors().is_empty() {
        Geometry::LineString(polygon.exterior().clone())
    } else {
        rings(std::iter::once(polygon))
    }
}

fn rings<'a>(polygons: impl Iterator<Item = &'a Polygon>) -> Geometry {
    let rings: Vec<LineString> = polygons
        .filter(|polygon| !polygon.is_empty())
        .flat_map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .cloned()
        })
        .collect();
    Geometry::MultiLineString(MultiLineString::new(rings))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::geometry::{elbow, ls0, p0, square, square_with_hole};
    use geo::{line_string, point, GeometryCollection};

    #[test]
    fn line_endpoints() {
        let result = boundary(&Geometry::LineString(ls0())).unwrap();
        assert_eq!(
            result,
            Geometry::MultiPoint(MultiPoint::new(vec![
                point!(x: 0., y: 0.),
                point!(x: 1., y: 2.)
            ]))
        );
    }

    #[test]
    fn mod_two_rule() {
        // The lines meet at (20 10), which is then interior to the union.
        let lines = MultiLineString::new(vec![
            line_string![(x: 10., y: 10.), (x: 20., y: 10.)],
            line_string![(x: 20., y: 10.), (x: 20., y: 20.)],
        ]);
        let result = boundary(&Geometry::MultiLineString(lines)).unwrap();
        let expected = boundary(&Geometry::LineString(elbow())).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn closed_and_pointlike() {
        assert!(is_empty(&boundary(&Geometry::LineString(square().exterior().clone())).unwrap()));
        assert!(is_empty(&boundary(&Geometry::Point(p0())).unwrap()));
        assert!(is_empty(&boundary(&empty()).unwrap()));
    }

    #[test]
    fn polygons() {
        assert_eq!(
            boundary(&Geometry::Polygon(square())).unwrap(),
            Geometry::LineString(square().exterior().clone())
        );
        match boundary(&Geometry::Polygon(square_with_hole())).unwrap() {
            Geometry::MultiLineString(rings) => assert_eq!(rings.0.len(), 2),
            other => panic!("expected rings, got {other:?}"),
        }
    }

    #[test]
    fn collection_is_an_error() {
        let collection = GeometryCollection::new_from(vec![Geometry::Point(p0())]);
        let err = boundary(&Geometry::GeometryCollection(collection)).unwrap_err();
        assert!(matches!(err, ConstructiveError::IncorrectGeometryType(_)));
    }
}

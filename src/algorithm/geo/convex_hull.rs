use geo::algorithm::convex_hull::ConvexHull as GeoConvexHull;
use geo::{Area, Geometry, LineString, MultiPoint, Point};

use crate::algorithm::geo::utils::{lex_cmp, unique_coords};
use crate::geometry::empty;

/// The smallest convex geometry containing every vertex.
///
/// The hull degrades with its input: a single distinct vertex gives a point, and collinear
/// vertices give the segment between the two extreme ones.
pub(crate) fn convex_hull(geometry: &Geometry) -> Geometry {
    let coords = unique_coords(geometry);
    match coords.len() {
        0 => return empty(),
        1 => return Geometry::Point(Point::from(coords[0])),
        _ => {}
    }

    let hull = MultiPoint::from(coords.clone()).convex_hull();
    if hull.unsigned_area() > 0.0 {
        return Geometry::Polygon(hull);
    }

    let (Some(min), Some(max)) = (
        coords.iter().min_by(|a, b| lex_cmp(a, b)),
        coords.iter().max_by(|a, b| lex_cmp(a, b)),
    ) else {
        return empty();
    };
    Geometry::LineString(LineString::new(vec![*min, *max]))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::assert_area;
    use crate::test::geometry::{elbow, ls0, p0, square_with_hole};
    use geo::line_string;

    #[test]
    fn polygonal_hull() {
        // The hole does not matter.
        assert_area(&convex_hull(&Geometry::Polygon(square_with_hole())), 100.0);
        assert_area(&convex_hull(&Geometry::LineString(elbow())), 50.0);
    }

    #[test]
    fn degenerate_hulls() {
        assert!(is_empty(&convex_hull(&empty())));
        assert_eq!(convex_hull(&Geometry::Point(p0())), Geometry::Point(p0()));

        let collinear = line_string![(x: 2., y: 2.), (x: 0., y: 0.), (x: 1., y: 1.)];
        assert_eq!(
            convex_hull(&Geometry::LineString(collinear)),
            Geometry::LineString(line_string![(x: 0., y: 0.), (x: 2., y: 2.)])
        );
    }

    #[test]
    fn triangle_hull() {
        assert_area(&convex_hull(&Geometry::LineString(ls0())), 0.5);
    }
}

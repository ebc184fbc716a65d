use geo::{polygon, BoundingRect, Geometry, LineString, Point};

use crate::geometry::empty;

/// The minimum axis-aligned bounding geometry.
///
/// A bounding rectangle with zero width and height is returned as a point, and one with zero
/// width or height as a line string from its minimum to its maximum corner.
pub(crate) fn envelope(geometry: &Geometry) -> Geometry {
    let Some(rect) = geometry.bounding_rect() else {
        return empty();
    };
    let (min, max) = (rect.min(), rect.max());
    if min == max {
        Geometry::Point(Point::from(min))
    } else if rect.width() == 0.0 || rect.height() == 0.0 {
        Geometry::LineString(LineString::new(vec![min, max]))
    } else {
        Geometry::Polygon(polygon![
            (x: min.x, y: min.y),
            (x: max.x, y: min.y),
            (x: max.x, y: max.y),
            (x: min.x, y: max.y),
            (x: min.x, y: min.y),
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::assert_area;
    use crate::test::geometry::{elbow, ls1, p10};

    #[test]
    fn rectangle() {
        let result = envelope(&Geometry::LineString(elbow()));
        assert_area(&result, 100.0);
        assert_eq!(
            result,
            Geometry::Polygon(polygon![
                (x: 10., y: 10.),
                (x: 20., y: 10.),
                (x: 20., y: 20.),
                (x: 10., y: 20.),
                (x: 10., y: 10.),
            ])
        );
    }

    #[test]
    fn degenerate() {
        assert_eq!(envelope(&Geometry::Point(p10())), Geometry::Point(p10()));
        assert_eq!(envelope(&Geometry::LineString(ls1())), Geometry::LineString(ls1()));
        assert!(is_empty(&envelope(&empty())));
    }
}

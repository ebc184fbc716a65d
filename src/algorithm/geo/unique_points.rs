use geo::{Geometry, MultiPoint, Point};

use crate::algorithm::geo::utils::unique_coords;
use crate::geometry::empty;

/// Every distinct vertex as a multi point, in first-occurrence order.
pub(crate) fn extract_unique_points(geometry: &Geometry) -> Geometry {
    let coords = unique_coords(geometry);
    if coords.is_empty() {
        return empty();
    }
    Geometry::MultiPoint(MultiPoint::new(coords.into_iter().map(Point::from).collect()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::geometry::square;
    use geo::point;

    #[test]
    fn closing_vertex_is_not_repeated() {
        let result = extract_unique_points(&Geometry::Polygon(square()));
        assert_eq!(
            result,
            Geometry::MultiPoint(MultiPoint::new(vec![
                point!(x: 0., y: 0.),
                point!(x: 10., y: 0.),
                point!(x: 10., y: 10.),
                point!(x: 0., y: 10.),
            ]))
        );
        assert!(is_empty(&extract_unique_points(&empty())));
    }
}

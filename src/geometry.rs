//! The geometry value consumed and produced by every operation.
//!
//! Geometries are plain [`geo::Geometry`] values. "No geometry" is represented by the empty
//! geometry collection returned from [`empty`], which is what every operation produces when it
//! has no meaningful output (e.g. the boundary of a point).

use geo::{Geometry, GeometryCollection, HasDimensions, MultiPolygon, Polygon};

/// The distinguished empty geometry.
pub fn empty() -> Geometry {
    Geometry::GeometryCollection(GeometryCollection::new_from(Vec::new()))
}

/// Whether a geometry has no spatial extent.
///
/// This is true for [`empty`] as well as for any other empty geometry, such as a polygon
/// without coordinates or a multi point with no members.
pub fn is_empty(geometry: &Geometry) -> bool {
    geometry.is_empty()
}

/// Collapse a set of polygons to the simplest geometry representing them.
pub(crate) fn from_polygons(mut polygons: Vec<Polygon>) -> Geometry {
    match polygons.len() {
        0 => empty(),
        1 => Geometry::Polygon(polygons.remove(0)),
        _ => Geometry::MultiPolygon(MultiPolygon::new(polygons)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{point, polygon};

    #[test]
    fn empty_is_empty() {
        assert!(is_empty(&empty()));
        assert!(!is_empty(&Geometry::Point(point!(x: 0., y: 0.))));
    }

    #[test]
    fn polygons_collapse() {
        assert!(is_empty(&from_polygons(vec![])));

        let square = polygon![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.), (x: 0., y: 1.)];
        assert!(matches!(
            from_polygons(vec![square.clone()]),
            Geometry::Polygon(_)
        ));
        assert!(matches!(
            from_polygons(vec![square.clone(), square]),
            Geometry::MultiPolygon(_)
        ));
    }
}

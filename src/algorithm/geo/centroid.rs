use geo::algorithm::centroid::Centroid as GeoCentroid;
use geo::algorithm::interior_point::InteriorPoint as GeoInteriorPoint;
use geo::Geometry;

use crate::geometry::empty;

/// The center of mass, weighted by the highest dimension present.
pub(crate) fn centroid(geometry: &Geometry) -> Geometry {
    geometry.centroid().map_or_else(empty, Geometry::Point)
}

/// A point that intersects the geometry, chosen to be as central as practical.
pub(crate) fn point_on_surface(geometry: &Geometry) -> Geometry {
    geometry.interior_point().map_or_else(empty, Geometry::Point)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::is_empty;
    use crate::test::geometry::{ls1, p0, square_geom, square_with_hole};
    use geo::{point, Intersects};

    #[test]
    fn centroids() {
        assert_eq!(centroid(&square_geom()), Geometry::Point(point!(x: 5., y: 5.)));
        assert_eq!(
            centroid(&Geometry::LineString(ls1())),
            Geometry::Point(point!(x: 15., y: 10.))
        );
        assert!(is_empty(&centroid(&empty())));
    }

    #[test]
    fn point_on_surface_intersects() {
        for geometry in [
            Geometry::Polygon(square_with_hole()),
            Geometry::LineString(ls1()),
            Geometry::Point(p0()),
        ] {
            let point = point_on_surface(&geometry);
            assert!(point.intersects(&geometry));
        }
        assert!(is_empty(&point_on_surface(&empty())));
    }
}

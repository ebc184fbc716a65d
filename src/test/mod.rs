pub(crate) mod geometry;

use geo::{Area, Geometry, Relate};

/// Assert two geometries cover the same point set, regardless of vertex order or orientation.
#[track_caller]
pub(crate) fn assert_topo_eq(left: &Geometry, right: &Geometry) {
    assert!(
        left.relate(right).is_equal_topo(),
        "geometries are not topologically equal:\n left: {left:?}\nright: {right:?}"
    );
}

/// Assert a geometry is areal with the given area.
#[track_caller]
pub(crate) fn assert_area(geometry: &Geometry, expected: f64) {
    approx::assert_relative_eq!(geometry.unsigned_area(), expected, epsilon = 1e-6);
}

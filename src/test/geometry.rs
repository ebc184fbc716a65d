use geo::{line_string, point, polygon, Geometry, LineString, Point, Polygon};

pub(crate) fn p0() -> Point {
    point!(
        x: 0., y: 1.
    )
}

pub(crate) fn p1() -> Point {
    point!(
        x: 1., y: 2.
    )
}

/// `POINT (10 10)`
pub(crate) fn p10() -> Point {
    point!(
        x: 10., y: 10.
    )
}

/// `LINESTRING (0 0, 1 1, 1 2)`
pub(crate) fn ls0() -> LineString {
    line_string![
        (x: 0., y: 0.),
        (x: 1., y: 1.),
        (x: 1., y: 2.)
    ]
}

/// `LINESTRING (10 10, 20 10)`
pub(crate) fn ls1() -> LineString {
    line_string![
        (x: 10., y: 10.),
        (x: 20., y: 10.)
    ]
}

/// `LINESTRING (10 10, 20 10, 20 20)`
pub(crate) fn elbow() -> LineString {
    line_string![
        (x: 10., y: 10.),
        (x: 20., y: 10.),
        (x: 20., y: 20.)
    ]
}

/// `POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))`
pub(crate) fn square() -> Polygon {
    polygon![
        (x: 0., y: 0.),
        (x: 10., y: 0.),
        (x: 10., y: 10.),
        (x: 0., y: 10.),
        (x: 0., y: 0.),
    ]
}

pub(crate) fn square_with_hole() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 10., y: 0.),
            (x: 10., y: 10.),
            (x: 0., y: 10.),
            (x: 0., y: 0.),
        ],
        interiors: [
            [
                (x: 4., y: 4.),
                (x: 6., y: 4.),
                (x: 6., y: 6.),
                (x: 4., y: 6.),
                (x: 4., y: 4.),
            ],
        ],
    )
}

pub(crate) fn square_geom() -> Geometry {
    Geometry::Polygon(square())
}

use geo::Geometry;

use crate::array::GeometryArray;

/// A single (possibly missing) geometry or a [`GeometryArray`].
///
/// This is both the input and the output type of every operation: an operation returns
/// `Scalar` exactly when all of its inputs were scalar, so results can be fed straight into the
/// next operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastableGeometry {
    Scalar(Option<Geometry>),
    Array(GeometryArray),
}

impl BroadcastableGeometry {
    /// A missing scalar geometry.
    pub fn null() -> Self {
        BroadcastableGeometry::Scalar(None)
    }

    /// The array length, or `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            BroadcastableGeometry::Scalar(_) => None,
            BroadcastableGeometry::Array(arr) => Some(arr.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, BroadcastableGeometry::Scalar(_))
    }

    /// The geometry at a broadcast position. Scalars ignore `index`.
    pub fn get(&self, index: usize) -> Option<&Geometry> {
        match self {
            BroadcastableGeometry::Scalar(geom) => geom.as_ref(),
            BroadcastableGeometry::Array(arr) => arr.get(index),
        }
    }

    /// The geometry of a non-null scalar.
    pub fn as_scalar(&self) -> Option<&Geometry> {
        match self {
            BroadcastableGeometry::Scalar(geom) => geom.as_ref(),
            BroadcastableGeometry::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&GeometryArray> {
        match self {
            BroadcastableGeometry::Scalar(_) => None,
            BroadcastableGeometry::Array(arr) => Some(arr),
        }
    }

    /// Convert into an array, wrapping a scalar as a single element.
    pub fn into_array(self) -> GeometryArray {
        match self {
            BroadcastableGeometry::Scalar(geom) => GeometryArray::new(vec![geom]),
            BroadcastableGeometry::Array(arr) => arr,
        }
    }
}

impl From<Geometry> for BroadcastableGeometry {
    fn from(value: Geometry) -> Self {
        BroadcastableGeometry::Scalar(Some(value))
    }
}

impl From<&Geometry> for BroadcastableGeometry {
    fn from(value: &Geometry) -> Self {
        BroadcastableGeometry::Scalar(Some(value.clone()))
    }
}

impl From<Option<Geometry>> for BroadcastableGeometry {
    fn from(value: Option<Geometry>) -> Self {
        BroadcastableGeometry::Scalar(value)
    }
}

impl From<GeometryArray> for BroadcastableGeometry {
    fn from(value: GeometryArray) -> Self {
        BroadcastableGeometry::Array(value)
    }
}

impl From<&GeometryArray> for BroadcastableGeometry {
    fn from(value: &GeometryArray) -> Self {
        BroadcastableGeometry::Array(value.clone())
    }
}

impl From<Vec<Geometry>> for BroadcastableGeometry {
    fn from(value: Vec<Geometry>) -> Self {
        BroadcastableGeometry::Array(value.into())
    }
}

impl From<Vec<Option<Geometry>>> for BroadcastableGeometry {
    fn from(value: Vec<Option<Geometry>>) -> Self {
        BroadcastableGeometry::Array(value.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometry::{p0, p1};

    #[test]
    fn scalar_broadcasts() {
        let geom = BroadcastableGeometry::from(Geometry::Point(p0()));
        assert_eq!(geom.len(), None);
        assert_eq!(geom.get(5), Some(&Geometry::Point(p0())));
        assert_eq!(geom.into_array().len(), 1);
    }

    #[test]
    fn array_positions() {
        let geom = BroadcastableGeometry::from(vec![None, Some(Geometry::Point(p1()))]);
        assert_eq!(geom.len(), Some(2));
        assert_eq!(geom.get(0), None);
        assert_eq!(geom.get(1), Some(&Geometry::Point(p1())));
        assert!(geom.as_scalar().is_none());
        assert!(BroadcastableGeometry::null().is_scalar());
    }
}

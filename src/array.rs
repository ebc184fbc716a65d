//! An ordered, nullable sequence of geometries.

use geo::{Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// An array of optional geometries.
///
/// `None` marks a missing element (an Arrow null). Missing elements are carried through every
/// operation unchanged, and are distinct from the empty geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryArray {
    geoms: Vec<Option<Geometry>>,
}

impl GeometryArray {
    pub fn new(geoms: Vec<Option<Geometry>>) -> Self {
        Self { geoms }
    }

    pub fn len(&self) -> usize {
        self.geoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geoms.is_empty()
    }

    /// The geometry at `index`, or `None` if the slot is null.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&Geometry> {
        self.geoms[index].as_ref()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.geoms[index].is_none()
    }

    pub fn null_count(&self) -> usize {
        self.geoms.iter().filter(|g| g.is_none()).count()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&Geometry>> + '_ {
        self.geoms.iter().map(|g| g.as_ref())
    }

    pub fn into_inner(self) -> Vec<Option<Geometry>> {
        self.geoms
    }
}

impl From<Vec<Option<Geometry>>> for GeometryArray {
    fn from(geoms: Vec<Option<Geometry>>) -> Self {
        Self::new(geoms)
    }
}

impl From<Vec<Geometry>> for GeometryArray {
    fn from(geoms: Vec<Geometry>) -> Self {
        geoms.into_iter().map(Some).collect()
    }
}

impl FromIterator<Option<Geometry>> for GeometryArray {
    fn from_iter<I: IntoIterator<Item = Option<Geometry>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Implementation that wraps each typed geometry in [`Geometry`]
macro_rules! from_typed_impl {
    ($type:ty) => {
        impl From<Vec<$type>> for GeometryArray {
            fn from(geoms: Vec<$type>) -> Self {
                geoms.into_iter().map(|g| Some(Geometry::from(g))).collect()
            }
        }
    };
}

from_typed_impl!(Point);
from_typed_impl!(LineString);
from_typed_impl!(Polygon);
from_typed_impl!(MultiPoint);
from_typed_impl!(MultiLineString);
from_typed_impl!(MultiPolygon);
